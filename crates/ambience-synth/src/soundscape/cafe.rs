//! Cafe: low brown noise with occasional murmur swells.

use crate::envelope::BurstShape;
use crate::filter::OnePoleFilter;
use crate::format::AudioFormat;
use crate::noise::BrownNoise;
use crate::rng::SampleSource;

use super::SparseBursts;

const MURMURS: SparseBursts = SparseBursts {
    probability: 0.0003,
    min_length: 4000,
    length_span: 8000,
    min_amplitude: 0.15,
    amplitude_span: 0.3,
    shape: BurstShape::HalfSine,
};

pub(super) fn generate<S: SampleSource>(format: &AudioFormat, source: &mut S) -> Vec<f64> {
    let num_samples = format.num_samples();
    let mut out = vec![0.0; num_samples];
    let mut brown = BrownNoise::new(0.012, 0.999);
    let mut bed_lowpass = OnePoleFilter::with_coefficient(0.8);
    // Shared by every murmur in this render.
    let mut murmur_lowpass = OnePoleFilter::with_coefficient(0.92);

    for i in 0..num_samples {
        let bed = bed_lowpass.process(brown.next_sample(source)) * 0.25;

        if let Some(murmur) = MURMURS.roll(i, source) {
            murmur.mix_into(&mut out, |_| murmur_lowpass.process(source.bipolar()));
        }

        out[i] += bed;
    }

    out
}
