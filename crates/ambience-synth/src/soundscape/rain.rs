//! Rain: low-passed white noise with sparse droplet impulses.

use crate::envelope::BurstShape;
use crate::filter::OnePoleFilter;
use crate::format::AudioFormat;
use crate::rng::SampleSource;

use super::SparseBursts;

const BED_GAIN: f64 = 0.35;

const DROPLETS: SparseBursts = SparseBursts {
    probability: 0.0008,
    min_length: 200,
    length_span: 600,
    min_amplitude: 0.3,
    amplitude_span: 0.5,
    shape: BurstShape::ExpDecay { time_constant: 0.2 },
};

pub(super) fn generate<S: SampleSource>(format: &AudioFormat, source: &mut S) -> Vec<f64> {
    let num_samples = format.num_samples();
    let mut out = vec![0.0; num_samples];
    let mut lowpass = OnePoleFilter::with_coefficient(0.7);

    for i in 0..num_samples {
        let bed = lowpass.process(source.bipolar()) * BED_GAIN;

        if let Some(droplet) = DROPLETS.roll(i, source) {
            droplet.mix_into(&mut out, |_| source.bipolar());
        }

        out[i] += bed;
    }

    out
}
