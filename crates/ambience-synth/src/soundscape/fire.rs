//! Fire: filtered brown noise with short crackles.

use crate::envelope::BurstShape;
use crate::filter::OnePoleFilter;
use crate::format::AudioFormat;
use crate::noise::BrownNoise;
use crate::rng::SampleSource;

use super::SparseBursts;

const CRACKLES: SparseBursts = SparseBursts {
    probability: 0.001,
    min_length: 50,
    length_span: 300,
    min_amplitude: 0.3,
    amplitude_span: 0.7,
    shape: BurstShape::ExpDecay {
        time_constant: 0.15,
    },
};

pub(super) fn generate<S: SampleSource>(format: &AudioFormat, source: &mut S) -> Vec<f64> {
    let num_samples = format.num_samples();
    let mut out = vec![0.0; num_samples];
    let mut brown = BrownNoise::new(0.015, 0.997);
    let mut lowpass = OnePoleFilter::with_coefficient(0.6);

    for i in 0..num_samples {
        let bed = lowpass.process(brown.next_sample(source)) * 0.3;

        if let Some(crackle) = CRACKLES.roll(i, source) {
            crackle.mix_into(&mut out, |_| source.bipolar());
        }

        out[i] += bed;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_crackles_are_spiky() {
        let format = AudioFormat::new(44100, 5.0).unwrap();
        let samples = generate(&format, &mut create_rng(8));

        let rms = (samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64).sqrt();
        let peak = samples.iter().fold(0.0f64, |m, s| m.max(s.abs()));
        // Sparse transients give a high crest factor.
        assert!(peak / rms > 5.0, "crest factor {}", peak / rms);
    }
}
