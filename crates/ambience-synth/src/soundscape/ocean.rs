//! Ocean: filtered noise swelling under a slow wave envelope.

use std::f64::consts::PI;

use crate::filter::OnePoleFilter;
use crate::format::AudioFormat;
use crate::rng::SampleSource;

/// One crest roughly every 6.7 seconds.
const WAVE_FREQ: f64 = 0.15;

/// Wave envelope at time `t`, always within `[0.25, 1.0]`.
fn wave_envelope(t: f64) -> f64 {
    let phase = ((2.0 * PI * WAVE_FREQ * t).sin() + 1.0) / 2.0;
    0.25 + 0.75 * phase * phase
}

pub(super) fn generate<S: SampleSource>(format: &AudioFormat, source: &mut S) -> Vec<f64> {
    let mut lowpass = OnePoleFilter::with_coefficient(0.85);
    (0..format.num_samples())
        .map(|i| lowpass.process(source.bipolar()) * wave_envelope(format.time_of(i)) * 0.5)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_wave_envelope_range() {
        assert!((wave_envelope(0.0) - (0.25 + 0.75 * 0.25)).abs() < 1e-12);
        // Crest a quarter period in.
        let crest = 1.0 / (4.0 * WAVE_FREQ);
        assert!((wave_envelope(crest) - 1.0).abs() < 1e-12);
        // Trough three quarters in.
        assert!((wave_envelope(3.0 * crest) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_crest_is_louder_than_trough() {
        let format = AudioFormat::default();
        let samples = generate(&format, &mut create_rng(3));
        let window_rms = |center_s: f64| {
            let center = (center_s * format.sample_rate_f64()) as usize;
            let w = &samples[center - 4410..center + 4410];
            (w.iter().map(|s| s * s).sum::<f64>() / w.len() as f64).sqrt()
        };

        let crest = 1.0 / (4.0 * WAVE_FREQ);
        assert!(window_rms(crest) > window_rms(3.0 * crest) * 2.0);
    }
}
