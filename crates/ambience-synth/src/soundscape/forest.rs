//! Forest: soft, continuous brown noise.

use crate::format::AudioFormat;
use crate::noise::BrownNoise;
use crate::rng::SampleSource;

pub(super) fn generate<S: SampleSource>(format: &AudioFormat, source: &mut S) -> Vec<f64> {
    let mut brown = BrownNoise::new(0.02, 0.998);
    (0..format.num_samples())
        .map(|_| brown.next_sample(source) * 0.6)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_rms_stays_in_band_across_seeds() {
        let format = AudioFormat::default();
        for seed in [1, 2, 3, 4, 5] {
            let samples = generate(&format, &mut create_rng(seed));
            let rms = (samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64).sqrt();
            assert!(
                (0.05..0.3).contains(&rms),
                "seed {} rms {} outside band",
                seed,
                rms
            );
        }
    }
}
