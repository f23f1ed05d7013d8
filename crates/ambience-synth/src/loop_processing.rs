//! Loop boundary processing.
//!
//! Soundscapes are played back-to-back indefinitely, so the last sample must
//! meet the first without a jump. A linear fade-in at the head and fade-out at
//! the tail forces both ends to exactly zero.

/// Loop fade length class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopFade {
    /// 0.1 s fade for textures with rapid or sparse transients.
    Short,
    /// 0.2 s fade for slowly modulated textures.
    Long,
}

impl LoopFade {
    /// Fade duration in seconds.
    pub fn seconds(self) -> f64 {
        match self {
            LoopFade::Short => 0.1,
            LoopFade::Long => 0.2,
        }
    }

    /// Fade length in samples at the given sample rate.
    pub fn samples(self, sample_rate: u32) -> usize {
        (sample_rate as f64 * self.seconds()).round() as usize
    }
}

/// Applies linear fades to the head and tail of a buffer, in place.
///
/// The sample at offset `i` from the start and the sample at offset `i` from
/// the end are both scaled by `i / fade_len` for `i < fade_len`. The fade is
/// limited to half the buffer so the two ramps never overlap.
///
/// # Arguments
/// * `samples` - Audio sample buffer (modified in place)
/// * `fade_len` - Ramp length in samples
///
/// # Returns
/// The fade length actually applied.
pub fn apply_loop_fade(samples: &mut [f64], fade_len: usize) -> usize {
    let len = samples.len();
    let fade_len = fade_len.min(len / 2);

    if fade_len == 0 {
        // A lone sample still has to be silent for the loop to close.
        if let Some(first) = samples.first_mut() {
            *first = 0.0;
        }
        return 0;
    }

    for i in 0..fade_len {
        let t = i as f64 / fade_len as f64;
        samples[i] *= t;
        samples[len - 1 - i] *= t;
    }

    fade_len
}

/// Measures the jump between the last and first sample of a looped buffer.
///
/// # Returns
/// Absolute discontinuity value (0.0 = perfect continuity).
pub fn measure_loop_discontinuity(samples: &[f64]) -> f64 {
    match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => (last - first).abs(),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_lengths_at_default_rate() {
        assert_eq!(LoopFade::Short.samples(44100), 4410);
        assert_eq!(LoopFade::Long.samples(44100), 8820);
        assert_eq!(LoopFade::Short.samples(48000), 4800);
    }

    #[test]
    fn test_loop_fade_zeroes_boundaries() {
        let mut samples = vec![0.8; 1000];
        let applied = apply_loop_fade(&mut samples, 100);

        assert_eq!(applied, 100);
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[999], 0.0);
        assert_eq!(measure_loop_discontinuity(&samples), 0.0);
    }

    #[test]
    fn test_loop_fade_leaves_boundary_sample_untouched() {
        let original: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.37).sin()).collect();
        let mut samples = original.clone();
        apply_loop_fade(&mut samples, 100);

        assert_eq!(samples[100], original[100]);
        assert_eq!(samples[500], original[500]);
        assert_eq!(samples[899], original[899]);
    }

    #[test]
    fn test_loop_fade_is_linear_ramp() {
        let mut samples = vec![1.0; 400];
        apply_loop_fade(&mut samples, 100);

        assert!((samples[50] - 0.5).abs() < 1e-12);
        assert!((samples[399 - 50] - 0.5).abs() < 1e-12);
        assert!((samples[99] - 0.99).abs() < 1e-12);
        for w in samples[..100].windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn test_loop_fade_clamped_to_half_buffer() {
        let mut samples = vec![1.0; 10];
        let applied = apply_loop_fade(&mut samples, 100);

        assert_eq!(applied, 5);
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[9], 0.0);
        assert!((samples[4] - 0.8).abs() < 1e-12);
        assert!((samples[5] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_loop_fade_degenerate_buffers() {
        let mut empty: Vec<f64> = vec![];
        assert_eq!(apply_loop_fade(&mut empty, 10), 0);

        let mut single = vec![0.7];
        apply_loop_fade(&mut single, 10);
        assert_eq!(single, vec![0.0]);
    }

    #[test]
    fn test_zero_buffer_stays_zero() {
        let mut samples = vec![0.0; 8820 * 3];
        apply_loop_fade(&mut samples, 8820);
        assert!(samples.iter().all(|&s| s == 0.0));
    }
}
