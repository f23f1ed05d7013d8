//! One-pole lowpass filter.
//!
//! Every soundscape is shaped by one or more of these. Each instance owns its
//! state, so filters are created fresh per render and never shared.

/// One-pole lowpass filter (leaky running average).
///
/// Computes `y = y * a + x * (1 - a)`. Higher coefficients smooth more
/// heavily and bias the output towards low frequencies.
#[derive(Debug, Clone)]
pub struct OnePoleFilter {
    a: f64,
    y1: f64,
}

impl OnePoleFilter {
    /// Creates a filter from its feedback coefficient.
    ///
    /// # Arguments
    /// * `a` - Smoothing coefficient in `[0, 1)`
    pub fn with_coefficient(a: f64) -> Self {
        debug_assert!((0.0..1.0).contains(&a), "coefficient out of range: {}", a);
        Self { a, y1: 0.0 }
    }

    /// Processes a single sample.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        self.y1 = self.y1 * self.a + input * (1.0 - self.a);
        self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_is_weighted_input() {
        let mut filter = OnePoleFilter::with_coefficient(0.7);
        let y = filter.process(1.0);
        assert!((y - 0.3).abs() < 1e-12);
        let y = filter.process(1.0);
        assert!((y - (0.3 * 0.7 + 0.3)).abs() < 1e-12);
    }

    #[test]
    fn test_passes_dc() {
        let mut filter = OnePoleFilter::with_coefficient(0.95);
        let mut last = 0.0;
        for _ in 0..2000 {
            last = filter.process(1.0);
        }
        assert!((last - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_coefficient_is_identity() {
        let mut filter = OnePoleFilter::with_coefficient(0.0);
        let out: Vec<f64> = [0.25, -0.5, 1.0].iter().map(|&x| filter.process(x)).collect();
        assert_eq!(out, vec![0.25, -0.5, 1.0]);
    }

    #[test]
    fn test_heavier_coefficient_smooths_more() {
        let alternating: Vec<f64> = (0..1000)
            .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();

        let ripple = |a: f64| {
            let mut filter = OnePoleFilter::with_coefficient(a);
            let out: Vec<f64> = alternating.iter().map(|&x| filter.process(x)).collect();
            out[900..].iter().map(|s| s.abs()).fold(0.0, f64::max)
        };

        assert!(ripple(0.95) < ripple(0.7));
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let mut a = OnePoleFilter::with_coefficient(0.9);
        let mut b = OnePoleFilter::with_coefficient(0.9);
        for _ in 0..100 {
            a.process(1.0);
        }
        assert!((b.process(1.0) - 0.1).abs() < 1e-12);
        assert!(a.process(1.0) > 0.99);
    }
}
