//! Noise sources.
//!
//! White noise is drawn directly from [`SampleSource::bipolar`]; brown noise
//! is a leaky integrator over it, which gives the low rumbling bed used by
//! forest, fire, cafe and thunder.

use crate::rng::SampleSource;

/// Brown noise generator (leaky integrator).
///
/// Each step computes `state = (state + bipolar() * step) * leak`.
#[derive(Debug, Clone)]
pub struct BrownNoise {
    step: f64,
    leak: f64,
    state: f64,
}

impl BrownNoise {
    /// Creates a brown noise generator.
    ///
    /// # Arguments
    /// * `step` - Scale applied to each white noise increment
    /// * `leak` - Per-sample decay factor, just below 1.0
    pub fn new(step: f64, leak: f64) -> Self {
        Self {
            step,
            leak,
            state: 0.0,
        }
    }

    /// Advances the integrator by one sample.
    #[inline]
    pub fn next_sample<S: SampleSource>(&mut self, source: &mut S) -> f64 {
        self.state += source.bipolar() * self.step;
        self.state *= self.leak;
        self.state
    }
}
