//! Render format descriptor.

use serde::{Deserialize, Serialize};

use crate::error::{AudioError, AudioResult};

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default soundscape duration in seconds.
pub const DEFAULT_DURATION_SECONDS: f64 = 10.0;

/// Lowest accepted sample rate.
pub const MIN_SAMPLE_RATE: u32 = 8000;

/// Highest accepted sample rate.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Longest accepted duration in seconds.
pub const MAX_DURATION_SECONDS: f64 = 600.0;

/// Sample rate and duration shared by every soundscape in a run.
///
/// Output is always mono 16-bit PCM; only these two knobs vary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Duration in seconds.
    pub duration_seconds: f64,
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration_seconds: DEFAULT_DURATION_SECONDS,
        }
    }
}

impl AudioFormat {
    /// Creates a validated format.
    pub fn new(sample_rate: u32, duration_seconds: f64) -> AudioResult<Self> {
        let format = Self {
            sample_rate,
            duration_seconds,
        };
        format.validate()?;
        Ok(format)
    }

    /// Checks the sample rate and duration are in range.
    pub fn validate(&self) -> AudioResult<()> {
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&self.sample_rate) {
            return Err(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !self.duration_seconds.is_finite()
            || self.duration_seconds <= 0.0
            || self.duration_seconds > MAX_DURATION_SECONDS
            || self.num_samples() == 0
        {
            return Err(AudioError::InvalidDuration {
                duration: self.duration_seconds,
            });
        }
        Ok(())
    }

    /// Sample rate as a float, for time computations.
    pub fn sample_rate_f64(&self) -> f64 {
        self.sample_rate as f64
    }

    /// Exact buffer length every generator must produce.
    pub fn num_samples(&self) -> usize {
        (self.sample_rate as f64 * self.duration_seconds).round() as usize
    }

    /// Time in seconds of sample `index`.
    #[inline]
    pub fn time_of(&self, index: usize) -> f64 {
        index as f64 / self.sample_rate as f64
    }
}
