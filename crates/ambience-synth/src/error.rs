//! Error types for the synthesis backend.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while rendering or encoding a soundscape.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Unknown soundscape identifier.
    #[error("unknown soundscape '{name}' (expected one of: {expected})")]
    UnknownSoundscape {
        /// The name that was requested.
        name: String,
        /// Comma-separated list of valid names.
        expected: String,
    },

    /// A generator produced a buffer of the wrong length.
    #[error("generator '{sound}' produced {actual} samples, expected {expected}")]
    LengthMismatch {
        /// Soundscape identifier.
        sound: String,
        /// Expected sample count.
        expected: usize,
        /// Actual sample count.
        actual: usize,
    },

    /// A NaN or infinite sample reached the encoder.
    #[error("non-finite sample {value} at index {index}")]
    NonFiniteSample {
        /// Index of the offending sample.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Malformed WAV data.
    #[error("invalid WAV data: {message}")]
    InvalidWav {
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid WAV error.
    pub fn invalid_wav(message: impl Into<String>) -> Self {
        Self::InvalidWav {
            message: message.into(),
        }
    }

    /// Stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "AUDIO_001",
            AudioError::InvalidDuration { .. } => "AUDIO_002",
            AudioError::UnknownSoundscape { .. } => "AUDIO_003",
            AudioError::LengthMismatch { .. } => "AUDIO_004",
            AudioError::NonFiniteSample { .. } => "AUDIO_005",
            AudioError::InvalidWav { .. } => "AUDIO_006",
            AudioError::Io(_) => "AUDIO_007",
        }
    }

    /// Whether this error signals a synthesis bug rather than an environment problem.
    ///
    /// Invariant violations abort a batch; I/O failures only skip the affected file.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            AudioError::LengthMismatch { .. } | AudioError::NonFiniteSample { .. }
        )
    }
}
