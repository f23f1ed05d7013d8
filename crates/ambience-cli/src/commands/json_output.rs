//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `generate`, `list`, and `inspect`,
//! so scripts can consume results without scraping colored text.

use ambience_synth::AudioError;
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Format: CLI_XXX for CLI-level errors; library errors pass through their
/// own `AUDIO_XXX` codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Output directory could not be created
    pub const OUTPUT_DIR: &str = "CLI_002";
    /// Invalid command-line configuration
    pub const INVALID_CONFIG: &str = "CLI_003";
    /// Directory scan failed
    pub const DIRECTORY_SCAN: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "AUDIO_007")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File the error relates to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&AudioError> for JsonError {
    fn from(err: &AudioError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// Outcome of writing one soundscape file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileResult {
    /// Soundscape identifier
    pub sound: String,
    /// Output file path
    pub path: String,
    /// Whether the file was written
    pub success: bool,
    /// Size of the written file in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    /// BLAKE3 hash of the PCM data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    /// Seed the generator ran with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Error if the file could not be written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

/// Summary of a `generate` run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationSummary {
    /// Output directory
    pub out_dir: String,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Duration of each file in seconds
    pub duration_seconds: f64,
    /// Base seed for the run
    pub seed: u32,
    /// Files attempted
    pub total: usize,
    /// Files written
    pub written: usize,
    /// Files that failed
    pub failed: usize,
    /// Per-file results, in generation order
    pub files: Vec<FileResult>,
}

impl GenerationSummary {
    /// Whether every file was written.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Top-level JSON document for `generate --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether every file was written
    pub success: bool,
    /// Fatal errors (configuration or invariant violations)
    pub errors: Vec<JsonError>,
    /// Run summary, absent if the run never started
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<GenerationSummary>,
}

/// One row of `list --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoundscapeInfo {
    /// Soundscape identifier
    pub id: String,
    /// Output file name
    pub file: String,
    /// Loop fade length in seconds
    pub fade_seconds: f64,
    /// Recipe description
    pub description: String,
}

/// Metrics for one inspected WAV file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectReport {
    /// File path
    pub path: String,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Channel count
    pub channels: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Whether the header is the exact 44-byte layout the generator writes
    pub canonical: bool,
    /// Number of sample frames
    pub num_samples: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Peak absolute sample value
    pub peak: f64,
    /// Root-mean-square level
    pub rms: f64,
    /// First sample value
    pub first_sample: f64,
    /// Last sample value
    pub last_sample: f64,
    /// Jump between the last and first sample when looped
    pub loop_discontinuity: f64,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: String,
}

/// Result of inspecting one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectEntry {
    /// File path
    pub path: String,
    /// Metrics, if the file parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<InspectReport>,
    /// Error, if the file did not parse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

/// Top-level JSON document for `inspect --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    /// Whether every file was inspected
    pub success: bool,
    /// Per-file entries
    pub files: Vec<InspectEntry>,
    /// Errors not tied to a file
    pub errors: Vec<JsonError>,
}
