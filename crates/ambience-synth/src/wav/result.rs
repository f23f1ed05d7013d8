//! WAV file generation result type.

use std::fs;
use std::path::Path;

use crate::error::AudioResult;

use super::format::WavFormat;
use super::writer::{samples_to_pcm16, write_wav_to_vec};

/// Result of WAV file generation.
#[derive(Debug)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes mono samples into a WAV file in memory.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> AudioResult<Self> {
        let pcm = samples_to_pcm16(samples)?;
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::mono(sample_rate);
        let wav_data = write_wav_to_vec(&format, &pcm);

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Size of the encoded file in bytes.
    pub fn byte_len(&self) -> usize {
        self.wav_data.len()
    }

    /// Writes the encoded file to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> AudioResult<()> {
        fs::write(path, &self.wav_data)?;
        Ok(())
    }
}
