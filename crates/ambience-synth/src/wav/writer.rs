//! Core WAV writing and PCM conversion functions.

use std::io::{self, Write};

use crate::error::{AudioError, AudioResult};

use super::format::WavFormat;
use super::pcm::PCM16_SCALE;

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Result indicating success or I/O error
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Hard-limits a sample to `[-1, 1]`.
#[inline]
pub fn clamp_sample(sample: f64) -> f64 {
    sample.clamp(-1.0, 1.0)
}

/// Converts f64 samples to 16-bit PCM bytes.
///
/// Each sample is clamped to `[-1, 1]` and quantized as
/// `round(sample * 32767)`, so the output never wraps and never reaches
/// `i16::MIN`.
///
/// # Errors
/// Returns [`AudioError::NonFiniteSample`] for the first NaN or infinite
/// sample. Such values indicate a synthesis bug and are never coerced.
pub fn samples_to_pcm16(samples: &[f64]) -> AudioResult<Vec<u8>> {
    if let Some((index, &value)) = samples.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(AudioError::NonFiniteSample { index, value });
    }

    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        let pcm_value = (clamp_sample(sample) * PCM16_SCALE).round() as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    Ok(pcm)
}
