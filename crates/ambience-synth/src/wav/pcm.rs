//! PCM data extraction, decoding and hashing.

use crate::error::{AudioError, AudioResult};

use super::header::WavHeader;

/// Scale between a full-scale 16-bit sample and 1.0.
pub const PCM16_SCALE: f64 = 32767.0;

/// Extracts PCM data from a WAV file buffer.
///
/// Used for comparing WAV files by their audio content only.
///
/// # Returns
/// PCM data if found, or None if the format is invalid
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    let header = WavHeader::parse(wav_data).ok()?;
    let end = header.data_offset + header.data_len as usize;
    wav_data.get(header.data_offset..end)
}

/// Computes the BLAKE3 hash of the PCM payload of a WAV file.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}

/// Decodes a mono 16-bit PCM WAV file back to f64 samples.
///
/// Samples are scaled by `1 / 32767`, the inverse of the encoder, so a
/// round trip reproduces the clamped input within one quantization step.
pub fn decode_pcm16(wav_data: &[u8]) -> AudioResult<Vec<f64>> {
    let header = WavHeader::parse(wav_data)?;
    if header.audio_format != 1 || header.bits_per_sample != 16 {
        return Err(AudioError::invalid_wav(format!(
            "expected 16-bit PCM, found format {} with {} bits",
            header.audio_format, header.bits_per_sample
        )));
    }
    if header.channels != 1 {
        return Err(AudioError::invalid_wav(format!(
            "expected mono, found {} channels",
            header.channels
        )));
    }

    let end = header.data_offset + header.data_len as usize;
    let pcm = &wav_data[header.data_offset..end];

    Ok(pcm
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]) as f64 / PCM16_SCALE)
        .collect())
}
