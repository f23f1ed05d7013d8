//! WAV header parsing.

use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{AudioError, AudioResult};

/// Size of the canonical RIFF + fmt + data header.
pub const CANONICAL_HEADER_LEN: usize = 44;

/// Parsed fields of a PCM WAV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// RIFF chunk size (file size minus 8).
    pub riff_size: u32,
    /// Audio format tag (1 = PCM).
    pub audio_format: u16,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per sample frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Byte offset of the PCM payload.
    pub data_offset: usize,
    /// Length of the PCM payload in bytes.
    pub data_len: u32,
}

impl WavHeader {
    /// Parses the header of a RIFF/WAVE byte buffer.
    ///
    /// Chunks other than `fmt ` and `data` are skipped, so files written by
    /// other tools parse as long as they carry PCM data.
    pub fn parse(bytes: &[u8]) -> AudioResult<Self> {
        let mut cursor = Cursor::new(bytes);

        let riff_size = match read_tag(&mut cursor)? {
            tag if &tag == b"RIFF" => cursor.read_u32::<LittleEndian>()?,
            _ => return Err(AudioError::invalid_wav("missing RIFF magic")),
        };
        if &read_tag(&mut cursor)? != b"WAVE" {
            return Err(AudioError::invalid_wav("missing WAVE identifier"));
        }

        let mut fmt: Option<(u16, u16, u32, u32, u16, u16)> = None;

        loop {
            let tag = read_tag(&mut cursor)
                .map_err(|_| AudioError::invalid_wav("missing data chunk"))?;
            let size = cursor.read_u32::<LittleEndian>()?;
            let body_start = cursor.position() as usize;

            match &tag {
                b"fmt " => {
                    if size < 16 {
                        return Err(AudioError::invalid_wav(format!(
                            "fmt chunk too small: {} bytes",
                            size
                        )));
                    }
                    fmt = Some((
                        cursor.read_u16::<LittleEndian>()?,
                        cursor.read_u16::<LittleEndian>()?,
                        cursor.read_u32::<LittleEndian>()?,
                        cursor.read_u32::<LittleEndian>()?,
                        cursor.read_u16::<LittleEndian>()?,
                        cursor.read_u16::<LittleEndian>()?,
                    ));
                }
                b"data" => {
                    let (audio_format, channels, sample_rate, byte_rate, block_align, bits) =
                        fmt.ok_or_else(|| AudioError::invalid_wav("data chunk before fmt chunk"))?;
                    if body_start + size as usize > bytes.len() {
                        return Err(AudioError::invalid_wav(format!(
                            "data chunk declares {} bytes but only {} remain",
                            size,
                            bytes.len() - body_start
                        )));
                    }
                    return Ok(Self {
                        riff_size,
                        audio_format,
                        channels,
                        sample_rate,
                        byte_rate,
                        block_align,
                        bits_per_sample: bits,
                        data_offset: body_start,
                        data_len: size,
                    });
                }
                _ => {}
            }

            // Chunks are word aligned.
            let next = body_start as u64 + size as u64 + (size as u64 & 1);
            cursor.set_position(next);
        }
    }

    /// Number of sample frames in the data chunk.
    pub fn num_frames(&self) -> usize {
        if self.block_align == 0 {
            return 0;
        }
        self.data_len as usize / self.block_align as usize
    }

    /// Duration of the data chunk in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames() as f64 / self.sample_rate as f64
    }

    /// Whether this header is the canonical mono 16-bit PCM layout this crate writes.
    pub fn is_canonical_mono16(&self) -> bool {
        self.audio_format == 1
            && self.channels == 1
            && self.bits_per_sample == 16
            && self.block_align == 2
            && u64::from(self.byte_rate) == u64::from(self.sample_rate) * 2
            && self.data_offset == CANONICAL_HEADER_LEN
            && u64::from(self.riff_size) == 36 + u64::from(self.data_len)
    }
}

fn read_tag(cursor: &mut Cursor<&[u8]>) -> AudioResult<[u8; 4]> {
    let mut tag = [0u8; 4];
    cursor
        .read_exact(&mut tag)
        .map_err(|_| AudioError::invalid_wav("truncated header"))?;
    Ok(tag)
}
