//! Canonical 16-bit PCM WAV encoding and decoding.
//!
//! The writer emits the 44-byte RIFF/WAVE header followed by little-endian
//! 16-bit samples, with no timestamps or variable metadata, so identical
//! samples always produce identical bytes. The reader parses the same layout
//! back for inspection and round-trip checks.

mod format;
mod header;
mod pcm;
mod result;
mod writer;


pub use format::WavFormat;
pub use header::{WavHeader, CANONICAL_HEADER_LEN};
pub use pcm::{compute_pcm_hash, decode_pcm16, extract_pcm_data, PCM16_SCALE};
pub use result::WavResult;
pub use writer::{clamp_sample, samples_to_pcm16, write_wav, write_wav_to_vec};
