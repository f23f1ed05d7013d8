//! Ambience Synthesis Backend
//!
//! Procedural generation of eight looping ambient soundscapes (rain, forest,
//! ocean, fire, cafe, wind, birds, thunder), each rendered to a mono 16-bit
//! PCM WAV file.
//!
//! # Overview
//!
//! Every soundscape is built from the same small toolkit:
//!
//! - **Noise** - uniform white noise and leaky-integrator brown noise
//! - **Filtering** - one-pole low-pass smoothing
//! - **Transients** - sparse bursts with decaying or half-sine envelopes
//! - **Modulation** - slow sine envelopes for waves and gusts
//!
//! A linear fade at both ends forces the first and last sample to zero so
//! the file loops without a click.
//!
//! # Determinism
//!
//! Generators draw all randomness through [`rng::SampleSource`]. Seeded
//! renders use PCG32 with per-soundscape seeds derived via BLAKE3, so the
//! same base seed reproduces byte-identical files.
//!
//! # Example
//!
//! ```ignore
//! use ambience_synth::{render, AudioFormat, Soundscape};
//!
//! let format = AudioFormat::default();
//! let result = render(Soundscape::Rain, &format, 42)?;
//! result.wav.write_to("rain.wav".as_ref())?;
//! println!("PCM hash: {}", result.wav.pcm_hash);
//! ```

pub mod envelope;
pub mod error;
pub mod filter;
pub mod format;
pub mod generate;
pub mod loop_processing;
pub mod noise;
pub mod rng;
pub mod soundscape;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use format::AudioFormat;
pub use generate::{render, render_with_source, GenerateResult};
pub use soundscape::Soundscape;
pub use wav::{WavHeader, WavResult};
