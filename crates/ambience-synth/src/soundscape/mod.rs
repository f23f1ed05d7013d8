//! The eight ambient soundscapes.
//!
//! Each generator is a function of the render format and an injected
//! [`SampleSource`]. It returns exactly `format.num_samples()` samples in
//! nominal `[-1, 1]`; additive transients may briefly exceed that range, and
//! clamping is left to the encoder. Loop fades are applied by the caller
//! (see [`crate::generate`]).

mod birds;
mod cafe;
mod fire;
mod forest;
mod ocean;
mod rain;
mod thunder;
mod wind;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::envelope::{Burst, BurstShape};
use crate::error::AudioError;
use crate::format::AudioFormat;
use crate::loop_processing::LoopFade;
use crate::rng::SampleSource;

/// A named ambient soundscape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Soundscape {
    /// Filtered white noise with droplet impulses.
    Rain,
    /// Soft brown noise.
    Forest,
    /// Filtered noise under a slow wave envelope.
    Ocean,
    /// Brown noise with crackles.
    Fire,
    /// Brown noise with murmur swells.
    Cafe,
    /// Heavily filtered noise with dual-sine modulation.
    Wind,
    /// Quiet rustle with sine chirps.
    Birds,
    /// Low rumble with a few long claps.
    Thunder,
}

impl Soundscape {
    /// Every soundscape, in generation order.
    pub const ALL: [Soundscape; 8] = [
        Soundscape::Rain,
        Soundscape::Forest,
        Soundscape::Ocean,
        Soundscape::Fire,
        Soundscape::Cafe,
        Soundscape::Wind,
        Soundscape::Birds,
        Soundscape::Thunder,
    ];

    /// Stable identifier, also the output file stem.
    pub fn id(self) -> &'static str {
        match self {
            Soundscape::Rain => "rain",
            Soundscape::Forest => "forest",
            Soundscape::Ocean => "ocean",
            Soundscape::Fire => "fire",
            Soundscape::Cafe => "cafe",
            Soundscape::Wind => "wind",
            Soundscape::Birds => "birds",
            Soundscape::Thunder => "thunder",
        }
    }

    /// Output file name, `<id>.wav`.
    pub fn file_name(self) -> String {
        format!("{}.wav", self.id())
    }

    /// One-line description of the synthesis recipe.
    pub fn description(self) -> &'static str {
        match self {
            Soundscape::Rain => "low-passed white noise with sparse decaying droplets",
            Soundscape::Forest => "soft brown noise, continuous",
            Soundscape::Ocean => "low-passed white noise under a 0.15 Hz wave envelope",
            Soundscape::Fire => "filtered brown noise with short crackles",
            Soundscape::Cafe => "filtered brown noise with long murmur swells",
            Soundscape::Wind => "heavily filtered noise with slow dual-sine gusts",
            Soundscape::Birds => "quiet rustle with 18-29 sliding sine chirps",
            Soundscape::Thunder => "deep brown rumble with 2-4 long claps",
        }
    }

    /// Loop fade class for this texture.
    pub fn loop_fade(self) -> LoopFade {
        match self {
            Soundscape::Ocean | Soundscape::Wind | Soundscape::Thunder => LoopFade::Long,
            Soundscape::Rain
            | Soundscape::Forest
            | Soundscape::Fire
            | Soundscape::Cafe
            | Soundscape::Birds => LoopFade::Short,
        }
    }

    /// Synthesizes the raw (unfaded) buffer.
    pub fn synthesize<S: SampleSource>(self, format: &AudioFormat, source: &mut S) -> Vec<f64> {
        match self {
            Soundscape::Rain => rain::generate(format, source),
            Soundscape::Forest => forest::generate(format, source),
            Soundscape::Ocean => ocean::generate(format, source),
            Soundscape::Fire => fire::generate(format, source),
            Soundscape::Cafe => cafe::generate(format, source),
            Soundscape::Wind => wind::generate(format, source),
            Soundscape::Birds => birds::generate(format, source),
            Soundscape::Thunder => thunder::generate(format, source),
        }
    }

    /// Comma-separated list of every identifier.
    pub fn id_list() -> String {
        Self::ALL
            .iter()
            .map(|s| s.id())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Soundscape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Soundscape {
    type Err = AudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|sound| sound.id() == wanted)
            .ok_or_else(|| AudioError::UnknownSoundscape {
                name: s.to_string(),
                expected: Self::id_list(),
            })
    }
}

/// Randomly triggered transients, tested once per sample.
///
/// Parameter draws happen in a fixed order (trigger, length, amplitude) so a
/// seeded render is reproducible.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SparseBursts {
    /// Per-sample trigger probability.
    pub probability: f64,
    /// Shortest burst in samples.
    pub min_length: usize,
    /// Length spread; lengths fall in `[min_length, min_length + length_span)`.
    pub length_span: usize,
    /// Quietest peak amplitude.
    pub min_amplitude: f64,
    /// Amplitude spread.
    pub amplitude_span: f64,
    /// Envelope shape.
    pub shape: BurstShape,
}

impl SparseBursts {
    /// Rolls the trigger at sample `at`, drawing the burst parameters on success.
    pub fn roll<S: SampleSource>(&self, at: usize, source: &mut S) -> Option<Burst> {
        if source.unit() >= self.probability {
            return None;
        }
        let length = source.index(self.min_length, self.length_span);
        let amplitude = source.range(self.min_amplitude, self.amplitude_span);
        Some(Burst::new(at, length, amplitude, self.shape))
    }
}
