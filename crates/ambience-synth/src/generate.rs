//! Main entry point for soundscape rendering.
//!
//! Rendering is synthesize, verify, loop-fade, encode. The result holds the
//! complete WAV file in memory; writing it to disk is left to the caller.

use crate::error::{AudioError, AudioResult};
use crate::format::AudioFormat;
use crate::loop_processing::apply_loop_fade;
use crate::rng::{create_component_rng, derive_component_seed, SampleSource};
use crate::soundscape::Soundscape;
use crate::wav::WavResult;

/// Result of rendering one soundscape.
#[derive(Debug)]
pub struct GenerateResult {
    /// Which soundscape was rendered.
    pub sound: Soundscape,
    /// Encoded WAV file and PCM hash.
    pub wav: WavResult,
    /// Seed the generator's RNG was created from.
    pub seed: u32,
    /// Fade length applied at each end, in samples.
    pub fade_samples: usize,
    /// Largest absolute sample value after fading, before clamping.
    pub peak: f64,
}

/// Renders a soundscape with an RNG derived from `base_seed`.
///
/// Each soundscape gets its own stream, so rendering a subset of sounds
/// yields the same bytes as rendering all of them.
///
/// # Arguments
/// * `sound` - The soundscape to render
/// * `format` - Sample rate and duration
/// * `base_seed` - Seed for the whole run
///
/// # Returns
/// The encoded WAV and render metadata
pub fn render(sound: Soundscape, format: &AudioFormat, base_seed: u32) -> AudioResult<GenerateResult> {
    let seed = derive_component_seed(base_seed, sound.id());
    let mut rng = create_component_rng(base_seed, sound.id());
    let mut result = render_with_source(sound, format, &mut rng)?;
    result.seed = seed;
    Ok(result)
}

/// Renders a soundscape drawing randomness from an arbitrary source.
///
/// The reported `seed` is zero; use [`render`] for seeded output.
pub fn render_with_source<S: SampleSource>(
    sound: Soundscape,
    format: &AudioFormat,
    source: &mut S,
) -> AudioResult<GenerateResult> {
    format.validate()?;

    let mut samples = sound.synthesize(format, source);

    let expected = format.num_samples();
    if samples.len() != expected {
        return Err(AudioError::LengthMismatch {
            sound: sound.id().to_string(),
            expected,
            actual: samples.len(),
        });
    }

    let fade_samples = apply_loop_fade(&mut samples, sound.loop_fade().samples(format.sample_rate));
    let peak = samples.iter().fold(0.0f64, |m, s| m.max(s.abs()));
    let wav = WavResult::from_mono(&samples, format.sample_rate)?;

    Ok(GenerateResult {
        sound,
        wav,
        seed: 0,
        fade_samples,
        peak,
    })
}
