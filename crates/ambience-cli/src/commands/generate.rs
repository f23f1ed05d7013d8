//! Generate command implementation
//!
//! Renders each selected soundscape in fixed order and writes
//! `<out_dir>/<name>.wav`. A file that cannot be written is reported and
//! skipped; the rest of the batch still runs. Invariant violations in the
//! synthesis pipeline abort the run.

use ambience_synth::rng::random_seed;
use ambience_synth::{render, AudioError, AudioFormat, Soundscape};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::json_output::{error_codes, FileResult, GenerateOutput, GenerationSummary, JsonError};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "renderer/public/sounds";

/// Validated settings for one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateConfig {
    /// Output directory
    pub out_dir: PathBuf,
    /// Sample rate and duration
    pub format: AudioFormat,
    /// Base seed; each soundscape derives its own from it
    pub seed: u32,
    /// Soundscapes to render, in generation order
    pub sounds: Vec<Soundscape>,
}

impl GenerateConfig {
    /// Builds a config covering all eight soundscapes.
    pub fn new(out_dir: impl Into<PathBuf>, format: AudioFormat, seed: u32) -> Self {
        Self {
            out_dir: out_dir.into(),
            format,
            seed,
            sounds: Soundscape::ALL.to_vec(),
        }
    }

    /// Builds a config from raw command-line values.
    ///
    /// Rejects bad formats and unknown names before any work starts. A
    /// missing seed is replaced by a random one.
    pub fn from_args(
        out_dir: &str,
        sample_rate: u32,
        duration: f64,
        seed: Option<u32>,
        only: Option<&str>,
    ) -> std::result::Result<Self, AudioError> {
        let format = AudioFormat::new(sample_rate, duration)?;
        let mut config = Self::new(out_dir, format, seed.unwrap_or_else(random_seed));
        if let Some(only) = only {
            config.sounds = parse_selection(only)?;
        }
        Ok(config)
    }
}

/// Parses a comma-separated soundscape list.
///
/// The result keeps the canonical generation order and drops duplicates.
pub fn parse_selection(list: &str) -> std::result::Result<Vec<Soundscape>, AudioError> {
    let mut wanted = Vec::new();
    for name in list.split(',').filter(|n| !n.trim().is_empty()) {
        wanted.push(name.parse::<Soundscape>()?);
    }
    if wanted.is_empty() {
        return Err(AudioError::UnknownSoundscape {
            name: list.to_string(),
            expected: Soundscape::id_list(),
        });
    }
    Ok(Soundscape::ALL
        .into_iter()
        .filter(|s| wanted.contains(s))
        .collect())
}

/// Renders and writes every soundscape in `config`.
///
/// `on_file` is called after each file attempt, in order.
///
/// # Returns
/// The batch summary. Fails only on output directory creation or an
/// invariant violation.
pub fn generate_batch<F>(config: &GenerateConfig, mut on_file: F) -> Result<GenerationSummary>
where
    F: FnMut(&FileResult),
{
    fs::create_dir_all(&config.out_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.out_dir.display()
        )
    })?;

    let mut files = Vec::with_capacity(config.sounds.len());
    for &sound in &config.sounds {
        let path = config.out_dir.join(sound.file_name());
        let result = write_sound(sound, &config.format, config.seed, &path)?;
        on_file(&result);
        files.push(result);
    }

    let written = files.iter().filter(|f| f.success).count();
    Ok(GenerationSummary {
        out_dir: config.out_dir.display().to_string(),
        sample_rate: config.format.sample_rate,
        duration_seconds: config.format.duration_seconds,
        seed: config.seed,
        total: files.len(),
        written,
        failed: files.len() - written,
        files,
    })
}

/// Renders one soundscape and writes it to `path`.
fn write_sound(sound: Soundscape, format: &AudioFormat, seed: u32, path: &Path) -> Result<FileResult> {
    let display = path.display().to_string();
    let failed = |err: &AudioError| FileResult {
        sound: sound.id().to_string(),
        path: display.clone(),
        success: false,
        bytes: None,
        pcm_hash: None,
        seed: None,
        error: Some(JsonError::from(err).with_file(display.clone())),
    };

    let rendered = match render(sound, format, seed) {
        Ok(rendered) => rendered,
        Err(e) if e.is_invariant_violation() => {
            return Err(e).with_context(|| format!("Synthesis of '{}' failed", sound));
        }
        Err(e) => return Ok(failed(&e)),
    };

    match rendered.wav.write_to(path) {
        Ok(()) => Ok(FileResult {
            sound: sound.id().to_string(),
            path: display.clone(),
            success: true,
            bytes: Some(rendered.wav.byte_len() as u64),
            pcm_hash: Some(rendered.wav.pcm_hash.clone()),
            seed: Some(rendered.seed),
            error: None,
        }),
        Err(e) => Ok(failed(&e)),
    }
}

/// Formats a byte count as kilobytes with one decimal, e.g. `861.4 KB`.
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

/// Run the generate command
///
/// # Arguments
/// * `out_dir` - Output directory
/// * `sample_rate` - Sample rate in Hz
/// * `duration` - Duration of each file in seconds
/// * `seed` - Base seed (random if absent)
/// * `only` - Optional comma-separated subset
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if every file was written, 1 otherwise
pub fn run(
    out_dir: &str,
    sample_rate: u32,
    duration: f64,
    seed: Option<u32>,
    only: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(out_dir, sample_rate, duration, seed, only)
    } else {
        run_human(out_dir, sample_rate, duration, seed, only)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(
    out_dir: &str,
    sample_rate: u32,
    duration: f64,
    seed: Option<u32>,
    only: Option<&str>,
) -> Result<ExitCode> {
    let config = GenerateConfig::from_args(out_dir, sample_rate, duration, seed, only)
        .context("Invalid configuration")?;

    println!("{}", "Generating ambient sounds...".cyan().bold());
    println!(
        "{} {} Hz, {}s, mono 16-bit",
        "Format:".dimmed(),
        config.format.sample_rate,
        config.format.duration_seconds
    );
    println!("{} {}", "Output directory:".dimmed(), out_dir);
    println!("{} {}", "Seed:".dimmed(), config.seed);
    println!();

    let summary = generate_batch(&config, |file| {
        let name = Path::new(&file.path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.path.clone());
        if file.success {
            let size = format!("({})", format_size_kb(file.bytes.unwrap_or(0)));
            println!("  {} ... {} {}", name, "OK".green(), size.dimmed());
        } else {
            let message = file
                .error
                .as_ref()
                .map(|e| e.message.as_str())
                .unwrap_or("unknown error");
            println!("  {} ... {} {}", name, "FAILED".red(), message);
        }
    })?;

    println!();
    if summary.is_success() {
        println!(
            "{} {} sound files written to {}",
            "SUCCESS".green().bold(),
            summary.written,
            out_dir
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} {} of {} files failed",
            "FAILED".red().bold(),
            summary.failed,
            summary.total
        );
        for file in summary.files.iter().filter(|f| !f.success) {
            println!("  - {}", file.path);
        }
        Ok(ExitCode::from(1))
    }
}

/// Run generate with machine-readable JSON output
fn run_json(
    out_dir: &str,
    sample_rate: u32,
    duration: f64,
    seed: Option<u32>,
    only: Option<&str>,
) -> Result<ExitCode> {
    let output = match GenerateConfig::from_args(out_dir, sample_rate, duration, seed, only) {
        Err(e) => GenerateOutput {
            success: false,
            errors: vec![JsonError::new(error_codes::INVALID_CONFIG, e.to_string())],
            summary: None,
        },
        Ok(config) => match generate_batch(&config, |_| {}) {
            Ok(summary) => GenerateOutput {
                success: summary.is_success(),
                errors: vec![],
                summary: Some(summary),
            },
            Err(e) => {
                let code = match e.downcast_ref::<AudioError>() {
                    Some(audio) => audio.code(),
                    None => error_codes::OUTPUT_DIR,
                };
                GenerateOutput {
                    success: false,
                    errors: vec![JsonError::new(code, format!("{:#}", e))],
                    summary: None,
                }
            }
        },
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize JSON output")?;
    println!("{}", json);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
