//! Inspect command implementation
//!
//! Parses WAV files and reports format, level, and loop-boundary metrics.
//! Accepts a single file or a directory scanned recursively for `.wav`.

use ambience_synth::loop_processing::measure_loop_discontinuity;
use ambience_synth::wav::{compute_pcm_hash, decode_pcm16};
use ambience_synth::{AudioError, AudioResult, WavHeader};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

use super::json_output::{error_codes, InspectEntry, InspectOutput, InspectReport, JsonError};

/// Computes metrics for an in-memory WAV file.
///
/// Only mono 16-bit PCM is accepted.
pub fn inspect_bytes(path: &str, data: &[u8]) -> AudioResult<InspectReport> {
    let header = WavHeader::parse(data)?;
    let samples = decode_pcm16(data)?;
    let pcm_hash =
        compute_pcm_hash(data).ok_or_else(|| AudioError::invalid_wav("missing data chunk"))?;

    let peak = samples.iter().fold(0.0f64, |m, s| m.max(s.abs()));
    let rms = if samples.is_empty() {
        0.0
    } else {
        (samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64).sqrt()
    };

    Ok(InspectReport {
        path: path.to_string(),
        sample_rate: header.sample_rate,
        channels: header.channels,
        bits_per_sample: header.bits_per_sample,
        canonical: header.is_canonical_mono16(),
        num_samples: samples.len(),
        duration_seconds: header.duration_seconds(),
        peak,
        rms,
        first_sample: samples.first().copied().unwrap_or(0.0),
        last_sample: samples.last().copied().unwrap_or(0.0),
        loop_discontinuity: measure_loop_discontinuity(&samples),
        pcm_hash,
    })
}

/// Reads and inspects a WAV file on disk.
pub fn inspect_file(path: &Path) -> Result<InspectReport> {
    let data = fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let report = inspect_bytes(&path.display().to_string(), &data)
        .with_context(|| format!("Failed to parse WAV: {}", path.display()))?;
    Ok(report)
}

/// Recursively collects `.wav` files under `dir`, sorted by path.
pub fn collect_wav_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Input directory does not exist: {}", dir.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Run the inspect command
///
/// # Arguments
/// * `input` - Single WAV file to inspect
/// * `input_dir` - Directory to scan for WAV files
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if every file was inspected, 1 otherwise
pub fn run(input: Option<&str>, input_dir: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let targets = match (input, input_dir) {
        (Some(file), _) => Ok(vec![PathBuf::from(file)]),
        (None, Some(dir)) => collect_wav_files(Path::new(dir)),
        (None, None) => Err(anyhow::anyhow!("either --input or --input-dir is required")),
    };

    if json_output {
        run_json(targets)
    } else {
        run_human(targets?)
    }
}

/// Run inspect with human-readable (colored) output
fn run_human(targets: Vec<PathBuf>) -> Result<ExitCode> {
    if targets.is_empty() {
        println!("{} no .wav files found", "WARN".yellow().bold());
        return Ok(ExitCode::SUCCESS);
    }

    let mut failures = 0;
    for path in &targets {
        match inspect_file(path) {
            Ok(report) => print_report(&report),
            Err(e) => {
                failures += 1;
                println!("{} {}", "FAILED".red().bold(), path.display());
                println!("  {}", format!("{:#}", e).dimmed());
            }
        }
        println!();
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn print_report(report: &InspectReport) {
    println!("{} {}", "Inspecting:".cyan().bold(), report.path);
    let layout = if report.canonical {
        "canonical".green()
    } else {
        "non-canonical".yellow()
    };
    println!(
        "  {} {} Hz, {} ch, {}-bit ({})",
        "Format:".dimmed(),
        report.sample_rate,
        report.channels,
        report.bits_per_sample,
        layout
    );
    println!(
        "  {} {:.3}s ({} samples)",
        "Duration:".dimmed(),
        report.duration_seconds,
        report.num_samples
    );
    println!(
        "  {} peak {:.4}, rms {:.4}",
        "Level:".dimmed(),
        report.peak,
        report.rms
    );

    let seam = if report.loop_discontinuity == 0.0 && report.first_sample == 0.0 {
        "clean".green()
    } else {
        "click".yellow()
    };
    println!(
        "  {} first {:.5}, last {:.5} ({})",
        "Loop seam:".dimmed(),
        report.first_sample,
        report.last_sample,
        seam
    );
    println!("  {} {}", "PCM hash:".dimmed(), report.pcm_hash);
}

/// Run inspect with machine-readable JSON output
fn run_json(targets: Result<Vec<PathBuf>>) -> Result<ExitCode> {
    let output = match targets {
        Err(e) => InspectOutput {
            success: false,
            files: vec![],
            errors: vec![JsonError::new(error_codes::DIRECTORY_SCAN, format!("{:#}", e))],
        },
        Ok(targets) => {
            let files: Vec<InspectEntry> = targets.iter().map(|path| inspect_entry(path)).collect();
            InspectOutput {
                success: files.iter().all(|f| f.error.is_none()),
                files,
                errors: vec![],
            }
        }
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize JSON output")?;
    println!("{}", json);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn inspect_entry(path: &Path) -> InspectEntry {
    let display = path.display().to_string();
    let result = match fs::read(path) {
        Ok(data) => inspect_bytes(&display, &data).map_err(|e| JsonError::from(&e)),
        Err(e) => Err(JsonError::new(error_codes::FILE_READ, e.to_string())),
    };

    match result {
        Ok(report) => InspectEntry {
            path: display,
            report: Some(report),
            error: None,
        },
        Err(error) => InspectEntry {
            error: Some(error.with_file(display.clone())),
            path: display,
            report: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ambience_synth::wav::write_wav_to_vec;
    use ambience_synth::wav::{samples_to_pcm16, WavFormat};

    fn wav_bytes(samples: &[f64]) -> Vec<u8> {
        let pcm = samples_to_pcm16(samples).unwrap();
        write_wav_to_vec(&WavFormat::mono(22050), &pcm)
    }

    #[test]
    fn test_inspect_bytes_metrics() {
        let data = wav_bytes(&[0.0, 0.5, -1.0, 0.5, 0.0]);
        let report = inspect_bytes("mem.wav", &data).unwrap();

        assert_eq!(report.sample_rate, 22050);
        assert_eq!(report.channels, 1);
        assert_eq!(report.bits_per_sample, 16);
        assert!(report.canonical);
        assert_eq!(report.num_samples, 5);
        assert_eq!(report.peak, 1.0);
        assert_eq!(report.first_sample, 0.0);
        assert_eq!(report.last_sample, 0.0);
        assert_eq!(report.loop_discontinuity, 0.0);
        assert_eq!(report.pcm_hash.len(), 64);
    }

    #[test]
    fn test_inspect_bytes_flags_extra_chunks() {
        let data = wav_bytes(&[0.0, 0.25, 0.0]);
        let mut spliced = data[..36].to_vec();
        spliced.extend_from_slice(b"LIST");
        spliced.extend_from_slice(&4u32.to_le_bytes());
        spliced.extend_from_slice(b"INFO");
        spliced.extend_from_slice(&data[36..]);

        let report = inspect_bytes("spliced.wav", &spliced).unwrap();
        assert!(!report.canonical);
        assert_eq!(report.num_samples, 3);
    }

    #[test]
    fn test_inspect_bytes_rejects_garbage() {
        assert!(inspect_bytes("x", b"not a wav file at all").is_err());
    }

    #[test]
    fn test_collect_wav_files_recurses_and_sorts() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("b.wav"), wav_bytes(&[0.0])).unwrap();
        fs::write(tmp.path().join("sub").join("a.WAV"), wav_bytes(&[0.0])).unwrap();
        fs::write(tmp.path().join("notes.txt"), "hi").unwrap();

        let files = collect_wav_files(tmp.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("b.wav"));
        assert!(files[1].ends_with("sub/a.WAV"));
    }

    #[test]
    fn test_collect_wav_files_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(collect_wav_files(&tmp.path().join("missing")).is_err());
    }

    #[test]
    fn test_run_reports_failure_for_bad_file() {
        let tmp = tempfile::tempdir().unwrap();
        let good = tmp.path().join("good.wav");
        let bad = tmp.path().join("bad.wav");
        fs::write(&good, wav_bytes(&[0.0, 0.2, 0.0])).unwrap();
        fs::write(&bad, b"RIFF").unwrap();

        let dir = tmp.path().to_str().unwrap();
        assert_eq!(run(None, Some(dir), true).unwrap(), ExitCode::from(1));
        assert_eq!(
            run(Some(good.to_str().unwrap()), None, true).unwrap(),
            ExitCode::SUCCESS
        );
    }
}
