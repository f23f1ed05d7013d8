//! Test harness utilities for running the generator and reading its output.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, Output};
use std::sync::OnceLock;
use tempfile::TempDir;

use ambience_cli::commands::generate::{generate_batch, GenerateConfig};
use ambience_cli::commands::json_output::GenerationSummary;
use ambience_synth::AudioFormat;

/// Result of running the ambience binary.
#[derive(Debug)]
pub struct CliResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Create a CliResult from a Command Output.
    pub fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Assert that the command succeeded.
    pub fn assert_success(&self) {
        assert!(
            self.success,
            "Command failed with exit code {}.\nstdout: {}\nstderr: {}",
            self.exit_code, self.stdout, self.stderr
        );
    }

    /// Assert that the command failed.
    pub fn assert_failure(&self) {
        assert!(
            !self.success,
            "Expected command to fail, but it succeeded.\nstdout: {}",
            self.stdout
        );
    }
}

/// A WAV file read back through `hound`.
#[derive(Debug)]
pub struct DecodedWav {
    pub spec: hound::WavSpec,
    pub samples: Vec<i16>,
}

impl DecodedWav {
    /// Samples scaled back to `[-1, 1]`.
    pub fn normalized(&self) -> Vec<f64> {
        self.samples.iter().map(|&s| s as f64 / 32767.0).collect()
    }

    /// Root-mean-square level of the normalized samples.
    pub fn rms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.normalized().iter().map(|s| s * s).sum();
        (sum / self.samples.len() as f64).sqrt()
    }
}

/// A test harness with a scratch output directory.
pub struct TestHarness {
    /// Working directory for test outputs.
    pub work_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Directory the generator writes into.
    pub fn out_dir(&self) -> PathBuf {
        self.path().join("sounds")
    }

    /// Renders all eight soundscapes as a library call.
    pub fn generate(&self, format: AudioFormat, seed: u32) -> GenerationSummary {
        let config = GenerateConfig::new(self.out_dir(), format, seed);
        generate_batch(&config, |_| {}).expect("batch aborted")
    }

    /// Runs the `generate` command entry point with `--json`.
    pub fn run_generate(&self, sample_rate: u32, duration: f64, seed: u32) -> ExitCode {
        let out_dir = self.out_dir();
        ambience_cli::commands::generate::run(
            out_dir.to_str().expect("non-UTF-8 temp path"),
            sample_rate,
            duration,
            Some(seed),
            None,
            true,
        )
        .expect("generate returned a fatal error")
    }

    /// Run the ambience binary with the given arguments.
    pub fn run_cli(&self, args: &[&str]) -> CliResult {
        let manifest_path = workspace_manifest_path();
        let output = Command::new("cargo")
            .args(["run", "--quiet", "--manifest-path"])
            .arg(&manifest_path)
            .args(["-p", "ambience-cli", "--bin", "ambience", "--"])
            .args(args)
            .current_dir(self.path())
            .output();

        match output {
            Ok(out) => CliResult::from_output(out),
            Err(e) => CliResult {
                success: false,
                exit_code: -1,
                stdout: String::new(),
                stderr: format!("Failed to run CLI: {}", e),
            },
        }
    }

    /// Reads `<out_dir>/<file_name>` with `hound`.
    pub fn read_wav(&self, file_name: &str) -> DecodedWav {
        read_wav_hound(&self.out_dir().join(file_name))
    }

    /// Lists the file names present in the output directory, sorted.
    pub fn output_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.out_dir())
            .expect("Failed to read output dir")
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes a WAV file with `hound`, independent of the crate's own parser.
pub fn read_wav_hound(path: &Path) -> DecodedWav {
    let mut reader = hound::WavReader::open(path)
        .unwrap_or_else(|e| panic!("hound failed to open {}: {}", path.display(), e));
    let spec = reader.spec();
    let samples = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|e| panic!("hound failed to decode {}: {}", path.display(), e));
    DecodedWav { spec, samples }
}

fn workspace_manifest_path() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let manifest_path = manifest_dir.join("..").join("..").join("Cargo.toml");
        manifest_path.canonicalize().unwrap_or(manifest_path)
    })
    .clone()
}
