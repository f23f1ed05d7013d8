//! CLI argument definitions for the Ambience command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use ambience_synth::format::{DEFAULT_DURATION_SECONDS, DEFAULT_SAMPLE_RATE};
use clap::{Parser, Subcommand};

use ambience_cli::commands::generate::DEFAULT_OUT_DIR;

/// Ambience - Procedural Looping Soundscape Generator
#[derive(Parser)]
#[command(name = "ambience")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Omitted subcommand means `generate` with every default.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render the soundscape WAV files
    Generate {
        /// Output directory (created if missing)
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: String,

        /// Sample rate in Hz
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Duration of each file in seconds
        #[arg(short, long, default_value_t = DEFAULT_DURATION_SECONDS)]
        duration: f64,

        /// Base RNG seed (default: random, printed for reproduction)
        #[arg(long)]
        seed: Option<u32>,

        /// Comma-separated subset of soundscapes to render (e.g. rain,ocean)
        #[arg(long)]
        only: Option<String>,

        /// Output machine-readable JSON summary (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the available soundscapes
    List {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Inspect WAV files and print format and loop metrics
    Inspect {
        /// Path to a single WAV file
        #[arg(short, long, conflicts_with = "input_dir", required_unless_present = "input_dir")]
        input: Option<String>,

        /// Directory to recursively scan for .wav files
        #[arg(long)]
        input_dir: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
