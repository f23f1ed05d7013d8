//! Ambience CLI - Command-line interface for procedural ambient soundscapes
//!
//! This binary renders the looping soundscape set to WAV files and offers
//! small helpers for listing and inspecting the results.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use ambience_cli::commands;
use ambience_cli::commands::generate::DEFAULT_OUT_DIR;
use ambience_synth::format::{DEFAULT_DURATION_SECONDS, DEFAULT_SAMPLE_RATE};
use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::generate::run(
            DEFAULT_OUT_DIR,
            DEFAULT_SAMPLE_RATE,
            DEFAULT_DURATION_SECONDS,
            None,
            None,
            false,
        ),
        Some(Commands::Generate {
            out_dir,
            sample_rate,
            duration,
            seed,
            only,
            json,
        }) => commands::generate::run(&out_dir, sample_rate, duration, seed, only.as_deref(), json),
        Some(Commands::List { json }) => commands::list::run(json),
        Some(Commands::Inspect {
            input,
            input_dir,
            json,
        }) => commands::inspect::run(input.as_deref(), input_dir.as_deref(), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_bare_invocation() {
        let cli = Cli::try_parse_from(["ambience"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parses_generate_defaults() {
        let cli = Cli::try_parse_from(["ambience", "generate"]).unwrap();
        match cli.command {
            Some(Commands::Generate {
                out_dir,
                sample_rate,
                duration,
                seed,
                only,
                json,
            }) => {
                assert_eq!(out_dir, "renderer/public/sounds");
                assert_eq!(sample_rate, 44100);
                assert_eq!(duration, 10.0);
                assert_eq!(seed, None);
                assert_eq!(only, None);
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_generate_with_options() {
        let cli = Cli::try_parse_from([
            "ambience",
            "generate",
            "--out-dir",
            "out",
            "--sample-rate",
            "48000",
            "--duration",
            "2.5",
            "--seed",
            "42",
            "--only",
            "rain,ocean",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Generate {
                out_dir,
                sample_rate,
                duration,
                seed,
                only,
                json,
            }) => {
                assert_eq!(out_dir, "out");
                assert_eq!(sample_rate, 48000);
                assert_eq!(duration, 2.5);
                assert_eq!(seed, Some(42));
                assert_eq!(only.as_deref(), Some("rain,ocean"));
                assert!(json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_list() {
        let cli = Cli::try_parse_from(["ambience", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List { json: true })));
    }

    #[test]
    fn test_cli_parses_inspect() {
        let cli = Cli::try_parse_from(["ambience", "inspect", "--input", "rain.wav"]).unwrap();
        match cli.command {
            Some(Commands::Inspect {
                input,
                input_dir,
                json,
            }) => {
                assert_eq!(input.as_deref(), Some("rain.wav"));
                assert_eq!(input_dir, None);
                assert!(!json);
            }
            _ => panic!("expected inspect command"),
        }
    }

    #[test]
    fn test_cli_inspect_requires_a_target() {
        assert!(Cli::try_parse_from(["ambience", "inspect"]).is_err());
        assert!(Cli::try_parse_from([
            "ambience",
            "inspect",
            "--input",
            "a.wav",
            "--input-dir",
            "dir"
        ])
        .is_err());
    }

    #[test]
    fn test_cli_rejects_non_numeric_seed() {
        assert!(Cli::try_parse_from(["ambience", "generate", "--seed", "abc"]).is_err());
    }
}
