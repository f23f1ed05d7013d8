//! List command implementation

use ambience_synth::Soundscape;
use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::SoundscapeInfo;

/// Describes every soundscape in generation order.
pub fn soundscape_infos() -> Vec<SoundscapeInfo> {
    Soundscape::ALL
        .into_iter()
        .map(|sound| SoundscapeInfo {
            id: sound.id().to_string(),
            file: sound.file_name(),
            fade_seconds: sound.loop_fade().seconds(),
            description: sound.description().to_string(),
        })
        .collect()
}

/// Run the list command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let infos = soundscape_infos();

    if json_output {
        let json =
            serde_json::to_string_pretty(&infos).context("Failed to serialize JSON output")?;
        println!("{}", json);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Soundscapes:".cyan().bold());
    for info in &infos {
        println!(
            "  {:<8} {} {}",
            info.id.bold(),
            format!("[{:.1}s fade]", info.fade_seconds).dimmed(),
            info.description
        );
    }

    Ok(ExitCode::SUCCESS)
}
