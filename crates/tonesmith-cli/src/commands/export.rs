//! Export command: convert an existing WAV to MP3.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use tonesmith_spec::{BackendError, Bitrate};

use super::generate::EXIT_FAILED;
use crate::config::ffmpeg_override;
use crate::transcode::export_mp3;

/// Run the export command
///
/// # Returns
/// Exit code: 0 success, 2 export failure (including a missing encoder)
pub fn run(wav: &str, mp3: &str, bitrate: Bitrate) -> Result<ExitCode> {
    println!("{} {} ({})", "Exporting:".cyan().bold(), wav, bitrate);

    let encoder = ffmpeg_override();
    match export_mp3(encoder.as_deref(), Path::new(wav), Path::new(mp3), bitrate) {
        Ok(path) => {
            println!("  {} {}", "ok".green(), path.display());
            println!();
            println!("{} MP3 saved", "SUCCESS".green().bold());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("  {} [{}] {}", "x".red(), err.code(), err);
            println!();
            println!("{} MP3 export failed", "FAILED".red().bold());
            Ok(ExitCode::from(EXIT_FAILED))
        }
    }
}
