//! Doctor command implementation
//!
//! Checks the external capabilities generation can use.

use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use crate::config::{ffmpeg_override, Settings};
use crate::playback::{handler_available, handler_name};
use crate::transcode::{encoder_version, find_encoder};

/// Run the doctor command
///
/// Checks:
/// - MP3 encoder (ffmpeg) and its version
/// - Playback handler
/// - Output directory permissions
///
/// A missing encoder or player is reported but only an unwritable output
/// directory fails the check, since WAV generation needs nothing else.
///
/// # Returns
/// Exit code: 0 if all checks pass, 1 if any fail
pub fn run() -> Result<ExitCode> {
    println!("{}", "Tonesmith Doctor".cyan().bold());
    println!("{}", "================".cyan());
    println!();

    let mut all_ok = true;

    println!("{}", "Versions:".bold());
    println!(
        "  {} tonesmith-cli v{}",
        "->".green(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("{}", "Dependencies:".bold());
    let encoder_status = check_encoder();
    match &encoder_status {
        EncoderStatus::Found { path, version } => {
            println!(
                "  {} ffmpeg {} ({})",
                "ok".green(),
                version.as_deref().unwrap_or("unknown"),
                path.dimmed()
            );
        }
        EncoderStatus::NotFound => {
            println!("  {} ffmpeg not found", "!!".yellow());
            println!(
                "     {}",
                "ffmpeg is required for MP3 export; WAV output is unaffected.".dimmed()
            );
            println!(
                "     {}",
                "Install ffmpeg or set TONESMITH_FFMPEG to its path.".dimmed()
            );
        }
    }

    let player = handler_available();
    if player {
        println!("  {} playback via {}", "ok".green(), handler_name());
    } else {
        println!("  {} {} not found", "!!".yellow(), handler_name());
        println!(
            "     {}",
            "--play will be skipped; clips are still written.".dimmed()
        );
    }
    println!();

    println!("{}", "Permissions:".bold());
    match Settings::resolve(&Default::default()) {
        Ok(settings) => match check_writable(&settings.out_dir) {
            Ok(()) => println!(
                "  {} Output directory is writable ({})",
                "ok".green(),
                settings.out_dir.display()
            ),
            Err(e) => {
                println!(
                    "  {} Cannot write to output directory {}: {}",
                    "!!".red(),
                    settings.out_dir.display(),
                    e
                );
                all_ok = false;
            }
        },
        Err(e) => {
            println!("  {} Invalid configuration: {:#}", "!!".red(), e);
            all_ok = false;
        }
    }
    println!();

    println!(
        "{} {}",
        "Status:".bold(),
        status_line(matches!(encoder_status, EncoderStatus::Found { .. }), player)
    );
    println!();

    if all_ok {
        println!("{} All checks passed!", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} Some checks failed. See above for details.",
            "WARNING".yellow().bold()
        );
        Ok(ExitCode::from(1))
    }
}

/// Status of the MP3 encoder check
enum EncoderStatus {
    Found {
        path: String,
        version: Option<String>,
    },
    NotFound,
}

fn check_encoder() -> EncoderStatus {
    match find_encoder(ffmpeg_override().as_deref()) {
        Ok(path) => EncoderStatus::Found {
            version: encoder_version(&path),
            path: path.display().to_string(),
        },
        Err(_) => EncoderStatus::NotFound,
    }
}

/// One-line capability summary.
fn status_line(encoder: bool, player: bool) -> String {
    format!(
        "ffmpeg {} | playback {}",
        if encoder { "found" } else { "NOT found" },
        if player { "available" } else { "missing" }
    )
}

/// Write and remove a scratch file in `dir`.
fn check_writable(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let scratch = dir.join(".tonesmith_write_test");
    fs::write(&scratch, "test")?;
    let _ = fs::remove_file(&scratch);
    Ok(())
}
