use colored::Colorize;
use tonesmith_backend_audio::analysis::BufferStats;
use tonesmith_backend_music::Note;
use tonesmith_spec::{ValidationError, ValidationWarning};

use crate::preview::{sparkline, PREVIEW_WIDTH};
use tonesmith_backend_audio::SampleBuffer;

pub(crate) fn print_validation_errors(errors: &[ValidationError]) {
    println!("\n{}", "Errors:".red().bold());
    for error in errors {
        let path = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code,
            path.dimmed(),
            error.message
        );
    }
}

pub(crate) fn print_validation_warnings(warnings: &[ValidationWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!("\n{}", "Warnings:".yellow().bold());
    for warning in warnings {
        let path = warning
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "!".yellow(),
            warning.code,
            path.dimmed(),
            warning.message
        );
    }
}

/// Prints the note listing as `name (freq Hz)`, eight per row.
pub(crate) fn print_notes(notes: &[Note]) {
    if notes.is_empty() {
        return;
    }
    println!("\n{} ({})", "Notes:".bold(), notes.len());
    for row in notes.chunks(8) {
        let cells: Vec<String> = row
            .iter()
            .map(|n| format!("{:<3} {:>7.2}", n.name(), n.frequency()))
            .collect();
        println!("  {}", cells.join("  "));
    }
}

pub(crate) fn print_stats(stats: &BufferStats) {
    println!("\n{}", "Stats:".bold());
    println!(
        "  {} {} samples, {:.3} s",
        "->".green(),
        stats.num_samples,
        stats.duration_seconds
    );
    let dbfs = stats
        .peak_dbfs()
        .map(|db| format!("{:.1} dBFS", db))
        .unwrap_or_else(|| "silent".to_string());
    println!(
        "  {} peak {:.3} ({}), rms {:.3}",
        "->".green(),
        stats.peak,
        dbfs,
        stats.rms
    );
    println!(
        "  {} dc offset {:+.4}, {:.0}% silent",
        "->".green(),
        stats.dc_offset,
        stats.silence_ratio * 100.0
    );
    if stats.clipped > 0 {
        println!(
            "  {} {} sample(s) above full scale will be clamped",
            "!!".yellow(),
            stats.clipped
        );
    }
}

pub(crate) fn print_preview(buffer: &SampleBuffer) {
    let line = sparkline(buffer, PREVIEW_WIDTH);
    if line.is_empty() {
        return;
    }
    println!("\n{}", "Preview:".bold());
    println!("  {}", line.cyan());
}
