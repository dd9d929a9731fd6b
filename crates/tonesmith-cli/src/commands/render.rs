//! Render command: generate from a JSON request file.

use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::process::ExitCode;
use tonesmith_spec::{Emotion, GenerationRequest, ValidationWarning, WarningCode};

use super::generate::{run_request, EXIT_INVALID};
use super::json_output::{error_codes, GenerateOutput, JsonError};
use crate::config::OutputOptions;

/// Run the render command
///
/// # Arguments
/// * `request_path` - JSON file holding one request tagged by `mode`
/// * `options` - Output, export and playback options
///
/// # Returns
/// Exit code: 0 success, 1 unreadable or invalid request, 2 generation or export failure
pub fn run(request_path: &str, options: &OutputOptions) -> Result<ExitCode> {
    let content = match fs::read_to_string(request_path) {
        Ok(content) => content,
        Err(e) => {
            return fail(
                options,
                error_codes::FILE_READ,
                format!("Failed to read request file {}: {}", request_path, e),
            )
        }
    };

    let request = match GenerationRequest::from_json(&content) {
        Ok(request) => request,
        Err(e) => {
            return fail(
                options,
                error_codes::JSON_PARSE,
                format!("Invalid request in {}: {}", request_path, e),
            )
        }
    };

    if !options.json {
        println!("{} {}", "Request:".cyan().bold(), request_path);
    }
    let notices = label_notices(&content);
    run_request(request, options, notices)
}

fn fail(options: &OutputOptions, code: &str, message: String) -> Result<ExitCode> {
    if options.json {
        let output = GenerateOutput::failure(vec![JsonError::new(code, message)], Vec::new());
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        eprintln!("{} [{}] {}", "error".red().bold(), code, message);
    }
    Ok(ExitCode::from(EXIT_INVALID))
}

/// Warnings for symbolic fields that deserialization silently replaced.
///
/// Voices and beat labels are re-checked by validation; the emotion label is
/// gone once parsed, so it is checked against the raw JSON here.
fn label_notices(content: &str) -> Vec<ValidationWarning> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(content) else {
        return Vec::new();
    };
    if value.get("mode").and_then(|m| m.as_str()) != Some("emotion") {
        return Vec::new();
    }
    match value.get("emotion").and_then(|e| e.as_str()) {
        Some(label) if Emotion::lookup(label).is_none() => vec![ValidationWarning::with_path(
            WarningCode::SymbolFallback,
            format!(
                "unrecognized emotion '{}'; using '{}'",
                label,
                Emotion::default()
            ),
            "emotion.emotion",
        )],
        _ => Vec::new(),
    }
}
