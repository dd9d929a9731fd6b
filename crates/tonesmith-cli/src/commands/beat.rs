//! Beat command: a kick/snare pattern at a tempo.

use anyhow::Result;
use std::process::ExitCode;
use tonesmith_spec::{BeatRequest, GenerationRequest};

use super::generate::run_request;
use crate::config::OutputOptions;

/// Run the beat command
///
/// # Arguments
/// * `tempo` - Beats per minute; each pattern slot lasts `60 / tempo` seconds
/// * `pattern` - Comma-separated labels; anything but kick or snare is a rest
pub fn run(tempo: f64, pattern: &str, options: &OutputOptions) -> Result<ExitCode> {
    let request = GenerationRequest::Beat(BeatRequest {
        tempo,
        pattern: pattern.to_string(),
    });
    run_request(request, options, Vec::new())
}
