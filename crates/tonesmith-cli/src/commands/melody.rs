//! Melody command: a Markov melody rendered with piano.

use anyhow::Result;
use std::process::ExitCode;
use tonesmith_spec::{GenerationRequest, MelodyRequest};

use super::generate::run_request;
use crate::config::OutputOptions;

/// Run the melody command
pub fn run(length: usize, note_duration: f64, options: &OutputOptions) -> Result<ExitCode> {
    let request = GenerationRequest::Melody(MelodyRequest {
        length,
        note_duration,
    });
    run_request(request, options, Vec::new())
}
