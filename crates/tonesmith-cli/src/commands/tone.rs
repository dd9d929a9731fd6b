//! Tone command: a single manual tone.

use anyhow::Result;
use std::process::ExitCode;
use tonesmith_spec::{GenerationRequest, ToneRequest, Voice};

use super::generate::run_request;
use crate::config::OutputOptions;

/// Run the tone command
///
/// `voice` may name a waveform or an instrument; instruments win when a name
/// matches both, and unknown names render a plain sine.
pub fn run(
    frequency: f64,
    duration: f64,
    volume: f64,
    voice: &str,
    options: &OutputOptions,
) -> Result<ExitCode> {
    let request = GenerationRequest::Tone(ToneRequest {
        frequency,
        duration,
        volume,
        voice: Voice::from_name(voice),
    });
    run_request(request, options, Vec::new())
}
