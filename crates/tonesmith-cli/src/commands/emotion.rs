//! Emotion command: a melody drawn from an emotion's note pool.

use anyhow::Result;
use std::process::ExitCode;
use tonesmith_spec::{
    Emotion, EmotionRequest, GenerationRequest, ValidationWarning, WarningCode,
};

use super::generate::run_request;
use crate::config::OutputOptions;

/// Run the emotion command
///
/// Unknown labels fall back to "happy" with a warning.
pub fn run(label: &str, note_duration: f64, options: &OutputOptions) -> Result<ExitCode> {
    let mut notices = Vec::new();
    let emotion = match Emotion::lookup(label) {
        Some(emotion) => emotion,
        None => {
            notices.push(ValidationWarning::with_path(
                WarningCode::SymbolFallback,
                format!(
                    "unrecognized emotion '{}'; using '{}'",
                    label,
                    Emotion::default()
                ),
                "emotion.emotion",
            ));
            Emotion::default()
        }
    };

    let request = GenerationRequest::Emotion(EmotionRequest {
        emotion,
        note_duration,
    });
    run_request(request, options, notices)
}
