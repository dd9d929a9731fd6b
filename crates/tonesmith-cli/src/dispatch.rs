//! Request dispatch
//!
//! Validates a generation request and routes it to the audio or music
//! backend.

use std::fmt;

use tonesmith_backend_audio::{generate_beat, generate_tone, GenerateResult};
use tonesmith_backend_music::{generate_emotion, generate_melody, MusicError, Note};
use tonesmith_spec::validation::validate_request;
use tonesmith_spec::{
    BackendError, GenerationError, GenerationRequest, ValidationError, ValidationWarning,
};

/// Errors that can occur during request dispatch
#[derive(Debug)]
pub enum DispatchError {
    /// The request failed boundary validation
    InvalidRequest(Vec<ValidationError>),
    /// The backend failed while rendering
    BackendError(GenerationError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::InvalidRequest(errors) => {
                write!(f, "Request is invalid ({} error(s))", errors.len())
            }
            DispatchError::BackendError(err) => write!(f, "Backend error: {}", err),
        }
    }
}

impl std::error::Error for DispatchError {}

impl BackendError for DispatchError {
    fn code(&self) -> &'static str {
        match self {
            DispatchError::InvalidRequest(_) => "DISPATCH_001",
            DispatchError::BackendError(_) => "DISPATCH_002",
        }
    }

    fn category(&self) -> &'static str {
        "dispatch"
    }
}

impl From<MusicError> for DispatchError {
    fn from(err: MusicError) -> Self {
        DispatchError::BackendError(GenerationError::from_backend(err))
    }
}

/// A rendered request.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Notes in playback order. Empty for tones and beats.
    pub notes: Vec<Note>,
    /// Rendered buffer and WAV bytes.
    pub output: GenerateResult,
    /// Non-fatal validation findings.
    pub warnings: Vec<ValidationWarning>,
}

/// Validate `request`, then render it with `seed`.
///
/// # Returns
/// The rendered clip, or a dispatch error. Invalid requests never reach a
/// renderer.
pub fn dispatch_generate(
    request: &GenerationRequest,
    seed: u32,
) -> Result<Generated, DispatchError> {
    let warnings = validate_request(request)
        .into_result()
        .map_err(DispatchError::InvalidRequest)?;

    let (notes, output) = match request {
        GenerationRequest::Tone(tone) => (Vec::new(), generate_tone(tone, seed)),
        GenerationRequest::Beat(beat) => (Vec::new(), generate_beat(beat, seed)),
        GenerationRequest::Melody(melody) => {
            let result = generate_melody(melody, seed)?;
            (result.notes, result.output)
        }
        GenerationRequest::Emotion(emotion) => {
            let result = generate_emotion(emotion, seed)?;
            (result.notes, result.output)
        }
    };

    Ok(Generated {
        notes,
        output,
        warnings,
    })
}
