//! Error type for melody generation.

use thiserror::Error;
use tonesmith_backend_audio::AudioError;
use tonesmith_spec::BackendError;

/// Result type for music operations.
pub type MusicResult<T> = Result<T, MusicError>;

/// Errors that can occur while building models or rendering melodies.
#[derive(Debug, Error)]
pub enum MusicError {
    /// A Markov model needs at least one training note.
    #[error("training sequence is empty")]
    EmptyTraining,

    /// Rendering a note failed in the audio backend.
    #[error("audio error: {0}")]
    Audio(#[from] AudioError),
}

impl BackendError for MusicError {
    fn code(&self) -> &'static str {
        match self {
            MusicError::EmptyTraining => "MUSIC_001",
            MusicError::Audio(err) => err.code(),
        }
    }

    fn category(&self) -> &'static str {
        "music"
    }
}
