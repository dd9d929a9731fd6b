//! Error types for the audio backend.

use thiserror::Error;
use tonesmith_spec::BackendError;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while joining, persisting or reading back audio.
///
/// Renderers accept any numeric input and never fail; request checks happen
/// in `tonesmith_spec::validation` before rendering.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Buffers with different sample rates cannot be joined.
    #[error("sample rate mismatch: {left} Hz vs {right} Hz")]
    SampleRateMismatch {
        /// Rate of the receiving buffer.
        left: u32,
        /// Rate of the appended buffer.
        right: u32,
    },

    /// Bytes are not a mono 16-bit PCM WAV file.
    #[error("malformed WAV data: {message}")]
    MalformedWav {
        /// What was wrong.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates a malformed WAV error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedWav {
            message: message.into(),
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "AUDIO_001",
            AudioError::SampleRateMismatch { .. } => "AUDIO_002",
            AudioError::MalformedWav { .. } => "AUDIO_003",
            AudioError::Io(_) => "AUDIO_004",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_helper() {
        let err = AudioError::malformed("missing data chunk");
        assert!(err.to_string().contains("missing data chunk"));
        assert_eq!(err.code(), "AUDIO_003");
    }

    #[test]
    fn test_category_is_audio() {
        let err = AudioError::SampleRateMismatch {
            left: 44100,
            right: 22050,
        };
        assert_eq!(err.category(), "audio");
        assert_eq!(err.message(), "sample rate mismatch: 44100 Hz vs 22050 Hz");
    }
}
