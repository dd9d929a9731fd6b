//! Request validation at the generation boundary.
//!
//! Renderers accept any numeric input. Everything a caller can get wrong is
//! caught here instead, and every problem is collected into one
//! [`ValidationResult`] rather than stopping at the first.

pub mod common;

use crate::beat::{pattern_labels, BeatHit};
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::request::{BeatRequest, EmotionRequest, GenerationRequest, MelodyRequest, ToneRequest};
use crate::voice::{Instrument, Voice};

use common::{validate_count, validate_non_negative, validate_positive, validate_range};

/// Longest clip any request may render, in seconds.
pub const MAX_CLIP_SECONDS: f64 = 300.0;

/// Most notes a melody request may ask for.
pub const MAX_MELODY_LENGTH: usize = 1024;

/// Most slots a beat pattern may contain.
pub const MAX_PATTERN_SLOTS: usize = 1024;

/// Validates any request shape.
///
/// # Example
/// ```
/// use tonesmith_spec::{BeatRequest, ErrorCode, GenerationRequest};
/// use tonesmith_spec::validation::validate_request;
///
/// let request = GenerationRequest::Beat(BeatRequest {
///     tempo: 0.0,
///     pattern: "kick,snare".to_string(),
/// });
/// let result = validate_request(&request);
/// assert!(!result.is_ok());
/// assert_eq!(result.errors[0].code, ErrorCode::InvalidTempo);
/// ```
pub fn validate_request(request: &GenerationRequest) -> ValidationResult {
    match request {
        GenerationRequest::Tone(r) => validate_tone(r),
        GenerationRequest::Melody(r) => validate_melody(r),
        GenerationRequest::Emotion(r) => validate_emotion(r),
        GenerationRequest::Beat(r) => validate_beat(r),
    }
}

/// Validates a manual tone request.
pub fn validate_tone(request: &ToneRequest) -> ValidationResult {
    let mut result = ValidationResult::default();

    if let Err(e) = validate_positive("frequency", request.frequency) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidFrequency,
            e.message,
            "tone.frequency",
        ));
    }

    match validate_range("duration", request.duration, 0.0, MAX_CLIP_SECONDS) {
        Ok(()) if request.duration == 0.0 => {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::ZeroDuration,
                "duration is 0; the clip will be empty",
                "tone.duration",
            ));
        }
        Ok(()) => {}
        Err(e) => result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDuration,
            e.message,
            "tone.duration",
        )),
    }

    match validate_non_negative("volume", request.volume) {
        Ok(()) if request.volume > 1.0 => {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::VolumeClips,
                format!(
                    "volume {} exceeds 1.0; samples will clip when written",
                    request.volume
                ),
                "tone.volume",
            ));
        }
        Ok(()) => {}
        Err(e) => result.add_error(ValidationError::with_path(
            ErrorCode::InvalidVolume,
            e.message,
            "tone.volume",
        )),
    }

    if request.voice == Voice::Instrument(Instrument::Plain) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::SymbolFallback,
            "unrecognized waveform or instrument; rendering a plain sine",
            "tone.voice",
        ));
    }

    result
}

/// Validates a Markov melody request.
pub fn validate_melody(request: &MelodyRequest) -> ValidationResult {
    let mut result = ValidationResult::default();

    let length_ok = match validate_count("length", request.length, MAX_MELODY_LENGTH) {
        Ok(()) if request.length == 0 => {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::EmptyMelody,
                "length is 0; the clip will be empty",
                "melody.length",
            ));
            true
        }
        Ok(()) => true,
        Err(e) => {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidLength,
                e.message,
                "melody.length",
            ));
            false
        }
    };

    let duration_ok = check_note_duration(request.note_duration, "melody.note_duration", &mut result);

    if length_ok && duration_ok {
        check_clip_length(
            request.length as f64 * request.note_duration,
            "melody",
            &mut result,
        );
    }

    result
}

/// Validates an emotion melody request.
pub fn validate_emotion(request: &EmotionRequest) -> ValidationResult {
    let mut result = ValidationResult::default();

    if check_note_duration(request.note_duration, "emotion.note_duration", &mut result) {
        check_clip_length(
            request.length() as f64 * request.note_duration,
            "emotion",
            &mut result,
        );
    }

    result
}

/// Validates a beat request.
pub fn validate_beat(request: &BeatRequest) -> ValidationResult {
    let mut result = ValidationResult::default();

    let tempo_ok = match validate_positive("tempo", request.tempo) {
        Ok(()) => true,
        Err(e) => {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidTempo,
                e.message,
                "beat.tempo",
            ));
            false
        }
    };

    let labels = pattern_labels(&request.pattern);
    if labels.is_empty() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::EmptyPattern,
            "pattern has no labels; the clip will be empty",
            "beat.pattern",
        ));
    }
    if labels.len() > MAX_PATTERN_SLOTS {
        result.add_error(ValidationError::with_path(
            ErrorCode::PatternTooLong,
            format!(
                "pattern must have at most {} slots, got {}",
                MAX_PATTERN_SLOTS,
                labels.len()
            ),
            "beat.pattern",
        ));
    }

    for (i, label) in labels.iter().enumerate() {
        let is_rest = *label == BeatHit::Rest.label();
        if BeatHit::lookup(label).is_none() && !is_rest {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::SymbolFallback,
                format!("unrecognized beat label '{}'; rendering silence", label),
                format!("beat.pattern[{}]", i),
            ));
        }
    }

    if tempo_ok && result.is_ok() {
        check_clip_length(
            labels.len() as f64 * (60.0 / request.tempo),
            "beat",
            &mut result,
        );
    }

    result
}

fn check_note_duration(value: f64, path: &str, result: &mut ValidationResult) -> bool {
    match validate_positive("note_duration", value) {
        Ok(()) => true,
        Err(e) => {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidNoteDuration,
                e.message,
                path,
            ));
            false
        }
    }
}

fn check_clip_length(total_seconds: f64, path: &str, result: &mut ValidationResult) {
    if !total_seconds.is_finite() || total_seconds > MAX_CLIP_SECONDS {
        result.add_error(ValidationError::with_path(
            ErrorCode::ClipTooLong,
            format!(
                "clip would last {:.1} seconds (max {})",
                total_seconds, MAX_CLIP_SECONDS
            ),
            path,
        ));
    }
}
