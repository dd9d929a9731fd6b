//! Tonesmith Request Library
//!
//! This crate provides the request types, symbolic vocabularies and boundary
//! validation shared by the Tonesmith backends and command-line interface.
//!
//! # Overview
//!
//! A generation request is one of four shapes:
//!
//! - **Tone**: a single frequency rendered with a waveform or an instrument
//! - **Melody**: a Markov-generated note sequence rendered with a piano voice
//! - **Emotion**: a note sequence drawn from an emotion's note pool
//! - **Beat**: a kick/snare pattern rendered at a tempo
//!
//! Numeric fields are validated here, before any synthesis runs. Symbolic
//! fields (instrument names, emotion labels, beat labels) never fail: each
//! has a documented fallback.
//!
//! # Example
//!
//! ```
//! use tonesmith_spec::{GenerationRequest, ToneRequest, Voice, Waveform};
//! use tonesmith_spec::validation::validate_request;
//!
//! let request = GenerationRequest::Tone(ToneRequest {
//!     frequency: 440.0,
//!     duration: 1.0,
//!     volume: 0.5,
//!     voice: Voice::Waveform(Waveform::Sine),
//! });
//!
//! let result = validate_request(&request);
//! assert!(result.is_ok());
//! ```
//!
//! # Modules
//!
//! - [`beat`]: Percussion hit labels and pattern parsing
//! - [`emotion`]: Emotion labels
//! - [`error`]: Error and warning types for validation
//! - [`export`]: MP3 export bitrates
//! - [`request`]: The four request shapes
//! - [`validation`]: Boundary validation
//! - [`voice`]: Waveforms, instruments and the voice selection between them

pub mod beat;
pub mod emotion;
pub mod error;
pub mod export;
pub mod request;
pub mod validation;
pub mod voice;

// Re-export commonly used types at the crate root
pub use beat::{parse_pattern, BeatHit};
pub use emotion::Emotion;
pub use error::{
    BackendError, ErrorCode, GenerationError, SpecError, ValidationError, ValidationResult,
    ValidationWarning, WarningCode,
};
pub use export::Bitrate;
pub use request::{BeatRequest, EmotionRequest, GenerationRequest, MelodyRequest, ToneRequest};
pub use voice::{Instrument, Voice, Waveform};

/// Sample rate used for every buffer, in Hz.
pub const SAMPLE_RATE: u32 = 44_100;
