//! Tonesmith Music Backend - Melody Generation
//!
//! This crate turns symbolic note sequences into rendered clips. It provides
//! two note sources and one renderer:
//!
//! - **Markov melodies**: a first-order transition model trained once on a
//!   fixed 18-note reference melody
//! - **Emotion melodies**: uniform draws from a fixed note pool per emotion
//! - **Rendering**: each note becomes one tone from the audio backend, joined
//!   in order
//!
//! # Determinism
//!
//! Every random choice takes a `Pcg32` from the caller. The request-level
//! functions in [`generate`] derive independent streams from one seed, so the
//! note choices and the rendered audio are reproducible.
//!
//! # Example
//!
//! ```
//! use tonesmith_backend_music::generate::generate_emotion;
//! use tonesmith_spec::{Emotion, EmotionRequest};
//!
//! let result = generate_emotion(&EmotionRequest::new(Emotion::Romantic), 7).unwrap();
//! assert_eq!(result.notes.len(), 16);
//! ```
//!
//! # Module Structure
//!
//! - [`note`]: Note names and the frequency table
//! - [`markov`]: Markov model and random walk
//! - [`emotion`]: Emotion note pools
//! - [`render`]: Notes to a concatenated buffer
//! - [`generate`]: Request-level entry points

pub mod emotion;
pub mod error;
pub mod generate;
pub mod markov;
pub mod note;
pub mod render;

pub use emotion::{emotion_pool, generate_emotional_melody};
pub use error::{MusicError, MusicResult};
pub use generate::{generate_emotion, generate_melody, MelodyResult};
pub use markov::{MarkovModel, TRAINING_MELODY};
pub use note::{melody_to_frequencies, note_frequency, Note, NOTE_FREQ};
pub use render::render_melody;
