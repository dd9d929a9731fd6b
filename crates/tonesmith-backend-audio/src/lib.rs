//! Tonesmith Audio Backend
//!
//! This crate renders tones, instrument voices and percussion into sample
//! buffers, and serializes buffers as 16-bit mono WAV.
//!
//! # Overview
//!
//! Synthesis is a two-stage pipeline:
//!
//! 1. **Render** - oscillators, instrument models and drum generators fill an
//!    unclamped `f64` [`SampleBuffer`]. Volume above 1.0 survives this stage.
//! 2. **Serialize** - [`wav`] clamps to `[-1, 1]`, scales by 32767 and writes
//!    a canonical RIFF/WAVE file with a BLAKE3 hash of the PCM payload.
//!
//! # Determinism
//!
//! Periodic waveforms and instruments are pure functions of time. Noise and
//! snare bursts draw from a PCG32 stream derived from the request seed with
//! BLAKE3, so the same request and seed give byte-identical WAV files.
//!
//! # Example
//!
//! ```
//! use tonesmith_backend_audio::generate_tone;
//! use tonesmith_spec::{ToneRequest, Voice, Waveform};
//!
//! let request = ToneRequest {
//!     frequency: 440.0,
//!     duration: 1.0,
//!     volume: 0.5,
//!     voice: Voice::Waveform(Waveform::Sine),
//! };
//! let result = generate_tone(&request, 42);
//! assert_eq!(result.buffer.len(), 44_100);
//! assert_eq!(result.wav.wav_data.len(), 44 + 2 * 44_100);
//! ```
//!
//! # Crate Structure
//!
//! - [`analysis`] - Peak, RMS and clipping statistics
//! - [`buffer`] - Sample buffers and sample-count rounding
//! - [`generate`] - Request-level entry points for tones and beats
//! - [`instrument`] - Harmonic-stack instrument models
//! - [`oscillator`] - Basic waveform generators
//! - [`percussion`] - Kick, snare and beat rendering
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`tone`] - Tone rendering
//! - [`wav`] - Deterministic WAV file writer

pub mod analysis;
pub mod buffer;
pub mod error;
pub mod generate;
pub mod instrument;
pub mod oscillator;
pub mod percussion;
pub mod rng;
pub mod tone;
pub mod wav;

// Re-export main types at crate root
pub use buffer::SampleBuffer;
pub use error::{AudioError, AudioResult};
pub use generate::{generate_beat, generate_tone, GenerateResult};
pub use instrument::InstrumentModel;
pub use oscillator::Oscillator;
pub use tone::{render_tone, Tone};
pub use wav::WavResult;
