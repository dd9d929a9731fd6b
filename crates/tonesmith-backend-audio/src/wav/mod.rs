//! Deterministic WAV file writer.
//!
//! Buffers are serialized as canonical 44-byte-header RIFF/WAVE files, mono,
//! 16-bit signed PCM, with no timestamps or variable metadata. This is the
//! only place samples are clamped to `[-1, 1]`.

mod format;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, decode_wav, extract_pcm_data};
pub use result::WavResult;
pub use writer::{pcm16_value, samples_to_pcm16, write_wav, write_wav_to_vec};
