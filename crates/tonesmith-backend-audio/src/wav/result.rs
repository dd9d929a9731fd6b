//! WAV serialization result type.

use std::fs;
use std::path::Path;

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;

use super::format::WavFormat;
use super::writer::{samples_to_pcm16, write_wav_to_vec};

/// A serialized clip.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Serializes a buffer as mono 16-bit PCM.
    pub fn from_buffer(buffer: &SampleBuffer) -> Self {
        Self::from_mono(&buffer.samples, buffer.sample_rate)
    }

    /// Serializes mono samples.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> Self {
        let pcm = samples_to_pcm16(samples);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::mono(sample_rate);
        let wav_data = write_wav_to_vec(&format, &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Writes the WAV bytes to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> AudioResult<()> {
        fs::write(path, &self.wav_data)?;
        Ok(())
    }
}
