//! Sample buffers.

use tonesmith_spec::SAMPLE_RATE;

use crate::error::{AudioError, AudioResult};

/// Number of samples covering `duration` seconds at `sample_rate`.
///
/// Rounds to the nearest sample. Negative, NaN or infinite products give 0.
pub fn num_samples(duration: f64, sample_rate: u32) -> usize {
    let n = (duration * sample_rate as f64).round();
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// An owned run of unclamped `f64` samples at a fixed sample rate.
///
/// Values may exceed `[-1, 1]`; clamping happens only when the buffer is
/// serialized (see [`crate::wav`]).
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Samples in playback order.
    pub samples: Vec<f64>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl SampleBuffer {
    /// Creates an empty buffer at the default rate.
    pub fn new() -> Self {
        Self::with_rate(SAMPLE_RATE)
    }

    /// Creates an empty buffer at `sample_rate`.
    pub fn with_rate(sample_rate: u32) -> Self {
        Self {
            samples: Vec::new(),
            sample_rate,
        }
    }

    /// Wraps existing samples.
    pub fn from_samples(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Fills `duration` seconds by evaluating `f(t)` at each sample time.
    pub fn from_fn(duration: f64, sample_rate: u32, mut f: impl FnMut(f64) -> f64) -> Self {
        let n = num_samples(duration, sample_rate);
        let rate = sample_rate as f64;
        let samples = (0..n).map(|i| f(i as f64 / rate)).collect();
        Self {
            samples,
            sample_rate,
        }
    }

    /// An all-zero buffer of `duration` seconds.
    pub fn silence(duration: f64, sample_rate: u32) -> Self {
        Self {
            samples: vec![0.0; num_samples(duration, sample_rate)],
            sample_rate,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Appends `other` after this buffer's last sample.
    pub fn append(&mut self, other: &SampleBuffer) -> AudioResult<()> {
        if other.sample_rate != self.sample_rate {
            return Err(AudioError::SampleRateMismatch {
                left: self.sample_rate,
                right: other.sample_rate,
            });
        }
        self.samples.extend_from_slice(&other.samples);
        Ok(())
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new()
    }
}
