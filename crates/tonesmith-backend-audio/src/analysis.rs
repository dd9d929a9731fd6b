//! Buffer statistics for reporting.

use crate::buffer::SampleBuffer;

/// Number of leading samples shown in waveform previews.
pub const PREVIEW_SAMPLES: usize = 2000;

/// Summary statistics of a rendered buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferStats {
    /// Number of samples.
    pub num_samples: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Largest absolute sample value, before clamping.
    pub peak: f64,
    /// Root mean square level.
    pub rms: f64,
    /// Samples outside `[-1, 1]` that serialization will clamp.
    pub clipped: usize,
    /// Mean sample value.
    pub dc_offset: f64,
    /// Fraction of samples below the silence threshold.
    pub silence_ratio: f64,
}

impl BufferStats {
    /// Computes statistics for a buffer.
    pub fn of(buffer: &SampleBuffer) -> Self {
        let samples = &buffer.samples;
        Self {
            num_samples: samples.len(),
            duration_seconds: buffer.duration_seconds(),
            peak: calculate_peak(samples),
            rms: calculate_rms(samples),
            clipped: count_clipped(samples),
            dc_offset: calculate_dc_offset(samples),
            silence_ratio: calculate_silence_ratio(samples),
        }
    }

    /// Peak level in dBFS, or `None` for a silent buffer.
    pub fn peak_dbfs(&self) -> Option<f64> {
        (self.peak > 0.0).then(|| 20.0 * self.peak.log10())
    }
}

/// Calculate peak amplitude.
pub fn calculate_peak(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0, f64::max)
}

/// Calculate RMS (Root Mean Square).
pub fn calculate_rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_of_squares: f64 = samples.iter().map(|s| s * s).sum();
    (sum_of_squares / samples.len() as f64).sqrt()
}

/// Count samples that the serializer will clamp.
pub fn count_clipped(samples: &[f64]) -> usize {
    samples.iter().filter(|s| s.abs() > 1.0).count()
}

/// Calculate DC offset (mean of samples).
pub fn calculate_dc_offset(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Calculate silence ratio (proportion of samples below threshold).
pub fn calculate_silence_ratio(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 1.0;
    }
    const SILENCE_THRESHOLD: f64 = 0.001;
    let silent = samples
        .iter()
        .filter(|s| s.abs() < SILENCE_THRESHOLD)
        .count();
    silent as f64 / samples.len() as f64
}

/// The leading samples shown in a waveform preview.
pub fn preview_window(buffer: &SampleBuffer) -> &[f64] {
    let end = buffer.samples.len().min(PREVIEW_SAMPLES);
    &buffer.samples[..end]
}
