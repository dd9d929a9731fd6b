//! Text waveform preview.

use tonesmith_backend_audio::analysis::preview_window;
use tonesmith_backend_audio::SampleBuffer;

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Default number of columns in a preview.
pub const PREVIEW_WIDTH: usize = 64;

/// Renders the leading preview window of `buffer` as a sparkline.
///
/// Each column shows the peak magnitude of its slice of samples, clamped to
/// full scale so overdriven clips read as solid bars.
pub fn sparkline(buffer: &SampleBuffer, width: usize) -> String {
    sparkline_of(preview_window(buffer), width)
}

pub(crate) fn sparkline_of(samples: &[f64], width: usize) -> String {
    if samples.is_empty() || width == 0 {
        return String::new();
    }
    let len = samples.len();
    let columns = width.min(len);

    // Column `i` covers `i*len/columns..(i+1)*len/columns`, so every column
    // is non-empty and the line is exactly `columns` wide.
    (0..columns)
        .map(|i| {
            let slice = &samples[i * len / columns..(i + 1) * len / columns];
            let peak = slice
                .iter()
                .map(|s| s.abs())
                .fold(0.0, f64::max)
                .min(1.0);
            let level = (peak * (BARS.len() - 1) as f64).round() as usize;
            BARS[level.min(BARS.len() - 1)]
        })
        .collect()
}
