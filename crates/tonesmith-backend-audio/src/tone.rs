//! Tone renderer.
//!
//! Drives the oscillator or an instrument model sample by sample to fill a
//! fixed-duration buffer, then applies volume. Volume is a plain linear gain
//! and is never clamped here.

use rand_pcg::Pcg32;
use tonesmith_spec::{ToneRequest, Voice, SAMPLE_RATE};

use crate::buffer::SampleBuffer;
use crate::instrument::InstrumentModel;
use crate::oscillator::Oscillator;

/// One renderable tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Duration in seconds.
    pub duration: f64,
    /// Linear gain.
    pub volume: f64,
    /// Waveform or instrument.
    pub voice: Voice,
}

impl Tone {
    /// Creates a tone.
    pub fn new(frequency: f64, duration: f64, volume: f64, voice: Voice) -> Self {
        Self {
            frequency,
            duration,
            volume,
            voice,
        }
    }

    /// Unscaled sample at time `t`.
    fn raw_sample(&self, t: f64, rng: &mut Pcg32) -> f64 {
        match self.voice {
            Voice::Instrument(instrument) => instrument.sample(self.frequency, t),
            Voice::Waveform(waveform) => waveform.sample(self.frequency, t, rng),
        }
    }
}

impl From<&ToneRequest> for Tone {
    fn from(request: &ToneRequest) -> Self {
        Self::new(
            request.frequency,
            request.duration,
            request.volume,
            request.voice,
        )
    }
}

/// Renders a tone at the default sample rate.
///
/// # Example
/// ```
/// use tonesmith_backend_audio::rng::create_rng;
/// use tonesmith_backend_audio::tone::{render_tone, Tone};
/// use tonesmith_spec::{Voice, Waveform};
///
/// let tone = Tone::new(440.0, 1.0, 0.5, Voice::Waveform(Waveform::Sine));
/// let buffer = render_tone(&tone, &mut create_rng(0));
/// assert_eq!(buffer.len(), 44_100);
/// assert_eq!(buffer.samples[0], 0.0);
/// ```
pub fn render_tone(tone: &Tone, rng: &mut Pcg32) -> SampleBuffer {
    render_tone_at(tone, SAMPLE_RATE, rng)
}

/// Renders a tone at `sample_rate`.
pub fn render_tone_at(tone: &Tone, sample_rate: u32, rng: &mut Pcg32) -> SampleBuffer {
    SampleBuffer::from_fn(tone.duration, sample_rate, |t| {
        tone.raw_sample(t, rng) * tone.volume
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use tonesmith_spec::{Instrument, Waveform};

    #[test]
    fn test_instrument_overrides_waveform() {
        let piano = Tone::new(261.63, 0.1, 0.5, Voice::Instrument(Instrument::Piano));
        let rendered = render_tone(&piano, &mut create_rng(0));
        assert_eq!(rendered.len(), 4410);
        for i in [1usize, 44, 4409] {
            let t = i as f64 / 44100.0;
            assert_eq!(rendered.samples[i], Instrument::Piano.sample(261.63, t) * 0.5);
        }
    }

    #[test]
    fn test_zero_duration_is_empty() {
        let tone = Tone::new(440.0, 0.0, 0.5, Voice::default());
        assert!(render_tone(&tone, &mut create_rng(0)).is_empty());
    }

    #[test]
    fn test_volume_is_not_clamped() {
        let tone = Tone::new(1.0, 1.0, 3.0, Voice::Waveform(Waveform::Square));
        let buffer = render_tone_at(&tone, 8, &mut create_rng(0));
        assert_eq!(buffer.samples[0], 3.0);
        assert!(buffer.samples.iter().all(|s| s.abs() == 3.0));
    }

    #[test]
    fn test_from_request() {
        let request = ToneRequest {
            frequency: 330.0,
            duration: 0.5,
            volume: 0.2,
            voice: Voice::Instrument(Instrument::Flute),
        };
        let tone = Tone::from(&request);
        assert_eq!(tone.frequency, 330.0);
        assert_eq!(tone.voice, Voice::Instrument(Instrument::Flute));
    }
}
