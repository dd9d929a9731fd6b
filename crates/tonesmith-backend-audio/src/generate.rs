//! Request-level entry points for tones and beats.
//!
//! These map validated requests onto the renderers with seed-derived RNG
//! streams, so a request plus a seed always gives the same buffer.

use tonesmith_spec::{BeatRequest, ToneRequest};

use crate::buffer::SampleBuffer;
use crate::percussion::render_beat;
use crate::rng::create_component_rng;
use crate::tone::{render_tone, Tone};
use crate::wav::WavResult;

/// RNG key for waveform noise in manual tones.
pub const NOISE_KEY: &str = "noise";
/// RNG key for snare bursts in beats.
pub const SNARE_KEY: &str = "snare";

/// A rendered buffer together with its serialized form.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Unclamped samples.
    pub buffer: SampleBuffer,
    /// Serialized WAV and PCM hash.
    pub wav: WavResult,
}

impl GenerateResult {
    /// Serializes `buffer`.
    pub fn from_buffer(buffer: SampleBuffer) -> Self {
        let wav = WavResult::from_buffer(&buffer);
        Self { buffer, wav }
    }
}

/// Renders a manual tone request.
pub fn generate_tone(request: &ToneRequest, seed: u32) -> GenerateResult {
    let mut rng = create_component_rng(seed, NOISE_KEY);
    GenerateResult::from_buffer(render_tone(&Tone::from(request), &mut rng))
}

/// Renders a beat request.
pub fn generate_beat(request: &BeatRequest, seed: u32) -> GenerateResult {
    let mut rng = create_component_rng(seed, SNARE_KEY);
    GenerateResult::from_buffer(render_beat(&request.hits(), request.tempo, &mut rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonesmith_spec::{Voice, Waveform};

    #[test]
    fn test_noise_tone_depends_on_seed() {
        let request = ToneRequest {
            frequency: 440.0,
            duration: 0.1,
            volume: 0.5,
            voice: Voice::Waveform(Waveform::Noise),
        };
        let a = generate_tone(&request, 1);
        let b = generate_tone(&request, 1);
        let c = generate_tone(&request, 2);
        assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash);
        assert_ne!(a.wav.pcm_hash, c.wav.pcm_hash);
    }

    #[test]
    fn test_default_beat_length() {
        let result = generate_beat(&BeatRequest::default(), 42);
        // 100 BPM: 0.6 s slots, four of them
        assert_eq!(result.buffer.len(), 4 * 26460);
        assert_eq!(result.wav.num_samples, result.buffer.len());
    }
}
