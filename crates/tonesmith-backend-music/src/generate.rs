//! Request-level entry points for Markov and emotion melodies.

use tonesmith_backend_audio::generate::NOISE_KEY;
use tonesmith_backend_audio::rng::create_component_rng;
use tonesmith_backend_audio::{GenerateResult, SampleBuffer};
use tonesmith_spec::{EmotionRequest, MelodyRequest};

use crate::emotion::generate_emotional_melody;
use crate::error::MusicResult;
use crate::markov::MarkovModel;
use crate::note::Note;
use crate::render::render_melody;

/// RNG key for Markov walks.
pub const MARKOV_KEY: &str = "markov";
/// RNG key for emotion pool draws.
pub const EMOTION_KEY: &str = "emotion";

/// A generated melody: its notes and the rendered clip.
#[derive(Debug, Clone)]
pub struct MelodyResult {
    /// Notes in playback order.
    pub notes: Vec<Note>,
    /// Rendered buffer and its WAV serialization.
    pub output: GenerateResult,
}

impl MelodyResult {
    fn new(notes: Vec<Note>, buffer: SampleBuffer) -> Self {
        Self {
            notes,
            output: GenerateResult::from_buffer(buffer),
        }
    }
}

/// Generates and renders a Markov melody from the reference model.
pub fn generate_melody(request: &MelodyRequest, seed: u32) -> MusicResult<MelodyResult> {
    let mut walk_rng = create_component_rng(seed, MARKOV_KEY);
    let notes = MarkovModel::reference().generate(request.length, &mut walk_rng);

    let mut note_rng = create_component_rng(seed, NOISE_KEY);
    let buffer = render_melody(
        &notes,
        request.note_duration,
        request.volume(),
        request.voice(),
        &mut note_rng,
    )?;
    Ok(MelodyResult::new(notes, buffer))
}

/// Generates and renders an emotion melody.
pub fn generate_emotion(request: &EmotionRequest, seed: u32) -> MusicResult<MelodyResult> {
    let mut draw_rng = create_component_rng(seed, EMOTION_KEY);
    let notes = generate_emotional_melody(request.emotion, request.length(), &mut draw_rng);

    let mut note_rng = create_component_rng(seed, NOISE_KEY);
    let buffer = render_melody(
        &notes,
        request.note_duration,
        request.volume(),
        request.voice(),
        &mut note_rng,
    )?;
    Ok(MelodyResult::new(notes, buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonesmith_spec::Emotion;

    #[test]
    fn test_default_melody_length() {
        let result = generate_melody(&MelodyRequest::default(), 42).unwrap();
        assert_eq!(result.notes.len(), 16);
        assert_eq!(result.output.buffer.len(), 16 * 13230);
    }

    #[test]
    fn test_emotion_melody_length() {
        let result = generate_emotion(&EmotionRequest::new(Emotion::Suspense), 42).unwrap();
        assert_eq!(result.notes.len(), 16);
        assert_eq!(result.output.buffer.len(), 16 * 15435);
    }

    #[test]
    fn test_same_seed_same_clip() {
        let request = MelodyRequest {
            length: 8,
            note_duration: 0.1,
        };
        let a = generate_melody(&request, 9).unwrap();
        let b = generate_melody(&request, 9).unwrap();
        assert_eq!(a.notes, b.notes);
        assert_eq!(a.output.wav.pcm_hash, b.output.wav.pcm_hash);
    }
}
