//! Generation request shapes.
//!
//! Each request maps to one or more renderer calls followed by buffer
//! concatenation. Requests are plain data; numeric checks live in
//! [`crate::validation`].

use serde::{Deserialize, Serialize};

use crate::beat::{parse_pattern, BeatHit};
use crate::emotion::Emotion;
use crate::error::SpecError;
use crate::voice::{Instrument, Voice};

/// Notes per emotion melody.
pub const EMOTION_MELODY_LENGTH: usize = 16;
/// Volume for Markov melodies.
pub const MELODY_VOLUME: f64 = 0.7;
/// Volume for emotion melodies.
pub const EMOTION_VOLUME: f64 = 0.75;

/// Any of the four request shapes, tagged by `mode` in JSON.
///
/// ```
/// use tonesmith_spec::GenerationRequest;
///
/// let request = GenerationRequest::from_json(
///     r#"{"mode": "beat", "tempo": 120, "pattern": "kick,snare"}"#,
/// ).unwrap();
/// assert_eq!(request.mode(), "beat");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GenerationRequest {
    /// A single manual tone.
    Tone(ToneRequest),
    /// A Markov-generated melody.
    Melody(MelodyRequest),
    /// An emotion-pool melody.
    Emotion(EmotionRequest),
    /// A percussion pattern.
    Beat(BeatRequest),
}

impl GenerationRequest {
    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the request to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the mode tag.
    pub fn mode(&self) -> &'static str {
        match self {
            GenerationRequest::Tone(_) => "tone",
            GenerationRequest::Melody(_) => "melody",
            GenerationRequest::Emotion(_) => "emotion",
            GenerationRequest::Beat(_) => "beat",
        }
    }

    /// Returns the base filename (without extension) for this request's clip.
    pub fn file_stem(&self) -> String {
        match self {
            GenerationRequest::Tone(_) => "manual_generated".to_string(),
            GenerationRequest::Melody(_) => "ai_melody".to_string(),
            GenerationRequest::Emotion(r) => format!("{}_music", r.emotion.label()),
            GenerationRequest::Beat(_) => "beat".to_string(),
        }
    }
}

/// A single tone at a fixed frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneRequest {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Duration in seconds.
    pub duration: f64,
    /// Linear gain applied after synthesis. Not clamped.
    #[serde(default = "default_tone_volume")]
    pub volume: f64,
    /// Waveform or instrument name.
    #[serde(default)]
    pub voice: Voice,
}

fn default_tone_volume() -> f64 {
    0.5
}

/// A melody generated by the reference Markov model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MelodyRequest {
    /// Number of notes.
    #[serde(default = "default_melody_length")]
    pub length: usize,
    /// Seconds per note.
    #[serde(default = "default_melody_note_duration")]
    pub note_duration: f64,
}

fn default_melody_length() -> usize {
    16
}

fn default_melody_note_duration() -> f64 {
    0.3
}

impl Default for MelodyRequest {
    fn default() -> Self {
        Self {
            length: default_melody_length(),
            note_duration: default_melody_note_duration(),
        }
    }
}

impl MelodyRequest {
    /// Voice used to render every note.
    pub fn voice(&self) -> Voice {
        Voice::Instrument(Instrument::Piano)
    }

    /// Volume used to render every note.
    pub fn volume(&self) -> f64 {
        MELODY_VOLUME
    }
}

/// A melody drawn from an emotion's note pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionRequest {
    /// Emotion label. Unknown labels behave like "happy".
    pub emotion: Emotion,
    /// Seconds per note.
    #[serde(default = "default_emotion_note_duration")]
    pub note_duration: f64,
}

fn default_emotion_note_duration() -> f64 {
    0.35
}

impl EmotionRequest {
    /// Creates a request with the default note duration.
    pub fn new(emotion: Emotion) -> Self {
        Self {
            emotion,
            note_duration: default_emotion_note_duration(),
        }
    }

    /// Number of notes generated.
    pub fn length(&self) -> usize {
        EMOTION_MELODY_LENGTH
    }

    /// Piano for bright emotions, flute for the rest.
    pub fn voice(&self) -> Voice {
        match self.emotion {
            Emotion::Happy | Emotion::Romantic => Voice::Instrument(Instrument::Piano),
            Emotion::Sad | Emotion::Suspense => Voice::Instrument(Instrument::Flute),
        }
    }

    /// Volume used to render every note.
    pub fn volume(&self) -> f64 {
        EMOTION_VOLUME
    }
}

/// A percussion pattern rendered at a tempo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatRequest {
    /// Beats per minute. Each slot lasts `60 / tempo` seconds.
    #[serde(default = "default_tempo")]
    pub tempo: f64,
    /// Comma-separated hit labels, e.g. "kick,snare,kick,snare".
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

fn default_tempo() -> f64 {
    100.0
}

fn default_pattern() -> String {
    "kick,snare,kick,snare".to_string()
}

impl Default for BeatRequest {
    fn default() -> Self {
        Self {
            tempo: default_tempo(),
            pattern: default_pattern(),
        }
    }
}

impl BeatRequest {
    /// Parsed hits, with unknown labels as rests.
    pub fn hits(&self) -> Vec<BeatHit> {
        parse_pattern(&self.pattern)
    }

    /// Duration of one slot in seconds.
    pub fn unit_seconds(&self) -> f64 {
        60.0 / self.tempo
    }
}
