//! Emotion-keyed note pools.

use rand::Rng;
use rand_pcg::Pcg32;
use tonesmith_spec::Emotion;

use crate::note::Note;

const HAPPY: &[Note] = &[
    Note("C4"),
    Note("E4"),
    Note("G4"),
    Note("C5"),
    Note("A4"),
    Note("G4"),
    Note("E4"),
];

const SAD: &[Note] = &[
    Note("A3"),
    Note("C4"),
    Note("D4"),
    Note("F4"),
    Note("E4"),
    Note("D4"),
    Note("C4"),
];

const ROMANTIC: &[Note] = &[
    Note("C4"),
    Note("E4"),
    Note("G4"),
    Note("B4"),
    Note("A4"),
    Note("G4"),
    Note("E4"),
    Note("D4"),
];

const SUSPENSE: &[Note] = &[
    Note("C4"),
    Note("Db4"),
    Note("E4"),
    Note("Gb4"),
    Note("A4"),
    Note("Bb4"),
    Note("C5"),
];

/// The ordered note pool for an emotion. Repeated notes weight the draw.
pub fn emotion_pool(emotion: Emotion) -> &'static [Note] {
    match emotion {
        Emotion::Happy => HAPPY,
        Emotion::Sad => SAD,
        Emotion::Romantic => ROMANTIC,
        Emotion::Suspense => SUSPENSE,
    }
}

/// Draws `length` notes uniformly, with replacement, from the emotion's pool.
pub fn generate_emotional_melody(emotion: Emotion, length: usize, rng: &mut Pcg32) -> Vec<Note> {
    let pool = emotion_pool(emotion);
    (0..length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect()
}
