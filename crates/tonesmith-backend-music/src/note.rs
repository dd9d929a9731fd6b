//! Note names and their frequencies.
//!
//! The table covers exactly the notes the melody generators can emit. Lookups
//! never fail: an unknown name renders at A4.

use std::fmt;

/// Frequency used for any note name missing from [`NOTE_FREQ`].
pub const DEFAULT_FREQUENCY: f64 = 440.0;

/// Note name to frequency in Hz.
pub const NOTE_FREQ: &[(&str, f64)] = &[
    ("C4", 261.63),
    ("D4", 293.66),
    ("E4", 329.63),
    ("F4", 349.23),
    ("G4", 392.00),
    ("A4", 440.00),
    ("B4", 493.88),
    ("C5", 523.25),
    ("A3", 220.00),
    ("Bb4", 466.16),
    ("Db4", 277.18),
    ("Gb4", 369.99),
];

/// A symbolic note name such as `"C4"` or `"Gb4"`.
///
/// Generated melodies only ever hold names taken from static tables, so the
/// name is borrowed for `'static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Note(pub &'static str);

impl Note {
    /// Returns the note name.
    pub fn name(&self) -> &'static str {
        self.0
    }

    /// Returns the frequency in Hz, or 440.0 for an unknown name.
    pub fn frequency(&self) -> f64 {
        note_frequency(self.0)
    }

    /// Looks up a name in [`NOTE_FREQ`], case-sensitively.
    pub fn lookup(name: &str) -> Option<Note> {
        NOTE_FREQ
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(n, _)| Note(n))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Frequency in Hz of a note name.
///
/// # Examples
/// ```
/// use tonesmith_backend_music::note::note_frequency;
///
/// assert_eq!(note_frequency("Gb4"), 369.99);
/// assert_eq!(note_frequency("H9"), 440.0);
/// ```
pub fn note_frequency(name: &str) -> f64 {
    NOTE_FREQ
        .iter()
        .find(|(n, _)| *n == name)
        .map_or(DEFAULT_FREQUENCY, |(_, f)| *f)
}

/// Maps a note sequence to frequencies, in order.
pub fn melody_to_frequencies(melody: &[Note]) -> Vec<f64> {
    melody.iter().map(Note::frequency).collect()
}
