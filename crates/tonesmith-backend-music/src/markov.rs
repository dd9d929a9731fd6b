//! First-order Markov melody model.
//!
//! Transitions are recorded in training order without deduplication, so a
//! successor seen twice is twice as likely. Generation starts from a uniform
//! pick over the whole training sequence, and any note without recorded
//! successors restarts from the whole training sequence rather than the key
//! set. A note that only ever ends the training sequence is such a dead end.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::error::{MusicError, MusicResult};
use crate::note::Note;

/// The 18-note reference melody the built-in model is trained on.
pub const TRAINING_MELODY: [Note; 18] = [
    Note("C4"),
    Note("D4"),
    Note("E4"),
    Note("G4"),
    Note("A4"),
    Note("A4"),
    Note("G4"),
    Note("E4"),
    Note("D4"),
    Note("C4"),
    Note("C4"),
    Note("E4"),
    Note("G4"),
    Note("C5"),
    Note("G4"),
    Note("E4"),
    Note("D4"),
    Note("C4"),
];

/// Note-to-successors transition table plus its training sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkovModel {
    transitions: BTreeMap<Note, Vec<Note>>,
    training: Vec<Note>,
}

impl MarkovModel {
    /// Trains a model on `training`.
    pub fn train(training: &[Note]) -> MusicResult<Self> {
        if training.is_empty() {
            return Err(MusicError::EmptyTraining);
        }
        Ok(Self::build(training))
    }

    fn build(training: &[Note]) -> Self {
        let mut transitions: BTreeMap<Note, Vec<Note>> = BTreeMap::new();
        for pair in training.windows(2) {
            transitions.entry(pair[0]).or_default().push(pair[1]);
        }
        Self {
            transitions,
            training: training.to_vec(),
        }
    }

    /// The process-wide model trained on [`TRAINING_MELODY`].
    pub fn reference() -> &'static MarkovModel {
        static REFERENCE: OnceLock<MarkovModel> = OnceLock::new();
        REFERENCE.get_or_init(|| Self::build(&TRAINING_MELODY))
    }

    /// Recorded successors of `note`, in training order. Empty for dead ends.
    pub fn successors(&self, note: Note) -> &[Note] {
        self.transitions
            .get(&note)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Notes with at least one recorded successor, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = Note> + '_ {
        self.transitions.keys().copied()
    }

    /// The training sequence.
    pub fn training(&self) -> &[Note] {
        &self.training
    }

    /// Generates `length` notes by random walk.
    ///
    /// # Examples
    /// ```
    /// use tonesmith_backend_audio::rng::create_rng;
    /// use tonesmith_backend_music::markov::MarkovModel;
    ///
    /// let melody = MarkovModel::reference().generate(16, &mut create_rng(42));
    /// assert_eq!(melody.len(), 16);
    /// ```
    pub fn generate(&self, length: usize, rng: &mut Pcg32) -> Vec<Note> {
        let mut melody = Vec::with_capacity(length);
        if length == 0 {
            return melody;
        }

        let mut current = self.restart(rng);
        loop {
            melody.push(current);
            if melody.len() == length {
                return melody;
            }
            let successors = self.successors(current);
            current = if successors.is_empty() {
                self.restart(rng)
            } else {
                successors[rng.gen_range(0..successors.len())]
            };
        }
    }

    fn restart(&self, rng: &mut Pcg32) -> Note {
        self.training[rng.gen_range(0..self.training.len())]
    }
}
