//! Percussion hit labels and beat pattern parsing.

use serde::{Deserialize, Serialize};

/// One slot of a beat pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BeatHit {
    /// Decaying low sine.
    Kick,
    /// Decaying noise burst.
    Snare,
    /// Silent slot. Any unrecognized label maps here.
    Rest,
}

impl BeatHit {
    /// Returns the lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            BeatHit::Kick => "kick",
            BeatHit::Snare => "snare",
            BeatHit::Rest => "rest",
        }
    }

    /// Strict lookup. Only the exact labels "kick" and "snare" are recognized.
    pub fn lookup(label: &str) -> Option<Self> {
        match label {
            "kick" => Some(BeatHit::Kick),
            "snare" => Some(BeatHit::Snare),
            _ => None,
        }
    }

    /// Lenient lookup. Anything other than kick or snare is a rest.
    pub fn from_label(label: &str) -> Self {
        Self::lookup(label).unwrap_or(BeatHit::Rest)
    }
}

impl From<String> for BeatHit {
    fn from(label: String) -> Self {
        BeatHit::from_label(&label)
    }
}

impl From<BeatHit> for String {
    fn from(hit: BeatHit) -> Self {
        hit.label().to_string()
    }
}

impl std::fmt::Display for BeatHit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Splits a comma-separated pattern into labels.
///
/// Whitespace around labels is trimmed and empty entries are skipped, so
/// `"kick, ,snare,"` has two labels.
pub fn pattern_labels(pattern: &str) -> Vec<&str> {
    pattern
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .collect()
}

/// Parses a comma-separated pattern into hits, mapping unknown labels to rests.
pub fn parse_pattern(pattern: &str) -> Vec<BeatHit> {
    pattern_labels(pattern)
        .into_iter()
        .map(BeatHit::from_label)
        .collect()
}
