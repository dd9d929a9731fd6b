//! Emotion labels for pool-based melody generation.

use serde::{Deserialize, Serialize};

/// Emotion label selecting a fixed note pool.
///
/// Unrecognized labels resolve to `Happy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Emotion {
    /// Bright major-triad pool.
    #[default]
    Happy,
    /// Minor pool rooted on A3.
    Sad,
    /// Major-seventh pool.
    Romantic,
    /// Chromatic, tritone-heavy pool.
    Suspense,
}

impl Emotion {
    /// All emotions.
    pub const ALL: [Emotion; 4] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Romantic,
        Emotion::Suspense,
    ];

    /// Returns the lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Romantic => "romantic",
            Emotion::Suspense => "suspense",
        }
    }

    /// Strict lookup by exact lowercase label.
    pub fn lookup(label: &str) -> Option<Self> {
        match label {
            "happy" => Some(Emotion::Happy),
            "sad" => Some(Emotion::Sad),
            "romantic" => Some(Emotion::Romantic),
            "suspense" => Some(Emotion::Suspense),
            _ => None,
        }
    }

    /// Lenient lookup. Unknown labels become `Happy`.
    pub fn from_label(label: &str) -> Self {
        Self::lookup(label).unwrap_or_default()
    }
}

impl From<String> for Emotion {
    fn from(label: String) -> Self {
        Emotion::from_label(&label)
    }
}

impl From<Emotion> for String {
    fn from(emotion: Emotion) -> Self {
        emotion.label().to_string()
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
