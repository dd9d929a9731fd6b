//! MP3 export settings.

use serde::{Deserialize, Serialize};

/// Supported MP3 bitrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Bitrate {
    /// 128 kbit/s.
    #[serde(rename = "128k")]
    K128,
    /// 192 kbit/s.
    #[default]
    #[serde(rename = "192k")]
    K192,
    /// 256 kbit/s.
    #[serde(rename = "256k")]
    K256,
    /// 320 kbit/s.
    #[serde(rename = "320k")]
    K320,
}

impl Bitrate {
    /// All supported bitrates, lowest first.
    pub const ALL: [Bitrate; 4] = [Bitrate::K128, Bitrate::K192, Bitrate::K256, Bitrate::K320];

    /// Returns the encoder argument form, e.g. "192k".
    pub fn as_arg(&self) -> &'static str {
        match self {
            Bitrate::K128 => "128k",
            Bitrate::K192 => "192k",
            Bitrate::K256 => "256k",
            Bitrate::K320 => "320k",
        }
    }

    /// Returns the bitrate in kbit/s.
    pub fn kbps(&self) -> u32 {
        match self {
            Bitrate::K128 => 128,
            Bitrate::K192 => 192,
            Bitrate::K256 => 256,
            Bitrate::K320 => 320,
        }
    }
}

impl std::fmt::Display for Bitrate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_arg())
    }
}

impl std::str::FromStr for Bitrate {
    type Err = String;

    /// Accepts "192k", "192K" or "192".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_lowercase();
        let digits = trimmed.strip_suffix('k').unwrap_or(&trimmed);
        Bitrate::ALL
            .into_iter()
            .find(|b| b.kbps().to_string() == digits)
            .ok_or_else(|| format!("unsupported bitrate '{}' (expected 128k, 192k, 256k, or 320k)", s))
    }
}
