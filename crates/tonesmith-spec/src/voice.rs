//! Waveforms, instruments, and the voice that selects between them.

use serde::{Deserialize, Serialize};

/// Basic oscillator waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Sine wave.
    Sine,
    /// Square wave.
    Square,
    /// Sawtooth wave.
    Saw,
    /// Triangle wave.
    Triangle,
    /// Uniform white noise.
    Noise,
}

impl Waveform {
    /// All waveforms, in menu order.
    pub const ALL: [Waveform; 5] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Saw,
        Waveform::Triangle,
        Waveform::Noise,
    ];

    /// Returns the canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Saw => "saw",
            Waveform::Triangle => "triangle",
            Waveform::Noise => "noise",
        }
    }

    /// Looks up a waveform by its exact lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sine" => Some(Waveform::Sine),
            "square" => Some(Waveform::Square),
            "saw" => Some(Waveform::Saw),
            "triangle" => Some(Waveform::Triangle),
            "noise" => Some(Waveform::Noise),
            _ => None,
        }
    }
}

impl std::fmt::Display for Waveform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Harmonic-stack instrument model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instrument {
    /// Fundamental plus 2nd and 3rd harmonics with a fast decay.
    Piano,
    /// Pure sine with a gentle decay.
    Flute,
    /// Sustained stack of fundamental, sub-octave and fifth.
    Pad,
    /// Sine an octave down with a medium decay.
    Bass,
    /// Plain sine with no envelope. Used for unrecognized instrument names.
    Plain,
}

impl Instrument {
    /// The named instruments (excludes the `Plain` fallback).
    pub const NAMED: [Instrument; 4] = [
        Instrument::Piano,
        Instrument::Flute,
        Instrument::Pad,
        Instrument::Bass,
    ];

    /// Returns the canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Instrument::Piano => "piano",
            Instrument::Flute => "flute",
            Instrument::Pad => "pad",
            Instrument::Bass => "bass",
            Instrument::Plain => "plain",
        }
    }

    /// Looks up a named instrument by its exact lowercase name.
    ///
    /// Returns `None` for unrecognized names, including "plain".
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "piano" => Some(Instrument::Piano),
            "flute" => Some(Instrument::Flute),
            "pad" => Some(Instrument::Pad),
            "bass" => Some(Instrument::Bass),
            _ => None,
        }
    }

    /// Looks up an instrument, falling back to `Plain` for unknown names.
    pub fn from_name_lenient(name: &str) -> Self {
        Self::from_name(name).unwrap_or(Instrument::Plain)
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What renders a tone: a bare waveform or an instrument model.
///
/// A caller supplies one or the other. When a name matches both vocabularies
/// the instrument wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Voice {
    /// Oscillator waveform.
    Waveform(Waveform),
    /// Instrument model (overrides any waveform).
    Instrument(Instrument),
}

impl Voice {
    /// Strict lookup: instruments first, then waveforms.
    pub fn lookup(name: &str) -> Option<Self> {
        if let Some(instrument) = Instrument::from_name(name) {
            return Some(Voice::Instrument(instrument));
        }
        Waveform::from_name(name).map(Voice::Waveform)
    }

    /// Lenient lookup. Unrecognized names become the plain sine instrument.
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or(Voice::Instrument(Instrument::Plain))
    }

    /// Returns the canonical name of the selected waveform or instrument.
    pub fn name(&self) -> &'static str {
        match self {
            Voice::Waveform(w) => w.name(),
            Voice::Instrument(i) => i.name(),
        }
    }

    /// Names accepted by [`Voice::lookup`], in menu order.
    pub fn menu() -> Vec<&'static str> {
        Waveform::ALL
            .iter()
            .map(Waveform::name)
            .chain(Instrument::NAMED.iter().map(Instrument::name))
            .collect()
    }
}

impl Default for Voice {
    fn default() -> Self {
        Voice::Waveform(Waveform::Sine)
    }
}

impl From<String> for Voice {
    fn from(name: String) -> Self {
        Voice::from_name(&name)
    }
}

impl From<Voice> for String {
    fn from(voice: Voice) -> Self {
        voice.name().to_string()
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waveform_names_round_trip() {
        for w in Waveform::ALL {
            assert_eq!(Waveform::from_name(w.name()), Some(w));
        }
        assert_eq!(Waveform::from_name("sawtooth"), None);
        assert_eq!(Waveform::from_name("pulse"), None);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(Instrument::from_name("Piano"), None);
        assert_eq!(Instrument::from_name(" bass "), None);
        assert_eq!(Waveform::from_name("SINE"), None);
        assert_eq!(Voice::from_name("Piano"), Voice::Instrument(Instrument::Plain));
        assert_eq!(Instrument::from_name("plain"), None);
    }

    #[test]
    fn test_unknown_instrument_falls_back_to_plain() {
        assert_eq!(Instrument::from_name_lenient("theremin"), Instrument::Plain);
    }

    #[test]
    fn test_voice_prefers_instrument() {
        assert_eq!(Voice::from_name("flute"), Voice::Instrument(Instrument::Flute));
        assert_eq!(Voice::from_name("square"), Voice::Waveform(Waveform::Square));
        assert_eq!(
            Voice::from_name("kazoo"),
            Voice::Instrument(Instrument::Plain)
        );
        assert_eq!(Voice::lookup("kazoo"), None);
    }

    #[test]
    fn test_voice_menu() {
        assert_eq!(
            Voice::menu(),
            vec!["sine", "square", "saw", "triangle", "noise", "piano", "flute", "pad", "bass"]
        );
    }

    #[test]
    fn test_voice_serde_uses_names() {
        let json = serde_json::to_string(&Voice::Instrument(Instrument::Pad)).unwrap();
        assert_eq!(json, "\"pad\"");

        let voice: Voice = serde_json::from_str("\"triangle\"").unwrap();
        assert_eq!(voice, Voice::Waveform(Waveform::Triangle));

        let voice: Voice = serde_json::from_str("\"harpsichord\"").unwrap();
        assert_eq!(voice, Voice::Instrument(Instrument::Plain));
    }
}
