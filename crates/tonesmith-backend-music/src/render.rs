//! Melody rendering: one tone per note, concatenated in order.

use rand_pcg::Pcg32;
use tonesmith_backend_audio::tone::{render_tone_at, Tone};
use tonesmith_backend_audio::SampleBuffer;
use tonesmith_spec::{Voice, SAMPLE_RATE};

use crate::error::MusicResult;
use crate::note::Note;

/// Renders each note for `note_duration` seconds and joins them.
///
/// Every note gets exactly `round(rate · note_duration)` samples, so the
/// result is `notes.len()` times that long.
pub fn render_melody(
    notes: &[Note],
    note_duration: f64,
    volume: f64,
    voice: Voice,
    rng: &mut Pcg32,
) -> MusicResult<SampleBuffer> {
    render_frequencies(
        notes.iter().map(Note::frequency),
        note_duration,
        volume,
        voice,
        rng,
    )
}

/// Renders a frequency sequence with a shared duration, volume and voice.
pub fn render_frequencies(
    frequencies: impl IntoIterator<Item = f64>,
    note_duration: f64,
    volume: f64,
    voice: Voice,
    rng: &mut Pcg32,
) -> MusicResult<SampleBuffer> {
    let mut out = SampleBuffer::with_rate(SAMPLE_RATE);
    for frequency in frequencies {
        let tone = Tone::new(frequency, note_duration, volume, voice);
        out.append(&render_tone_at(&tone, SAMPLE_RATE, rng))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonesmith_backend_audio::rng::create_rng;
    use tonesmith_backend_audio::tone::render_tone;
    use tonesmith_spec::Instrument;

    #[test]
    fn test_melody_is_concatenation_of_tones() {
        let notes = [Note("C4"), Note("G4")];
        let voice = Voice::Instrument(Instrument::Piano);
        let melody = render_melody(&notes, 0.3, 0.7, voice, &mut create_rng(0)).unwrap();

        let c4 = render_tone(&Tone::new(261.63, 0.3, 0.7, voice), &mut create_rng(0));
        let g4 = render_tone(&Tone::new(392.0, 0.3, 0.7, voice), &mut create_rng(0));

        assert_eq!(melody.len(), c4.len() + g4.len());
        assert_eq!(&melody.samples[..c4.len()], &c4.samples[..]);
        assert_eq!(&melody.samples[c4.len()..], &g4.samples[..]);
    }

    #[test]
    fn test_each_note_restarts_its_envelope() {
        let voice = Voice::Instrument(Instrument::Flute);
        let melody = render_melody(
            &[Note("A4"), Note("A4")],
            0.5,
            1.0,
            voice,
            &mut create_rng(0),
        )
        .unwrap();
        let half = melody.len() / 2;
        assert_eq!(melody.samples[..half], melody.samples[half..]);
    }

    #[test]
    fn test_empty_melody() {
        let melody = render_melody(&[], 0.3, 0.7, Voice::default(), &mut create_rng(0)).unwrap();
        assert!(melody.is_empty());
        assert_eq!(melody.sample_rate, SAMPLE_RATE);
    }
}
