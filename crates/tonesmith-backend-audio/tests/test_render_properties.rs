//! Rendering property tests: lengths, ranges, decay and idempotence.

use proptest::prelude::*;

use tonesmith_backend_audio::buffer::num_samples;
use tonesmith_backend_audio::percussion::render_beat;
use tonesmith_backend_audio::rng::create_rng;
use tonesmith_backend_audio::tone::{render_tone, render_tone_at, Tone};
use tonesmith_backend_audio::{InstrumentModel, Oscillator};
use tonesmith_spec::{parse_pattern, BeatHit, Instrument, Voice, Waveform};

const RATE: u32 = 44_100;

#[test]
fn test_sine_reference_tone() {
    let tone = Tone::new(440.0, 1.0, 0.5, Voice::Waveform(Waveform::Sine));
    let buffer = render_tone(&tone, &mut create_rng(0));

    assert_eq!(buffer.len(), 44_100);
    assert_eq!(buffer.samples[0], 0.0);

    let peak = buffer.samples.iter().fold(0.0f64, |m, s| m.max(s.abs()));
    assert!((peak - 0.5).abs() < 1e-3, "peak {}", peak);

    // Period is 44100 / 440 = 100.227 samples: count upward zero crossings.
    let crossings = buffer
        .samples
        .windows(2)
        .filter(|w| w[0] < 0.0 && w[1] >= 0.0)
        .count();
    assert!((439..=440).contains(&crossings), "crossings {}", crossings);

    // Samples follow the closed-form sine exactly.
    let t = 1000.0 / 44100.0;
    let expected = 0.5 * (2.0 * std::f64::consts::PI * 440.0 * t).sin();
    assert!((buffer.samples[1000] - expected).abs() < 1e-12);
}

#[test]
fn test_beat_kick_snare_at_120() {
    let pattern = parse_pattern("kick,snare");
    let beat = render_beat(&pattern, 120.0, &mut create_rng(1));
    assert_eq!(beat.len(), 2 * 22_050);
}

#[test]
fn test_unknown_beat_label_is_silent_slot() {
    let pattern = parse_pattern("kick,clap,snare");
    assert_eq!(pattern[1], BeatHit::Rest);

    let beat = render_beat(&pattern, 120.0, &mut create_rng(1));
    assert_eq!(beat.len(), 3 * 22_050);
    assert!(beat.samples[22_050..44_100].iter().all(|&s| s == 0.0));
    assert!(beat.samples[44_100..].iter().any(|&s| s != 0.0));
}

#[test]
fn test_instrument_envelopes_decay() {
    let tau = 1.0 / RATE as f64;
    for instrument in [Instrument::Piano, Instrument::Flute, Instrument::Bass] {
        assert!(
            instrument.envelope(0.0) > instrument.envelope(2.0 * tau),
            "{:?} envelope does not decay",
            instrument
        );
    }
}

#[test]
fn test_non_random_renders_are_bit_identical() {
    for voice in [
        Voice::Waveform(Waveform::Sine),
        Voice::Waveform(Waveform::Square),
        Voice::Waveform(Waveform::Saw),
        Voice::Waveform(Waveform::Triangle),
        Voice::Instrument(Instrument::Piano),
        Voice::Instrument(Instrument::Pad),
    ] {
        let tone = Tone::new(392.0, 0.25, 0.8, voice);
        let a = render_tone(&tone, &mut create_rng(1));
        let b = render_tone(&tone, &mut create_rng(99));
        assert_eq!(a.samples, b.samples, "{} differs", voice);
    }
}

#[test]
fn test_loud_piano_exceeds_unit_range_before_serialization() {
    let tone = Tone::new(261.63, 0.1, 1.0, Voice::Instrument(Instrument::Piano));
    let buffer = render_tone(&tone, &mut create_rng(0));
    assert!(buffer.samples.iter().any(|s| s.abs() > 1.0));
}

proptest! {
    /// Tone length is round(rate * duration) for any voice.
    #[test]
    fn tone_length_matches_duration(
        frequency in 1.0f64..5000.0,
        duration in 0.0f64..0.5,
        volume in 0.0f64..2.0,
        voice_index in 0usize..9,
    ) {
        let voice = Voice::from_name(Voice::menu()[voice_index]);
        let tone = Tone::new(frequency, duration, volume, voice);
        let buffer = render_tone_at(&tone, RATE, &mut create_rng(0));
        prop_assert_eq!(buffer.len(), num_samples(duration, RATE));
        prop_assert_eq!(buffer.len() as f64, (duration * RATE as f64).round());
    }

    /// Sine, square and triangle stay within [-1, 1].
    #[test]
    fn periodic_waveforms_in_range(
        frequency in 0.1f64..20_000.0,
        t in 0.0f64..10.0,
    ) {
        let mut rng = create_rng(0);
        for waveform in [Waveform::Sine, Waveform::Square, Waveform::Triangle] {
            let s = waveform.sample(frequency, t, &mut rng);
            prop_assert!((-1.0..=1.0).contains(&s), "{:?} gave {}", waveform, s);
        }
    }

    /// Beat length is slots * round(rate * 60 / tempo).
    #[test]
    fn beat_length_matches_slots(
        tempo in 30.0f64..300.0,
        pattern in "(kick|snare|rest|x)(,(kick|snare|rest|x)){0,7}",
    ) {
        let hits = parse_pattern(&pattern);
        let beat = render_beat(&hits, tempo, &mut create_rng(5));
        prop_assert_eq!(beat.len(), hits.len() * num_samples(60.0 / tempo, RATE));
    }
}
