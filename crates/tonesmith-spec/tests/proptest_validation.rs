//! Property-based validation tests using proptest.
//!
//! These tests verify that validation and symbol parsing never panic and
//! always classify inputs consistently, including boundary values.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tonesmith-spec --test proptest_validation
//! ```

use proptest::prelude::*;

use tonesmith_spec::validation::{validate_request, MAX_CLIP_SECONDS, MAX_MELODY_LENGTH};
use tonesmith_spec::{
    parse_pattern, BeatHit, BeatRequest, Emotion, ErrorCode, GenerationRequest, MelodyRequest,
    ToneRequest, Voice, WarningCode,
};

// ============================================================================
// 1. Tone Parameter Ranges
// ============================================================================

fn tone(frequency: f64, duration: f64, volume: f64) -> GenerationRequest {
    GenerationRequest::Tone(ToneRequest {
        frequency,
        duration,
        volume,
        voice: Voice::default(),
    })
}

proptest! {
    /// Tone validation never panics for any f64 triple.
    #[test]
    fn tone_validation_never_panics(
        frequency in prop::num::f64::ANY,
        duration in prop::num::f64::ANY,
        volume in prop::num::f64::ANY,
    ) {
        let _ = validate_request(&tone(frequency, duration, volume));
    }

    /// Reasonable tones always validate.
    #[test]
    fn reasonable_tones_pass(
        frequency in 20.0f64..20_000.0,
        duration in 0.0f64..=MAX_CLIP_SECONDS,
        volume in 0.0f64..=1.0,
    ) {
        let result = validate_request(&tone(frequency, duration, volume));
        prop_assert!(result.is_ok(), "errors: {:?}", result.errors);
    }

    /// Non-positive frequencies are always E001.
    #[test]
    fn non_positive_frequency_fails(frequency in -1.0e6f64..=0.0) {
        let result = validate_request(&tone(frequency, 1.0, 0.5));
        prop_assert!(result.errors.iter().any(|e| e.code == ErrorCode::InvalidFrequency));
    }

    /// Volumes above 1.0 are accepted with a clipping warning.
    #[test]
    fn loud_volume_warns(volume in 1.000_001f64..100.0) {
        let result = validate_request(&tone(440.0, 1.0, volume));
        prop_assert!(result.is_ok());
        prop_assert!(result.warnings.iter().any(|w| w.code == WarningCode::VolumeClips));
    }
}

// ============================================================================
// 2. Melody and Beat Requests
// ============================================================================

proptest! {
    /// Melody lengths in range with short notes validate.
    #[test]
    fn melody_lengths_in_range_pass(length in 1usize..=MAX_MELODY_LENGTH) {
        let result = validate_request(&GenerationRequest::Melody(MelodyRequest {
            length,
            note_duration: 0.25,
        }));
        prop_assert!(result.is_ok(), "errors: {:?}", result.errors);
    }

    /// Any tempo above zero validates a short pattern as long as the clip fits.
    #[test]
    fn positive_tempo_passes(tempo in 1.0f64..1000.0) {
        let result = validate_request(&GenerationRequest::Beat(BeatRequest {
            tempo,
            pattern: "kick,snare,kick,snare".to_string(),
        }));
        prop_assert!(result.is_ok(), "errors: {:?}", result.errors);
    }
}

// ============================================================================
// 3. Symbolic Fallbacks
// ============================================================================

proptest! {
    /// Pattern parsing never panics and yields one hit per non-empty label.
    #[test]
    fn pattern_parsing_counts_labels(pattern in "[a-z ,]{0,80}") {
        let hits = parse_pattern(&pattern);
        let expected = pattern.split(',').filter(|l| !l.trim().is_empty()).count();
        prop_assert_eq!(hits.len(), expected);
    }

    /// Labels other than kick and snare always parse as rests.
    #[test]
    fn unknown_beat_labels_are_rests(label in "[a-z]{1,12}") {
        prop_assume!(label != "kick" && label != "snare");
        prop_assert_eq!(BeatHit::from_label(&label), BeatHit::Rest);
    }

    /// Voice parsing never fails.
    #[test]
    fn voice_parsing_is_total(name in "\\PC{0,20}") {
        let voice = Voice::from_name(&name);
        prop_assert!(!voice.name().is_empty());
    }

    /// Emotion parsing never fails and unknown labels are happy.
    #[test]
    fn unknown_emotions_are_happy(label in "[a-z]{1,12}") {
        prop_assume!(Emotion::lookup(&label).is_none());
        prop_assert_eq!(Emotion::from_label(&label), Emotion::Happy);
    }
}
