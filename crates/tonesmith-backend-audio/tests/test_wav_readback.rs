//! Reads written clips back with an independent WAV decoder.

use pretty_assertions::assert_eq;
use tonesmith_backend_audio::rng::create_rng;
use tonesmith_backend_audio::tone::{render_tone, Tone};
use tonesmith_backend_audio::{generate_beat, SampleBuffer, WavResult};
use tonesmith_spec::{BeatRequest, Instrument, Voice, Waveform};

fn read_back(result: &WavResult) -> (hound::WavSpec, Vec<i16>) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clip.wav");
    result.write_to(&path).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    let samples = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    (spec, samples)
}

#[test]
fn test_header_is_mono_16_bit_44100() {
    let tone = Tone::new(440.0, 0.5, 0.5, Voice::Waveform(Waveform::Sine));
    let result = WavResult::from_buffer(&render_tone(&tone, &mut create_rng(0)));
    let (spec, samples) = read_back(&result);

    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44_100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(samples.len(), 22_050);
    assert_eq!(samples[0], 0);
}

#[test]
fn test_out_of_range_samples_clamp_at_serialization() {
    let buffer = SampleBuffer::from_samples(vec![4.0, -4.0, 0.5, -0.5, 1.0], 44_100);
    let (_, samples) = read_back(&WavResult::from_buffer(&buffer));
    assert_eq!(samples, vec![32767, -32767, 16383, -16383, 32767]);
}

#[test]
fn test_loud_piano_is_clamped_not_wrapped() {
    let tone = Tone::new(261.63, 0.2, 3.0, Voice::Instrument(Instrument::Piano));
    let buffer = render_tone(&tone, &mut create_rng(0));
    let (_, samples) = read_back(&WavResult::from_buffer(&buffer));

    for (pcm, raw) in samples.iter().zip(&buffer.samples) {
        if *raw > 1.0 {
            assert_eq!(*pcm, 32767);
        } else if *raw < -1.0 {
            assert_eq!(*pcm, -32767);
        }
    }
}

#[test]
fn test_seeded_beat_is_byte_identical() {
    let request = BeatRequest::default();
    let a = generate_beat(&request, 1234);
    let b = generate_beat(&request, 1234);
    assert_eq!(a.wav.wav_data, b.wav.wav_data);

    let (_, samples) = read_back(&a.wav);
    assert_eq!(samples.len(), a.buffer.len());
}
