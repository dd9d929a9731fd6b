//! End-to-end tests for the generation commands.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use pretty_assertions::assert_eq;
use tempfile::tempdir;
use tonesmith_cli::commands;
use tonesmith_cli::config::OutputOptions;
use tonesmith_cli::transcode::{export_mp3, TranscodeError};
use tonesmith_spec::Bitrate;

fn options(dir: &Path, seed: u32) -> OutputOptions {
    OutputOptions {
        seed: Some(seed),
        out_dir: Some(dir.to_path_buf()),
        ..Default::default()
    }
}

/// Every `.wav` in `dir` whose name starts with `stem_`.
fn clips(dir: &Path, stem: &str) -> Vec<PathBuf> {
    let prefix = format!("{}_", stem);
    let mut found: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            let name = path.file_name().unwrap().to_string_lossy();
            name.starts_with(&prefix) && name.ends_with(".wav")
        })
        .collect();
    found.sort();
    found
}

fn read_samples(path: &Path) -> (hound::WavSpec, Vec<i16>) {
    let mut reader = hound::WavReader::open(path).unwrap();
    let spec = reader.spec();
    let samples = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    (spec, samples)
}

#[test]
fn tone_writes_timestamped_wav() {
    let dir = tempdir().unwrap();
    let code = commands::tone::run(440.0, 1.0, 0.5, "sine", &options(dir.path(), 1)).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let written = clips(dir.path(), "manual_generated");
    assert_eq!(written.len(), 1);

    let (spec, samples) = read_samples(&written[0]);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44_100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(samples.len(), 44_100);
    assert_eq!(samples[0], 0);
    assert!(samples.iter().all(|s| s.unsigned_abs() <= 16_384));
}

#[test]
fn invalid_tone_writes_nothing() {
    let dir = tempdir().unwrap();
    let code = commands::tone::run(0.0, 1.0, 0.5, "sine", &options(dir.path(), 1)).unwrap();
    assert_eq!(code, ExitCode::from(1));
    assert!(clips(dir.path(), "manual_generated").is_empty());
}

#[test]
fn negative_volume_is_rejected() {
    let dir = tempdir().unwrap();
    let code = commands::tone::run(440.0, 1.0, -0.5, "piano", &options(dir.path(), 1)).unwrap();
    assert_eq!(code, ExitCode::from(1));
}

#[test]
fn melody_length_matches_request() {
    let dir = tempdir().unwrap();
    let code = commands::melody::run(8, 0.25, &options(dir.path(), 3)).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let written = clips(dir.path(), "ai_melody");
    assert_eq!(written.len(), 1);
    let (_, samples) = read_samples(&written[0]);
    // 0.25 s at 44.1 kHz is 11025 samples per note
    assert_eq!(samples.len(), 8 * 11_025);
}

#[test]
fn zero_length_melody_writes_empty_clip() {
    let dir = tempdir().unwrap();
    let code = commands::melody::run(0, 0.3, &options(dir.path(), 3)).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let written = clips(dir.path(), "ai_melody");
    assert_eq!(written.len(), 1);
    assert_eq!(fs::metadata(&written[0]).unwrap().len(), 44);
    assert!(read_samples(&written[0]).1.is_empty());
}

#[test]
fn emotion_file_is_named_after_label() {
    let dir = tempdir().unwrap();
    let code = commands::emotion::run("suspense", 0.35, &options(dir.path(), 4)).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(clips(dir.path(), "suspense_music").len(), 1);
}

#[test]
fn unknown_emotion_falls_back_to_happy() {
    let dir = tempdir().unwrap();
    let code = commands::emotion::run("wistful", 0.35, &options(dir.path(), 4)).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(clips(dir.path(), "happy_music").len(), 1);
}

#[test]
fn capitalized_beat_labels_are_rests() {
    let dir = tempdir().unwrap();
    let code = commands::beat::run(120.0, "Kick,SNARE", &options(dir.path(), 5)).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let (_, samples) = read_samples(&clips(dir.path(), "beat")[0]);
    assert_eq!(samples.len(), 2 * 22_050);
    assert!(samples.iter().all(|&s| s == 0));
}

#[test]
fn beat_with_unknown_label_has_silent_slot() {
    let dir = tempdir().unwrap();
    let code = commands::beat::run(120.0, "kick,clap,snare", &options(dir.path(), 5)).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let written = clips(dir.path(), "beat");
    let (_, samples) = read_samples(&written[0]);
    assert_eq!(samples.len(), 3 * 22_050);
    assert!(samples[22_050..44_100].iter().all(|&s| s == 0));
    assert!(samples[..22_050].iter().any(|&s| s != 0));
}

#[test]
fn zero_tempo_is_rejected() {
    let dir = tempdir().unwrap();
    let code = commands::beat::run(0.0, "kick", &options(dir.path(), 5)).unwrap();
    assert_eq!(code, ExitCode::from(1));
    assert!(clips(dir.path(), "beat").is_empty());
}

#[test]
fn same_seed_gives_identical_files() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    commands::beat::run(90.0, "snare,snare,kick", &options(a.path(), 11)).unwrap();
    commands::beat::run(90.0, "snare,snare,kick", &options(b.path(), 11)).unwrap();

    let bytes_a = fs::read(&clips(a.path(), "beat")[0]).unwrap();
    let bytes_b = fs::read(&clips(b.path(), "beat")[0]).unwrap();
    assert_eq!(bytes_a, bytes_b);
}

#[test]
fn render_reads_request_file() {
    let dir = tempdir().unwrap();
    let request = dir.path().join("request.json");
    fs::write(
        &request,
        r#"{"mode": "tone", "frequency": 220, "duration": 0.5, "voice": "flute"}"#,
    )
    .unwrap();

    let out = dir.path().join("out");
    let code = commands::render::run(request.to_str().unwrap(), &options(&out, 0)).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let written = clips(&out, "manual_generated");
    assert_eq!(written.len(), 1);
    assert_eq!(read_samples(&written[0]).1.len(), 22_050);
}

#[test]
fn render_rejects_malformed_json() {
    let dir = tempdir().unwrap();
    let request = dir.path().join("request.json");
    fs::write(&request, r#"{"mode": "tone", "frequency": "high"}"#).unwrap();

    let code =
        commands::render::run(request.to_str().unwrap(), &options(dir.path(), 0)).unwrap();
    assert_eq!(code, ExitCode::from(1));
}

#[test]
fn render_reports_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let code =
        commands::render::run(missing.to_str().unwrap(), &options(dir.path(), 0)).unwrap();
    assert_eq!(code, ExitCode::from(1));
}

#[test]
fn json_mode_still_writes_clip() {
    let dir = tempdir().unwrap();
    let mut opts = options(dir.path(), 2);
    opts.json = true;
    let code = commands::melody::run(4, 0.1, &opts).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(clips(dir.path(), "ai_melody").len(), 1);
}

#[test]
fn missing_encoder_is_a_capability_error() {
    let dir = tempdir().unwrap();
    commands::tone::run(440.0, 0.1, 0.5, "sine", &options(dir.path(), 1)).unwrap();
    let wav = &clips(dir.path(), "manual_generated")[0];

    let err = export_mp3(
        Some(Path::new("tonesmith-no-such-encoder")),
        wav,
        &dir.path().join("song"),
        Bitrate::K128,
    )
    .unwrap_err();
    assert!(matches!(err, TranscodeError::EncoderNotFound { .. }));
    assert!(wav.exists());
}
