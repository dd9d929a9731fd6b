//! Timestamped clip files.

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tonesmith_backend_audio::WavResult;

/// Builds `<stem>_<millis>.wav`.
pub fn timestamped_name(stem: &str, millis: i64) -> String {
    format!("{}_{}.wav", stem, millis)
}

/// Picks an unused `<stem>_<millis>.wav` path in `dir`.
///
/// Starts from the current Unix time in milliseconds and steps forward while
/// the name is taken, so two clips written in the same millisecond never
/// collide.
pub fn unique_wav_path(dir: &Path, stem: &str) -> PathBuf {
    let mut millis = Utc::now().timestamp_millis();
    loop {
        let path = dir.join(timestamped_name(stem, millis));
        if !path.exists() {
            return path;
        }
        millis += 1;
    }
}

/// Writes a serialized clip under a fresh name and returns its path.
pub fn write_clip(dir: &Path, stem: &str, wav: &WavResult) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let path = unique_wav_path(dir, stem);
    wav.write_to(&path)
        .with_context(|| format!("Failed to write WAV file: {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_timestamped_name() {
        assert_eq!(
            timestamped_name("sad_music", 1_700_000_000_123),
            "sad_music_1700000000123.wav"
        );
    }

    #[test]
    fn test_repeated_writes_never_collide() {
        let dir = tempdir().unwrap();
        let wav = WavResult::from_mono(&[0.0; 8], 44_100);

        let a = write_clip(dir.path(), "beat", &wav).unwrap();
        let b = write_clip(dir.path(), "beat", &wav).unwrap();
        let c = write_clip(dir.path(), "beat", &wav).unwrap();

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        for path in [&a, &b, &c] {
            let name = path.file_name().unwrap().to_string_lossy();
            assert!(name.starts_with("beat_"));
            assert!(name.ends_with(".wav"));
        }
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("clips").join("today");
        let wav = WavResult::from_mono(&[0.25; 4], 44_100);

        let path = write_clip(&nested, "manual_generated", &wav).unwrap();
        assert_eq!(fs::read(&path).unwrap(), wav.wav_data);
    }
}
