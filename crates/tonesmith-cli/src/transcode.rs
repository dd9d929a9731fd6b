//! WAV to MP3 export through an external `ffmpeg`.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;
use tonesmith_backend_audio::wav::decode_wav;
use tonesmith_backend_audio::AudioError;
use tonesmith_spec::{BackendError, Bitrate};

/// Executable searched for when no override is configured.
pub const DEFAULT_ENCODER: &str = "ffmpeg";

/// Errors from MP3 export.
///
/// A missing encoder is a capability problem, not a generation failure: the
/// WAV has already been written when these are raised.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// No usable encoder executable.
    #[error("{name} not found; install ffmpeg or set TONESMITH_FFMPEG to enable MP3 export")]
    EncoderNotFound {
        /// Name or path that was searched for.
        name: String,
    },

    /// The source WAV does not exist.
    #[error("input WAV not found: {}", path.display())]
    InputNotFound {
        /// Missing path.
        path: PathBuf,
    },

    /// The source is not a readable mono 16-bit PCM WAV.
    #[error("{} is not a usable WAV: {source}", path.display())]
    InvalidInput {
        /// Rejected path.
        path: PathBuf,
        /// Why it was rejected.
        #[source]
        source: AudioError,
    },

    /// The encoder could not be started.
    #[error("failed to run encoder: {0}")]
    Spawn(#[source] std::io::Error),

    /// The encoder ran and reported failure.
    #[error("encoder exited with {status}: {stderr}")]
    EncoderFailed {
        /// Exit status description.
        status: String,
        /// Last line of the encoder's stderr.
        stderr: String,
    },
}

impl BackendError for TranscodeError {
    fn code(&self) -> &'static str {
        match self {
            TranscodeError::EncoderNotFound { .. } => "TRANSCODE_001",
            TranscodeError::InputNotFound { .. } => "TRANSCODE_002",
            TranscodeError::Spawn(_) => "TRANSCODE_003",
            TranscodeError::EncoderFailed { .. } => "TRANSCODE_004",
            TranscodeError::InvalidInput { .. } => "TRANSCODE_005",
        }
    }

    fn category(&self) -> &'static str {
        "transcode"
    }
}

/// Locates the encoder, honoring an explicit override.
///
/// The override may be a bare name (searched on `PATH`) or a path.
pub fn find_encoder(explicit: Option<&Path>) -> Result<PathBuf, TranscodeError> {
    let name: &OsStr = explicit
        .map(Path::as_os_str)
        .unwrap_or_else(|| OsStr::new(DEFAULT_ENCODER));
    which::which(name).map_err(|_| TranscodeError::EncoderNotFound {
        name: name.to_string_lossy().into_owned(),
    })
}

/// Appends `.mp3` unless the path already ends with it (any case).
pub fn mp3_path(path: &Path) -> PathBuf {
    let has_ext = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false);
    if has_ext {
        return path.to_path_buf();
    }
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(".mp3");
    PathBuf::from(raw)
}

/// Encoder arguments for one conversion. Existing output is overwritten.
pub fn encoder_args(input: &Path, output: &Path, bitrate: Bitrate) -> Vec<OsString> {
    vec![
        "-y".into(),
        "-loglevel".into(),
        "error".into(),
        "-i".into(),
        input.as_os_str().to_owned(),
        "-b:a".into(),
        bitrate.as_arg().into(),
        output.as_os_str().to_owned(),
    ]
}

/// Checks that `wav` decodes as the mono 16-bit PCM this tool writes.
fn check_input(wav: &Path) -> Result<(), TranscodeError> {
    let invalid = |source| TranscodeError::InvalidInput {
        path: wav.to_path_buf(),
        source,
    };
    let bytes = fs::read(wav).map_err(|e| invalid(AudioError::from(e)))?;
    decode_wav(&bytes).map_err(invalid)?;
    Ok(())
}

/// Converts `wav` to MP3 at `mp3` (with `.mp3` appended if missing).
///
/// The input is decoded first, so a file that is not mono 16-bit PCM is
/// rejected before the encoder runs. Returns the path actually written.
pub fn transcode(
    encoder: &Path,
    wav: &Path,
    mp3: &Path,
    bitrate: Bitrate,
) -> Result<PathBuf, TranscodeError> {
    if !wav.is_file() {
        return Err(TranscodeError::InputNotFound {
            path: wav.to_path_buf(),
        });
    }
    check_input(wav)?;

    let output_path = mp3_path(mp3);
    let output = Command::new(encoder)
        .args(encoder_args(wav, &output_path, bitrate))
        .stdin(Stdio::null())
        .output()
        .map_err(TranscodeError::Spawn)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TranscodeError::EncoderFailed {
            status: output.status.to_string(),
            stderr: stderr.lines().last().unwrap_or("").trim().to_string(),
        });
    }

    Ok(output_path)
}

/// Locates the encoder and converts in one step.
pub fn export_mp3(
    explicit_encoder: Option<&Path>,
    wav: &Path,
    mp3: &Path,
    bitrate: Bitrate,
) -> Result<PathBuf, TranscodeError> {
    let encoder = find_encoder(explicit_encoder)?;
    transcode(&encoder, wav, mp3, bitrate)
}

pub(crate) fn parse_encoder_version(output: &str) -> Option<String> {
    // "ffmpeg version 6.1.1-3ubuntu5 Copyright (c) ..."
    output
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(2))
        .map(|v| v.to_string())
}

/// Runs `<encoder> -version` and returns the reported version.
pub fn encoder_version(encoder: &Path) -> Option<String> {
    let output = Command::new(encoder).arg("-version").output().ok()?;
    if output.status.success() {
        parse_encoder_version(&String::from_utf8_lossy(&output.stdout))
    } else {
        None
    }
}
