//! Fire-and-forget playback through the OS default handler.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tonesmith_spec::BackendError;

/// Playback could not be started. The clip itself is unaffected.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Nothing to play.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Missing path.
        path: PathBuf,
    },

    /// The OS handler could not be launched.
    #[error("no playback handler available: {0}")]
    HandlerUnavailable(#[source] std::io::Error),
}

impl BackendError for PlaybackError {
    fn code(&self) -> &'static str {
        match self {
            PlaybackError::FileNotFound { .. } => "PLAYBACK_001",
            PlaybackError::HandlerUnavailable(_) => "PLAYBACK_002",
        }
    }

    fn category(&self) -> &'static str {
        "playback"
    }
}

/// Hands `path` to the default application and returns immediately.
pub fn play_detached(path: &Path) -> Result<(), PlaybackError> {
    if !path.is_file() {
        return Err(PlaybackError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    open::that_detached(path).map_err(PlaybackError::HandlerUnavailable)
}

/// Name of the launcher `open` delegates to on this platform.
pub fn handler_name() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(windows) {
        "start"
    } else {
        "xdg-open"
    }
}

/// Whether a playback launcher is present.
///
/// macOS and Windows always ship one; elsewhere `xdg-open` must be on `PATH`.
pub fn handler_available() -> bool {
    if cfg!(any(target_os = "macos", windows)) {
        true
    } else {
        which::which(handler_name()).is_ok()
    }
}
