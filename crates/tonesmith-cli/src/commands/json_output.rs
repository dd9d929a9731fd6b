//! JSON output types for the `--json` flag on generation commands.

use serde::{Deserialize, Serialize};
use tonesmith_backend_audio::analysis::BufferStats;
use tonesmith_spec::{ValidationError, ValidationWarning};

/// Error codes for CLI operations.
pub mod error_codes {
    /// Request file could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Request JSON could not be parsed
    pub const JSON_PARSE: &str = "CLI_002";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_003";
    /// Generation error (wraps backend errors)
    pub const GENERATION_ERROR: &str = "CLI_004";
    /// MP3 export failed
    pub const EXPORT_ERROR: &str = "CLI_005";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

impl From<&ValidationError> for JsonError {
    fn from(err: &ValidationError) -> Self {
        Self {
            code: err.code.code().to_string(),
            message: err.message.clone(),
            path: err.path.clone(),
        }
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001", "TRANSCODE_001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// Path to the field that raised the warning (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

impl From<&ValidationWarning> for JsonWarning {
    fn from(warning: &ValidationWarning) -> Self {
        Self {
            code: warning.code.code().to_string(),
            message: warning.message.clone(),
            path: warning.path.clone(),
        }
    }
}

/// One generated note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonNote {
    /// Note name (e.g., "A4", "C#5")
    pub name: String,
    /// Frequency in Hz
    pub frequency: f64,
}

/// Buffer statistics as reported in JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonStats {
    /// Number of samples
    pub num_samples: usize,
    /// Clip length in seconds
    pub duration_seconds: f64,
    /// Largest absolute sample value, before clamping
    pub peak: f64,
    /// Root mean square level
    pub rms: f64,
    /// Samples outside full scale that were clamped on write
    pub clipped: usize,
    /// Mean sample value
    pub dc_offset: f64,
    /// Fraction of near-silent samples (1.0 for an empty clip)
    pub silence_ratio: f64,
}

impl From<&BufferStats> for JsonStats {
    fn from(stats: &BufferStats) -> Self {
        Self {
            num_samples: stats.num_samples,
            duration_seconds: stats.duration_seconds,
            peak: stats.peak,
            rms: stats.rms,
            clipped: stats.clipped,
            dc_offset: stats.dc_offset,
            silence_ratio: stats.silence_ratio,
        }
    }
}

/// Result payload of a successful generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateResult {
    /// Request mode ("tone", "melody", "emotion", "beat")
    pub mode: String,
    /// Seed actually used
    pub seed: u32,
    /// Written WAV path
    pub wav_path: String,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
    /// Written MP3 path, when export was requested and succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mp3_path: Option<String>,
    /// Generated notes in order (empty for tones and beats)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<JsonNote>,
    /// Statistics of the rendered clip
    pub stats: JsonStats,
}

/// Top-level `--json` output of a generation command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateOutput {
    /// Whether the clip was written and every requested export succeeded
    pub success: bool,
    /// Errors that stopped generation or export
    pub errors: Vec<JsonError>,
    /// Non-fatal warnings (fallbacks, clipping, skipped export or playback)
    pub warnings: Vec<JsonWarning>,
    /// Generation result, present once the WAV was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
}

impl GenerateOutput {
    /// Creates a successful output carrying `result`.
    pub fn success(warnings: Vec<JsonWarning>, result: GenerateResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed output with no result.
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
        }
    }
}
