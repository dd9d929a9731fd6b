//! Run configuration: command-line options merged with environment overrides.
//!
//! Flags always win. When a flag is absent the matching `TONESMITH_*`
//! variable is consulted, then a built-in fallback.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tonesmith_spec::Bitrate;

/// Default output directory.
pub const OUT_DIR_ENV: &str = "TONESMITH_OUT_DIR";
/// Explicit encoder path or name.
pub const FFMPEG_ENV: &str = "TONESMITH_FFMPEG";
/// Default seed.
pub const SEED_ENV: &str = "TONESMITH_SEED";

/// Output and post-processing options shared by every generation command.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Seed for noise, Markov walks and pool draws.
    pub seed: Option<u32>,
    /// Directory the WAV is written into.
    pub out_dir: Option<PathBuf>,
    /// Also transcode the WAV to this MP3 path.
    pub mp3: Option<PathBuf>,
    /// MP3 bitrate.
    pub bitrate: Bitrate,
    /// Hand the WAV to the OS player after writing.
    pub play: bool,
    /// Print a sparkline of the first samples.
    pub preview: bool,
    /// Emit a JSON summary instead of colored output.
    pub json: bool,
}

/// Where the seed for a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// `--seed` flag.
    Flag,
    /// `TONESMITH_SEED`.
    Env,
    /// Freshly drawn for this run.
    Random,
}

impl SeedSource {
    /// Short label for reporting.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeedSource::Flag => "flag",
            SeedSource::Env => "env",
            SeedSource::Random => "random",
        }
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Seed for every random choice in the run.
    pub seed: u32,
    /// Where `seed` came from.
    pub seed_source: SeedSource,
    /// Directory that receives generated clips.
    pub out_dir: PathBuf,
    /// Encoder override, if any. `None` means search `PATH` for `ffmpeg`.
    pub ffmpeg: Option<PathBuf>,
}

impl Settings {
    /// Resolves settings against the process environment.
    pub fn resolve(options: &OutputOptions) -> Result<Self> {
        Self::resolve_with(options, |key| env::var(key).ok())
    }

    /// Resolves settings with a custom variable lookup.
    pub fn resolve_with<F>(options: &OutputOptions, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (seed, seed_source) = match options.seed {
            Some(seed) => (seed, SeedSource::Flag),
            None => match non_empty(lookup(SEED_ENV)) {
                Some(raw) => {
                    let seed = raw.trim().parse::<u32>().with_context(|| {
                        format!("{} must be an unsigned 32-bit integer, got '{}'", SEED_ENV, raw)
                    })?;
                    (seed, SeedSource::Env)
                }
                None => (rand::random::<u32>(), SeedSource::Random),
            },
        };

        let out_dir = options
            .out_dir
            .clone()
            .or_else(|| non_empty(lookup(OUT_DIR_ENV)).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            seed,
            seed_source,
            out_dir,
            ffmpeg: ffmpeg_override_with(lookup),
        })
    }
}

/// Encoder override from `TONESMITH_FFMPEG`.
pub fn ffmpeg_override() -> Option<PathBuf> {
    ffmpeg_override_with(|key| env::var(key).ok())
}

fn ffmpeg_override_with<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup(FFMPEG_ENV)).map(PathBuf::from)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
