//! CLI argument definitions for the Tonesmith command-line interface.
//!
//! All `#[derive(Parser)]`, `#[derive(Subcommand)]` and `#[derive(Args)]`
//! types are defined here, keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tonesmith_cli::config::OutputOptions;
use tonesmith_spec::Bitrate;

/// Tonesmith - Procedural Tone, Melody and Beat Generation
#[derive(Parser)]
#[command(name = "tonesmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render a single tone with a waveform or instrument voice
    Tone {
        /// Frequency in Hz
        #[arg(short, long, default_value_t = 440.0, allow_negative_numbers = true)]
        frequency: f64,

        /// Duration in seconds
        #[arg(short, long, default_value_t = 2.0)]
        duration: f64,

        /// Linear gain (values above 1.0 clip when written)
        #[arg(short, long, default_value_t = 0.5, allow_negative_numbers = true)]
        volume: f64,

        /// Waveform (sine, square, saw, triangle, noise) or instrument
        /// (piano, flute, pad, bass)
        #[arg(long, default_value = "sine")]
        voice: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compose a melody with the Markov model and render it with piano
    Melody {
        /// Number of notes
        #[arg(short, long, default_value_t = 16)]
        length: usize,

        /// Seconds per note
        #[arg(short, long, default_value_t = 0.3)]
        note_duration: f64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a 16-note melody in the mood of an emotion
    Emotion {
        /// happy, sad, romantic or suspense (unknown labels use happy)
        emotion: String,

        /// Seconds per note
        #[arg(short, long, default_value_t = 0.35)]
        note_duration: f64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a kick/snare pattern
    Beat {
        /// Tempo in beats per minute
        #[arg(short, long, default_value_t = 100.0, allow_negative_numbers = true)]
        tempo: f64,

        /// Comma-separated hits (kick, snare; anything else is a rest)
        #[arg(short, long, default_value = "kick,snare,kick,snare")]
        pattern: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate from a JSON request file
    Render {
        /// Path to the request file
        #[arg(short, long)]
        request: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Convert an existing WAV file to MP3
    Export {
        /// WAV file to convert
        wav: String,

        /// Destination MP3 path (".mp3" is appended when missing)
        mp3: String,

        /// MP3 bitrate (128k, 192k, 256k, 320k)
        #[arg(short, long, default_value = "192k")]
        bitrate: Bitrate,
    },

    /// Check ffmpeg, playback and output directory access
    Doctor,
}

/// Output, export and playback flags shared by generation commands.
#[derive(Args, Debug, Clone)]
pub(crate) struct OutputArgs {
    /// Seed for random choices (default: TONESMITH_SEED, else random)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Output directory (default: TONESMITH_OUT_DIR, else current directory)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Also export the clip as MP3 to this path
    #[arg(long)]
    pub mp3: Option<PathBuf>,

    /// MP3 bitrate (128k, 192k, 256k, 320k)
    #[arg(short, long, default_value = "192k")]
    pub bitrate: Bitrate,

    /// Play the clip with the system default player
    #[arg(long)]
    pub play: bool,

    /// Print a text preview of the first samples
    #[arg(long)]
    pub preview: bool,

    /// Output machine-readable JSON (no colored output)
    #[arg(long)]
    pub json: bool,
}

impl From<OutputArgs> for OutputOptions {
    fn from(args: OutputArgs) -> Self {
        Self {
            seed: args.seed,
            out_dir: args.out_dir,
            mp3: args.mp3,
            bitrate: args.bitrate,
            play: args.play,
            preview: args.preview,
            json: args.json,
        }
    }
}
