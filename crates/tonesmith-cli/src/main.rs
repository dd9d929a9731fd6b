//! Tonesmith CLI - Command-line interface for procedural audio generation
//!
//! This binary renders tones, Markov and emotion melodies, and drum beats to
//! WAV files, with optional MP3 export and playback.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use cli_args::{Cli, Commands};
use tonesmith_cli::commands;
use tonesmith_cli::config::OutputOptions;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tone {
            frequency,
            duration,
            volume,
            voice,
            output,
        } => commands::tone::run(
            frequency,
            duration,
            volume,
            &voice,
            &OutputOptions::from(output),
        ),
        Commands::Melody {
            length,
            note_duration,
            output,
        } => commands::melody::run(length, note_duration, &OutputOptions::from(output)),
        Commands::Emotion {
            emotion,
            note_duration,
            output,
        } => commands::emotion::run(&emotion, note_duration, &OutputOptions::from(output)),
        Commands::Beat {
            tempo,
            pattern,
            output,
        } => commands::beat::run(tempo, &pattern, &OutputOptions::from(output)),
        Commands::Render { request, output } => {
            commands::render::run(&request, &OutputOptions::from(output))
        }
        Commands::Export { wav, mp3, bitrate } => commands::export::run(&wav, &mp3, bitrate),
        Commands::Doctor => commands::doctor::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tonesmith_spec::Bitrate;

    #[test]
    fn test_cli_parses_tone_defaults() {
        let cli = Cli::try_parse_from(["tonesmith", "tone"]).unwrap();
        match cli.command {
            Commands::Tone {
                frequency,
                duration,
                volume,
                voice,
                output,
            } => {
                assert_eq!(frequency, 440.0);
                assert_eq!(duration, 2.0);
                assert_eq!(volume, 0.5);
                assert_eq!(voice, "sine");
                assert_eq!(output.bitrate, Bitrate::K192);
                assert!(output.seed.is_none());
                assert!(!output.play);
            }
            _ => panic!("expected tone command"),
        }
    }

    #[test]
    fn test_cli_parses_negative_volume() {
        let cli = Cli::try_parse_from(["tonesmith", "tone", "--volume", "-1"]).unwrap();
        match cli.command {
            Commands::Tone { volume, .. } => assert_eq!(volume, -1.0),
            _ => panic!("expected tone command"),
        }
    }

    #[test]
    fn test_cli_parses_output_flags() {
        let cli = Cli::try_parse_from([
            "tonesmith",
            "beat",
            "--tempo",
            "120",
            "--pattern",
            "kick,rest,snare",
            "--seed",
            "7",
            "--out-dir",
            "clips",
            "--mp3",
            "groove",
            "--bitrate",
            "320k",
            "--preview",
        ])
        .unwrap();
        match cli.command {
            Commands::Beat {
                tempo,
                pattern,
                output,
            } => {
                assert_eq!(tempo, 120.0);
                assert_eq!(pattern, "kick,rest,snare");
                let options = OutputOptions::from(output);
                assert_eq!(options.seed, Some(7));
                assert_eq!(options.out_dir, Some(PathBuf::from("clips")));
                assert_eq!(options.mp3, Some(PathBuf::from("groove")));
                assert_eq!(options.bitrate, Bitrate::K320);
                assert!(options.preview);
            }
            _ => panic!("expected beat command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_bitrate() {
        assert!(Cli::try_parse_from(["tonesmith", "export", "a.wav", "b.mp3", "-b", "96k"]).is_err());
    }

    #[test]
    fn test_cli_parses_emotion_positional() {
        let cli = Cli::try_parse_from(["tonesmith", "emotion", "suspense"]).unwrap();
        match cli.command {
            Commands::Emotion {
                emotion,
                note_duration,
                ..
            } => {
                assert_eq!(emotion, "suspense");
                assert_eq!(note_duration, 0.35);
            }
            _ => panic!("expected emotion command"),
        }
    }

    #[test]
    fn test_cli_parses_doctor() {
        let cli = Cli::try_parse_from(["tonesmith", "doctor"]).unwrap();
        assert!(matches!(cli.command, Commands::Doctor));
    }
}
