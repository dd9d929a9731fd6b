//! Shared generation flow
//!
//! Every generation command builds a request and hands it here: resolve
//! settings, validate and render, write the WAV, then the optional MP3
//! export, preview and playback.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tonesmith_backend_audio::analysis::BufferStats;
use tonesmith_spec::{BackendError, GenerationRequest, ValidationError, ValidationWarning};

use super::json_output::{
    error_codes, GenerateOutput, GenerateResult, JsonError, JsonNote, JsonStats, JsonWarning,
};
use super::reporting;
use crate::config::{OutputOptions, Settings};
use crate::dispatch::{dispatch_generate, DispatchError, Generated};
use crate::output::write_clip;
use crate::playback::{play_detached, PlaybackError};
use crate::transcode::{export_mp3, TranscodeError};

/// Exit code for a request rejected at validation.
pub const EXIT_INVALID: u8 = 1;
/// Exit code for a generation, write or export failure.
pub const EXIT_FAILED: u8 = 2;

enum Failure {
    Invalid(Vec<ValidationError>),
    Generation(DispatchError),
    Write(anyhow::Error),
}

struct Produced {
    generated: Generated,
    wav_path: PathBuf,
    mp3: Option<Result<PathBuf, TranscodeError>>,
    playback: Option<Result<(), PlaybackError>>,
}

impl Produced {
    /// Export failures other than a missing encoder fail the run.
    fn export_failed(&self) -> bool {
        matches!(
            &self.mp3,
            Some(Err(err)) if !matches!(err, TranscodeError::EncoderNotFound { .. })
        )
    }
}

/// Run one generation request
///
/// # Arguments
/// * `request` - The request to render
/// * `options` - Output, export and playback options
/// * `notices` - Warnings raised while building the request (e.g. label fallbacks)
///
/// # Returns
/// Exit code: 0 success, 1 invalid request, 2 generation or export failure
pub(crate) fn run_request(
    request: GenerationRequest,
    options: &OutputOptions,
    notices: Vec<ValidationWarning>,
) -> Result<ExitCode> {
    let settings = Settings::resolve(options)?;
    let outcome = execute(&request, &settings, options);

    if options.json {
        report_json(&request, &settings, notices, outcome)
    } else {
        report_human(&request, &settings, options, notices, outcome)
    }
}

fn execute(
    request: &GenerationRequest,
    settings: &Settings,
    options: &OutputOptions,
) -> Result<Produced, Failure> {
    let generated = dispatch_generate(request, settings.seed).map_err(|err| match err {
        DispatchError::InvalidRequest(errors) => Failure::Invalid(errors),
        other => Failure::Generation(other),
    })?;

    let wav_path = write_clip(&settings.out_dir, &request.file_stem(), &generated.output.wav)
        .map_err(Failure::Write)?;

    let mp3 = options.mp3.as_ref().map(|target| {
        export_mp3(
            settings.ffmpeg.as_deref(),
            &wav_path,
            target,
            options.bitrate,
        )
    });

    let playback = options.play.then(|| play_detached(&wav_path));

    Ok(Produced {
        generated,
        wav_path,
        mp3,
        playback,
    })
}

fn report_human(
    request: &GenerationRequest,
    settings: &Settings,
    options: &OutputOptions,
    notices: Vec<ValidationWarning>,
    outcome: Result<Produced, Failure>,
) -> Result<ExitCode> {
    println!("{} {}", "Generating:".cyan().bold(), request.mode());
    println!(
        "{} {} ({})",
        "Seed:".dimmed(),
        settings.seed,
        settings.seed_source.as_str()
    );
    println!("{} {}", "Output dir:".dimmed(), settings.out_dir.display());

    let produced = match outcome {
        Ok(produced) => produced,
        Err(Failure::Invalid(errors)) => {
            reporting::print_validation_warnings(&notices);
            reporting::print_validation_errors(&errors);
            println!("\n{} Request is invalid", "FAILED".red().bold());
            return Ok(ExitCode::from(EXIT_INVALID));
        }
        Err(Failure::Generation(err)) => {
            eprintln!("\n{} [{}] {}", "error".red().bold(), err.code(), err);
            return Ok(ExitCode::from(EXIT_FAILED));
        }
        Err(Failure::Write(err)) => {
            eprintln!("\n{} {:#}", "error".red().bold(), err);
            return Ok(ExitCode::from(EXIT_FAILED));
        }
    };

    let mut warnings = notices;
    warnings.extend(produced.generated.warnings.iter().cloned());
    reporting::print_validation_warnings(&warnings);
    reporting::print_notes(&produced.generated.notes);

    let buffer = &produced.generated.output.buffer;
    reporting::print_stats(&BufferStats::of(buffer));
    if options.preview {
        reporting::print_preview(buffer);
    }

    println!();
    println!(
        "  {} {}",
        "ok".green(),
        produced.wav_path.display().to_string().bold()
    );
    println!(
        "     {}",
        format!("pcm {}", &produced.generated.output.wav.pcm_hash[..16]).dimmed()
    );

    match &produced.mp3 {
        Some(Ok(path)) => println!(
            "  {} {} ({})",
            "ok".green(),
            path.display(),
            options.bitrate
        ),
        Some(Err(err @ TranscodeError::EncoderNotFound { .. })) => {
            eprintln!("  {} MP3 export skipped: {}", "!!".yellow(), err);
        }
        Some(Err(err)) => {
            eprintln!("  {} [{}] MP3 export failed: {}", "x".red(), err.code(), err);
        }
        None => {}
    }

    if let Some(Err(err)) = &produced.playback {
        eprintln!("  {} Playback unavailable: {}", "!!".yellow(), err);
    }

    println!();
    if produced.export_failed() {
        println!(
            "{} WAV written, MP3 export failed",
            "WARNING".yellow().bold()
        );
        Ok(ExitCode::from(EXIT_FAILED))
    } else {
        println!("{} Generated {}", "SUCCESS".green().bold(), request.mode());
        Ok(ExitCode::SUCCESS)
    }
}

fn report_json(
    request: &GenerationRequest,
    settings: &Settings,
    notices: Vec<ValidationWarning>,
    outcome: Result<Produced, Failure>,
) -> Result<ExitCode> {
    let mut warnings: Vec<JsonWarning> = notices.iter().map(JsonWarning::from).collect();

    let (output, code) = match outcome {
        Err(Failure::Invalid(errors)) => (
            GenerateOutput::failure(errors.iter().map(JsonError::from).collect(), warnings),
            EXIT_INVALID,
        ),
        Err(Failure::Generation(err)) => (
            GenerateOutput::failure(
                vec![JsonError::new(error_codes::GENERATION_ERROR, err.to_string())],
                warnings,
            ),
            EXIT_FAILED,
        ),
        Err(Failure::Write(err)) => (
            GenerateOutput::failure(
                vec![JsonError::new(error_codes::FILE_WRITE, format!("{:#}", err))],
                warnings,
            ),
            EXIT_FAILED,
        ),
        Ok(produced) => {
            warnings.extend(produced.generated.warnings.iter().map(JsonWarning::from));
            if let Some(Err(err)) = &produced.playback {
                warnings.push(JsonWarning::new(err.code(), err.to_string()));
            }

            let mut errors = Vec::new();
            let mp3_path = match &produced.mp3 {
                Some(Ok(path)) => Some(path.display().to_string()),
                Some(Err(err @ TranscodeError::EncoderNotFound { .. })) => {
                    warnings.push(JsonWarning::new(err.code(), err.to_string()));
                    None
                }
                Some(Err(err)) => {
                    errors.push(JsonError::new(error_codes::EXPORT_ERROR, err.to_string()));
                    None
                }
                None => None,
            };

            let generated = &produced.generated;
            let result = GenerateResult {
                mode: request.mode().to_string(),
                seed: settings.seed,
                wav_path: produced.wav_path.display().to_string(),
                pcm_hash: generated.output.wav.pcm_hash.clone(),
                mp3_path,
                notes: generated
                    .notes
                    .iter()
                    .map(|n| JsonNote {
                        name: n.name().to_string(),
                        frequency: n.frequency(),
                    })
                    .collect(),
                stats: JsonStats::from(&BufferStats::of(&generated.output.buffer)),
            };

            let code = if produced.export_failed() {
                EXIT_FAILED
            } else {
                0
            };
            let mut output = GenerateOutput::success(warnings, result);
            output.errors = errors;
            (output, code)
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::from(code))
}
