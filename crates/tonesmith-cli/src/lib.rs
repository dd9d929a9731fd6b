//! Tonesmith CLI library.
//!
//! This crate provides the core functionality for the `tonesmith` binary:
//! request dispatch, clip output, MP3 transcoding, playback and the
//! command implementations.

pub mod commands;
pub mod config;
pub mod dispatch;
pub mod output;
pub mod playback;
pub mod preview;
pub mod transcode;
