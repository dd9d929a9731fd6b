//! CLI command implementations

pub mod beat;
pub mod doctor;
pub mod emotion;
pub mod export;
pub mod generate;
pub mod json_output;
pub mod melody;
pub mod render;
pub mod tone;

mod reporting;
