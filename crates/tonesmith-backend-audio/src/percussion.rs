//! Percussion renderer.
//!
//! Kick and snare are fixed decaying generators. A beat is one slot per hit,
//! each `60 / tempo` seconds long, concatenated in pattern order.

use rand_pcg::Pcg32;
use tonesmith_spec::{BeatHit, SAMPLE_RATE};

use crate::buffer::{num_samples, SampleBuffer};
use crate::oscillator::{noise, sine};

/// Kick drum pitch in Hz.
pub const KICK_FREQUENCY: f64 = 60.0;
/// Kick envelope decay rate.
pub const KICK_DECAY: f64 = 8.0;
/// Snare envelope decay rate.
pub const SNARE_DECAY: f64 = 20.0;

/// `sin(2π·60·t) · e^(-8t)` over `duration` seconds.
pub fn render_kick(duration: f64) -> SampleBuffer {
    SampleBuffer::from_fn(duration, SAMPLE_RATE, |t| {
        sine(KICK_FREQUENCY, t) * (-KICK_DECAY * t).exp()
    })
}

/// Uniform noise times `e^(-20t)` over `duration` seconds.
pub fn render_snare(duration: f64, rng: &mut Pcg32) -> SampleBuffer {
    SampleBuffer::from_fn(duration, SAMPLE_RATE, |t| {
        noise(rng) * (-SNARE_DECAY * t).exp()
    })
}

/// Renders one slot of `unit` seconds.
pub fn render_hit(hit: BeatHit, unit: f64, rng: &mut Pcg32) -> SampleBuffer {
    match hit {
        BeatHit::Kick => render_kick(unit),
        BeatHit::Snare => render_snare(unit, rng),
        BeatHit::Rest => SampleBuffer::silence(unit, SAMPLE_RATE),
    }
}

/// Renders a pattern at `tempo` BPM.
///
/// Tempo is not checked. Callers reject non-positive tempos first; a zero
/// tempo gives an infinite slot, which renders as zero samples.
pub fn render_beat(pattern: &[BeatHit], tempo: f64, rng: &mut Pcg32) -> SampleBuffer {
    let unit = 60.0 / tempo;
    let mut samples = Vec::with_capacity(pattern.len() * num_samples(unit, SAMPLE_RATE));
    for &hit in pattern {
        samples.extend(render_hit(hit, unit, rng).samples);
    }
    SampleBuffer::from_samples(samples, SAMPLE_RATE)
}
