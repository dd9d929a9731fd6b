//! Basic waveform generators.
//!
//! Every waveform is evaluated directly from absolute time rather than an
//! accumulated phase, so sample `i` depends only on `i / sample_rate` and
//! renders are bit-identical across calls.

use std::f64::consts::PI;

use rand::Rng;
use rand_pcg::Pcg32;
use tonesmith_spec::Waveform;

/// 2π.
pub const TWO_PI: f64 = 2.0 * PI;

/// `sin(2π·f·t)`.
#[inline]
pub fn sine(frequency: f64, t: f64) -> f64 {
    (TWO_PI * frequency * t).sin()
}

/// Sign of the sine, with zero mapped to `+1`.
#[inline]
pub fn square(frequency: f64, t: f64) -> f64 {
    if sine(frequency, t) >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Zero-centred sawtooth with period `1/f`.
#[inline]
pub fn saw(frequency: f64, t: f64) -> f64 {
    let phase = t * frequency;
    2.0 * (phase - (0.5 + phase).floor())
}

/// Triangle derived from the sawtooth phase.
#[inline]
pub fn triangle(frequency: f64, t: f64) -> f64 {
    2.0 * saw(frequency, t).abs() - 1.0
}

/// Uniform white noise in `[-1, 1]`.
#[inline]
pub fn noise(rng: &mut Pcg32) -> f64 {
    rng.gen_range(-1.0..=1.0)
}

/// Per-sample evaluation of a [`Waveform`].
pub trait Oscillator {
    /// Returns one unscaled sample at time `t` seconds.
    ///
    /// Only [`Waveform::Noise`] draws from `rng`; the periodic waveforms
    /// leave it untouched.
    fn sample(&self, frequency: f64, t: f64, rng: &mut Pcg32) -> f64;
}

impl Oscillator for Waveform {
    fn sample(&self, frequency: f64, t: f64, rng: &mut Pcg32) -> f64 {
        match self {
            Waveform::Sine => sine(frequency, t),
            Waveform::Square => square(frequency, t),
            Waveform::Saw => saw(frequency, t),
            Waveform::Triangle => triangle(frequency, t),
            Waveform::Noise => noise(rng),
        }
    }
}
