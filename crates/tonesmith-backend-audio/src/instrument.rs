//! Harmonic-stack instrument models.
//!
//! Each instrument is a fixed weighted sum of sine partials multiplied by an
//! exponential decay envelope. Outputs are not clipped: the piano stack
//! peaks near 1.75 at onset.

use tonesmith_spec::Instrument;

use crate::oscillator::sine;

/// Weighted sine partial, `weight · sin(2π·ratio·f·t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partial {
    /// Multiple of the requested frequency.
    pub ratio: f64,
    /// Linear weight.
    pub weight: f64,
}

const fn partial(ratio: f64, weight: f64) -> Partial {
    Partial { ratio, weight }
}

const PIANO: &[Partial] = &[partial(1.0, 1.0), partial(2.0, 0.5), partial(3.0, 0.25)];
const FLUTE: &[Partial] = &[partial(1.0, 1.0)];
const PAD: &[Partial] = &[partial(1.0, 0.6), partial(0.5, 0.3), partial(1.5, 0.2)];
const BASS: &[Partial] = &[partial(0.5, 1.0)];
const PLAIN: &[Partial] = &[partial(1.0, 1.0)];

/// Per-sample evaluation of an [`Instrument`].
pub trait InstrumentModel {
    /// Sine partials summed by [`InstrumentModel::sample`].
    fn partials(&self) -> &'static [Partial];

    /// Exponential decay rate `k` in `e^(-k·t)`, or `None` for sustained voices.
    fn decay_rate(&self) -> Option<f64>;

    /// Amplitude envelope at time `t`.
    fn envelope(&self, t: f64) -> f64 {
        match self.decay_rate() {
            Some(k) => (-k * t).exp(),
            None => 1.0,
        }
    }

    /// Returns one unscaled sample at time `t` seconds.
    fn sample(&self, frequency: f64, t: f64) -> f64 {
        let stack: f64 = self
            .partials()
            .iter()
            .map(|p| p.weight * sine(p.ratio * frequency, t))
            .sum();
        stack * self.envelope(t)
    }
}

impl InstrumentModel for Instrument {
    fn partials(&self) -> &'static [Partial] {
        match self {
            Instrument::Piano => PIANO,
            Instrument::Flute => FLUTE,
            Instrument::Pad => PAD,
            Instrument::Bass => BASS,
            Instrument::Plain => PLAIN,
        }
    }

    fn decay_rate(&self) -> Option<f64> {
        match self {
            Instrument::Piano => Some(3.0),
            Instrument::Flute => Some(0.8),
            Instrument::Bass => Some(1.5),
            Instrument::Pad | Instrument::Plain => None,
        }
    }
}
