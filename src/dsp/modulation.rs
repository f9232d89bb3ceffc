use std::f64::consts::TAU;

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::oscillator::{uniform, Frequency};

/*
Modulation Terms
================

A modulation term is a gain multiplier that moves over time. The recipes use
two kinds:

LFO        offset + depth · sin(2π · f(t) · t)

           With offset = 1.0 and a small depth this is tremolo (when applied
           to amplitude) or vibrato-like shimmer. With offset = 0.0 and
           depth = 1.0 it is a ring modulator. The frequency is a full
           `Frequency` law, so an LFO can itself wobble:

               1 + 0.15 · sin(2π · (30 + 10·sin 4t) · t)   (engine vibration)

           Many of the game's terms were tuned as sin(k · t) with k in rad/s;
           `Lfo::angular` converts those so the constants read the same.

Jitter     uniform random gain in [min, max], fresh every sample. Roughens
           noise layers so repeated debris bursts never sound identical.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lfo {
    pub offset: f32,
    pub depth: f32,
    pub frequency: Frequency,
}

impl Lfo {
    /// LFO at a fixed rate in Hz.
    pub fn hz(offset: f32, depth: f32, hz: f64) -> Self {
        Self {
            offset,
            depth,
            frequency: Frequency::Fixed(hz),
        }
    }

    /// LFO written as `offset + depth · sin(rate · t)`, rate in rad/s.
    pub fn angular(offset: f32, depth: f32, rate: f64) -> Self {
        Self::hz(offset, depth, rate / TAU)
    }

    #[inline]
    pub fn value(&self, t: f64, duration: f64) -> f32 {
        let phase = TAU * self.frequency.at(t, duration) * t;
        self.offset + self.depth * phase.sin() as f32
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Modulation {
    Lfo(Lfo),
    Jitter { min: f32, max: f32 },
}

impl Modulation {
    /// Unipolar tremolo: `1 + depth · sin(2π · hz · t)`.
    pub fn tremolo(depth: f32, hz: f64) -> Self {
        Modulation::Lfo(Lfo::hz(1.0, depth, hz))
    }

    /// Ring modulation by `sin(rate · t)`, rate in rad/s.
    pub fn ring(rate: f64) -> Self {
        Modulation::Lfo(Lfo::angular(0.0, 1.0, rate))
    }

    pub fn is_random(&self) -> bool {
        matches!(self, Modulation::Jitter { .. })
    }

    #[inline]
    pub fn gain<R: Rng + ?Sized>(&self, t: f64, duration: f64, rng: &mut R) -> f32 {
        match self {
            Modulation::Lfo(lfo) => lfo.value(t, duration),
            Modulation::Jitter { min, max } => uniform(rng, *min, *max),
        }
    }
}

impl From<Lfo> for Modulation {
    fn from(lfo: Lfo) -> Self {
        Modulation::Lfo(lfo)
    }
}
