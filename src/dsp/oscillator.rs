use std::f64::consts::TAU;

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Oscillator Bank
===============

Every oscillator here is evaluated directly from time rather than from a
running phase accumulator:

    amplitude = sin(2π · f(t) · t)

Because there is no state, any sample of any layer can be computed in
isolation, which is what lets a recipe be rendered in any order (or split
across threads) and still produce the same tonal output.

Frequency Laws
--------------

  Fixed        f(t) = f
  Sweep        f(t) = start + (end - start) · progress^curve
               curve = 1.0 is linear, < 1.0 rushes early, > 1.0 lingers
  Exponential  f(t) = base · 2^(octaves · progress)
               equal pitch change per unit of time (a "riser")
  Wobble       f(t) = center + depth · sin(rate · t)
               rate in radians per second

  progress = t / duration, in [0, 1)

Note that the frequency law is multiplied by t rather than integrated. A
swept sine therefore sweeps "faster" than its nominal law suggests; this is
the character the game's effects were tuned against.

Sources
-------

  Sine        single partial
  Harmonics   weighted partials sin(2π · ratio_k · f(t) · t)
  Noise       uniform white noise in [min, max], fresh draw per sample
  Crackle     random sign × uniform magnitude in [min, max]; never near zero,
              which reads as electrical discharge rather than hiss

Frequencies ≤ 0 are not rejected here: they give a flat or mirrored
waveform. Recipe constructors validate their own parameters.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frequency {
    Fixed(f64),
    Sweep { start: f64, end: f64, curve: f64 },
    Exponential { base: f64, octaves: f64 },
    Wobble { center: f64, depth: f64, rate: f64 },
}

impl Frequency {
    /// Instantaneous frequency in Hz.
    #[inline]
    pub fn at(&self, t: f64, duration: f64) -> f64 {
        match *self {
            Frequency::Fixed(hz) => hz,
            Frequency::Sweep { start, end, curve } => {
                let progress = progress(t, duration);
                start + (end - start) * progress.powf(curve)
            }
            Frequency::Exponential { base, octaves } => {
                base * 2.0_f64.powf(octaves * progress(t, duration))
            }
            Frequency::Wobble {
                center,
                depth,
                rate,
            } => center + depth * (rate * t).sin(),
        }
    }

    /// Same law transposed by a constant ratio.
    pub fn scaled(self, ratio: f64) -> Self {
        match self {
            Frequency::Fixed(hz) => Frequency::Fixed(hz * ratio),
            Frequency::Sweep { start, end, curve } => Frequency::Sweep {
                start: start * ratio,
                end: end * ratio,
                curve,
            },
            Frequency::Exponential { base, octaves } => Frequency::Exponential {
                base: base * ratio,
                octaves,
            },
            Frequency::Wobble {
                center,
                depth,
                rate,
            } => Frequency::Wobble {
                center: center * ratio,
                depth: depth * ratio,
                rate,
            },
        }
    }
}

/// One component of a harmonic stack.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partial {
    /// Multiple of the fundamental.
    pub ratio: f64,
    pub weight: f32,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Oscillator {
    Sine(Frequency),
    Harmonics {
        frequency: Frequency,
        partials: Vec<Partial>,
    },
    Noise { min: f32, max: f32 },
    Crackle { min: f32, max: f32 },
}

impl Oscillator {
    pub fn sine(hz: f64) -> Self {
        Oscillator::Sine(Frequency::Fixed(hz))
    }

    /// Sine whose frequency follows `start → end` along `progress^curve`.
    pub fn sweep(start: f64, end: f64, curve: f64) -> Self {
        Oscillator::Sine(Frequency::Sweep { start, end, curve })
    }

    /// Sine around `center` Hz, deviating by `depth` Hz at `rate` rad/s.
    pub fn wobble(center: f64, depth: f64, rate: f64) -> Self {
        Oscillator::Sine(Frequency::Wobble {
            center,
            depth,
            rate,
        })
    }

    /// Symmetric white noise in `[-amplitude, amplitude]`.
    pub fn noise(amplitude: f32) -> Self {
        Oscillator::Noise {
            min: -amplitude,
            max: amplitude,
        }
    }

    /// Integer harmonic series: weight `k` drives partial `k + 1`.
    pub fn harmonic_series(frequency: Frequency, weights: &[f32]) -> Self {
        let partials = weights
            .iter()
            .enumerate()
            .map(|(k, &weight)| Partial {
                ratio: (k + 1) as f64,
                weight,
            })
            .collect();
        Oscillator::Harmonics {
            frequency,
            partials,
        }
    }

    /// Stack of arbitrary `(ratio, weight)` partials.
    pub fn partials(frequency: Frequency, partials: &[(f64, f32)]) -> Self {
        Oscillator::Harmonics {
            frequency,
            partials: partials
                .iter()
                .map(|&(ratio, weight)| Partial { ratio, weight })
                .collect(),
        }
    }

    /// True if the oscillator draws from the random source.
    pub fn is_random(&self) -> bool {
        matches!(self, Oscillator::Noise { .. } | Oscillator::Crackle { .. })
    }

    /// Raw amplitude at local time `t` of a buffer `duration` seconds long.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, t: f64, duration: f64, rng: &mut R) -> f32 {
        match self {
            Oscillator::Sine(frequency) => (TAU * frequency.at(t, duration) * t).sin() as f32,
            Oscillator::Harmonics {
                frequency,
                partials,
            } => {
                let phase = TAU * frequency.at(t, duration) * t;
                partials
                    .iter()
                    .map(|p| p.weight * (phase * p.ratio).sin() as f32)
                    .sum()
            }
            Oscillator::Noise { min, max } => uniform(rng, *min, *max),
            Oscillator::Crackle { min, max } => {
                let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
                sign * uniform(rng, *min, *max)
            }
        }
    }
}

/// Uniform draw that tolerates swapped or equal bounds.
#[inline]
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, a: f32, b: f32) -> f32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.random_range(lo..=hi)
}

#[inline]
pub(crate) fn progress(t: f64, duration: f64) -> f64 {
    if duration > 0.0 {
        (t / duration).max(0.0)
    } else {
        0.0
    }
}
