use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::oscillator::progress;

/*
Envelope Shapes
===============

An envelope is a multiplier applied to a layer's raw oscillator output. All
shapes here are closed-form functions of elapsed time `t` (seconds) and
`progress = t / duration`, so evaluating sample 4000 does not require having
evaluated samples 0..3999.

Vocabulary
----------

  t          elapsed seconds since the start of the buffer (or window)
  progress   t / duration, 0.0 at the first sample, → 1.0 at the last
  rate (k)   exponential rate in 1/s; exp(-k·t) falls to 37% after 1/k s


Shapes
------

  Decay        exp(-k·t)
               Instant start, smooth tail. Starts at 1.0, so it clicks if
               used alone on a tonal layer.

  AttackDecay  exp(-k1·t) · (1 - exp(-k2·t))
               The onset term pulls t = 0 down to zero; with k2 ≫ k1 the
               peak lands at t = ln(1 + k2/k1) / k2.

                 1.0 ┐  ╭╮
                     │ ╱  ╲
                     │╱    ╲____
                 0.0 └──────────→ t

  Sweep        sin(progress·π) · exp(-progress·d)
               Rises and falls within the buffer; used by musical sweeps.

  Window       inner(t - start) while start ≤ t < end, else 0
               Carves a secondary burst out of a longer buffer. The inner
               envelope sees local time and a duration of (end - start).

  Periodic     inner(t mod period), with a duration of one period
               Repeats a shape through a long buffer; the background score
               uses it for melody sections and arpeggio steps.

Helpers used to compose recipe-specific shapes:

  Onset        1 - exp(-k·t)
  Linear       from → to across the buffer
  Ramp         min(1, t/attack), then a linear fade over the final
               (1 - fade_from) of the buffer
  Rise         0 until progress = from, then linear up to 1.0
  Swell        1 until progress = from, then 1 + (progress - from)·amount
  Product      the product of several shapes
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Unity,
    Decay { rate: f64 },
    AttackDecay { decay: f64, attack: f64 },
    Onset { rate: f64 },
    Sweep { damping: f64 },
    Linear { from: f64, to: f64 },
    Ramp { attack: f64, fade_from: f64 },
    Rise { from: f64 },
    Swell { from: f64, amount: f64 },
    Window {
        start: f64,
        end: f64,
        inner: Box<Envelope>,
    },
    Periodic {
        period: f64,
        inner: Box<Envelope>,
    },
    Product(Vec<Envelope>),
}

impl Envelope {
    pub fn decay(rate: f64) -> Self {
        Envelope::Decay { rate }
    }

    /// Fast rise at `attack`, then exponential fall at `decay`.
    pub fn attack_decay(decay: f64, attack: f64) -> Self {
        Envelope::AttackDecay { decay, attack }
    }

    /// Restrict `inner` to `[start, end)`.
    pub fn window(start: f64, end: f64, inner: Envelope) -> Self {
        Envelope::Window {
            start,
            end,
            inner: Box::new(inner),
        }
    }

    /// Restart `inner` every `period` seconds.
    pub fn every(period: f64, inner: Envelope) -> Self {
        Envelope::Periodic {
            period,
            inner: Box::new(inner),
        }
    }

    /// Multiply this envelope by another.
    pub fn times(self, other: Envelope) -> Self {
        match self {
            Envelope::Product(mut shapes) => {
                shapes.push(other);
                Envelope::Product(shapes)
            }
            Envelope::Unity => other,
            shape => Envelope::Product(vec![shape, other]),
        }
    }

    /// Amplitude multiplier at time `t` of a buffer `duration` seconds long.
    #[inline]
    pub fn level(&self, t: f64, duration: f64) -> f32 {
        self.level_f64(t, duration) as f32
    }

    fn level_f64(&self, t: f64, duration: f64) -> f64 {
        match self {
            Envelope::Unity => 1.0,
            Envelope::Decay { rate } => (-rate * t).exp(),
            Envelope::AttackDecay { decay, attack } => {
                (-decay * t).exp() * (1.0 - (-attack * t).exp())
            }
            Envelope::Onset { rate } => 1.0 - (-rate * t).exp(),
            Envelope::Sweep { damping } => {
                let p = progress(t, duration);
                (p * PI).sin() * (-p * damping).exp()
            }
            Envelope::Linear { from, to } => {
                let p = progress(t, duration);
                from + (to - from) * p
            }
            Envelope::Ramp { attack, fade_from } => {
                let rise = if *attack > 0.0 {
                    (t / attack).min(1.0)
                } else {
                    1.0
                };
                let p = progress(t, duration);
                let fade = if p > *fade_from && *fade_from < 1.0 {
                    (1.0 - (p - fade_from) / (1.0 - fade_from)).max(0.0)
                } else {
                    1.0
                };
                rise * fade
            }
            Envelope::Rise { from } => {
                let p = progress(t, duration);
                if p > *from && *from < 1.0 {
                    (p - from) / (1.0 - from)
                } else {
                    0.0
                }
            }
            Envelope::Swell { from, amount } => {
                let p = progress(t, duration);
                if p > *from {
                    1.0 + (p - from) * amount
                } else {
                    1.0
                }
            }
            Envelope::Window { start, end, inner } => {
                if t >= *start && t < *end {
                    inner.level_f64(t - start, end - start)
                } else {
                    0.0
                }
            }
            Envelope::Periodic { period, inner } => {
                if *period > 0.0 {
                    inner.level_f64(t.rem_euclid(*period), *period)
                } else {
                    inner.level_f64(t, duration)
                }
            }
            Envelope::Product(shapes) => shapes
                .iter()
                .map(|shape| shape.level_f64(t, duration))
                .product(),
        }
    }
}

/// Linear fade-in/fade-out multiplier for the outermost `fade_frames`
/// frames of a buffer, so the first and last samples land on zero.
#[inline]
pub fn boundary_fade(frame: usize, frames: usize, fade_frames: usize) -> f32 {
    if fade_frames == 0 || frames == 0 {
        return 1.0;
    }
    let fade = fade_frames.min(frames / 2).max(1) as f32;
    let from_start = frame as f32;
    let from_end = frames.saturating_sub(frame + 1) as f32;
    (from_start / fade).min(from_end / fade).min(1.0)
}
