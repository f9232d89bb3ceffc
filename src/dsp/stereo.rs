use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::{delay::DelayLine, oscillator::uniform};

/*
Stereo Imaging
==============

Every recipe is synthesised in mono and split into two channels at the end.

Images
------

  Centered   left = right = mono

  Sway       left  = mono · (base + depth · sin(rate · t))
             right = mono · (base - depth · sin(rate · t))
             A slow opposing gain offset. The two gains always sum to
             2 · base, and the sine averages out over the buffer, so neither
             side ends up louder.

  Scatter    left  = mono · (base + spread · u_l)
             right = mono · (base + spread · u_r),  u ∈ [-1, 1] per sample
             Independent random gains per channel; used for explosions
             where width should feel chaotic rather than swaying.

Decorrelation
-------------

Before the split, a delayed copy of the mono signal can be mixed back in:

    mono'[i] = mono[i] + mix · mono[i - delay]

With a delay of a handful of samples this is a very short comb that makes
the source feel larger. The first `delay` samples see silence from the line,
so the effect only starts after that offset.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StereoImage {
    Centered,
    Sway { base: f32, depth: f32, rate: f64 },
    Scatter { base: f32, spread: f32 },
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decorrelation {
    pub delay_samples: usize,
    pub mix: f32,
}

/// Stateful splitter driven once per sample, in order.
pub struct StereoStage {
    image: StereoImage,
    decorrelation: Option<(DelayLine, f32)>,
}

impl StereoStage {
    pub fn new(image: StereoImage, decorrelation: Option<Decorrelation>) -> Self {
        Self {
            image,
            decorrelation: decorrelation.map(|d| (DelayLine::new(d.delay_samples), d.mix)),
        }
    }

    /// Split one mono sample at time `t` into `(left, right)`.
    #[inline]
    pub fn process<R: Rng + ?Sized>(&mut self, mono: f32, t: f64, rng: &mut R) -> (f32, f32) {
        let signal = match &mut self.decorrelation {
            Some((line, mix)) => mono + *mix * line.next_sample(mono),
            None => mono,
        };

        match self.image {
            StereoImage::Centered => (signal, signal),
            StereoImage::Sway { base, depth, rate } => {
                let offset = depth * (rate * t).sin() as f32;
                (signal * (base + offset), signal * (base - offset))
            }
            StereoImage::Scatter { base, spread } => {
                let left = base + spread * uniform(rng, -1.0, 1.0);
                let right = base + spread * uniform(rng, -1.0, 1.0);
                (signal * left, signal * right)
            }
        }
    }
}
