//! Laser shot.
//!
//! A short sci-fi "pew": a bright tone that dives in pitch, a fast-wobbling
//! zap on top, a breath of crackle and a low thump for weight.
//!
//! # How It Works
//!
//! 1. Main tone sweeps linearly from 1.5× down to 0.7× the base frequency
//! 2. Zap sits at 3× the base, its pitch wobbling ±1 kHz at 80 rad/s
//! 3. White-noise crackle dies away at exp(-25t)
//! 4. A 60 Hz sine thump dies away at exp(-30t)
//! 5. Everything shares a sharp attack-gated envelope: exp(-18t)(1 - exp(-100t))
//! 6. Stereo sways 0.9 ± 0.1 at 40 rad/s
//!
//! # Variations
//!
//! - Lower frequency = heavier blaster
//! - Longer duration = the dive gets slower, the envelope stays the same

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::{Envelope, Oscillator, StereoImage},
    graph::{Layer, Patch},
};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaserParams {
    pub frequency: f64,
    pub duration: f64,
}

impl Default for LaserParams {
    fn default() -> Self {
        Self {
            frequency: 600.0,
            duration: 0.1,
        }
    }
}

/// Build the laser patch.
pub fn laser(params: &LaserParams) -> Patch {
    let f = params.frequency;

    Patch::new("laser", params.duration, 4000.0)
        .layer(Layer::new("main", Oscillator::sweep(f * 1.5, f * 0.7, 1.0)).gain(0.6))
        .layer(Layer::new("zap", Oscillator::wobble(f * 3.0, 1000.0, 80.0)).gain(0.3))
        .layer(
            Layer::new("crackle", Oscillator::noise(1.0))
                .gain(0.1)
                .shaped(Envelope::decay(25.0)),
        )
        .layer(
            Layer::new("thump", Oscillator::sine(60.0))
                .gain(0.4)
                .shaped(Envelope::decay(30.0)),
        )
        .shaped(Envelope::attack_decay(18.0, 100.0))
        .stereo(StereoImage::Sway {
            base: 0.9,
            depth: 0.1,
            rate: 40.0,
        })
}
