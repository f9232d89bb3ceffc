//! Engine thrust.
//!
//! A rumbling, slightly unstable rocket burn meant to be retriggered while
//! the thrust key is held.
//!
//! # How It Works
//!
//! 1. Engine: three harmonics (0.4, 0.2, 0.1) of a base that drifts ±20 Hz
//!    at 8 rad/s
//! 2. The engine is shaken by a vibration term whose own rate wobbles
//!    around 30 Hz, and by a slow doppler shimmer
//! 3. Combustion noise pulses at 12 rad/s, finer hiss at 25 rad/s
//! 4. An 80 Hz rumble breathes at 6 rad/s
//! 5. Envelope: 200 ms linear attack, linear fade over the final 20%
//!
//! # Variations
//!
//! - Lower frequency = bigger ship

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::{Envelope, Frequency, Lfo, Oscillator, StereoImage},
    graph::{Layer, Patch},
};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustParams {
    pub frequency: f64,
    pub duration: f64,
}

impl Default for ThrustParams {
    fn default() -> Self {
        Self {
            frequency: 180.0,
            duration: 0.2,
        }
    }
}

/// Build the thrust patch.
pub fn thrust(params: &ThrustParams) -> Patch {
    let engine = Oscillator::harmonic_series(
        Frequency::Wobble {
            center: params.frequency,
            depth: 20.0,
            rate: 8.0,
        },
        &[0.4, 0.2, 0.1],
    );
    let vibration = Lfo {
        offset: 1.0,
        depth: 0.15,
        frequency: Frequency::Wobble {
            center: 30.0,
            depth: 10.0,
            rate: 4.0,
        },
    };

    Patch::new("thrust", params.duration, 3000.0)
        .layer(
            Layer::new("engine", engine)
                .modulated(vibration)
                .modulated(Lfo::angular(1.0, 0.05, 15.0)),
        )
        .layer(Layer::new("combustion", Oscillator::noise(0.5)).modulated(Lfo::angular(0.6, 0.4, 12.0)))
        .layer(Layer::new("hiss", Oscillator::noise(0.2)).modulated(Lfo::angular(0.3, 0.2, 25.0)))
        .layer(
            Layer::new("rumble", Oscillator::sine(80.0))
                .gain(0.3)
                .modulated(Lfo::angular(0.8, 0.2, 6.0)),
        )
        .shaped(Envelope::Ramp {
            attack: 0.2,
            fade_from: 0.8,
        })
        .stereo(StereoImage::Sway {
            base: 0.95,
            depth: 0.05,
            rate: 7.0,
        })
}
