//! Menu confirm: a curved pitch sweep with a fifth above it.
//!
//! The frequency follows `start + (end - start) · progress^0.7`, so most of
//! the glide happens early. The whole sound rises and falls inside the
//! buffer (`sin(progress·π) · exp(-2·progress)`) with an 8 Hz vibrato.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::{Envelope, Frequency, Modulation, Oscillator},
    graph::{Layer, Patch},
};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSweepParams {
    pub start_frequency: f64,
    pub end_frequency: f64,
    pub duration: f64,
}

impl Default for ToneSweepParams {
    fn default() -> Self {
        Self {
            start_frequency: 440.0,
            end_frequency: 880.0,
            duration: 0.1,
        }
    }
}

pub fn tone_sweep(params: &ToneSweepParams) -> Patch {
    let glide = Frequency::Sweep {
        start: params.start_frequency,
        end: params.end_frequency,
        curve: 0.7,
    };

    Patch::new("tone-sweep", params.duration, 2800.0)
        .layer(Layer::new("sweep", Oscillator::Sine(glide)).gain(0.7))
        .layer(Layer::new("fifth", Oscillator::Sine(glide.scaled(1.5))).gain(0.3))
        .shaped(Envelope::Sweep { damping: 2.0 })
        .modulated(Modulation::tremolo(0.05, 8.0))
}
