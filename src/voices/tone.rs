//! Menu blip: a sine with a slightly detuned partner for a little chorus.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::{Envelope, Oscillator},
    graph::{Layer, Patch},
};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneParams {
    pub frequency: f64,
    pub duration: f64,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self {
            frequency: 880.0,
            duration: 0.05,
        }
    }
}

pub fn tone(params: &ToneParams) -> Patch {
    Patch::new("tone", params.duration, 2500.0)
        .layer(Layer::new("main", Oscillator::sine(params.frequency)).gain(0.7))
        .layer(Layer::new("detune", Oscillator::sine(params.frequency * 1.003)).gain(0.3))
        .shaped(Envelope::attack_decay(8.0, 30.0))
}
