//! Shield activation.
//!
//! # How It Works
//!
//! 1. A sine sweeps linearly from 200 Hz up to 1 kHz across the buffer
//! 2. Decaying white-noise crackle, exp(-3t)
//! 3. Two steady harmonics at 400 and 600 Hz hold the "field" tone
//! 4. The whole mix flutters with a 25 Hz tremolo (±30%)
//! 5. Envelope: exp(-4t)(1 - exp(-20t)), a soft attack and long tail

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::{Envelope, Modulation, Oscillator},
    graph::{Layer, Patch},
};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShieldParams {
    pub duration: f64,
}

impl Default for ShieldParams {
    fn default() -> Self {
        Self { duration: 0.3 }
    }
}

pub fn shield_activate(params: &ShieldParams) -> Patch {
    Patch::new("shield-activate", params.duration, 3500.0)
        .layer(Layer::new("sweep", Oscillator::sweep(200.0, 1000.0, 1.0)).gain(0.4))
        .layer(
            Layer::new("crackle", Oscillator::noise(1.0))
                .gain(0.2)
                .shaped(Envelope::decay(3.0)),
        )
        .layer(Layer::new("field_400", Oscillator::sine(400.0)).gain(0.3))
        .layer(Layer::new("field_600", Oscillator::sine(600.0)).gain(0.2))
        .shaped(Envelope::attack_decay(4.0, 20.0))
        .modulated(Modulation::tremolo(0.3, 25.0))
}
