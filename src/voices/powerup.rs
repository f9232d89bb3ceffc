//! Power-up pickup.
//!
//! # How It Works
//!
//! 1. Riser: `base · 2^(2.5·progress)`, two and a half octaves up, with a
//!    fifth and an octave stacked on it (0.6, 0.3, 0.2)
//! 2. Energy burst: a sine eight times the base that fades in linearly
//!    over the final 30% of the buffer
//! 3. 15 Hz tremolo (±20%) across everything
//! 4. Envelope: onset 1 - exp(-8t), sagging 30% over the buffer, then
//!    swelling back up through the final 20%
//!
//! # Variations
//!
//! - Higher base = more "arcade", lower base = more "level up"

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::{Envelope, Frequency, Modulation, Oscillator},
    graph::{Layer, Patch},
};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerupParams {
    pub base_frequency: f64,
    pub duration: f64,
}

impl Default for PowerupParams {
    fn default() -> Self {
        Self {
            base_frequency: 220.0,
            duration: 0.3,
        }
    }
}

pub fn powerup(params: &PowerupParams) -> Patch {
    let riser = Oscillator::partials(
        Frequency::Exponential {
            base: params.base_frequency,
            octaves: 2.5,
        },
        &[(1.0, 0.6), (1.5, 0.3), (2.0, 0.2)],
    );
    let envelope = Envelope::Linear { from: 1.0, to: 0.7 }
        .times(Envelope::Onset { rate: 8.0 })
        .times(Envelope::Swell {
            from: 0.8,
            amount: 2.0,
        });

    Patch::new("powerup", params.duration, 3500.0)
        .layer(Layer::new("riser", riser))
        .layer(
            Layer::new("burst", Oscillator::sine(params.base_frequency * 8.0))
                .gain(0.4)
                .shaped(Envelope::Rise { from: 0.7 }),
        )
        .shaped(envelope)
        .modulated(Modulation::tremolo(0.2, 15.0))
}
