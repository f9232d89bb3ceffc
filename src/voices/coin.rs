//! Coin pickup.
//!
//! A bell: 880 Hz fundamental with overtones at 1.5×, 2× and 3×, plus a
//! short wobbling sparkle an octave up that is gone within ~40 ms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::{Envelope, Frequency, Oscillator},
    graph::{Layer, Patch},
};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinParams {
    pub frequency: f64,
    pub duration: f64,
}

impl Default for CoinParams {
    fn default() -> Self {
        Self {
            frequency: 880.0,
            duration: 0.2,
        }
    }
}

pub fn coin_collect(params: &CoinParams) -> Patch {
    let f = params.frequency;
    let bell = Oscillator::partials(
        Frequency::Fixed(f),
        &[(1.0, 0.5), (1.5, 0.3), (2.0, 0.2), (3.0, 0.1)],
    );

    Patch::new("coin-collect", params.duration, 3000.0)
        .layer(Layer::new("bell", bell))
        .layer(
            Layer::new("sparkle", Oscillator::wobble(f * 2.0, 500.0, 60.0))
                .gain(0.2)
                .shaped(Envelope::decay(25.0)),
        )
        .shaped(Envelope::attack_decay(12.0, 50.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_is_deterministic() {
        assert!(coin_collect(&CoinParams::default()).is_deterministic());
    }
}
