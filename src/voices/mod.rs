//! The game's sound-effect recipes.
//!
//! Each recipe is a fixed composition of layers with its own parameter
//! struct. `Recipe` is the closed set of all eight; `Recipe::compile`
//! validates parameters and produces a `Patch` ready to render.
//!
//! # Example
//!
//! ```ignore
//! use rocksynth::{synthesize_seeded, Recipe, RecipeKind, SynthConfig};
//!
//! let kind: RecipeKind = "laser".parse()?;
//! let buffer = synthesize_seeded(&Recipe::from(kind), &SynthConfig::default(), 7)?;
//! ```

mod coin;
mod explosion;
mod laser;
mod powerup;
mod shield;
mod simple;
mod thrust;
mod tone;
mod tone_sweep;

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::SynthError, graph::Patch};

pub use coin::{coin_collect, CoinParams};
pub use explosion::{explosion, ExplosionParams};
pub use laser::{laser, LaserParams};
pub use powerup::{powerup, PowerupParams};
pub use shield::{shield_activate, ShieldParams};
pub use simple::simple_tone;
pub use thrust::{thrust, ThrustParams};
pub use tone::{tone, ToneParams};
pub use tone_sweep::{tone_sweep, ToneSweepParams};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeKind {
    Laser,
    Explosion,
    Thrust,
    Tone,
    ToneSweep,
    ShieldActivate,
    CoinCollect,
    Powerup,
}

impl RecipeKind {
    pub const ALL: [RecipeKind; 8] = [
        RecipeKind::Laser,
        RecipeKind::Explosion,
        RecipeKind::Thrust,
        RecipeKind::Tone,
        RecipeKind::ToneSweep,
        RecipeKind::ShieldActivate,
        RecipeKind::CoinCollect,
        RecipeKind::Powerup,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RecipeKind::Laser => "laser",
            RecipeKind::Explosion => "explosion",
            RecipeKind::Thrust => "thrust",
            RecipeKind::Tone => "tone",
            RecipeKind::ToneSweep => "tone-sweep",
            RecipeKind::ShieldActivate => "shield-activate",
            RecipeKind::CoinCollect => "coin-collect",
            RecipeKind::Powerup => "powerup",
        }
    }
}

impl fmt::Display for RecipeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecipeKind {
    type Err = SynthError;

    /// Accepts the kebab-case name, case-insensitively, with `_` for `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        RecipeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| SynthError::UnknownRecipe(s.to_string()))
    }
}

/// A recipe together with its parameters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Recipe {
    Laser(LaserParams),
    Explosion(ExplosionParams),
    Thrust(ThrustParams),
    Tone(ToneParams),
    ToneSweep(ToneSweepParams),
    ShieldActivate(ShieldParams),
    CoinCollect(CoinParams),
    Powerup(PowerupParams),
}

impl Recipe {
    pub fn kind(&self) -> RecipeKind {
        match self {
            Recipe::Laser(_) => RecipeKind::Laser,
            Recipe::Explosion(_) => RecipeKind::Explosion,
            Recipe::Thrust(_) => RecipeKind::Thrust,
            Recipe::Tone(_) => RecipeKind::Tone,
            Recipe::ToneSweep(_) => RecipeKind::ToneSweep,
            Recipe::ShieldActivate(_) => RecipeKind::ShieldActivate,
            Recipe::CoinCollect(_) => RecipeKind::CoinCollect,
            Recipe::Powerup(_) => RecipeKind::Powerup,
        }
    }

    /// Length of the rendered buffer in seconds.
    pub fn duration(&self) -> f64 {
        match self {
            Recipe::Laser(p) => p.duration,
            Recipe::Explosion(p) => p.duration,
            Recipe::Thrust(p) => p.duration,
            Recipe::Tone(p) => p.duration,
            Recipe::ToneSweep(p) => p.duration,
            Recipe::ShieldActivate(p) => p.duration,
            Recipe::CoinCollect(p) => p.duration,
            Recipe::Powerup(p) => p.duration,
        }
    }

    /// Validate parameters and build the layer graph.
    pub fn compile(&self) -> Result<Patch, SynthError> {
        match self {
            Recipe::Laser(p) => {
                SynthError::require_positive("frequency", p.frequency)?;
                SynthError::require_positive("duration", p.duration)?;
                Ok(laser(p))
            }
            Recipe::Explosion(p) => {
                SynthError::require_positive("duration", p.duration)?;
                Ok(explosion(p))
            }
            Recipe::Thrust(p) => {
                SynthError::require_positive("frequency", p.frequency)?;
                SynthError::require_positive("duration", p.duration)?;
                Ok(thrust(p))
            }
            Recipe::Tone(p) => {
                SynthError::require_positive("frequency", p.frequency)?;
                SynthError::require_positive("duration", p.duration)?;
                Ok(tone(p))
            }
            Recipe::ToneSweep(p) => {
                SynthError::require_positive("start_frequency", p.start_frequency)?;
                SynthError::require_positive("end_frequency", p.end_frequency)?;
                SynthError::require_positive("duration", p.duration)?;
                Ok(tone_sweep(p))
            }
            Recipe::ShieldActivate(p) => {
                SynthError::require_positive("duration", p.duration)?;
                Ok(shield_activate(p))
            }
            Recipe::CoinCollect(p) => {
                SynthError::require_positive("frequency", p.frequency)?;
                SynthError::require_positive("duration", p.duration)?;
                Ok(coin_collect(p))
            }
            Recipe::Powerup(p) => {
                SynthError::require_positive("base_frequency", p.base_frequency)?;
                SynthError::require_positive("duration", p.duration)?;
                Ok(powerup(p))
            }
        }
    }
}

impl From<RecipeKind> for Recipe {
    /// The recipe with the parameters the game ships with.
    fn from(kind: RecipeKind) -> Self {
        match kind {
            RecipeKind::Laser => Recipe::Laser(LaserParams::default()),
            RecipeKind::Explosion => Recipe::Explosion(ExplosionParams::default()),
            RecipeKind::Thrust => Recipe::Thrust(ThrustParams::default()),
            RecipeKind::Tone => Recipe::Tone(ToneParams::default()),
            RecipeKind::ToneSweep => Recipe::ToneSweep(ToneSweepParams::default()),
            RecipeKind::ShieldActivate => Recipe::ShieldActivate(ShieldParams::default()),
            RecipeKind::CoinCollect => Recipe::CoinCollect(CoinParams::default()),
            RecipeKind::Powerup => Recipe::Powerup(PowerupParams::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in RecipeKind::ALL {
            assert_eq!(kind.name().parse::<RecipeKind>().unwrap(), kind);
        }
        assert_eq!("Shield_Activate".parse::<RecipeKind>().unwrap(), RecipeKind::ShieldActivate);
    }

    #[test]
    fn unknown_name_is_a_typed_error() {
        assert_eq!(
            "kazoo".parse::<RecipeKind>(),
            Err(SynthError::UnknownRecipe("kazoo".into()))
        );
    }

    #[test]
    fn defaults_compile_with_expected_durations() {
        let expected = [0.1, 0.4, 0.2, 0.05, 0.1, 0.3, 0.2, 0.3];
        for (kind, duration) in RecipeKind::ALL.into_iter().zip(expected) {
            let recipe = Recipe::from(kind);
            assert_eq!(recipe.kind(), kind);
            let patch = recipe.compile().unwrap();
            assert_eq!(patch.duration, duration, "{kind}");
            assert!((2..=16).contains(&patch.layers.len()), "{kind}: {}", patch.layers.len());
        }
    }

    #[test]
    fn bad_parameters_fail_fast() {
        let recipe = Recipe::Laser(LaserParams {
            frequency: 600.0,
            duration: 0.0,
        });
        assert!(matches!(
            recipe.compile(),
            Err(SynthError::InvalidParameter { name: "duration", .. })
        ));

        let recipe = Recipe::ToneSweep(ToneSweepParams {
            start_frequency: -440.0,
            ..ToneSweepParams::default()
        });
        assert!(matches!(
            recipe.compile(),
            Err(SynthError::InvalidParameter {
                name: "start_frequency",
                ..
            })
        ));
    }
}
