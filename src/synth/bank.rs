use std::{fmt, sync::Arc};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::{
    config::SynthConfig,
    error::SynthError,
    io::SampleBuffer,
    synth::synthesize,
    voices::{
        simple_tone, CoinParams, ExplosionParams, LaserParams, PowerupParams, Recipe,
        ShieldParams, ThrustParams, ToneParams, ToneSweepParams,
    },
};

/*
Sound Bank
==========

The game pre-renders every effect once at startup and then only ever plays
the cached buffers. Buffers are immutable and handed out as Arc, so the
same explosion can be playing on several voices at once.

Rendering is parallel: each effect gets its own Pcg64 stream whose seed is
drawn, in a fixed order, from a master generator. The result depends only
on the master seed, never on thread scheduling.

Fallback
--------

If an effect's recipe rejects its parameters (SynthError::InvalidParameter)
the bank substitutes a plain sine for that one effect and logs a warning.
Any other failure, including a bad sample rate that would also break the
substitute, is returned to the caller.
*/

/// Named effects the game triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    Shoot,
    Explosion,
    Thrust,
    MenuSelect,
    MenuConfirm,
    ShieldActivate,
    CoinCollect,
    Powerup,
}

impl Effect {
    pub const ALL: [Effect; 8] = [
        Effect::Shoot,
        Effect::Explosion,
        Effect::Thrust,
        Effect::MenuSelect,
        Effect::MenuConfirm,
        Effect::ShieldActivate,
        Effect::CoinCollect,
        Effect::Powerup,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Effect::Shoot => "shoot",
            Effect::Explosion => "explosion",
            Effect::Thrust => "thrust",
            Effect::MenuSelect => "menu_select",
            Effect::MenuConfirm => "menu_confirm",
            Effect::ShieldActivate => "shield_activate",
            Effect::CoinCollect => "coin_collect",
            Effect::Powerup => "powerup",
        }
    }

    /// The recipe and parameters the game uses for this effect.
    pub fn recipe(self) -> Recipe {
        match self {
            Effect::Shoot => Recipe::Laser(LaserParams::default()),
            Effect::Explosion => Recipe::Explosion(ExplosionParams::default()),
            Effect::Thrust => Recipe::Thrust(ThrustParams::default()),
            Effect::MenuSelect => Recipe::Tone(ToneParams::default()),
            Effect::MenuConfirm => Recipe::ToneSweep(ToneSweepParams::default()),
            Effect::ShieldActivate => Recipe::ShieldActivate(ShieldParams::default()),
            Effect::CoinCollect => Recipe::CoinCollect(CoinParams::default()),
            Effect::Powerup => Recipe::Powerup(PowerupParams::default()),
        }
    }

    /// `(frequency, duration)` of the plain sine substituted on failure.
    pub fn fallback_tone(self) -> (f64, f64) {
        match self {
            Effect::Shoot => (440.0, 0.1),
            Effect::Explosion => (220.0, 0.3),
            Effect::Thrust => (180.0, 0.2),
            Effect::MenuSelect => (880.0, 0.05),
            Effect::MenuConfirm => (660.0, 0.1),
            Effect::ShieldActivate => (440.0, 0.2),
            Effect::CoinCollect => (660.0, 0.1),
            Effect::Powerup => (880.0, 0.2),
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every game effect, rendered once.
#[derive(Debug, Clone)]
pub struct SoundBank {
    buffers: Vec<Arc<SampleBuffer>>,
}

impl SoundBank {
    /// Render the game's effects with their stock recipes.
    pub fn build(config: &SynthConfig, seed: u64) -> Result<Self, SynthError> {
        Self::build_with(config, seed, Effect::recipe)
    }

    /// Render every effect with the recipe `recipe_for` picks for it.
    pub fn build_with<F>(config: &SynthConfig, seed: u64, recipe_for: F) -> Result<Self, SynthError>
    where
        F: Fn(Effect) -> Recipe + Sync,
    {
        let mut master = Pcg64::seed_from_u64(seed);
        let jobs: Vec<(Effect, u64)> = Effect::ALL
            .into_iter()
            .map(|effect| (effect, master.random()))
            .collect();

        let buffers = jobs
            .into_par_iter()
            .map(|(effect, stream_seed)| {
                render_effect(effect, &recipe_for(effect), config, stream_seed).map(Arc::new)
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(effects = buffers.len(), seed, "sound bank ready");
        Ok(Self { buffers })
    }

    pub fn get(&self, effect: Effect) -> &Arc<SampleBuffer> {
        &self.buffers[effect as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Effect, &Arc<SampleBuffer>)> {
        Effect::ALL.into_iter().zip(self.buffers.iter())
    }
}

fn render_effect(
    effect: Effect,
    recipe: &Recipe,
    config: &SynthConfig,
    seed: u64,
) -> Result<SampleBuffer, SynthError> {
    let mut rng = Pcg64::seed_from_u64(seed);
    match synthesize(recipe, config, &mut rng) {
        Err(err @ SynthError::InvalidParameter { .. }) => {
            let (frequency, duration) = effect.fallback_tone();
            warn!(
                effect = effect.name(),
                error = %err,
                frequency,
                duration,
                "recipe rejected, using simple tone"
            );
            simple_tone(frequency, duration).render(config, &mut rng)
        }
        result => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_every_effect() {
        let bank = SoundBank::build(&SynthConfig::default(), 1).unwrap();
        assert_eq!(bank.iter().count(), 8);
        assert_eq!(bank.get(Effect::Explosion).len(), 17_640);
        assert_eq!(bank.get(Effect::MenuSelect).len(), 2205);
    }

    #[test]
    fn output_depends_only_on_the_seed() {
        let config = SynthConfig::default();
        let a = SoundBank::build(&config, 9).unwrap();
        let b = SoundBank::build(&config, 9).unwrap();
        let c = SoundBank::build(&config, 10).unwrap();
        for effect in Effect::ALL {
            assert_eq!(a.get(effect), b.get(effect), "{effect}");
        }
        assert_ne!(a.get(Effect::Explosion), c.get(Effect::Explosion));
        // no noise in the coin, so the seed is irrelevant
        assert_eq!(a.get(Effect::CoinCollect), c.get(Effect::CoinCollect));
    }

    #[test]
    fn rejected_recipe_falls_back_to_a_simple_tone() {
        let bank = SoundBank::build_with(&SynthConfig::default(), 1, |effect| match effect {
            Effect::Shoot => Recipe::Laser(LaserParams {
                frequency: -600.0,
                duration: 0.1,
            }),
            other => other.recipe(),
        })
        .unwrap();
        let shoot = bank.get(Effect::Shoot);
        assert_eq!(shoot.len(), 4410);
        assert!(shoot.peak() > 1500, "peak {}", shoot.peak());
    }

    #[test]
    fn bad_sample_rate_is_not_swallowed() {
        assert!(SoundBank::build(&SynthConfig::with_sample_rate(0), 1).is_err());
    }
}
