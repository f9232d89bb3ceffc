// Purpose: turn recipes into finished buffers
// This layer sits above the graph: it compiles a recipe, picks a random
// stream and runs the patch pipeline.

pub mod bank;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::{config::SynthConfig, error::SynthError, io::SampleBuffer, voices::Recipe};

pub use bank::{Effect, SoundBank};

/// Render `recipe`, drawing noise from `rng`.
///
/// Two calls with the same recipe and config are bit-identical when the
/// recipe has no noise layers, or when both calls get identically seeded
/// generators.
pub fn synthesize<R: Rng + ?Sized>(
    recipe: &Recipe,
    config: &SynthConfig,
    rng: &mut R,
) -> Result<SampleBuffer, SynthError> {
    recipe.compile()?.render(config, rng)
}

/// Render `recipe` with a fresh `Pcg64` stream seeded from `seed`.
pub fn synthesize_seeded(
    recipe: &Recipe,
    config: &SynthConfig,
    seed: u64,
) -> Result<SampleBuffer, SynthError> {
    let mut rng = Pcg64::seed_from_u64(seed);
    synthesize(recipe, config, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voices::{RecipeKind, ToneParams};

    #[test]
    fn same_seed_same_buffer() {
        let recipe = Recipe::from(RecipeKind::Explosion);
        let config = SynthConfig::default();
        let a = synthesize_seeded(&recipe, &config, 42).unwrap();
        let b = synthesize_seeded(&recipe, &config, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_sample_rate_fails_fast() {
        let recipe = Recipe::Tone(ToneParams::default());
        let config = SynthConfig::with_sample_rate(0);
        assert!(matches!(
            synthesize_seeded(&recipe, &config, 0),
            Err(SynthError::InvalidParameter { name: "sample_rate", .. })
        ));
    }
}
