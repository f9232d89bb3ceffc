//! Benchmarks for complete effect renders.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use rocksynth::{synthesize, Recipe, RecipeKind, SoundBank, SynthConfig};

pub fn bench_recipes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/recipes");
    let config = SynthConfig::default();
    let mut rng = Pcg64::seed_from_u64(0);

    for kind in RecipeKind::ALL {
        let recipe = Recipe::from(kind);
        group.bench_with_input(BenchmarkId::new("render", kind), &recipe, |b, recipe| {
            b.iter(|| synthesize(black_box(recipe), &config, &mut rng))
        });
    }

    group.sample_size(20);
    group.bench_function("sound_bank", |b| {
        b.iter(|| SoundBank::build(black_box(&config), 1))
    });

    group.finish();
}
