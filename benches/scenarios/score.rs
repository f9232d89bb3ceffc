//! Benchmarks for background score rendering.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use rocksynth::{synthesize_background_score, ChordProgression, ScoreConfig, SynthConfig};

pub fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/score");
    group.sample_size(10);

    let progression = ChordProgression::a_minor();
    let score = ScoreConfig::default();
    let config = SynthConfig::default();
    let mut rng = Pcg64::seed_from_u64(0);

    // 12s crosses the ambient warm-up
    for seconds in [5.0, 12.0] {
        group.bench_with_input(BenchmarkId::new("render", seconds), &seconds, |b, &seconds| {
            b.iter(|| {
                synthesize_background_score(
                    &progression,
                    black_box(seconds),
                    &score,
                    &config,
                    &mut rng,
                )
            })
        });
    }

    group.finish();
}
