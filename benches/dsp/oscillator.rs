//! Benchmarks for oscillator evaluation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use rocksynth::dsp::{Frequency, Oscillator};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

fn render(osc: &Oscillator, buffer: &mut [f32], rng: &mut Pcg64) {
    for (i, sample) in buffer.iter_mut().enumerate() {
        *sample = osc.sample(i as f64 / SAMPLE_RATE, 0.1, rng);
    }
}

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let mut rng = Pcg64::seed_from_u64(0);

    let cases = [
        ("sine", Oscillator::sine(440.0)),
        ("sweep", Oscillator::sweep(900.0, 420.0, 0.7)),
        ("wobble", Oscillator::wobble(1800.0, 1000.0, 80.0)),
        (
            "harmonics_4",
            Oscillator::partials(
                Frequency::Fixed(880.0),
                &[(1.0, 0.5), (1.5, 0.3), (2.0, 0.2), (3.0, 0.1)],
            ),
        ),
        ("noise", Oscillator::noise(1.0)),
    ];

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for (name, osc) in &cases {
            group.bench_with_input(BenchmarkId::new(*name, size), &size, |b, _| {
                b.iter(|| render(black_box(osc), black_box(&mut buffer), &mut rng))
            });
        }
    }

    group.finish();
}
