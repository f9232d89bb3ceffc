//! Benchmarks for the decorrelation delay line.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use rocksynth::dsp::delay::DelayLine;

use crate::BLOCK_SIZES;

pub fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delay");

    for &size in BLOCK_SIZES {
        let signal: Vec<f32> = (0..size).map(|i| (i as f32 * 0.01).sin()).collect();
        let mut buffer = signal.clone();
        let mut line = DelayLine::new(6);

        group.bench_with_input(BenchmarkId::new("6_samples", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&signal);
                line.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
