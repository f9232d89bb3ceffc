//! Benchmarks for the soft limiter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use rocksynth::dsp::dynamics;

use crate::BLOCK_SIZES;

pub fn bench_dynamics(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/dynamics");

    for &size in BLOCK_SIZES {
        // Sweep through all three regions of the curve
        let signal: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 3.0 - 1.5)
            .collect();
        let mut buffer = signal.clone();

        group.bench_with_input(BenchmarkId::new("soft_limit", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&signal);
                dynamics::soft_limit_buffer(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
