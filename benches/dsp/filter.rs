//! Benchmarks for one-pole smoothing.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use rocksynth::dsp::filter::OnePole;

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        let signal: Vec<f32> = (0..size).map(|i| ((i * 7919) % 200) as f32 / 100.0 - 1.0).collect();
        let mut buffer = signal.clone();
        let mut filter = OnePole::new(0.7);

        group.bench_with_input(BenchmarkId::new("one_pole", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&signal);
                filter.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
