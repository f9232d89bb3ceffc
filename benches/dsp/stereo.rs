//! Benchmarks for stereo imaging.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use rocksynth::dsp::{Decorrelation, StereoImage, StereoStage};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_stereo(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/stereo");
    let mut rng = Pcg64::seed_from_u64(0);

    for &size in BLOCK_SIZES {
        let signal: Vec<f32> = (0..size).map(|i| (i as f32 * 0.05).sin()).collect();
        let mut out = vec![(0.0f32, 0.0f32); size];

        let mut sway = StereoStage::new(
            StereoImage::Sway {
                base: 0.9,
                depth: 0.1,
                rate: 40.0,
            },
            None,
        );
        group.bench_with_input(BenchmarkId::new("sway", size), &size, |b, _| {
            b.iter(|| {
                for (i, (&mono, slot)) in signal.iter().zip(out.iter_mut()).enumerate() {
                    *slot = sway.process(black_box(mono), i as f64 / SAMPLE_RATE, &mut rng);
                }
            })
        });

        let mut scatter = StereoStage::new(
            StereoImage::Scatter {
                base: 0.85,
                spread: 0.15,
            },
            Some(Decorrelation {
                delay_samples: 6,
                mix: 0.3,
            }),
        );
        group.bench_with_input(BenchmarkId::new("scatter_decorrelated", size), &size, |b, _| {
            b.iter(|| {
                for (i, (&mono, slot)) in signal.iter().zip(out.iter_mut()).enumerate() {
                    *slot = scatter.process(black_box(mono), i as f64 / SAMPLE_RATE, &mut rng);
                }
            })
        });
    }

    group.finish();
}
