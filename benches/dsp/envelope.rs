//! Benchmarks for envelope evaluation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use rocksynth::dsp::Envelope;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    let cases = [
        ("decay", Envelope::decay(25.0)),
        ("attack_decay", Envelope::attack_decay(18.0, 100.0)),
        (
            "window",
            Envelope::window(0.05, 0.25, Envelope::attack_decay(20.0, 100.0)),
        ),
        (
            "product_3",
            Envelope::Linear { from: 1.0, to: 0.7 }
                .times(Envelope::Onset { rate: 8.0 })
                .times(Envelope::Swell {
                    from: 0.8,
                    amount: 2.0,
                }),
        ),
    ];

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for (name, env) in &cases {
            group.bench_with_input(BenchmarkId::new(*name, size), &size, |b, _| {
                b.iter(|| {
                    for (i, sample) in buffer.iter_mut().enumerate() {
                        *sample = black_box(env).level(i as f64 / SAMPLE_RATE, 0.3);
                    }
                })
            });
        }
    }

    group.finish();
}
