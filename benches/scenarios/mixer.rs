//! Benchmarks for the playback mixer.
//!
//! Simulates the audio callback with several overlapping effect voices.

use std::{collections::VecDeque, hint::black_box, sync::Arc};

use criterion::{BenchmarkId, Criterion};
use rocksynth::{
    playback::{Mixer, PlaybackMessage, VoiceHandle},
    Effect, SoundBank, SynthConfig,
};

pub fn bench_mixer(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/mixer");
    let bank = match SoundBank::build(&SynthConfig::default(), 0) {
        Ok(bank) => bank,
        Err(err) => panic!("sound bank failed to build: {err}"),
    };

    for voices in [1usize, 4, 8] {
        let mut out = vec![0.0f32; 2 * 256];

        group.bench_with_input(BenchmarkId::new("256_frames", voices), &voices, |b, &voices| {
            b.iter_batched(
                || {
                    let queue: VecDeque<PlaybackMessage> = Effect::ALL
                        .into_iter()
                        .cycle()
                        .take(voices)
                        .enumerate()
                        .map(|(i, effect)| PlaybackMessage::Play {
                            voice: VoiceHandle::new(i as u64),
                            buffer: Arc::clone(bank.get(effect)),
                            volume: 0.7,
                            looping: true,
                        })
                        .collect();
                    Mixer::new(queue, 16)
                },
                |mut mixer| mixer.render(black_box(&mut out), 2),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}
