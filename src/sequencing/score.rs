use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::SynthConfig,
    dsp::{
        dynamics::soft_limit, filter::OnePole, Envelope, Frequency, Lfo, Modulation, Oscillator,
        StereoImage, StereoStage,
    },
    error::SynthError,
    graph::{Layer, RenderCtx},
    io::{pcm::quantize_frame, Frame, SampleBuffer},
    sequencing::progression::{Chord, ChordProgression},
};

/*
Background Score
================

The score is a state machine over the position t (seconds) within one long
buffer. Each chord of the progression compiles to its own set of layers,
and every frame sums the set of the active chord:

    chord = progression[floor(t / chord_duration) mod len]

Layers per chord
----------------

  bass      each bass note under a slow tremolo 0.4 · (1 + 0.2·sin 0.3t),
            plus its octave at a fixed 0.1
  pad       each pad tone with a copy detuned by 0.2% at 30%, under
            0.25 · (1 + 0.15·sin 0.8t)
  melody    one pad tone an octave up, chosen by chord parity; a half-sine
            over the second half of every section, with a 6 Hz vibrato
  arpeggio  one layer per pad tone, two octaves up. Steps come at
            `arpeggio_rate` per second and walk the pad tones in turn, so
            tone k sounds in every step where step mod len = k, for the
            first `arpeggio_gate` of the step, decaying as exp(-20·phase)

Melody sections and arpeggio cycles repeat through the buffer, so both use
a `Periodic` envelope around a `Window`.

  ambient   after `ambient_start`, quiet white noise through a one-pole
            low-pass; the filter state is held at zero before that

The chord layers never touch the random source and are rendered in
parallel. The ambient filter, the stereo stage and the random draws run in
sample order, so a seeded generator always gives the same buffer.

The mix is faded in and out linearly over `loop_fade` seconds at each end,
soft-limited, swayed across the channels and quantized at a much lower gain
than the effects.
*/

/// Timing and level constants of the background score.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreConfig {
    /// Seconds each chord is held.
    pub chord_duration: f64,
    /// Length of one melody section; the melody plays in its second half.
    pub section_duration: f64,
    /// Seconds before the ambient layer comes in.
    pub ambient_start: f64,
    /// One-pole coefficient for the ambient noise.
    pub ambient_alpha: f32,
    /// Arpeggio steps per second.
    pub arpeggio_rate: f64,
    /// Fraction of each arpeggio step that sounds.
    pub arpeggio_gate: f64,
    /// Linear fade at each end of the loop, in seconds.
    pub loop_fade: f64,
    pub stereo: StereoImage,
    pub pcm_gain: f32,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            chord_duration: 5.625,
            section_duration: 22.5,
            ambient_start: 10.0,
            ambient_alpha: 0.7,
            arpeggio_rate: 2.0,
            arpeggio_gate: 0.1,
            loop_fade: 2.0,
            stereo: StereoImage::Sway {
                base: 0.95,
                depth: 0.05,
                rate: 0.7,
            },
            pcm_gain: 1200.0,
        }
    }
}

impl ScoreConfig {
    /// Length of the buffer the game loops.
    pub const LOOP_SECONDS: f64 = 45.0;

    fn validate(&self) -> Result<(), SynthError> {
        SynthError::require_positive("chord_duration", self.chord_duration)?;
        SynthError::require_positive("section_duration", self.section_duration)?;
        SynthError::require_positive("arpeggio_rate", self.arpeggio_rate)?;
        SynthError::require_positive("loop_fade", self.loop_fade)?;
        SynthError::require_positive("ambient_alpha", self.ambient_alpha as f64)?;
        if self.ambient_alpha > 1.0 {
            return Err(SynthError::InvalidParameter {
                name: "ambient_alpha",
                value: self.ambient_alpha as f64,
            });
        }
        Ok(())
    }

    /// Layers sounding while `chord` is active; `step` is its index in the
    /// progression.
    pub fn voicing(&self, chord: &Chord, step: usize) -> Vec<Layer> {
        let mut layers = Vec::with_capacity(2 * chord.bass.len() + 2 * chord.pad.len() + 1);

        for &note in &chord.bass {
            layers.push(
                Layer::new("bass", Oscillator::sine(note))
                    .gain(0.4)
                    .modulated(Lfo::angular(1.0, 0.2, 0.3)),
            );
            layers.push(Layer::new("bass_octave", Oscillator::sine(2.0 * note)).gain(0.1));
        }

        for &note in &chord.pad {
            layers.push(
                Layer::new(
                    "pad",
                    Oscillator::partials(Frequency::Fixed(note), &[(1.0, 1.0), (1.002, 0.3)]),
                )
                .gain(0.25)
                .modulated(Lfo::angular(1.0, 0.15, 0.8)),
            );
        }

        let section = self.section_duration;
        layers.push(
            Layer::new("melody", Oscillator::sine(2.0 * chord.melody_tone(step)))
                .gain(0.15)
                .shaped(Envelope::every(
                    section,
                    Envelope::window(section / 2.0, section, Envelope::Sweep { damping: 0.0 }),
                ))
                .modulated(Modulation::tremolo(0.05, 6.0)),
        );

        let step_len = 1.0 / self.arpeggio_rate;
        let cycle = step_len * chord.pad.len() as f64;
        for (k, &note) in chord.pad.iter().enumerate() {
            let start = k as f64 * step_len;
            let blip = Envelope::window(
                start,
                start + self.arpeggio_gate * step_len,
                Envelope::decay(20.0 * self.arpeggio_rate),
            );
            layers.push(
                Layer::new("arpeggio", Oscillator::sine(4.0 * note))
                    .gain(0.1)
                    .shaped(Envelope::every(cycle, blip)),
            );
        }

        layers
    }

    /// One voicing per chord, in progression order.
    pub fn voicings(&self, progression: &ChordProgression) -> Vec<Vec<Layer>> {
        progression
            .chords()
            .iter()
            .enumerate()
            .map(|(step, chord)| self.voicing(chord, step))
            .collect()
    }

    /// Noise bed that joins after `ambient_start`, before filtering.
    pub fn ambient(&self) -> Layer {
        Layer::new("ambient", Oscillator::noise(1.0))
            .gain(0.05)
            .modulated(Lfo::angular(1.0, 0.5, 0.1))
    }

    /// Sum of the active chord's layers at `t`.
    fn tonal<R: Rng + ?Sized>(
        &self,
        progression: &ChordProgression,
        voicings: &[Vec<Layer>],
        t: f64,
        duration: f64,
        rng: &mut R,
    ) -> f32 {
        let step = progression.chord_index(t, self.chord_duration);
        voicings[step]
            .iter()
            .map(|layer| layer.sample(t, duration, &mut *rng))
            .sum()
    }

    fn loop_level(&self, t: f64, total: f64) -> f32 {
        let fade = self.loop_fade.min(total / 2.0);
        (t / fade).min((total - t) / fade).clamp(0.0, 1.0) as f32
    }
}

/// Render `total_duration` seconds of the looping score.
pub fn synthesize_background_score<R: Rng + ?Sized>(
    progression: &ChordProgression,
    total_duration: f64,
    score: &ScoreConfig,
    config: &SynthConfig,
    rng: &mut R,
) -> Result<SampleBuffer, SynthError> {
    score.validate()?;
    let ctx = RenderCtx::new(config, total_duration)?;
    let voicings = score.voicings(progression);
    debug_assert!(voicings.iter().flatten().all(|layer| !layer.is_random()));

    // chord layers never draw; each worker gets a throwaway generator
    let tonal: Vec<f32> = (0..ctx.frames)
        .into_par_iter()
        .map_init(
            || Pcg64::seed_from_u64(0),
            |idle, frame| score.tonal(progression, &voicings, ctx.time(frame), ctx.duration, idle),
        )
        .collect();

    let air = score.ambient();
    let mut ambient = OnePole::new(score.ambient_alpha);
    let mut stereo = StereoStage::new(score.stereo, None);
    let mut frames: Vec<Frame> = Vec::with_capacity(ctx.frames);

    for (frame, tone) in tonal.into_iter().enumerate() {
        let t = ctx.time(frame);
        let noise = if t > score.ambient_start {
            ambient.next_sample(air.sample(t, ctx.duration, rng))
        } else {
            ambient.reset();
            0.0
        };

        let mono = (tone + noise) * score.loop_level(t, total_duration);
        let (left, right) = stereo.process(soft_limit(mono), t, rng);
        frames.push(quantize_frame(left, right, score.pcm_gain));
    }

    debug!(
        chords = progression.len(),
        seconds = total_duration,
        frames = ctx.frames,
        "rendered background score"
    );
    Ok(SampleBuffer::new(config.sample_rate, frames))
}
