use rand::Rng;

use crate::{
    dsp::{Envelope, Modulation, Oscillator},
    graph::node::RenderCtx,
};

/*
Layer
=====

One additive ingredient of a sound:

    layer(t) = gain · envelope(t) · oscillator(t - offset) · Π modulation_k(t)

`offset` shifts only the oscillator's clock. Combined with a `Window`
envelope starting at the same time, a layer can play a self-contained burst
in the middle of a longer buffer (the explosion's secondary blast starts its
own waveform at 50 ms rather than picking it up mid-cycle).

Layers are built fluently:

  Layer::new("bass", Oscillator::sine(60.0))
      .gain(0.4)
      .shaped(Envelope::decay(30.0))

A layer can also be a bus: a group of child layers summed and then passed
through the bus's own envelope, gain and modulation. Anything the bus draws
from the random source is drawn once per sample for the whole group, so the
children share it:

  Layer::bus("debris", vec![plain, ring_100, ring_200])
      .shaped(Envelope::decay(12.0))
      .modulated(Modulation::Jitter { min: 0.7, max: 1.3 })

The layer is a pure description; evaluating it never mutates it. The only
input that changes between calls is the random source for noise
oscillators and jitter terms.
*/

/// What a layer sums before shaping.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Oscillator(Oscillator),
    Bus(Vec<Layer>),
}

impl Source {
    fn is_random(&self) -> bool {
        match self {
            Source::Oscillator(oscillator) => oscillator.is_random(),
            Source::Bus(layers) => layers.iter().any(Layer::is_random),
        }
    }

    #[inline]
    fn sample<R: Rng + ?Sized>(&self, t: f64, duration: f64, rng: &mut R) -> f32 {
        match self {
            Source::Oscillator(oscillator) => oscillator.sample(t, duration, rng),
            Source::Bus(layers) => layers
                .iter()
                .map(|layer| layer.sample(t, duration, &mut *rng))
                .sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: &'static str,
    pub source: Source,
    pub envelope: Envelope,
    pub gain: f32,
    pub modulation: Vec<Modulation>,
    /// Seconds subtracted from the source's clock.
    pub offset: f64,
}

impl Layer {
    pub fn new(name: &'static str, oscillator: Oscillator) -> Self {
        Self::with_source(name, Source::Oscillator(oscillator))
    }

    /// Sum `layers`, then shape the sum as one layer.
    pub fn bus(name: &'static str, layers: Vec<Layer>) -> Self {
        Self::with_source(name, Source::Bus(layers))
    }

    fn with_source(name: &'static str, source: Source) -> Self {
        Self {
            name,
            source,
            envelope: Envelope::Unity,
            gain: 1.0,
            modulation: Vec::new(),
            offset: 0.0,
        }
    }

    pub fn gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    pub fn shaped(mut self, envelope: Envelope) -> Self {
        self.envelope = envelope;
        self
    }

    pub fn modulated(mut self, modulation: impl Into<Modulation>) -> Self {
        self.modulation.push(modulation.into());
        self
    }

    /// Start the oscillator's clock `offset` seconds into the buffer.
    pub fn delayed(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// True if any part of the layer draws from the random source.
    pub fn is_random(&self) -> bool {
        self.source.is_random() || self.modulation.iter().any(Modulation::is_random)
    }

    /// Contribution at time `t` of a buffer `duration` seconds long.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, t: f64, duration: f64, rng: &mut R) -> f32 {
        let level = self.envelope.level(t, duration);
        if level == 0.0 {
            return 0.0;
        }

        let local = (t - self.offset).max(0.0);
        let mut value = self.gain * level * self.source.sample(local, duration, &mut *rng);
        for modulation in &self.modulation {
            value *= modulation.gain(t, duration, rng);
        }
        value
    }

    /// Render this layer alone as raw floats, before dynamics and stereo.
    pub fn render<R: Rng + ?Sized>(&self, ctx: &RenderCtx, rng: &mut R) -> Vec<f32> {
        (0..ctx.frames)
            .map(|frame| self.sample(ctx.time(frame), ctx.duration, &mut *rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::SynthConfig,
        dsp::{oscillator::uniform, Lfo},
    };
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use std::f64::consts::TAU;

    #[test]
    fn sample_multiplies_every_term() {
        let mut rng = Pcg64::seed_from_u64(0);
        let layer = Layer::new("test", Oscillator::sine(100.0))
            .gain(0.5)
            .shaped(Envelope::decay(10.0))
            .modulated(Lfo::angular(1.0, 0.2, 7.0));

        let t: f64 = 0.0123;
        let expected = 0.5
            * (-10.0 * t).exp()
            * (TAU * 100.0 * t).sin()
            * (1.0 + 0.2 * (7.0 * t).sin());
        assert!((layer.sample(t, 0.1, &mut rng) as f64 - expected).abs() < 1e-6);
    }

    #[test]
    fn delayed_layer_restarts_its_waveform() {
        let mut rng = Pcg64::seed_from_u64(0);
        let layer = Layer::new("late", Oscillator::sine(90.0)).delayed(0.05);
        assert_eq!(layer.sample(0.05, 0.4, &mut rng), 0.0);
        let expected = (TAU * 90.0 * 0.01).sin() as f32;
        assert!((layer.sample(0.06, 0.4, &mut rng) - expected).abs() < 1e-5);
    }

    #[test]
    fn render_covers_every_frame() {
        let mut rng = Pcg64::seed_from_u64(0);
        let ctx = RenderCtx::new(&SynthConfig::default(), 0.05).unwrap();
        let samples = Layer::new("hiss", Oscillator::noise(0.2)).render(&ctx, &mut rng);
        assert_eq!(samples.len(), 2205);
        assert!(samples.iter().all(|s| s.abs() <= 0.2));
    }

    #[test]
    fn bus_shares_one_jitter_draw_between_children() {
        let children = vec![
            Layer::new("a", Oscillator::sine(100.0)),
            Layer::new("b", Oscillator::sine(100.0)).gain(0.5),
        ];
        let bus = Layer::bus("group", children.clone())
            .modulated(Modulation::Jitter { min: 0.7, max: 1.3 });
        assert!(bus.is_random());

        let t = 0.0021;
        let mut rng = Pcg64::seed_from_u64(0);
        let dry: f32 = children.iter().map(|c| c.sample(t, 0.1, &mut rng)).sum();
        for seed in 0..20 {
            let value = bus.sample(t, 0.1, &mut Pcg64::seed_from_u64(seed));
            // exactly one draw scales the whole sum
            let gain = uniform(&mut Pcg64::seed_from_u64(seed), 0.7, 1.3);
            assert!((value - dry * gain).abs() < 1e-6, "seed {seed}");
        }
    }

    #[test]
    fn randomness_is_reported() {
        assert!(!Layer::new("tone", Oscillator::sine(440.0)).is_random());
        assert!(Layer::new("hiss", Oscillator::noise(1.0)).is_random());
        assert!(Layer::new("grit", Oscillator::sine(440.0))
            .modulated(Modulation::Jitter { min: 0.8, max: 1.2 })
            .is_random());
    }
}
