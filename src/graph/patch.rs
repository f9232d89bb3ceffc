use rand::Rng;
use tracing::debug;

use crate::{
    config::SynthConfig,
    dsp::{
        dynamics::soft_limit,
        envelope::boundary_fade,
        stereo::{Decorrelation, StereoImage, StereoStage},
        Envelope, Modulation,
    },
    error::SynthError,
    graph::{layer::Layer, node::RenderCtx},
    io::{pcm::quantize_frame, Frame, SampleBuffer},
    BOUNDARY_FADE_SECS,
};

/*
Patch Rendering
===============

A patch is the compiled form of a recipe. Rendering runs the same four
stages for every frame, in this order:

  1. mix       Σ layer_k(t), times the master envelope and master
               modulation
  2. dynamics  soft-knee compression / overshoot limiting (dsp::dynamics)
  3. stereo    optional decorrelation, then the left/right split
  4. PCM       × 2 ms boundary fade at each end, × pcm_gain, truncate,
               clamp to i16

Stages 1, 2 and 4 are pure per-sample functions. Stage 3 carries a delay
line when decorrelation is enabled, so frames are produced in order.

The boundary fade guarantees the first and last frame are silent even when
a recipe's own envelope has not decayed by the end of its duration. It runs
on the two channels after the split: the decorrelation delay would
otherwise carry unfaded signal into the last few frames.
*/

#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    pub name: &'static str,
    /// Length in seconds.
    pub duration: f64,
    pub layers: Vec<Layer>,
    /// Applied to the sum of all layers.
    pub envelope: Envelope,
    pub modulation: Vec<Modulation>,
    pub stereo: StereoImage,
    pub decorrelation: Option<Decorrelation>,
    /// Full-scale multiplier used by PCM assembly.
    pub pcm_gain: f32,
    pub boundary_fade: bool,
}

impl Patch {
    pub fn new(name: &'static str, duration: f64, pcm_gain: f32) -> Self {
        Self {
            name,
            duration,
            layers: Vec::new(),
            envelope: Envelope::Unity,
            modulation: Vec::new(),
            stereo: StereoImage::Centered,
            decorrelation: None,
            pcm_gain,
            boundary_fade: true,
        }
    }

    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
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

    pub fn stereo(mut self, image: StereoImage) -> Self {
        self.stereo = image;
        self
    }

    pub fn decorrelated(mut self, decorrelation: Decorrelation) -> Self {
        self.decorrelation = Some(decorrelation);
        self
    }

    pub fn without_boundary_fade(mut self) -> Self {
        self.boundary_fade = false;
        self
    }

    /// Look up a layer by name.
    pub fn find_layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    /// True if two renders with different random streams are identical.
    pub fn is_deterministic(&self) -> bool {
        !self.layers.iter().any(Layer::is_random)
            && !self.modulation.iter().any(Modulation::is_random)
            && !matches!(self.stereo, StereoImage::Scatter { .. })
    }

    /// Summed, enveloped mono signal before dynamics.
    #[inline]
    pub fn mono_sample<R: Rng + ?Sized>(&self, t: f64, rng: &mut R) -> f32 {
        let sum: f32 = self
            .layers
            .iter()
            .map(|layer| layer.sample(t, self.duration, &mut *rng))
            .sum();

        let mut value = self.envelope.level(t, self.duration) * sum;
        for modulation in &self.modulation {
            value *= modulation.gain(t, self.duration, rng);
        }
        value
    }

    /// Run the full pipeline and return finished PCM.
    pub fn render<R: Rng + ?Sized>(
        &self,
        config: &SynthConfig,
        rng: &mut R,
    ) -> Result<SampleBuffer, SynthError> {
        let ctx = RenderCtx::new(config, self.duration)?;
        let fade_frames = if self.boundary_fade {
            ctx.frames_in(BOUNDARY_FADE_SECS)
        } else {
            0
        };

        let mut stereo = StereoStage::new(self.stereo, self.decorrelation);
        let mut frames: Vec<Frame> = Vec::with_capacity(ctx.frames);

        for frame in 0..ctx.frames {
            let t = ctx.time(frame);
            let (left, right) = stereo.process(soft_limit(self.mono_sample(t, rng)), t, rng);
            let fade = boundary_fade(frame, ctx.frames, fade_frames);
            frames.push(quantize_frame(left * fade, right * fade, self.pcm_gain));
        }

        debug!(
            patch = self.name,
            layers = self.layers.len(),
            frames = ctx.frames,
            "rendered patch"
        );
        Ok(SampleBuffer::new(config.sample_rate, frames))
    }
}
