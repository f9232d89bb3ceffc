use crate::{config::SynthConfig, error::SynthError};

/// Context for one rendering pass.
///
/// Contains what every layer needs to turn a frame index into a time:
/// - sample_rate: output sample rate in Hz
/// - duration: requested length in seconds
/// - frames: `round(duration * sample_rate)`, always > 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCtx {
    pub sample_rate: f64,
    pub duration: f64,
    pub frames: usize,
}

impl RenderCtx {
    /// Validate `duration` against the config and size the pass.
    pub fn new(config: &SynthConfig, duration: f64) -> Result<Self, SynthError> {
        let frames = config.frames_for(duration)?;
        Ok(Self {
            sample_rate: config.sample_rate as f64,
            duration,
            frames,
        })
    }

    /// Elapsed seconds at `frame`.
    #[inline]
    pub fn time(&self, frame: usize) -> f64 {
        frame as f64 / self.sample_rate
    }

    /// Number of frames spanning `seconds`, rounded.
    #[inline]
    pub fn frames_in(&self, seconds: f64) -> usize {
        (seconds * self.sample_rate).round().max(0.0) as usize
    }
}
