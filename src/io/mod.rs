// Purpose - finished sample buffers and PCM conversions

pub mod pcm;

use std::time::Duration;

/// One stereo frame of signed 16-bit PCM.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    pub left: i16,
    pub right: i16,
}

impl Frame {
    pub const SILENCE: Frame = Frame { left: 0, right: 0 };

    pub fn new(left: i16, right: i16) -> Self {
        Self { left, right }
    }
}

/// Finished, immutable stereo PCM.
///
/// Always holds at least one frame. Once returned the buffer is owned by the
/// caller; wrap it in an `Arc` to share it between overlapping voices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    sample_rate: u32,
    frames: Vec<Frame>,
}

impl SampleBuffer {
    pub(crate) fn new(sample_rate: u32, frames: Vec<Frame>) -> Self {
        debug_assert!(!frames.is_empty(), "sample buffers are never empty");
        Self {
            sample_rate,
            frames,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frames.len() as f64 / self.sample_rate as f64)
    }

    /// Samples as `[l0, r0, l1, r1, ...]`, the layout audio devices expect.
    pub fn interleaved(&self) -> Vec<i16> {
        self.frames
            .iter()
            .flat_map(|frame| [frame.left, frame.right])
            .collect()
    }

    pub fn left(&self) -> impl Iterator<Item = i16> + '_ {
        self.frames.iter().map(|frame| frame.left)
    }

    pub fn right(&self) -> impl Iterator<Item = i16> + '_ {
        self.frames.iter().map(|frame| frame.right)
    }

    /// Largest absolute sample value across both channels.
    pub fn peak(&self) -> u16 {
        self.frames
            .iter()
            .flat_map(|frame| [frame.left, frame.right])
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// RMS over both channels as a fraction of full scale.
    pub fn rms(&self) -> f64 {
        if self.frames.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .frames
            .iter()
            .flat_map(|frame| [frame.left, frame.right])
            .map(|s| {
                let x = pcm::to_f32(s) as f64;
                x * x
            })
            .sum();
        (sum / (self.frames.len() * 2) as f64).sqrt()
    }
}
