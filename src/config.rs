#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::SynthError, SAMPLE_RATE};

/// Render settings shared by every synthesis call.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
        }
    }
}

impl SynthConfig {
    pub fn with_sample_rate(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Number of frames for a buffer of `duration` seconds.
    ///
    /// Fails for a zero sample rate or a non-positive duration, and for
    /// durations so short they would round to zero frames.
    pub fn frames_for(&self, duration: f64) -> Result<usize, SynthError> {
        let sample_rate = SynthError::require_positive("sample_rate", self.sample_rate as f64)?;
        let duration = SynthError::require_positive("duration", duration)?;

        let frames = (duration * sample_rate).round();
        if frames < 1.0 {
            return Err(SynthError::InvalidParameter {
                name: "duration",
                value: duration,
            });
        }
        Ok(frames as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_count_is_rounded() {
        let config = SynthConfig::default();
        assert_eq!(config.frames_for(0.1).unwrap(), 4410);
        assert_eq!(config.frames_for(0.05).unwrap(), 2205);
        // 0.00001 * 44100 = 0.441 -> rounds to zero frames
        assert!(config.frames_for(0.00001).is_err());
    }

    #[test]
    fn zero_sample_rate_is_rejected() {
        let config = SynthConfig::with_sample_rate(0);
        assert_eq!(
            config.frames_for(1.0),
            Err(SynthError::InvalidParameter {
                name: "sample_rate",
                value: 0.0
            })
        );
    }
}
