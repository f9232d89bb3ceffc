use crate::io::Frame;

/// Scale a float sample by `gain` and truncate toward zero into `i16`,
/// saturating at the ends of the range instead of wrapping.
#[inline]
pub fn quantize(sample: f32, gain: f32) -> i16 {
    let scaled = (sample * gain).trunc();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(i16::MIN as f32, i16::MAX as f32) as i16
}

#[inline]
pub fn quantize_frame(left: f32, right: f32, gain: f32) -> Frame {
    Frame::new(quantize(left, gain), quantize(right, gain))
}

/// Back to float in `[-1, 1)`, as consumed by output devices.
#[inline]
pub fn to_f32(sample: i16) -> f32 {
    sample as f32 / 32768.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(quantize(0.5, 2501.0), 1250);
        assert_eq!(quantize(-0.5, 2501.0), -1250);
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        assert_eq!(quantize(10.0, 7500.0), i16::MAX);
        assert_eq!(quantize(-10.0, 7500.0), i16::MIN);
        assert_eq!(quantize(f32::NAN, 7500.0), 0);
    }

    #[test]
    fn frame_quantizes_each_channel() {
        assert_eq!(quantize_frame(0.1, -0.1, 1000.0), Frame::new(100, -100));
    }
}
