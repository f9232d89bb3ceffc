//! Dynamics / Soft Limiting
//!
//! Layered recipes routinely sum to more than full scale: an explosion stacks
//! three sub-bass sines, three core sines and several noise beds on top of
//! each other. Rather than clipping the sum flat, each sample passes through
//! a static transfer curve before quantisation.
//!
//! # Transfer Curve
//!
//! ```text
//!   |out|
//!   1.05 ┤                          ╱   overshoot: 1 + (|x| - 1)·0.1
//!   1.00 ┤                  ┌──────╱
//!   0.95 ┤              ╱───┘           knee: 0.8 → 0.95 over (0.8, 1.0]
//!   0.80 ┤          ╱
//!        │      ╱                        linear: |x| ≤ 0.8
//!        │  ╱
//!      0 └──────────┬───────┬──────┬──→ |x|
//!                  0.8     1.0    1.5
//! ```
//!
//! - Below the knee the signal is untouched.
//! - Across the knee the gain blends from 1.0 down to 0.95, so the top
//!   20% of the range is squeezed into 15%.
//! - Above full scale only 10% of the excess survives. Transients keep some
//!   of their shape instead of flattening into a square edge.
//!
//! The curve is odd-symmetric and stateless: no look-ahead, no release
//! time, the same input always gives the same output.

const KNEE: f32 = 0.8;
const KNEE_SPAN: f32 = 1.0 - KNEE;
/// Output magnitude gained across the knee (0.8 → 0.95).
const KNEE_RISE: f32 = 0.15;
/// Fraction of the overshoot above 1.0 that is kept.
const OVERSHOOT_RATIO: f32 = 0.1;

/// Map one summed sample onto the soft-limited range.
#[inline]
pub fn soft_limit(sample: f32) -> f32 {
    let magnitude = sample.abs();
    if magnitude > 1.0 {
        sample.signum() * (1.0 + (magnitude - 1.0) * OVERSHOOT_RATIO)
    } else if magnitude > KNEE {
        let amount = (magnitude - KNEE) / KNEE_SPAN;
        sample.signum() * (KNEE + amount * KNEE_RISE)
    } else {
        sample
    }
}

/// Apply soft limiting to an entire buffer in place.
pub fn soft_limit_buffer(buffer: &mut [f32]) {
    for sample in buffer.iter_mut() {
        *sample = soft_limit(*sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_signal_passes_unchanged() {
        for &x in &[0.0, 0.3, -0.5, 0.8, -0.8] {
            assert_eq!(soft_limit(x), x);
        }
    }

    #[test]
    fn test_overshoot_is_limited_not_clipped() {
        let out = soft_limit(1.5);
        assert!(out < 1.5 && out > 1.0, "got {out}");
        assert!((out - 1.05).abs() < 1e-6);
        assert!((soft_limit(-1.5) + 1.05).abs() < 1e-6);
    }

    #[test]
    fn test_knee_compresses_gradually() {
        // 0.9 is halfway through the knee: 0.8 + 0.5 * 0.15
        assert!((soft_limit(0.9) - 0.875).abs() < 1e-6);
        assert!((soft_limit(1.0) - 0.95).abs() < 1e-6);
        let gain_low = soft_limit(0.85) / 0.85;
        let gain_high = soft_limit(0.99) / 0.99;
        assert!(gain_low > gain_high);
        assert!(gain_high > 0.94);
    }

    #[test]
    fn test_curve_is_monotonic() {
        let mut last = soft_limit(-3.0);
        for i in -299..=300 {
            let x = i as f32 * 0.01;
            let y = soft_limit(x);
            assert!(y >= last, "x = {x}");
            last = y;
        }
    }

    #[test]
    fn test_buffer_variant_matches_scalar() {
        let mut buffer = vec![0.5, 0.9, 1.2, -2.0];
        soft_limit_buffer(&mut buffer);
        let expected: Vec<f32> = [0.5, 0.9, 1.2, -2.0].iter().map(|&x| soft_limit(x)).collect();
        assert_eq!(buffer, expected);
    }
}
