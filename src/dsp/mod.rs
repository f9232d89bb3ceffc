//! Low-level DSP primitives used by the layer and patch machinery.
//!
//! Oscillators, envelopes and modulators here are pure functions of time:
//! given the elapsed time and the total duration of the buffer they return a
//! value, with no memory of previous samples. The only stateful pieces are
//! the delay line, the one-pole smoother and the stereo stage, which the
//! renderer drives strictly in sample order.

/// Fixed-length delay used for stereo decorrelation.
pub mod delay;
/// Soft-knee compression and overshoot limiting.
pub mod dynamics;
/// Amplitude envelopes evaluated against elapsed time.
pub mod envelope;
/// One-pole low-pass smoothing.
pub mod filter;
/// Slow periodic and random gain terms.
pub mod modulation;
/// Sine, swept, harmonic and noise sources.
pub mod oscillator;
/// Mono to stereo imaging.
pub mod stereo;

pub use envelope::Envelope;
pub use modulation::{Lfo, Modulation};
pub use oscillator::{Frequency, Oscillator, Partial};
pub use stereo::{Decorrelation, StereoImage, StereoStage};
