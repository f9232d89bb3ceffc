//! Plain sine used when a recipe cannot be built from its parameters.

use crate::{
    dsp::Oscillator,
    graph::{Layer, Patch},
};

/// A bare sine at full level. Still boundary-faded and limited like every
/// other patch.
pub fn simple_tone(frequency: f64, duration: f64) -> Patch {
    Patch::new("simple-tone", duration, 2000.0).layer(Layer::new("sine", Oscillator::sine(frequency)))
}
