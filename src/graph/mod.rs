//! Composition of dsp primitives into finished sounds.
//!
//! A `Layer` pairs one oscillator with one envelope, a gain and any number
//! of modulation terms. A `Patch` sums layers, applies a master envelope,
//! and owns the tail of the pipeline: dynamics, stereo imaging and PCM
//! assembly. Every recipe in `voices` compiles down to a `Patch`.

/// A single oscillator + envelope contribution.
pub mod layer;
/// Render context shared by layers during a pass.
pub mod node;
/// Layer sum → dynamics → stereo → PCM.
pub mod patch;

pub use layer::{Layer, Source};
pub use node::RenderCtx;
pub use patch::Patch;
