pub mod config;
pub mod dsp;
pub mod error;
pub mod graph; // Layers and patches built from dsp primitives
pub mod io;
pub mod playback; // Interface to the external playback device
pub mod sequencing; // Background score
pub mod synth; // Entry points: synthesize, sound bank
pub mod voices; // The effect recipes

pub use config::SynthConfig;
pub use error::SynthError;
pub use io::{Frame, SampleBuffer};
pub use sequencing::{synthesize_background_score, ChordProgression, ScoreConfig};
pub use synth::{synthesize, synthesize_seeded, Effect, SoundBank};
pub use voices::{Recipe, RecipeKind};

/// Output sample rate used by every buffer the crate produces.
pub const SAMPLE_RATE: u32 = 44_100;

/// Length of the linear fade applied at both ends of every effect buffer.
pub(crate) const BOUNDARY_FADE_SECS: f64 = 0.002;
