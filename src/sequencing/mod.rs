// Purpose: the looping background score
// A chord table drives several always-on layers; the result is one long
// stereo buffer meant to be played on repeat.

pub mod progression;
pub mod score;

pub use progression::{Chord, ChordProgression};
pub use score::{synthesize_background_score, ScoreConfig};
