//! Real-world scenario benchmarks.
//!
//! These time what the game does at load and at runtime: rendering each
//! recipe, building the whole bank, rendering the score and mixing voices.

mod mixer;
mod recipes;
mod score;

pub use mixer::bench_mixer;
pub use recipes::bench_recipes;
pub use score::bench_score;
