//! Benchmarks for low-level DSP primitives.

mod delay;
mod dynamics;
mod envelope;
mod filter;
mod oscillator;
mod stereo;

pub use delay::bench_delay;
pub use dynamics::bench_dynamics;
pub use envelope::bench_envelope;
pub use filter::bench_filter;
pub use oscillator::bench_oscillator;
pub use stereo::bench_stereo;
