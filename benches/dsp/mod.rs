//! Benchmarks for low-level DSP primitives.

mod chorus;
mod distortion;
mod envelope;
mod filter;
mod oscillator;

pub use chorus::bench_chorus;
pub use distortion::bench_distortion;
pub use envelope::bench_envelope;
pub use filter::bench_filter;
pub use oscillator::bench_oscillator;
