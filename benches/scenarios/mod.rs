//! Scenario benchmarks.
//!
//! Full renders through the voice pipeline, the same path the player uses.

mod voices;

pub use voices::bench_voices;
