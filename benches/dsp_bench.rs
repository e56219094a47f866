//! Benchmarks for DSP primitives and whole voice renders.
//!
//! Run with: cargo bench
//!
//! Rendering is offline, so these measure how far ahead of real time a
//! buffer is produced rather than a per-block deadline.
//!
//! Reference durations at 44.1kHz sample rate:
//!   - 4410 samples  = 0.1s
//!   - 22050 samples = 0.5s
//!   - 44100 samples = 1.0s
//!
//! Benchmark groups:
//!   - dsp/*        Low-level primitives (oscillator, filter, envelope, etc.)
//!   - scenarios/*  Complete voices, one per preset

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Buffer lengths of typical short, medium and long notes.
pub const BUFFER_SIZES: &[usize] = &[4_410, 22_050, 44_100];

pub const SAMPLE_RATE: f32 = 44_100.0;

criterion_group!(
    benches,
    // Low-level DSP primitives
    dsp::bench_oscillator,
    dsp::bench_filter,
    dsp::bench_envelope,
    dsp::bench_distortion,
    dsp::bench_chorus,
    // Complete voices
    scenarios::bench_voices,
);
criterion_main!(benches);
