//! Benchmarks for the modulated-delay chorus.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fart_machine::dsp::chorus::{chorus, ensemble};

use crate::{BUFFER_SIZES, SAMPLE_RATE};

pub fn bench_chorus(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/chorus");

    for &size in BUFFER_SIZES {
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 * 0.013).sin() * 0.5)
            .collect();

        group.bench_with_input(BenchmarkId::new("single", size), &size, |b, _| {
            b.iter(|| chorus(black_box(&input), SAMPLE_RATE, 0.004, 0.9, 0.0))
        });

        group.bench_with_input(BenchmarkId::new("ensemble", size), &size, |b, _| {
            b.iter(|| ensemble(black_box(&input), SAMPLE_RATE, 0.004, 0.9))
        });
    }

    group.finish();
}
