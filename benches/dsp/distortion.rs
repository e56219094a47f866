//! Benchmarks for saturation and limiting.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fart_machine::dsp::distortion;

use crate::BUFFER_SIZES;

pub fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");

    for &size in BUFFER_SIZES {
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 * 0.1).sin())
            .collect();

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("saturate", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                distortion::saturate_buffer(black_box(&mut buffer), black_box(3.0));
            })
        });

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("limit", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                distortion::limit_buffer(black_box(&mut buffer), black_box(0.95));
            })
        });
    }

    group.finish();
}
