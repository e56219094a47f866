//! Benchmarks for the saturating state-variable filter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fart_machine::dsp::SVFilter;

use crate::{BUFFER_SIZES, SAMPLE_RATE};

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BUFFER_SIZES {
        // Sawtooth at roughly 110 Hz
        let input: Vec<f32> = (0..size)
            .map(|i| ((i % 400) as f32 / 400.0) * 2.0 - 1.0)
            .collect();
        let cutoffs: Vec<f32> = (0..size)
            .map(|i| 100.0 + 1_400.0 * i as f32 / size as f32)
            .collect();

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("lowpass", size), &size, |b, _| {
            b.iter(|| {
                let mut filter = SVFilter::lowpass(SAMPLE_RATE)
                    .with_cutoff(800.0)
                    .with_resonance(2.0);
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer));
            })
        });

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("highpass", size), &size, |b, _| {
            b.iter(|| {
                let mut filter = SVFilter::highpass(SAMPLE_RATE).with_cutoff(30.0);
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer));
            })
        });

        // Per-sample coefficients
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("lowpass_sweep", size), &size, |b, _| {
            b.iter(|| {
                let mut filter = SVFilter::lowpass(SAMPLE_RATE).with_resonance(2.0);
                buffer.copy_from_slice(&input);
                filter.render_sweep(black_box(&mut buffer), black_box(&cutoffs));
            })
        });
    }

    group.finish();
}
