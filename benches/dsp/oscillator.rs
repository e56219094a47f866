//! Benchmarks for the wavetable oscillator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fart_machine::dsp::{WavetableBank, WavetableOscillator};
use fart_machine::RenderCtx;

use crate::{BUFFER_SIZES, SAMPLE_RATE};

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    group.bench_function("bank_build", |b| {
        b.iter(|| WavetableBank::build(black_box(64), black_box(512)))
    });

    let bank = WavetableBank::default();
    let osc = WavetableOscillator::new(&bank);

    for &size in BUFFER_SIZES {
        let ctx = RenderCtx::from_frames(SAMPLE_RATE, size).unwrap();
        let time = ctx.time_axis();
        let morph: Vec<f32> = (0..size).map(|i| i as f32 / size as f32).collect();
        let freqs: Vec<f32> = (0..size).map(|i| 130.0 - 30.0 * i as f32 / size as f32).collect();

        group.bench_with_input(BenchmarkId::new("fixed", size), &size, |b, _| {
            b.iter(|| osc.render(black_box(90.0), black_box(&morph), black_box(&time)))
        });

        group.bench_with_input(BenchmarkId::new("swept", size), &size, |b, _| {
            b.iter(|| osc.render_swept(black_box(&freqs), black_box(&morph), SAMPLE_RATE))
        });
    }

    group.finish();
}
