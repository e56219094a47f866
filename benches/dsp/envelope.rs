//! Benchmarks for envelope curves.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fart_machine::dsp::Envelope;

use crate::{BUFFER_SIZES, SAMPLE_RATE};

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    let adsr = Envelope::adsr(0.02, 0.3, 0.2, 0.2);
    let attack_decay = Envelope::attack_decay(0.05, 0.4);

    for &size in BUFFER_SIZES {
        group.bench_with_input(BenchmarkId::new("adsr", size), &size, |b, &size| {
            b.iter(|| adsr.render(black_box(size), SAMPLE_RATE))
        });

        group.bench_with_input(BenchmarkId::new("attack_decay", size), &size, |b, &size| {
            b.iter(|| attack_decay.render(black_box(size), SAMPLE_RATE))
        });
    }

    group.finish();
}
