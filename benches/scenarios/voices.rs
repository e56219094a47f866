//! Benchmarks for complete voice renders.
//!
//! Parameters come from each preset with a fixed seed, so every run
//! renders the same sounds.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fart_machine::{Preset, SynthConfig, VoiceParameters, VoiceRenderer};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::SAMPLE_RATE;

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");
    group.sample_size(20);

    let renderer = VoiceRenderer::new(SynthConfig::default().with_sample_rate(SAMPLE_RATE));

    // Baseline: one second, default patch, no noise or flutter
    let dry = VoiceParameters::note(90.0, 1.0).dry();
    group.bench_function("dry_1s", |b| b.iter(|| renderer.render(black_box(&dry))));

    // Pitch glide switches the oscillator to accumulated phase
    let swept = VoiceParameters::note(90.0, 1.0).with_pitch_sweep(0.3);
    group.bench_function("swept_1s", |b| b.iter(|| renderer.render(black_box(&swept))));

    let mut rng = StdRng::seed_from_u64(7);
    for preset in Preset::ALL {
        let params = preset.ranges().resolve(&mut rng);
        group.bench_with_input(
            BenchmarkId::new("preset", preset.name()),
            &params,
            |b, params| b.iter(|| renderer.render(black_box(params))),
        );
    }

    // Building the tables is part of constructing a renderer
    group.bench_function("renderer_new", |b| {
        b.iter(|| VoiceRenderer::new(black_box(SynthConfig::default())))
    });

    group.finish();
}
