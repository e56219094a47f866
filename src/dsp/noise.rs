//! Breath noise: white noise through a one-pole smoother.
//!
//! Mixed under the tone it gives the windy, airy layer. Seeded, so the same
//! seed always yields the same buffer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dsp::SampleBuffer;

/// Smoothing coefficient of the one-pole low-pass (per sample).
pub const BREATH_SMOOTHING: f32 = 0.05;

/// `len` samples of smoothed noise, roughly within [-1, 1].
pub fn breath(len: usize, seed: u64) -> SampleBuffer {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut smoothed = 0.0f32;

    (0..len)
        .map(|_| {
            let white: f32 = rng.gen_range(-1.0..1.0);
            smoothed += BREATH_SMOOTHING * (white - smoothed);
            smoothed
        })
        .collect()
}

/// Add `amount` × breath noise onto `buffer` in place.
pub fn mix_breath(buffer: &mut [f32], amount: f32, seed: u64) {
    if amount == 0.0 {
        return;
    }
    let noise = breath(buffer.len(), seed);
    for (sample, n) in buffer.iter_mut().zip(noise) {
        *sample += amount * n;
    }
}
