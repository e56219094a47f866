//! Drive / Saturation / Limiting
//!
//! Both stages here are stateless waveshapers built on tanh. Each one is
//! monotonic and odd-symmetric, and its output is bounded.
//!
//! # Saturation
//!
//!   saturate(x, drive) = tanh(x * drive)
//!
//! Output is in (-1, 1). At drive 1.0 quiet signals pass almost
//! unchanged. Larger drive pushes more of the waveform into the flat part
//! of the curve, rounding peaks off and adding odd harmonics.
//!
//! # Limiting
//!
//!   limit(x, threshold) = tanh(x / threshold) * threshold
//!
//! Output is in (-threshold, threshold). Below the threshold the curve is
//! close to unity gain, and loud peaks bend smoothly toward the threshold.
//! This is the only stage in the voice that guarantees the [-1, 1] range.
//!
//! # Drive Values
//!
//!   1.0  = Clean (no distortion)
//!   2-4  = Warm saturation
//!   5-10 = Obvious distortion
//!   10+  = Heavy, aggressive

/// Soft saturation: `tanh(sample * drive)`.
#[inline]
pub fn saturate(sample: f32, drive: f32) -> f32 {
    (sample * drive).tanh()
}

/// Soft limiter with a ceiling at `threshold`.
#[inline]
pub fn limit(sample: f32, threshold: f32) -> f32 {
    (sample / threshold).tanh() * threshold
}

/// Apply saturation to an entire buffer in place.
pub fn saturate_buffer(buffer: &mut [f32], drive: f32) {
    for sample in buffer.iter_mut() {
        *sample = saturate(*sample, drive);
    }
}

/// Apply the limiter to an entire buffer in place.
pub fn limit_buffer(buffer: &mut [f32], threshold: f32) {
    for sample in buffer.iter_mut() {
        *sample = limit(*sample, threshold);
    }
}
