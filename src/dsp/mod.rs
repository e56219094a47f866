//! Low-level DSP primitives used by the voice renderer.
//!
//! Every stage works on whole offline buffers. They stay focused on the
//! signal-processing math so the renderer in [`crate::voice`] only has to
//! wire them together in order.

/// Fractional reads from an already rendered buffer.
pub mod delay;
/// Modulated-delay chorus and the three-voice ensemble.
pub mod chorus;
/// Drive, saturation and the output limiter.
pub mod distortion;
/// Attack/decay/sustain/release curves.
pub mod envelope;
/// Zero-delay-feedback state-variable filter with saturation in the loop.
pub mod filter;
/// Low frequency oscillator helpers.
pub mod lfo;
/// Seeded breath noise.
pub mod noise;
/// Wavetable oscillator.
pub mod oscillator;
/// Saw → square morph tables.
pub mod wavetable;

pub use envelope::{Envelope, EnvelopeCurve};
pub use filter::{FilterMode, FilterState, SVFilter};
pub use oscillator::WavetableOscillator;
pub use wavetable::WavetableBank;

/// A mono buffer of rendered samples.
pub type SampleBuffer = Vec<f32>;
