//! Low Frequency Oscillator (LFO) helpers.

/*
Low Frequency Oscillators
=========================

An LFO is an oscillator at control rate, well below hearing (~0.01 Hz to
~20 Hz). It does not make sound; it moves some other parameter.

Two are used in the voice:

    ensemble chorus   0.5 - 1.5 Hz   slow sweep of a short delay time
    wobble (tremolo)  8 - 16 Hz      fast flutter of the amplitude

Phase here is measured in CYCLES, not radians: 0.25 is a quarter turn.
This makes "stagger three voices by a third of a cycle" read as 0, 1/3
and 2/3.

    bipolar   unipolar
    -1.0      0.0
     0.0      0.5
    +1.0      1.0
*/

use std::f64::consts::TAU;

/// Sine LFO value at time `t` (seconds), starting at `phase` cycles.
///
/// Bipolar: -1.0 to +1.0.
#[inline]
pub fn sine_at(rate_hz: f32, phase: f32, t: f64) -> f32 {
    (TAU * (rate_hz as f64 * t + phase as f64)).sin() as f32
}

/// Convert bipolar signal (-1.0 to +1.0) to unipolar (0.0 to 1.0).
#[inline]
pub fn bipolar_to_unipolar(bipolar: f32) -> f32 {
    (bipolar + 1.0) * 0.5
}

/// Amplitude wobble: `1 + depth * sin(...)` per sample, one per entry of `time`.
pub fn tremolo(rate_hz: f32, depth: f32, phase: f32, time: &[f64]) -> Vec<f32> {
    time.iter()
        .map(|&t| 1.0 + depth * sine_at(rate_hz, phase, t))
        .collect()
}
