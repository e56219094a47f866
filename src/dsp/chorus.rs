use crate::dsp::delay::read_delayed;
use crate::dsp::lfo::{bipolar_to_unipolar, sine_at};
use crate::dsp::SampleBuffer;

/*
Ensemble Chorus
===============

Chorus thickens a sound by mixing the dry signal with delayed copies whose
delay time is slowly swept by an LFO. A moving delay is a moving pitch
(the read head speeds up and slows down), so each copy drifts slightly
sharp and flat against the dry signal.

One voice
---------

    delay(t) = depth * (0.5 + 0.5 * sin(2π (rate * t + phase)))    seconds

The delay swings between 0 and `depth`. The delayed read lands between
samples, so it is linearly interpolated. Reads before the start of the
buffer are silence. `chorus` returns only this wet signal.

With depth = 0 the read head sits on the current sample and the voice is
an exact copy of its input.

Ensemble
--------

Three voices at slightly different rates and depths, started a third of a
cycle apart, are averaged and then mixed 50/50 with the dry signal:

    voice   rate     depth    phase
    0       1.00 r   1.00 d   0
    1       1.13 r   0.85 d   1/3
    2       0.87 r   1.15 d   2/3

The rates never line up, so the copies keep decorrelating instead of
beating in a fixed pattern. That is what makes the sound "thicker" than
one modulated delay.

Every voice reads only the dry buffer, never its own output. Voices are
independent of each other, and so is every sample within a voice.
*/

const ENSEMBLE_VOICES: [(f32, f32, f32); 3] = [
    // (rate multiplier, depth multiplier, phase in cycles)
    (1.00, 1.00, 0.0),
    (1.13, 0.85, 1.0 / 3.0),
    (0.87, 1.15, 2.0 / 3.0),
];

/// Single modulated-delay voice. Returns the wet signal only.
///
/// - `depth_seconds`: maximum delay (0.001-0.01 typical)
/// - `rate_hz`: LFO speed (0.5-1.5 classic)
/// - `phase_offset`: LFO start, in cycles
pub fn chorus(
    signal: &[f32],
    sample_rate: f32,
    depth_seconds: f32,
    rate_hz: f32,
    phase_offset: f32,
) -> SampleBuffer {
    let depth_samples = (depth_seconds.max(0.0) * sample_rate) as f64;
    let seconds_per_sample = 1.0 / sample_rate as f64;

    (0..signal.len())
        .map(|i| {
            let t = i as f64 * seconds_per_sample;
            let sweep = bipolar_to_unipolar(sine_at(rate_hz, phase_offset, t)) as f64;
            read_delayed(signal, i, depth_samples * sweep)
        })
        .collect()
}

/// Three-voice ensemble mixed 50/50 with the dry signal.
pub fn ensemble(
    signal: &[f32],
    sample_rate: f32,
    depth_seconds: f32,
    rate_hz: f32,
) -> SampleBuffer {
    let voices: Vec<SampleBuffer> = ENSEMBLE_VOICES
        .iter()
        .map(|&(rate_mul, depth_mul, phase)| {
            chorus(
                signal,
                sample_rate,
                depth_seconds * depth_mul,
                rate_hz * rate_mul,
                phase,
            )
        })
        .collect();

    let scale = 1.0 / voices.len() as f32;
    signal
        .iter()
        .enumerate()
        .map(|(i, &dry)| {
            let wet: f32 = voices.iter().map(|voice| voice[i]).sum::<f32>() * scale;
            0.5 * dry + 0.5 * wet
        })
        .collect()
}
