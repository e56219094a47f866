use crate::dsp::wavetable::WavetableBank;
use crate::dsp::SampleBuffer;
use crate::error::{require_positive, SynthError};

/*
Wavetable Oscillator
====================

The oscillator turns a frequency into a phase and reads the wavetable bank
at that phase. A second control, the morph curve, picks where between the
saw and the square tables each sample is read.

Phase
-----

For a fixed frequency the phase is computed directly from the time axis:

    phase(t) = frac(freq * t)

so there is no accumulated rounding error over long notes. It is computed
in f64; `freq * t` grows large quickly and f32 would lose the fractional
part first.

For a swept frequency (pitch envelope) there is no closed form, so
`render_swept` accumulates `freq[i] / sample_rate` per sample instead.

Morph
-----

`morph[i]` in [0, 1] is scaled to a fractional table index. The bank
blends the two nearest tables and, inside each, the two nearest entries.
Both interpolations matter: without the first the timbre steps audibly
as the envelope moves, without the second the pitch gets grainy.

If the morph curve is shorter than the output, its last value is held.
*/

pub struct WavetableOscillator<'a> {
    bank: &'a WavetableBank,
}

#[inline]
fn morph_at(morph: &[f32], index: usize) -> f32 {
    morph
        .get(index)
        .or_else(|| morph.last())
        .copied()
        .unwrap_or(0.0)
}

impl<'a> WavetableOscillator<'a> {
    pub fn new(bank: &'a WavetableBank) -> Self {
        Self { bank }
    }

    /// Render one sample per entry of `time` (seconds) at a fixed frequency.
    pub fn render(
        &self,
        freq: f32,
        morph: &[f32],
        time: &[f64],
    ) -> Result<SampleBuffer, SynthError> {
        let freq = require_positive("frequency", freq)? as f64;

        Ok(time
            .iter()
            .enumerate()
            .map(|(i, &t)| {
                let phase = (freq * t).fract();
                self.bank.sample(morph_at(morph, i), phase)
            })
            .collect())
    }

    /// Render one sample per entry of `freqs`, accumulating phase.
    ///
    /// Every frequency must be positive; a sweep through zero is rejected
    /// rather than silently frozen.
    pub fn render_swept(
        &self,
        freqs: &[f32],
        morph: &[f32],
        sample_rate: f32,
    ) -> Result<SampleBuffer, SynthError> {
        let sample_rate = require_positive("sample_rate", sample_rate)? as f64;
        for &freq in freqs {
            require_positive("frequency", freq)?;
        }

        let mut phase = 0.0f64;
        let mut out = Vec::with_capacity(freqs.len());
        for (i, &freq) in freqs.iter().enumerate() {
            out.push(self.bank.sample(morph_at(morph, i), phase));
            phase = (phase + freq as f64 / sample_rate).fract();
        }
        Ok(out)
    }
}
