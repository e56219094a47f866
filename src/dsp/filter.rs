use std::f32::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::MIN_RESONANCE;

/*
Saturating Zero-Delay-Feedback SVF
==================================

A two-pole state-variable filter in the trapezoidal (TPT) form: the
instantaneous feedback loop is solved per sample instead of being broken
with a one-sample delay, which keeps it well behaved at high resonance.

    g  = 2 * sin(pi * f_c / sr)
    k  = 1 / q
    h  = 1 / (1 + g * (g + k))

    v3 = x - ic2eq
    v1 = h * (ic1eq + g * v3)      band
    v2 = ic2eq + g * v1            low
    hp = x - k * v1 - v2           high

    ic1eq = 2 * v1 - ic1eq
    ic2eq = 2 * v2 - ic2eq

Drive in the loop
-----------------

The low-pass mode runs the low output through tanh *before* it is written
back into the second integrator. The state can never run away, and at high
drive or resonance the filter clips softly around the loop instead of at
its output. That is where the rubbery, analog-ish squelch comes from.

The high-pass mode saturates its own tap instead and leaves the
integrators linear.

Cutoff limits
-------------

`g = 2 sin(...)` drifts away from the true cutoff and the loop turns
unstable as f_c approaches Nyquist. Cutoffs are clamped into
[MIN_CUTOFF_HZ, nyquist_guard * sr] on every sample.

State
-----

`ic1eq` / `ic2eq` are the two integrator memories. Each `SVFilter` owns its
own `FilterState`: run the low-pass and high-pass passes through separate
instances, and reset (or build a fresh filter) for every new voice.
Leftover state rings into the start of the next sound.
*/

const MIN_CUTOFF_HZ: f32 = 1.0;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    LowPass,
    HighPass,
}

/// The two integrator memories of one filter instance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterState {
    pub ic1eq: f32, // First integrator's memory
    pub ic2eq: f32, // Second integrator's memory
}

impl FilterState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_zero(&self) -> bool {
        self.ic1eq == 0.0 && self.ic2eq == 0.0
    }
}

pub struct SVFilter {
    state: FilterState,

    pub cutoff_hz: f32,
    pub resonance: f32,
    pub drive: f32,
    sample_rate: f32,
    nyquist_guard: f32,
    mode: FilterMode,
}

impl SVFilter {
    pub fn new(mode: FilterMode, sample_rate: f32) -> Self {
        Self {
            state: FilterState::default(),
            cutoff_hz: 1000.0,
            resonance: 0.707,
            drive: 1.0,
            sample_rate,
            nyquist_guard: 0.45,
            mode,
        }
    }

    pub fn lowpass(sample_rate: f32) -> Self {
        Self::new(FilterMode::LowPass, sample_rate)
    }

    pub fn highpass(sample_rate: f32) -> Self {
        Self::new(FilterMode::HighPass, sample_rate)
    }

    pub fn with_cutoff(mut self, cutoff_hz: f32) -> Self {
        self.cutoff_hz = cutoff_hz;
        self
    }

    pub fn with_resonance(mut self, resonance: f32) -> Self {
        self.resonance = resonance;
        self
    }

    pub fn with_drive(mut self, drive: f32) -> Self {
        self.drive = drive;
        self
    }

    /// Highest cutoff as a fraction of the sample rate (default 0.45).
    pub fn with_nyquist_guard(mut self, ratio: f32) -> Self {
        self.nyquist_guard = ratio.clamp(0.01, 0.49);
        self
    }

    pub fn state(&self) -> FilterState {
        self.state
    }

    pub fn max_cutoff_hz(&self) -> f32 {
        self.sample_rate * self.nyquist_guard
    }

    #[inline]
    fn compute_g(&self, cutoff_hz: f32) -> f32 {
        let cutoff = cutoff_hz.clamp(MIN_CUTOFF_HZ, self.max_cutoff_hz());
        2.0 * (PI * cutoff / self.sample_rate).sin()
    }

    #[inline]
    fn compute_k(&self) -> f32 {
        1.0 / self.resonance.max(MIN_RESONANCE)
    }

    pub fn next_sample(&mut self, sample: f32, k: f32, g: f32) -> f32 {
        let x = sample * self.drive;
        let FilterState { ic1eq, ic2eq } = self.state;

        let h = 1.0 / (1.0 + g * (g + k));
        let v3 = x - ic2eq;
        let v1 = h * (ic1eq + g * v3);
        let v2 = ic2eq + g * v1;

        match self.mode {
            FilterMode::LowPass => {
                let low = v2.tanh();
                self.state.ic1eq = 2.0 * v1 - ic1eq;
                self.state.ic2eq = 2.0 * low - ic2eq;
                low
            }
            FilterMode::HighPass => {
                self.state.ic1eq = 2.0 * v1 - ic1eq;
                self.state.ic2eq = 2.0 * v2 - ic2eq;
                (x - k * v1 - v2).tanh()
            }
        }
    }

    /// Filter `buffer` in place at the fixed `cutoff_hz`.
    pub fn render(&mut self, buffer: &mut [f32]) {
        let g = self.compute_g(self.cutoff_hz);
        let k = self.compute_k();

        for sample in buffer.iter_mut() {
            *sample = self.next_sample(*sample, k, g);
        }
    }

    /// Filter `buffer` in place with one cutoff per sample.
    ///
    /// Past the end of `cutoffs` the last cutoff is held.
    pub fn render_sweep(&mut self, buffer: &mut [f32], cutoffs: &[f32]) {
        let k = self.compute_k();
        let mut cutoff = cutoffs.first().copied().unwrap_or(self.cutoff_hz);

        for (i, sample) in buffer.iter_mut().enumerate() {
            if let Some(&next) = cutoffs.get(i) {
                cutoff = next;
            }
            let g = self.compute_g(cutoff);
            *sample = self.next_sample(*sample, k, g);
        }
        self.cutoff_hz = cutoff;
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn set_cutoff(&mut self, cutoff: f32) {
        self.cutoff_hz = cutoff;
    }
}
