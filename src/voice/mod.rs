// Purpose: one note in, one finished buffer out.
// `params` draws the random choices, `render` turns them into sound.

pub mod params;
pub mod render;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use params::{ParameterRanges, Preset};
pub use render::{render, VoiceRenderer};

/// Everything that varies from one sound to the next.
///
/// Fully resolved: no field is random. Draw values through
/// [`ParameterRanges::resolve`] (or set them by hand), then render. The
/// renderer only reads this struct.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceParameters {
    /// Oscillator pitch in Hz. Must be > 0.
    pub frequency: f32,
    /// Note length in seconds. Must be > 0.
    pub duration: f32,

    // Amplitude envelope
    pub attack: f32,
    pub decay: f32,
    pub sustain: f32,
    pub release: f32,

    // Filter / morph envelope (attack-decay)
    pub filter_attack: f32,
    pub filter_decay: f32,

    /// Raises the cutoff across the whole note (0.0 - 1.0).
    pub modulation: f32,
    /// Low-pass Q. Values at or below zero are floored, not rejected.
    pub resonance: f32,
    /// Saturation before the filter.
    pub drive: f32,
    /// Saturation after the filter.
    pub post_drive: f32,

    /// Start pitch offset, relative: 0.3 starts 30% sharp and glides down.
    pub pitch_sweep: f32,
    /// Amount of breath noise under the tone (0.0 - 1.0).
    pub breath: f32,

    /// Amplitude flutter rate in Hz.
    pub wobble_rate: f32,
    /// Amplitude flutter depth (0.0 - 1.0).
    pub wobble_depth: f32,
    /// Flutter start, in cycles.
    pub wobble_phase: f32,

    /// Seed for the breath noise.
    pub seed: u64,
}

impl Default for VoiceParameters {
    fn default() -> Self {
        Self {
            frequency: 90.0,
            duration: 1.0,
            attack: 0.02,
            decay: 0.3,
            sustain: 0.2,
            release: 0.2,
            filter_attack: 0.05,
            filter_decay: 0.4,
            modulation: 0.3,
            resonance: 2.0,
            drive: 2.0,
            post_drive: 1.5,
            pitch_sweep: 0.0,
            breath: 0.4,
            wobble_rate: 12.0,
            wobble_depth: 0.2,
            wobble_phase: 0.0,
            seed: 0,
        }
    }
}

impl VoiceParameters {
    /// Default patch at `frequency` Hz for `duration` seconds.
    pub fn note(frequency: f32, duration: f32) -> Self {
        Self {
            frequency,
            duration,
            ..Self::default()
        }
    }

    pub fn with_adsr(mut self, attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        self.attack = attack;
        self.decay = decay;
        self.sustain = sustain;
        self.release = release;
        self
    }

    pub fn with_filter_envelope(mut self, attack: f32, decay: f32) -> Self {
        self.filter_attack = attack;
        self.filter_decay = decay;
        self
    }

    pub fn with_drive(mut self, drive: f32, post_drive: f32) -> Self {
        self.drive = drive;
        self.post_drive = post_drive;
        self
    }

    pub fn with_resonance(mut self, resonance: f32) -> Self {
        self.resonance = resonance;
        self
    }

    pub fn with_modulation(mut self, modulation: f32) -> Self {
        self.modulation = modulation;
        self
    }

    pub fn with_pitch_sweep(mut self, sweep: f32) -> Self {
        self.pitch_sweep = sweep;
        self
    }

    pub fn with_breath(mut self, amount: f32, seed: u64) -> Self {
        self.breath = amount;
        self.seed = seed;
        self
    }

    pub fn with_wobble(mut self, rate_hz: f32, depth: f32, phase: f32) -> Self {
        self.wobble_rate = rate_hz;
        self.wobble_depth = depth;
        self.wobble_phase = phase;
        self
    }

    /// Plain tone: no noise, no flutter, no pitch glide.
    pub fn dry(self) -> Self {
        self.with_breath(0.0, self.seed)
            .with_wobble(self.wobble_rate, 0.0, 0.0)
            .with_pitch_sweep(0.0)
    }
}
