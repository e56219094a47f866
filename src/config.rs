//! Rendering constants shared by every voice.
//!
//! Anything that varies per note lives in [`VoiceParameters`]; this struct
//! holds the fixed "patch" around it: table sizes, sweep range, cleanup
//! filter, chorus and limiter settings.
//!
//! [`VoiceParameters`]: crate::voice::VoiceParameters

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::DEFAULT_SAMPLE_RATE;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthConfig {
    /// Output sample rate in Hz.
    pub sample_rate: f32,

    /// Number of tables in the saw → square morph.
    pub table_count: usize,
    /// Samples per single-cycle table.
    pub table_len: usize,

    /// Cutoff when the filter envelope is at rest (Hz).
    pub filter_min_hz: f32,
    /// Cutoff when the filter envelope peaks (Hz).
    pub filter_max_hz: f32,
    /// Added to the cutoff at full modulation (Hz).
    pub modulation_range_hz: f32,
    /// Input gain inside the low-pass loop.
    pub filter_drive: f32,
    /// Cutoffs are held below `nyquist_guard * sample_rate`.
    pub nyquist_guard: f32,

    /// Rumble cleanup high-pass cutoff (Hz).
    pub highpass_hz: f32,
    pub highpass_resonance: f32,

    /// Ensemble LFO base rate (Hz).
    pub chorus_rate_hz: f32,
    /// Ensemble maximum delay (seconds).
    pub chorus_depth_seconds: f32,

    pub limiter_threshold: f32,
    /// Fade to silence at the very end of the buffer (seconds).
    pub tail_fade_seconds: f32,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            table_count: 64,
            table_len: 512,
            filter_min_hz: 100.0,
            filter_max_hz: 1_500.0,
            modulation_range_hz: 800.0,
            filter_drive: 1.0,
            nyquist_guard: 0.45,
            highpass_hz: 30.0,
            highpass_resonance: 0.707,
            chorus_rate_hz: 0.9,
            chorus_depth_seconds: 0.004,
            limiter_threshold: 0.95,
            tail_fade_seconds: 0.002,
        }
    }
}

impl SynthConfig {
    pub fn with_sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_tables(mut self, table_count: usize, table_len: usize) -> Self {
        self.table_count = table_count;
        self.table_len = table_len;
        self
    }

    /// Set the envelope-driven cutoff sweep range.
    pub fn with_filter_range(mut self, min_hz: f32, max_hz: f32) -> Self {
        self.filter_min_hz = min_hz;
        self.filter_max_hz = max_hz;
        self
    }

    pub fn with_modulation_range(mut self, hz: f32) -> Self {
        self.modulation_range_hz = hz;
        self
    }

    pub fn with_chorus(mut self, rate_hz: f32, depth_seconds: f32) -> Self {
        self.chorus_rate_hz = rate_hz;
        self.chorus_depth_seconds = depth_seconds;
        self
    }

    pub fn with_limiter_threshold(mut self, threshold: f32) -> Self {
        self.limiter_threshold = threshold.clamp(0.01, 1.0);
        self
    }

    pub fn with_tail_fade(mut self, seconds: f32) -> Self {
        self.tail_fade_seconds = seconds.max(0.0);
        self
    }

    /// Highest cutoff the filters will run at.
    pub fn max_cutoff_hz(&self) -> f32 {
        self.sample_rate * self.nyquist_guard
    }
}
