//! Random parameter resolution.
//!
//! Every random choice a sound needs is drawn here, once, before rendering
//! starts. The default ranges are hand-tuned for a low, breathy voice; each
//! preset reshapes a few of them.

use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::Rng;

use crate::error::SynthError;
use crate::voice::VoiceParameters;

/// Inclusive range for every randomized field of [`VoiceParameters`].
///
/// A range with equal ends pins that field.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterRanges {
    pub frequency: RangeInclusive<f32>,
    pub duration: RangeInclusive<f32>,
    pub attack: RangeInclusive<f32>,
    pub decay: RangeInclusive<f32>,
    pub sustain: RangeInclusive<f32>,
    pub release: RangeInclusive<f32>,
    pub filter_attack: RangeInclusive<f32>,
    pub filter_decay: RangeInclusive<f32>,
    pub modulation: RangeInclusive<f32>,
    pub resonance: RangeInclusive<f32>,
    pub drive: RangeInclusive<f32>,
    pub post_drive: RangeInclusive<f32>,
    pub pitch_sweep: RangeInclusive<f32>,
    pub breath: RangeInclusive<f32>,
    pub wobble_rate: RangeInclusive<f32>,
    pub wobble_depth: RangeInclusive<f32>,
}

impl Default for ParameterRanges {
    fn default() -> Self {
        Self {
            frequency: 70.0..=110.0,
            duration: 0.6..=1.4,
            attack: 0.01..=0.04,
            decay: 0.2..=0.4,
            sustain: 0.1..=0.3,
            release: 0.1..=0.3,
            filter_attack: 0.02..=0.1,
            filter_decay: 0.2..=0.6,
            modulation: 0.0..=1.0,
            resonance: 1.0..=4.0,
            drive: 1.5..=4.0,
            post_drive: 1.0..=2.0,
            pitch_sweep: -0.3..=0.3,
            breath: 0.2..=0.5,
            wobble_rate: 8.0..=16.0,
            wobble_depth: 0.1..=0.3,
        }
    }
}

impl ParameterRanges {
    /// Short and tight, few flutters.
    pub fn quick() -> Self {
        Self {
            duration: 0.3..=0.7,
            attack: 0.04..=0.06,
            decay: 0.1..=0.2,
            release: 0.05..=0.15,
            breath: 0.1..=0.4,
            wobble_rate: 4.0..=8.0,
            ..Self::default()
        }
    }

    /// Drawn out, lots of flutter.
    pub fn long() -> Self {
        Self {
            duration: 1.5..=3.0,
            attack: 0.08..=0.12,
            decay: 0.4..=0.8,
            sustain: 0.3..=0.5,
            release: 0.3..=0.6,
            filter_decay: 0.8..=1.5,
            breath: 0.3..=0.7,
            wobble_rate: 5.0..=10.0,
            ..Self::default()
        }
    }

    /// Mostly noise, a little tone.
    pub fn wet() -> Self {
        Self {
            duration: 0.7..=1.5,
            attack: 0.06..=0.1,
            breath: 0.7..=1.0,
            resonance: 2.0..=5.0,
            wobble_rate: 6.0..=12.0,
            ..Self::default()
        }
    }

    /// High and dry, with a resonant whistle.
    pub fn squeaky() -> Self {
        Self {
            frequency: 350.0..=700.0,
            duration: 0.5..=1.2,
            breath: 0.1..=0.1,
            resonance: 4.0..=8.0,
            pitch_sweep: 0.0..=0.3,
            ..Self::default()
        }
    }

    /// Draw one concrete set of parameters.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> VoiceParameters {
        VoiceParameters {
            frequency: rng.gen_range(self.frequency.clone()),
            duration: rng.gen_range(self.duration.clone()),
            attack: rng.gen_range(self.attack.clone()),
            decay: rng.gen_range(self.decay.clone()),
            sustain: rng.gen_range(self.sustain.clone()),
            release: rng.gen_range(self.release.clone()),
            filter_attack: rng.gen_range(self.filter_attack.clone()),
            filter_decay: rng.gen_range(self.filter_decay.clone()),
            modulation: rng.gen_range(self.modulation.clone()),
            resonance: rng.gen_range(self.resonance.clone()),
            drive: rng.gen_range(self.drive.clone()),
            post_drive: rng.gen_range(self.post_drive.clone()),
            pitch_sweep: rng.gen_range(self.pitch_sweep.clone()),
            breath: rng.gen_range(self.breath.clone()),
            wobble_rate: rng.gen_range(self.wobble_rate.clone()),
            wobble_depth: rng.gen_range(self.wobble_depth.clone()),
            wobble_phase: rng.gen_range(0.0..1.0),
            seed: rng.gen(),
        }
    }
}

/// Named starting points for [`ParameterRanges`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    #[default]
    Default,
    Quick,
    Long,
    Wet,
    Squeaky,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Default,
        Preset::Quick,
        Preset::Long,
        Preset::Wet,
        Preset::Squeaky,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Quick => "quick",
            Preset::Long => "long",
            Preset::Wet => "wet",
            Preset::Squeaky => "squeaky",
        }
    }

    pub fn ranges(&self) -> ParameterRanges {
        match self {
            Preset::Default => ParameterRanges::default(),
            Preset::Quick => ParameterRanges::quick(),
            Preset::Long => ParameterRanges::long(),
            Preset::Wet => ParameterRanges::wet(),
            Preset::Squeaky => ParameterRanges::squeaky(),
        }
    }
}

impl FromStr for Preset {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Ok(Preset::Default);
        }
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SynthError::UnknownPreset(name.to_string()))
    }
}
