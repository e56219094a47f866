use crate::error::{require_positive, SynthError};

/// Context passed to every stage of an offline render
///
/// Holds what the stages need to agree on:
/// - sample_rate: Audio sample rate (e.g., 44100.0)
/// - frames: Number of samples in every buffer of this render
///
/// Only constructible through validating constructors, so a `RenderCtx` in
/// hand always describes at least one frame at a positive sample rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCtx {
    pub sample_rate: f32,
    pub frames: usize,
}

impl RenderCtx {
    /// Create context for a note of `duration` seconds.
    ///
    /// The frame count is `round(sample_rate * duration)`.
    pub fn from_duration(sample_rate: f32, duration: f32) -> Result<Self, SynthError> {
        let sample_rate = require_positive("sample_rate", sample_rate)?;
        let duration = require_positive("duration", duration)?;

        let frames = (sample_rate as f64 * duration as f64).round();
        if frames < 1.0 {
            return Err(SynthError::invalid("duration", duration));
        }

        Ok(Self {
            sample_rate,
            frames: frames as usize,
        })
    }

    /// Create context for an explicit frame count.
    pub fn from_frames(sample_rate: f32, frames: usize) -> Result<Self, SynthError> {
        let sample_rate = require_positive("sample_rate", sample_rate)?;
        if frames == 0 {
            return Err(SynthError::invalid("length", 0.0f32));
        }
        Ok(Self { sample_rate, frames })
    }

    /// Seconds at sample `index`.
    #[inline]
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 / self.sample_rate as f64
    }

    /// Sample times in seconds, one per frame.
    pub fn time_axis(&self) -> Vec<f64> {
        (0..self.frames).map(|i| self.time_at(i)).collect()
    }

    pub fn duration(&self) -> f64 {
        self.frames as f64 / self.sample_rate as f64
    }
}
