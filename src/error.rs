use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthError {
    /// A value that must be strictly positive and finite was not.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("unknown preset `{0}` (expected default, quick, long, wet or squeaky)")]
    UnknownPreset(String),
}

impl SynthError {
    pub(crate) fn invalid(name: &'static str, value: impl Into<f64>) -> Self {
        SynthError::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}

/// Reject NaN and infinities. Any finite value, zero or negative included, passes.
pub(crate) fn require_finite(name: &'static str, value: f32) -> Result<f32, SynthError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SynthError::invalid(name, value))
    }
}

/// Reject anything that is not a finite, strictly positive number.
pub(crate) fn require_positive(name: &'static str, value: f32) -> Result<f32, SynthError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SynthError::invalid(name, value))
    }
}
