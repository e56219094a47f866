pub mod config;
pub mod context;
pub mod dsp;
pub mod error;
pub mod voice; // Parameter resolution and the render pipeline

pub use config::SynthConfig;
pub use context::RenderCtx;
pub use error::SynthError;
pub use voice::{render, ParameterRanges, Preset, VoiceParameters, VoiceRenderer};

pub const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;
pub(crate) const MIN_RESONANCE: f32 = 1e-3;
