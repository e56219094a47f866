use crate::config::SynthConfig;
use crate::context::RenderCtx;
use crate::dsp::chorus::ensemble;
use crate::dsp::distortion::{limit_buffer, saturate_buffer};
use crate::dsp::envelope::{fade_out, Envelope};
use crate::dsp::filter::SVFilter;
use crate::dsp::lfo::tremolo;
use crate::dsp::noise::mix_breath;
use crate::dsp::oscillator::WavetableOscillator;
use crate::dsp::wavetable::WavetableBank;
use crate::dsp::SampleBuffer;
use crate::error::{require_finite, require_positive, SynthError};
use crate::voice::VoiceParameters;

/*
Voice Pipeline
==============

    oscillator (morph ← filter env, pitch ← sweep)
      + breath noise
      × amp env × wobble
      → drive
      → low-pass   (cutoff ← filter env + modulation)
      → high-pass  (fixed, removes rumble)
      → post drive
      → ensemble chorus
      → limiter
      → tail fade

Each call builds its own envelopes and its own two filters, so no state
survives from one sound into the next and concurrent calls never share
anything mutable. The bank is only read.
*/

/// Seconds over which `pitch_sweep` glides back to the base frequency.
pub const PITCH_SWEEP_SECONDS: f64 = 0.15;

/// Render one voice into a finished buffer.
///
/// The result has exactly `round(sample_rate * duration)` samples, all
/// within `[-limiter_threshold, limiter_threshold]`.
pub fn render(
    params: &VoiceParameters,
    config: &SynthConfig,
    bank: &WavetableBank,
) -> Result<SampleBuffer, SynthError> {
    let frequency = require_positive("frequency", params.frequency)?;
    validate(params, config)?;
    let ctx = RenderCtx::from_duration(config.sample_rate, params.duration)?;
    let (frames, sample_rate) = (ctx.frames, ctx.sample_rate);
    let time = ctx.time_axis();

    log::debug!(
        "rendering voice: {:.1} Hz, {:.3}s ({} frames at {} Hz)",
        frequency,
        params.duration,
        frames,
        sample_rate
    );

    let amp_env = Envelope::adsr(params.attack, params.decay, params.sustain, params.release)
        .render(frames, sample_rate)?;
    let filter_env =
        Envelope::attack_decay(params.filter_attack, params.filter_decay).render(frames, sample_rate)?;

    // Timbre follows the filter: saw at rest, square at the envelope peak
    let morph = &filter_env;

    let osc = WavetableOscillator::new(bank);
    let mut signal = if params.pitch_sweep != 0.0 {
        let freqs = pitch_curve(frequency, params.pitch_sweep, &time);
        osc.render_swept(&freqs, morph, sample_rate)?
    } else {
        osc.render(frequency, morph, &time)?
    };

    mix_breath(&mut signal, params.breath, params.seed);

    let wobble = tremolo(params.wobble_rate, params.wobble_depth, params.wobble_phase, &time);
    for ((sample, &amp), &flutter) in signal.iter_mut().zip(&amp_env).zip(&wobble) {
        *sample *= amp * flutter;
    }

    saturate_buffer(&mut signal, params.drive);

    let cutoffs = cutoff_curve(&filter_env, params.modulation, config);
    let peak_cutoff = cutoffs.iter().copied().fold(0.0f32, f32::max);
    if peak_cutoff > config.max_cutoff_hz() {
        log::warn!(
            "cutoff sweep peaks at {:.0} Hz, clamped to {:.0} Hz",
            peak_cutoff,
            config.max_cutoff_hz()
        );
    }

    let mut lowpass = SVFilter::lowpass(sample_rate)
        .with_resonance(params.resonance)
        .with_drive(config.filter_drive)
        .with_nyquist_guard(config.nyquist_guard);
    lowpass.render_sweep(&mut signal, &cutoffs);

    let mut highpass = SVFilter::highpass(sample_rate)
        .with_cutoff(config.highpass_hz)
        .with_resonance(config.highpass_resonance)
        .with_nyquist_guard(config.nyquist_guard);
    highpass.render(&mut signal);

    saturate_buffer(&mut signal, params.post_drive);

    let mut signal = ensemble(
        &signal,
        sample_rate,
        config.chorus_depth_seconds,
        config.chorus_rate_hz,
    );

    limit_buffer(&mut signal, config.limiter_threshold);

    // At least one frame, so low sample rates still end on silence
    let fade_frames = (config.tail_fade_seconds * sample_rate).ceil().max(1.0) as usize;
    fade_out(&mut signal, fade_frames);

    log::trace!("voice done: peak cutoff {:.0} Hz", peak_cutoff);
    Ok(signal)
}

/// Reject NaN or infinite settings before any buffer is allocated.
///
/// Finite extremes are fine: every stage clamps or saturates them. A
/// non-finite value would survive `clamp` and poison the filter state for
/// the rest of the buffer.
fn validate(params: &VoiceParameters, config: &SynthConfig) -> Result<(), SynthError> {
    let fields = [
        ("attack", params.attack),
        ("decay", params.decay),
        ("sustain", params.sustain),
        ("release", params.release),
        ("filter_attack", params.filter_attack),
        ("filter_decay", params.filter_decay),
        ("modulation", params.modulation),
        ("resonance", params.resonance),
        ("drive", params.drive),
        ("post_drive", params.post_drive),
        ("pitch_sweep", params.pitch_sweep),
        ("breath", params.breath),
        ("wobble_rate", params.wobble_rate),
        ("wobble_depth", params.wobble_depth),
        ("wobble_phase", params.wobble_phase),
        ("filter_min_hz", config.filter_min_hz),
        ("filter_max_hz", config.filter_max_hz),
        ("modulation_range_hz", config.modulation_range_hz),
        ("filter_drive", config.filter_drive),
        ("nyquist_guard", config.nyquist_guard),
        ("highpass_hz", config.highpass_hz),
        ("highpass_resonance", config.highpass_resonance),
        ("chorus_rate_hz", config.chorus_rate_hz),
        ("chorus_depth_seconds", config.chorus_depth_seconds),
        ("tail_fade_seconds", config.tail_fade_seconds),
    ];
    for (name, value) in fields {
        require_finite(name, value)?;
    }

    // `limit` divides by the threshold
    require_positive("limiter_threshold", config.limiter_threshold)?;
    Ok(())
}

/// Per-sample frequency for a pitch glide from `base * (1 + sweep)` to `base`.
///
/// The sweep is held within ±0.9 so the frequency never reaches zero.
pub(crate) fn pitch_curve(base: f32, sweep: f32, time: &[f64]) -> Vec<f32> {
    let sweep = sweep.clamp(-0.9, 0.9) as f64;
    time.iter()
        .map(|&t| {
            let remaining = (1.0 - t / PITCH_SWEEP_SECONDS).max(0.0);
            (base as f64 * (1.0 + sweep * remaining)) as f32
        })
        .collect()
}

/// Exponential min → max cutoff mapping, offset by the modulation amount.
pub(crate) fn cutoff_curve(filter_env: &[f32], modulation: f32, config: &SynthConfig) -> Vec<f32> {
    let min = config.filter_min_hz.max(1.0);
    let max = config.filter_max_hz.max(min);
    let ratio = max / min;
    let offset = modulation.clamp(0.0, 1.0) * config.modulation_range_hz;

    filter_env
        .iter()
        .map(|&env| min * ratio.powf(env) + offset)
        .collect()
}

/// Shared config and wavetables for rendering many voices.
///
/// `render` takes `&self`; one renderer can serve any number of threads.
#[derive(Debug, Clone)]
pub struct VoiceRenderer {
    config: SynthConfig,
    bank: WavetableBank,
}

impl VoiceRenderer {
    pub fn new(config: SynthConfig) -> Self {
        let bank = WavetableBank::build(config.table_count, config.table_len);
        Self { config, bank }
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    pub fn bank(&self) -> &WavetableBank {
        &self.bank
    }

    pub fn render(&self, params: &VoiceParameters) -> Result<SampleBuffer, SynthError> {
        render(params, &self.config, &self.bank)
    }
}

impl Default for VoiceRenderer {
    fn default() -> Self {
        Self::new(SynthConfig::default())
    }
}
