use crate::error::{require_positive, SynthError};

/*
ADSR Curves
===========

An envelope is a control curve that shapes a parameter over the life of a
note. Here the whole note length is known before rendering starts, so the
envelope is not a gate-driven state machine: it is computed up front as a
buffer with one value per sample.

The Shape: Linear Ramps
-----------------------

  Level
    1.0 ┐     ╱╲
        │    ╱  ╲___________
    S   │   ╱               ╲
        │  ╱                 ╲
    0.0 └─╱───────────────────╲──→ Time
        Attack Decay  Sustain  Release
         (A)   (D)      (S)      (R)

Segment lengths are `trunc(seconds * sample_rate)`. Sustain is whatever is
left between the end of decay and the start of release, so its length falls
out of the buffer length rather than being a parameter.


Endpoints
---------

Attack and decay use exclusive endpoints: attack covers 0, 1/n, ... but
never writes 1.0 itself, the first decay sample does. Release is the
exception: it is inclusive, so the very last sample of the buffer is
exactly 0.0. Ending on anything else leaves a step at the end of the
buffer, which is an audible click.

    attack (n = 4):   0.00  0.25  0.50  0.75 | decay starts at 1.0
    release (n = 4):  S     2S/3  S/3   0.00 | end of buffer


Overflow
--------

If attack + decay + release do not fit in the buffer, segments are clipped
in order: attack first, then decay, then release. Sustain shrinks to zero
before anything else is cut. A too-long envelope degrades audibly instead
of failing.
*/

/// One control value per sample, in [0, 1].
pub type EnvelopeCurve = Vec<f32>;

/// Segment times of an envelope. Cheap to copy; render as often as needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    attack_time: f32,   // seconds to ramp 0 → 1
    decay_time: f32,    // seconds to ramp 1 → sustain
    sustain_level: f32, // level to hold (0.0 - 1.0)
    release_time: f32,  // seconds to ramp sustain → 0 at the end
}

/// Sample counts for each segment after clipping to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segments {
    attack: usize,
    decay: usize,
    sustain: usize,
    release: usize,
}

#[inline]
fn segment_samples(seconds: f32, sample_rate: f32) -> usize {
    // `as` saturates: negative and NaN times become 0
    (seconds * sample_rate) as usize
}

impl Envelope {
    pub fn adsr(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self {
            attack_time: attack,
            decay_time: decay,
            sustain_level: sustain.clamp(0.0, 1.0),
            release_time: release,
        }
    }

    /// Attack then decay to zero, no sustain or release.
    ///
    /// Used for the filter and morph curves.
    pub fn attack_decay(attack: f32, decay: f32) -> Self {
        Self::adsr(attack, decay, 0.0, 0.0)
    }

    fn segments(&self, length: usize, sample_rate: f32) -> Segments {
        let attack = segment_samples(self.attack_time, sample_rate).min(length);
        let mut remaining = length - attack;

        let decay = segment_samples(self.decay_time, sample_rate).min(remaining);
        remaining -= decay;

        let release = segment_samples(self.release_time, sample_rate).min(remaining);
        remaining -= release;

        Segments {
            attack,
            decay,
            sustain: remaining,
            release,
        }
    }

    /// Render `length` samples of this envelope.
    pub fn render(&self, length: usize, sample_rate: f32) -> Result<EnvelopeCurve, SynthError> {
        if length == 0 {
            return Err(SynthError::invalid("length", 0.0f32));
        }
        let sample_rate = require_positive("sample_rate", sample_rate)?;

        let seg = self.segments(length, sample_rate);
        let sustain = self.sustain_level;
        let mut curve = Vec::with_capacity(length);

        for i in 0..seg.attack {
            curve.push(i as f32 / seg.attack as f32);
        }

        for i in 0..seg.decay {
            let progress = i as f32 / seg.decay as f32;
            curve.push(1.0 - (1.0 - sustain) * progress);
        }

        curve.extend(std::iter::repeat(sustain).take(seg.sustain));

        // Inclusive endpoint: the last release sample is exactly 0.0
        let last = seg.release.saturating_sub(1);
        for i in 0..seg.release {
            let level = if i == last {
                0.0
            } else {
                sustain * (1.0 - i as f32 / last as f32)
            };
            curve.push(level);
        }

        debug_assert_eq!(curve.len(), length);
        Ok(curve)
    }
}

/// Full ADSR curve of `length` samples.
pub fn adsr(
    length: usize,
    sample_rate: f32,
    attack: f32,
    decay: f32,
    sustain: f32,
    release: f32,
) -> Result<EnvelopeCurve, SynthError> {
    Envelope::adsr(attack, decay, sustain, release).render(length, sample_rate)
}

/// Attack/decay curve of `length` samples with implicit zero sustain and release.
pub fn attack_decay(
    length: usize,
    sample_rate: f32,
    attack: f32,
    decay: f32,
) -> Result<EnvelopeCurve, SynthError> {
    Envelope::attack_decay(attack, decay).render(length, sample_rate)
}

/// Fade the last `frames` samples of `buffer` linearly to exactly 0.0.
///
/// Applied after the limiter, so it can only lower levels.
pub fn fade_out(buffer: &mut [f32], frames: usize) {
    let frames = frames.min(buffer.len());
    if frames == 0 {
        return;
    }

    let start = buffer.len() - frames;
    let last = frames.saturating_sub(1);
    for (i, sample) in buffer[start..].iter_mut().enumerate() {
        let gain = if i == last {
            0.0
        } else {
            1.0 - i as f32 / last as f32
        };
        *sample *= gain;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 1_000.0;

    #[test]
    fn fade_out_ends_on_silence() {
        let mut buffer = vec![0.8; 10];
        fade_out(&mut buffer, 5);

        assert!(buffer[..5].iter().all(|&s| s == 0.8));
        assert_eq!(buffer[5], 0.8);
        assert!((buffer[7] - 0.4).abs() < 1e-6);
        assert_eq!(buffer[9], 0.0);

        let mut short = vec![0.5; 3];
        fade_out(&mut short, 100);
        assert_eq!(short, vec![0.5, 0.25, 0.0]);

        let mut untouched = vec![0.5; 3];
        fade_out(&mut untouched, 0);
        assert_eq!(untouched, vec![0.5; 3]);
    }

    #[test]
    fn attack_starts_at_zero_and_rises() {
        let curve = adsr(100, SAMPLE_RATE, 0.01, 0.02, 0.5, 0.02).unwrap();

        assert_eq!(curve[0], 0.0);
        assert!((curve[5] - 0.5).abs() < 1e-6);
        // first decay sample is the peak
        assert_eq!(curve[10], 1.0);
    }

    #[test]
    fn sustain_holds_target_level() {
        let sustain = 0.6;
        let curve = adsr(200, SAMPLE_RATE, 0.01, 0.05, sustain, 0.05).unwrap();

        // attack 10, decay 50, release 50 → sustain spans 60..150
        for &level in &curve[60..150] {
            assert_eq!(level, sustain);
        }
    }

    #[test]
    fn release_reaches_exactly_zero() {
        let curve = adsr(200, SAMPLE_RATE, 0.01, 0.05, 0.5, 0.05).unwrap();

        assert_eq!(curve[150], 0.5);
        assert_eq!(*curve.last().unwrap(), 0.0);
        for pair in curve[150..].windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn length_is_always_preserved() {
        for length in [1, 2, 7, 64, 1_000] {
            let curve = adsr(length, SAMPLE_RATE, 0.3, 0.3, 0.4, 0.3).unwrap();
            assert_eq!(curve.len(), length);
        }
    }

    #[test]
    fn overflowing_segments_clip_left_to_right() {
        let env = Envelope::adsr(0.06, 0.03, 0.5, 0.05);
        let seg = env.segments(100, SAMPLE_RATE);

        assert_eq!(
            seg,
            Segments {
                attack: 60,
                decay: 30,
                sustain: 0,
                release: 10,
            }
        );

        let seg = env.segments(40, SAMPLE_RATE);
        assert_eq!(seg.attack, 40);
        assert_eq!(seg.decay + seg.sustain + seg.release, 0);
    }

    #[test]
    fn attack_decay_falls_to_zero_and_stays() {
        let curve = attack_decay(100, SAMPLE_RATE, 0.01, 0.04).unwrap();

        assert_eq!(curve[10], 1.0);
        assert!((curve[30] - 0.5).abs() < 1e-6);
        assert!(curve[50..].iter().all(|&level| level == 0.0));
    }

    #[test]
    fn zero_length_release_segment_is_skipped() {
        let curve = adsr(20, SAMPLE_RATE, 0.0, 0.0, 0.7, 0.0).unwrap();
        assert!(curve.iter().all(|&level| level == 0.7));
    }

    #[test]
    fn invalid_length_or_rate_is_rejected() {
        assert!(matches!(
            adsr(0, SAMPLE_RATE, 0.01, 0.01, 0.5, 0.01),
            Err(SynthError::InvalidParameter { name: "length", .. })
        ));
        assert!(matches!(
            adsr(10, 0.0, 0.01, 0.01, 0.5, 0.01),
            Err(SynthError::InvalidParameter { name: "sample_rate", .. })
        ));
        assert!(attack_decay(10, -44_100.0, 0.01, 0.01).is_err());
    }
}
