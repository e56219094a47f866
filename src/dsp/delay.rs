/// Read `signal` at a fractional sample `position` by linear interpolation.
///
/// The signal is treated as silent before index 0 and held at its last
/// sample beyond the end. A chorus only ever reads at or behind the current
/// index, so in practice only the start of the buffer matters: a delay
/// longer than the elapsed time reads silence.
#[inline]
pub fn read_fractional(signal: &[f32], position: f64) -> f32 {
    if position < 0.0 || signal.is_empty() {
        return 0.0;
    }

    let index = position.floor() as usize;
    let frac = (position - index as f64) as f32;
    let last = signal.len() - 1;

    if index >= last {
        return signal[last];
    }

    let s0 = signal[index];
    if frac == 0.0 {
        return s0;
    }
    let s1 = signal[index + 1];
    s0 + frac * (s1 - s0)
}

/// Read `signal` delayed by `delay_samples` behind sample `index`.
#[inline]
pub fn read_delayed(signal: &[f32], index: usize, delay_samples: f64) -> f32 {
    read_fractional(signal, index as f64 - delay_samples)
}
