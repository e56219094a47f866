/*
Morphing Wavetables
===================

A wavetable is one cycle of a waveform stored as a short array. Reading it
back at different speeds gives different pitches; stacking several tables
and sliding between them changes the timbre while a note plays.

This bank holds N tables that walk from a sawtooth to a square:

    table 0        table N/2           table N-1
      /|  /|        _/|  _/|           ┌─┐ ┌─┐
     / | / |       |  | |  |           │ │ │ │
    /  |/  |      /   |/   |         ──┘ └─┘ └
    sawtooth      half/half            square

Table k uses blend b = k / (N - 1):

    sample(j) = (1 - b) * saw(j / M) + b * square(j / M)

The waveforms are naive (aliased). The sounds this crate makes are low and
heavily low-passed, so band-limiting the tables would buy nothing audible.

Reading a table at a fractional position interpolates twice: between the
two nearest tables (timbre) and between the two nearest entries (phase).
See `sample`.
*/

/// Precomputed saw → square morph tables. Read-only once built.
#[derive(Debug, Clone)]
pub struct WavetableBank {
    tables: Vec<Vec<f32>>,
    table_len: usize,
}

#[inline]
fn saw(phase: f32) -> f32 {
    2.0 * phase - 1.0
}

#[inline]
fn square(phase: f32) -> f32 {
    if phase < 0.5 {
        1.0
    } else {
        -1.0
    }
}

impl WavetableBank {
    /// Build `table_count` tables of `table_len` samples each.
    ///
    /// Both sizes are floored at 2 so there is always a saw end, a square
    /// end and something to interpolate between.
    pub fn build(table_count: usize, table_len: usize) -> Self {
        let table_count = table_count.max(2);
        let table_len = table_len.max(2);
        let last = (table_count - 1) as f32;

        let tables = (0..table_count)
            .map(|k| {
                let blend = k as f32 / last;
                (0..table_len)
                    .map(|j| {
                        let phase = j as f32 / table_len as f32;
                        (1.0 - blend) * saw(phase) + blend * square(phase)
                    })
                    .collect()
            })
            .collect();

        Self { tables, table_len }
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn table_len(&self) -> usize {
        self.table_len
    }

    pub fn table(&self, index: usize) -> &[f32] {
        &self.tables[index.min(self.tables.len() - 1)]
    }

    /// Linear read within one table at `phase` in [0, 1). Wraps cyclically.
    #[inline]
    fn read_table(&self, table: usize, phase: f64) -> f32 {
        let data = &self.tables[table];
        let pos = phase.rem_euclid(1.0) * self.table_len as f64;
        let i0 = (pos as usize) % self.table_len;
        let i1 = (i0 + 1) % self.table_len;
        let frac = (pos - pos.floor()) as f32;
        data[i0] + frac * (data[i1] - data[i0])
    }

    /// Bilinear read: `morph` in [0, 1] picks the table, `phase` the position.
    ///
    /// Out-of-range morph values are clamped to the saw or square end.
    #[inline]
    pub fn sample(&self, morph: f32, phase: f64) -> f32 {
        let last = self.tables.len() - 1;
        let pos = morph.clamp(0.0, 1.0) * last as f32;
        let t0 = (pos as usize).min(last);
        let t1 = (t0 + 1).min(last);
        let blend = pos - t0 as f32;

        let a = self.read_table(t0, phase);
        if t1 == t0 {
            return a;
        }
        let b = self.read_table(t1, phase);
        a + blend * (b - a)
    }
}

impl Default for WavetableBank {
    fn default() -> Self {
        Self::build(64, 512)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_are_pure_saw_and_square() {
        let bank = WavetableBank::build(64, 512);
        let saw_table = bank.table(0);
        let square_table = bank.table(63);

        for j in 0..512 {
            let phase = j as f32 / 512.0;
            assert!((saw_table[j] - (2.0 * phase - 1.0)).abs() < 1e-6);
            let expected = if phase < 0.5 { 1.0 } else { -1.0 };
            assert_eq!(square_table[j], expected);
        }
    }

    #[test]
    fn adjacent_tables_differ_by_at_most_one_step() {
        let bank = WavetableBank::build(64, 512);
        let step = 2.0 / 63.0 + 1e-6;

        for k in 0..63 {
            for (a, b) in bank.table(k).iter().zip(bank.table(k + 1)) {
                assert!((a - b).abs() <= step, "table {k}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn morph_read_is_continuous() {
        let bank = WavetableBank::default();
        let phase = 0.3;
        let mut previous = bank.sample(0.0, phase);

        for i in 1..=1000 {
            let value = bank.sample(i as f32 / 1000.0, phase);
            assert!((value - previous).abs() < 0.01);
            previous = value;
        }
    }

    #[test]
    fn phase_read_interpolates_between_entries() {
        let bank = WavetableBank::build(2, 4);
        // saw table: [-1.0, -0.5, 0.0, 0.5]
        let halfway = bank.sample(0.0, 1.0 / 8.0);
        assert!((halfway - (-0.75)).abs() < 1e-6);
        // wraps from the last entry back to the first
        let wrap = bank.sample(0.0, 7.0 / 8.0);
        assert!((wrap - (-0.25)).abs() < 1e-6);
    }

    #[test]
    fn degenerate_sizes_are_floored() {
        let bank = WavetableBank::build(0, 1);
        assert_eq!(bank.table_count(), 2);
        assert_eq!(bank.table_len(), 2);
    }
}
