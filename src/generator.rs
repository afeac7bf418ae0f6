use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Record;

/// Upper bound on the two integer draws behind every score.
pub const DRAW_BOUND: u32 = i32::MAX as u32;

/// Deterministic source of scored records.
///
/// Each score is the ratio of two independent draws from `[0, DRAW_BOUND)`,
/// with the divisor offset by one so the ratio is always finite. The
/// distribution is non-uniform with a long upper tail: a small divisor draw
/// produces a score far above 1, and nothing clamps it. Two sources built
/// from the same seed yield bit-identical record streams, so independent
/// runs can regenerate the same population.
pub struct RecordSource {
    rng: SmallRng,
}

impl RecordSource {
    pub fn new(seed: u64) -> Self {
        RecordSource {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Draws the next record from the stream.
    pub fn next_record(&mut self) -> Record {
        let numerator = self.rng.random_range(0..DRAW_BOUND);
        let divisor = self.rng.random_range(0..DRAW_BOUND);
        Record::new(numerator as f64 / (divisor as f64 + 1.0))
    }

    /// Draws `n` records into a vector with exactly `n` slots reserved.
    pub fn take_records(&mut self, n: usize) -> Vec<Record> {
        let mut records = Vec::with_capacity(n);
        for _ in 0..n {
            records.push(self.next_record());
        }
        records
    }
}
