use std::time::{Duration, Instant};

use crate::strategies::{Strategy, STRATEGIES};
use crate::Record;

/// Wall-clock measurement of one strategy run.
pub struct StrategyTiming {
    pub name: &'static str,
    pub elapsed: Duration,
    pub top: Vec<Record>,
}

impl StrategyTiming {
    /// One report line, elapsed time rendered in seconds.
    pub fn report(&self) -> String {
        format!("{} time: {} seconds", self.name, self.elapsed.as_secs_f64())
    }
}

/// Runs one strategy over `n` records regenerated from `seed`.
///
/// The timed region covers the complete pass, generation included, so every
/// strategy pays the identical generation cost inside its measurement.
pub fn time_strategy(strategy: &Strategy, n: usize, seed: u64) -> StrategyTiming {
    let (name, extract) = *strategy;
    let start = Instant::now();
    let top = extract(n, seed);
    let elapsed = start.elapsed();
    StrategyTiming { name, elapsed, top }
}

/// Runs every strategy back to back over the same seeded population.
pub fn run_shootout(n: usize, seed: u64) -> Vec<StrategyTiming> {
    STRATEGIES
        .iter()
        .map(|strategy| time_strategy(strategy, n, seed))
        .collect()
}
