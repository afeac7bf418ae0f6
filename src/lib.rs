//! Comparative micro-benchmark for top-k selection over randomly scored records.
//!
//! Four strategies extract the `n / 10` highest-scoring records out of a
//! population of `n`: a full sort over a vector, a binary-heap priority queue
//! with and without pre-reserved backing storage, and a manually maintained
//! heap array. Every strategy regenerates the same population from a fixed
//! seed, so the four results are value-identical and only the timings differ.

mod record;
pub use record::Record;

mod generator;
pub use generator::{RecordSource, DRAW_BOUND};

mod score_heap;
pub use score_heap::ScoreHeap;

pub mod strategies;

mod harness;
pub use harness::{run_shootout, time_strategy, StrategyTiming};

mod error;
pub use error::Error;
