//! The four top-k extraction strategies under comparison.
//!
//! Each strategy owns its whole run: it regenerates the record population
//! from a fresh [`RecordSource`] seeded with the value it is given, extracts
//! the top `n / 10` records and returns them highest score first. Rebuilding
//! from the seed keeps the four populations identical without any state
//! shared between runs.

use std::collections::BinaryHeap;

use crate::record::highest_first;
use crate::{Record, RecordSource, ScoreHeap};

/// Number of records extracted out of a population of `n`.
pub fn top_k_len(n: usize) -> usize {
    n / 10
}

/// An extraction strategy: a display name plus the extraction routine.
pub type Strategy = (&'static str, fn(usize, u64) -> Vec<Record>);

/// Every strategy, in the order they are run and reported.
pub const STRATEGIES: &[Strategy] = &[
    ("Vector sort", sort_extract),
    ("Priority queue", queue_extract),
    ("Reserved priority queue", reserved_queue_extract),
    ("Manual heap", heap_extract),
];

/// Sorts the full population highest score first, then copies out the
/// leading `n / 10` records as a contiguous range.
///
/// The whole population ends up ordered as a byproduct, which makes this the
/// reference strategy the others are checked against.
pub fn sort_extract(n: usize, seed: u64) -> Vec<Record> {
    let mut population = RecordSource::new(seed).take_records(n);
    population.sort_unstable_by(highest_first);
    population[..top_k_len(n)].to_vec()
}

/// Feeds the population through a `BinaryHeap` grown on demand, then pops
/// the maximum `n / 10` times into a second heap built the same way.
pub fn queue_extract(n: usize, seed: u64) -> Vec<Record> {
    let mut source = RecordSource::new(seed);
    let mut queue = BinaryHeap::new();
    for _ in 0..n {
        queue.push(source.next_record());
    }

    let mut winners = BinaryHeap::new();
    for _ in 0..top_k_len(n) {
        let best = queue
            .pop()
            .expect("queue drained before the top slice was filled");
        winners.push(best);
    }
    drain_descending(winners)
}

/// Same algorithm as [`queue_extract`], but both heaps get their final size
/// reserved up front so no insertion triggers a reallocation.
pub fn reserved_queue_extract(n: usize, seed: u64) -> Vec<Record> {
    let mut source = RecordSource::new(seed);
    let mut queue = BinaryHeap::with_capacity(n);
    for _ in 0..n {
        queue.push(source.next_record());
    }

    let k = top_k_len(n);
    let mut winners = BinaryHeap::with_capacity(k);
    for _ in 0..k {
        let best = queue
            .pop()
            .expect("queue drained before the top slice was filled");
        winners.push(best);
    }
    drain_descending(winners)
}

/// Builds a [`ScoreHeap`] record by record over a pre-reserved vector, then
/// copies the front out and removes it `n / 10` times.
pub fn heap_extract(n: usize, seed: u64) -> Vec<Record> {
    let mut source = RecordSource::new(seed);
    let mut heap = ScoreHeap::with_capacity(n);
    for _ in 0..n {
        heap.push(source.next_record());
    }

    let k = top_k_len(n);
    let mut top = Vec::with_capacity(k);
    for _ in 0..k {
        let best = *heap
            .peek()
            .expect("heap drained before the top slice was filled");
        top.push(best);
        heap.pop();
    }
    top
}

fn drain_descending(mut winners: BinaryHeap<Record>) -> Vec<Record> {
    let mut out = Vec::with_capacity(winners.len());
    while let Some(record) = winners.pop() {
        out.push(record);
    }
    out
}
