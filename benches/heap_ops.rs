use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::BinaryHeap;
use std::hint::black_box;

use topk_shootout::{RecordSource, ScoreHeap};

// Raw push-all/pop-all cost of the hand-maintained heap against the standard
// library's BinaryHeap, on one pre-generated population.
fn benchmark_heap_ops(c: &mut Criterion) {
    let records = RecordSource::new(42).take_records(100_000);

    let mut group = c.benchmark_group("Heap_ops");
    group.sample_size(40);

    group.bench_function("score_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = ScoreHeap::with_capacity(records.len());
            for &record in &records {
                heap.push(black_box(record));
            }
            while let Some(record) = heap.pop() {
                black_box(record);
            }
        });
    });

    group.bench_function("binary_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::with_capacity(records.len());
            for &record in &records {
                heap.push(black_box(record));
            }
            while let Some(record) = heap.pop() {
                black_box(record);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_heap_ops);
criterion_main!(benches);
