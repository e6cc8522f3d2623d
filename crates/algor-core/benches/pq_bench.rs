//! Benchmarks for the indexed priority queue and the sorts.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use algor_common::pq::IndexMinPq;
use algor_core::sort::{heap_sort, merge_sort, quick_sort};

/// Deterministic pseudo-random keys (no RNG dependency needed).
fn keys(count: usize, seed: u64) -> Vec<u64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            state >> 33
        })
        .collect()
}

fn bench_pq_insert(c: &mut Criterion) {
    let data = keys(1000, 42);
    c.bench_function("index_min_pq_insert_1000", |b| {
        b.iter(|| {
            let mut pq = IndexMinPq::with_capacity(data.len());
            for (i, &k) in data.iter().enumerate() {
                pq.insert(i, k).unwrap();
            }
            black_box(pq)
        });
    });
}

fn bench_pq_drain(c: &mut Criterion) {
    let data = keys(1000, 42);
    c.bench_function("index_min_pq_drain_1000", |b| {
        b.iter(|| {
            let mut pq = IndexMinPq::with_capacity(data.len());
            for (i, &k) in data.iter().enumerate() {
                pq.insert(i, k).unwrap();
            }
            while let Some(top) = pq.del_min() {
                black_box(top);
            }
        });
    });
}

fn bench_pq_decrease_key(c: &mut Criterion) {
    let data = keys(1000, 42);
    c.bench_function("index_min_pq_decrease_key_1000", |b| {
        b.iter(|| {
            let mut pq = IndexMinPq::with_capacity(data.len());
            for (i, &k) in data.iter().enumerate() {
                pq.insert(i, k + 1).unwrap();
            }
            for (i, &k) in data.iter().enumerate() {
                pq.decrease_key(i, k).unwrap();
            }
            black_box(pq)
        });
    });
}

fn bench_sorts(c: &mut Criterion) {
    let data: Vec<u64> = keys(10_000, 7);

    c.bench_function("quick_sort_10k", |b| {
        b.iter(|| {
            let mut arr = data.clone();
            quick_sort(&mut arr);
            black_box(arr)
        });
    });

    c.bench_function("merge_sort_10k", |b| {
        b.iter(|| {
            let mut arr = data.clone();
            merge_sort(&mut arr);
            black_box(arr)
        });
    });

    c.bench_function("heap_sort_10k", |b| {
        b.iter(|| {
            let mut arr = data.clone();
            heap_sort(&mut arr);
            black_box(arr)
        });
    });
}

criterion_group!(
    benches,
    bench_pq_insert,
    bench_pq_drain,
    bench_pq_decrease_key,
    bench_sorts
);
criterion_main!(benches);
