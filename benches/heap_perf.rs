//! Heap construction and extraction benchmarks
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_perf
//!
//! # Only the bulk-build comparison
//! cargo bench --bench heap_perf -- build
//! ```
//!
//! ## Groups
//!
//! - `build`: `build_heap` (bottom-up, O(n)) against n sequential inserts
//! - `drain`: extracting every entry, natural order vs. a closure comparator
//! - `union`: merging two heaps of equal size

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use custom_binary_heap::BinaryHeap;

/// Linear congruential generator for reproducible keys
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }
}

fn random_keys(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next() >> 16).collect()
}

const SIZES: [usize; 4] = [1 << 8, 1 << 12, 1 << 16, 1 << 20];

fn size_label(n: usize) -> String {
    format!("2^{}", n.trailing_zeros())
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for &n in &SIZES {
        let keys = random_keys(n, 1);
        let values: Vec<u32> = (0..n as u32).collect();

        group.bench_with_input(
            BenchmarkId::new("build_heap", size_label(n)),
            &(keys.clone(), values.clone()),
            |b, (keys, values)| {
                b.iter(|| {
                    let mut heap = BinaryHeap::with_capacity(keys.len());
                    heap.build_heap(keys.clone(), values.clone()).unwrap();
                    black_box(heap)
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("sequential_insert", size_label(n)),
            &(keys, values),
            |b, (keys, values)| {
                b.iter(|| {
                    let mut heap = BinaryHeap::with_capacity(keys.len());
                    for (&key, &value) in keys.iter().zip(values.iter()) {
                        heap.push(key, value);
                    }
                    black_box(heap)
                })
            },
        );
    }

    group.finish();
}

fn benchmark_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain");

    for &n in &SIZES[..3] {
        let pairs: Vec<(u64, u32)> = random_keys(n, 2).into_iter().zip(0..).collect();

        group.bench_with_input(
            BenchmarkId::new("natural", size_label(n)),
            &pairs,
            |b, pairs| {
                b.iter(|| {
                    let mut heap = BinaryHeap::from(pairs.clone());
                    while let Some(entry) = heap.extract_minimum() {
                        black_box(entry);
                    }
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("closure_max", size_label(n)),
            &pairs,
            |b, pairs| {
                b.iter(|| {
                    let mut heap = BinaryHeap::from_vec_and_comparator(
                        pairs.clone(),
                        |a: &u64, b: &u64| b.cmp(a),
                    );
                    while let Some(entry) = heap.extract_minimum() {
                        black_box(entry);
                    }
                })
            },
        );
    }

    group.finish();
}

fn benchmark_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("union");

    for &n in &SIZES[..3] {
        let left: Vec<(u64, ())> = random_keys(n, 3).into_iter().map(|k| (k, ())).collect();
        let right: Vec<(u64, ())> = random_keys(n, 4).into_iter().map(|k| (k, ())).collect();

        group.bench_with_input(
            BenchmarkId::new("union", size_label(n)),
            &(left, right),
            |b, (left, right)| {
                b.iter_batched(
                    || (BinaryHeap::from(left.clone()), BinaryHeap::from(right.clone())),
                    |(mut a, other)| {
                        a.union(other);
                        black_box(a)
                    },
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_drain, benchmark_union);
criterion_main!(benches);
