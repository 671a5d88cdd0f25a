//! SortedSet benchmarks.
//!
//! Compares construction from unsorted input against `from_sorted_vec`,
//! binary-search membership against a linear scan, and union against
//! rebuilding from the concatenated elements.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sortedset::persistent::SortedSet;
use std::hint::black_box;

const SIZES: [i32; 4] = [100, 1000, 10000, 100000];

/// Deterministic shuffled input with roughly 10% duplicates.
fn generate_unsorted_vec(size: i32) -> Vec<i32> {
    (0..size)
        .map(|value| value.wrapping_mul(7919) % (size - size / 10).max(1))
        .collect()
}

fn batch_size_for(size: i32) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_set_construction");

    for size in SIZES {
        let unsorted = generate_unsorted_vec(size);
        let sorted: Vec<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("from_vec", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || unsorted.clone(),
                |elements| black_box(SortedSet::from(black_box(elements))),
                batch_size_for(size),
            );
        });

        group.bench_with_input(
            BenchmarkId::new("from_sorted_vec", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || sorted.clone(),
                    |elements| black_box(SortedSet::from_sorted_vec(black_box(elements))),
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_set_contains");

    for size in SIZES {
        let set: SortedSet<i32> = (0..size).collect();
        let probe = size - 1;

        group.bench_with_input(BenchmarkId::new("binary_search", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.contains(black_box(&probe))));
        });

        group.bench_with_input(BenchmarkId::new("linear_scan", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.iter().any(|element| element == black_box(&probe))));
        });
    }

    group.finish();
}

fn benchmark_union(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_set_union");

    for size in SIZES {
        let evens: SortedSet<i32> = (0..size).map(|value| value * 2).collect();
        let odds: SortedSet<i32> = (0..size).map(|value| value * 2 + 1).collect();

        group.bench_with_input(BenchmarkId::new("merge", size), &size, |bencher, _| {
            bencher.iter(|| black_box(black_box(&evens) + black_box(&odds)));
        });

        group.bench_with_input(BenchmarkId::new("rebuild", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(
                    evens
                        .iter()
                        .chain(odds.iter())
                        .copied()
                        .collect::<SortedSet<i32>>(),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_contains,
    benchmark_union
);

criterion_main!(benches);
