use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use ksort::prelude::*;
use ksort::{TreeWindow, ksort_mut_with};
use rand::Rng;
use rand::seq::SliceRandom;
use std::hint::black_box;

fn k_sorted_input(count: usize, k: usize) -> Vec<u64> {
    let mut rng = rand::rng();
    let mut data: Vec<u64> = (0..count).map(|_| rng.random()).collect();
    data.sort_unstable();
    data.chunks_mut(k + 1).for_each(|block| block.shuffle(&mut rng));
    data
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("k-sorted u64");
    group.sample_size(10);

    let count = 100_000;

    for k in [1, 8, 64, 512] {
        let input = k_sorted_input(count, k);

        group.bench_with_input(BenchmarkId::new("ksort_mut (heap)", k), &k, |b, &k| {
            b.iter_batched(
                || input.clone(),
                |mut data| ksort_mut(black_box(&mut data), k),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("ksort_mut (tree)", k), &k, |b, &k| {
            b.iter_batched(
                || input.clone(),
                |mut data| ksort_mut_with::<_, TreeWindow<_>>(black_box(&mut data), k),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("ksort (copy)", k), &k, |b, &k| {
            b.iter(|| ksort(black_box(&input), k))
        });

        // Std Sort (Stable)
        group.bench_with_input(BenchmarkId::new("slice::sort (stable)", k), &k, |b, _| {
            b.iter_batched(
                || input.clone(),
                |mut data| data.sort(),
                BatchSize::SmallInput,
            )
        });

        // Std Sort Unstable
        group.bench_with_input(BenchmarkId::new("slice::sort_unstable", k), &k, |b, _| {
            b.iter_batched(
                || input.clone(),
                |mut data| data.sort_unstable(),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("k-sorted String");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;
    let k = 16;

    let mut input: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len).map(|_| rng.random::<char>()).collect()
        })
        .collect();
    input.sort_unstable();
    input.chunks_mut(k + 1).for_each(|block| block.shuffle(&mut rng));

    group.bench_function("ksort_mut", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| ksort_mut(black_box(&mut data), k),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("ksorted (iterator)", |b| {
        b.iter_batched(
            || input.clone(),
            |data| data.into_iter().ksorted(k).collect::<Vec<_>>(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_bounds, bench_strings);
criterion_main!(benches);
