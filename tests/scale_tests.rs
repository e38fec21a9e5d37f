use ksort::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Instant;

fn k_sorted_input(count: usize, k: usize) -> Vec<u64> {
    let mut rng = rand::rng();
    let mut input: Vec<u64> = (0..count as u64).collect();
    // Random block boundaries still keep every element within k of its slot.
    let mut start = 0;
    while start < count {
        let end = (start + rng.random_range(1..=k + 1)).min(count);
        input[start..end].shuffle(&mut rng);
        start = end;
    }
    input
}

#[test]
fn test_sort_1m() {
    let count = 1_000_000;
    let k = 128;
    println!("Generating {} {}-sorted elements...", count, k);
    let mut input = k_sorted_input(count, k);

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    ksort_mut(&mut input, k).unwrap();
    let duration = start.elapsed();
    println!("Sorted 1M elements in {:?}", duration);

    assert_eq!(input.len(), count);
    for (i, &value) in input.iter().enumerate() {
        assert_eq!(value, i as u64, "Sort failed at index {}", i);
    }
}

#[test]
fn test_stream_1m() {
    let count = 1_000_000;
    let k = 1_000;
    let input = k_sorted_input(count, k);

    let mut expected = 0u64;
    for value in input.into_iter().ksorted(k) {
        assert_eq!(value, expected);
        expected += 1;
    }
    assert_eq!(expected, count as u64);
}

#[test]
#[ignore]
fn test_sort_100m() {
    // WARNING: ~800MB input plus generation overhead.
    let count = 100_000_000;
    let k = 4_096;
    println!("Generating {} {}-sorted elements...", count, k);
    let mut input = k_sorted_input(count, k);

    let start = Instant::now();
    ksort_mut(&mut input, k).unwrap();
    println!("Sorted 100M elements in {:?}", start.elapsed());

    assert!(input.windows(2).all(|w| w[0] <= w[1]));
}
