//! Stress tests that push the heap through many growth cycles
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use binary_min_heap::{BinaryMinHeap, HeapError, PriorityQueue};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Test massive numbers of inserts and extracts
fn test_massive_operations<Q: PriorityQueue<i32>>(mut queue: Q) {
    for i in 0..10_000 {
        queue.insert(i);
    }

    assert_eq!(queue.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(queue.extract_min(), Ok(i));
    }

    assert!(queue.is_empty());
}

/// Test a shuffled permutation, as the timing driver builds it
fn test_shuffled_permutation<Q: PriorityQueue<u64>>(mut queue: Q) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut values: Vec<u64> = (0..(1 << 14)).collect();
    values.shuffle(&mut rng);

    for v in values {
        queue.insert(v);
    }
    assert_eq!(queue.peek_min(), Ok(&0));

    for expected in 0..(1 << 14) {
        assert_eq!(queue.extract_min(), Ok(expected));
    }
    assert_eq!(queue.extract_min(), Err(HeapError::Empty));
}

/// Test alternating insert and extract
fn test_alternating_ops<Q: PriorityQueue<i32>>(mut queue: Q) {
    for i in 0..2000 {
        queue.insert(i * 2);
        queue.insert(i * 2 + 1);

        // Removes the smallest of what is left: exactly i
        assert_eq!(queue.extract_min(), Ok(i));
    }

    assert_eq!(queue.len(), 2000);
    let mut last = i32::MIN;
    while let Ok(v) = queue.extract_min() {
        assert!(v >= last);
        last = v;
    }
}

/// Test random operations against a sorted reference
fn test_random_ops<Q: PriorityQueue<i32>>(mut queue: Q) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut reference: Vec<i32> = Vec::new();

    for _ in 0..20_000 {
        if rng.gen_bool(0.6) || reference.is_empty() {
            let v = rng.gen_range(-1000..1000);
            queue.insert(v);
            let pos = reference.partition_point(|&x| x <= v);
            reference.insert(pos, v);
        } else {
            assert_eq!(queue.extract_min(), Ok(reference.remove(0)));
        }
        assert_eq!(queue.len(), reference.len());
    }
}

/// Test repeated fill and clear cycles
fn test_fill_clear_cycles<Q: PriorityQueue<i32>>(mut queue: Q) {
    for round in 0..50 {
        for i in (0..round * 10).rev() {
            queue.insert(i);
        }
        if round > 0 {
            assert_eq!(queue.peek_min(), Ok(&0));
        }
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.peek_min(), Err(HeapError::Empty));
    }
}

/// Test with extreme values
fn test_extreme_values<Q: PriorityQueue<i64>>(mut queue: Q) {
    queue.insert(1_000_000_000);
    queue.insert(i64::MAX);
    queue.insert(-1_000_000_000);
    queue.insert(i64::MIN);
    queue.insert(2_000_000_000);

    assert_eq!(queue.extract_min(), Ok(i64::MIN));
    assert_eq!(queue.extract_min(), Ok(-1_000_000_000));
    assert_eq!(queue.extract_min(), Ok(1_000_000_000));
    assert_eq!(queue.extract_min(), Ok(2_000_000_000));
    assert_eq!(queue.extract_min(), Ok(i64::MAX));
}

#[test]
fn test_binary_min_massive() {
    test_massive_operations(BinaryMinHeap::new());
}

#[test]
fn test_binary_min_shuffled_permutation() {
    test_shuffled_permutation(BinaryMinHeap::new());
}

#[test]
fn test_binary_min_alternating() {
    test_alternating_ops(BinaryMinHeap::new());
}

#[test]
fn test_binary_min_random_ops() {
    test_random_ops(BinaryMinHeap::new());
}

#[test]
fn test_binary_min_fill_clear_cycles() {
    test_fill_clear_cycles(BinaryMinHeap::new());
}

#[test]
fn test_binary_min_extreme_values() {
    test_extreme_values(BinaryMinHeap::new());
}

#[test]
fn test_binary_min_growth_sequence() {
    let mut heap = BinaryMinHeap::new();
    let mut capacities = vec![heap.capacity()];

    for i in 0..1000 {
        heap.insert(i);
        if heap.capacity() != *capacities.last().unwrap() {
            capacities.push(heap.capacity());
        }
    }

    // Every growth step at least doubles the buffer
    for pair in capacities.windows(2) {
        assert!(pair[1] >= 2 * pair[0], "capacities: {:?}", capacities);
    }
    assert!(heap.capacity() >= 1000);
}
