//! Generic tests for all Heap implementations
//!
//! These tests work with any Heap implementation, both directly and through
//! the PriorityQueue façade, and cover the edge cases of the max-heap contract.

use std::collections::BinaryHeap;

use todo_heap::binary::BinaryMaxHeap;
use todo_heap::priority_queue::PriorityQueue;
use todo_heap::Heap;

// Test helpers that work with any Heap implementation

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<String>>() {
    let mut heap = H::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.remove_max(), None);
    // Removal from empty does not change the count
    assert_eq!(heap.len(), 0);
}

/// Test basic insert and remove_max operations
fn test_basic_operations<H: Heap<i32>>() {
    let mut heap = H::new();

    heap.insert(5);
    heap.insert(1);
    heap.insert(10);
    heap.insert(3);

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek(), Some(&10));

    assert_eq!(heap.remove_max(), Some(10));
    assert_eq!(heap.remove_max(), Some(5));
    assert_eq!(heap.remove_max(), Some(3));
    assert_eq!(heap.remove_max(), Some(1));
    assert_eq!(heap.remove_max(), None);
    assert!(heap.is_empty());
}

/// Test clock times where the latest time wins
fn test_clock_times<H: Heap<(u32, u32)>>() {
    let mut queue: PriorityQueue<(u32, u32), H> = PriorityQueue::default();

    for time in [(9, 0), (11, 30), (10, 0), (16, 0), (13, 0)] {
        queue.insert(time);
    }

    let order: Vec<_> = queue.drain_ordered().collect();
    assert_eq!(order, vec![(16, 0), (13, 0), (11, 30), (10, 0), (9, 0)]);
}

/// Test duplicates come out together
fn test_duplicates<H: Heap<i32>>() {
    let mut queue: PriorityQueue<i32, H> = PriorityQueue::default();
    queue.extend([5, 1, 5, 3]);

    assert_eq!(queue.take_next(), Some(5));
    assert_eq!(queue.take_next(), Some(5));
    assert_eq!(queue.take_next(), Some(3));
    assert_eq!(queue.take_next(), Some(1));
    assert_eq!(queue.take_next(), None);
}

/// Test a single item goes in and out, then the queue is empty
fn test_single_item<H: Heap<char>>() {
    let mut queue: PriorityQueue<char, H> = PriorityQueue::default();
    queue.insert('A');
    assert_eq!(queue.take_next(), Some('A'));
    assert_eq!(queue.take_next(), None);
    assert!(queue.is_empty());
}

/// Test insert then take_next restores a one-element state
fn test_round_trip_from_single<H: Heap<i32>>() {
    for (existing, inserted) in [(3, 7), (7, 3), (5, 5)] {
        let mut queue: PriorityQueue<i32, H> = PriorityQueue::default();
        queue.insert(existing);

        queue.insert(inserted);
        assert_eq!(queue.take_next(), Some(existing.max(inserted)));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek_next(), Some(&existing.min(inserted)));
    }
}

/// Test interleaved inserts and removals keep the count
fn test_size_consistency<H: Heap<i32>>() {
    let mut heap = H::new();
    let mut inserted = 0;
    let mut removed = 0;

    for i in 0..50 {
        heap.insert(i * 7 % 13);
        inserted += 1;
        if i % 3 == 0 && heap.remove_max().is_some() {
            removed += 1;
        }
        assert_eq!(heap.len(), inserted - removed);
    }
}

/// Test negative and extreme values
fn test_extreme_values<H: Heap<i64>>() {
    let mut heap = H::new();
    heap.insert(0);
    heap.insert(i64::MIN);
    heap.insert(i64::MAX);
    heap.insert(-1);

    assert_eq!(heap.remove_max(), Some(i64::MAX));
    assert_eq!(heap.remove_max(), Some(0));
    assert_eq!(heap.remove_max(), Some(-1));
    assert_eq!(heap.remove_max(), Some(i64::MIN));
}

/// Test re-use after being fully drained
fn test_reuse_after_drain<H: Heap<i32>>() {
    let mut heap = H::new();
    for i in 0..10 {
        heap.insert(i);
    }
    while heap.remove_max().is_some() {}
    assert_eq!(heap.remove_max(), None);
    assert_eq!(heap.len(), 0);

    heap.insert(42);
    heap.insert(7);
    assert_eq!(heap.peek(), Some(&42));
    assert_eq!(heap.len(), 2);
}

macro_rules! heap_tests {
    ($module:ident, $heap:ident) => {
        mod $module {
            use super::*;

            #[test]
            fn empty_heap() {
                test_empty_heap::<$heap<String>>();
            }

            #[test]
            fn basic_operations() {
                test_basic_operations::<$heap<i32>>();
            }

            #[test]
            fn clock_times() {
                test_clock_times::<$heap<(u32, u32)>>();
            }

            #[test]
            fn duplicates() {
                test_duplicates::<$heap<i32>>();
            }

            #[test]
            fn single_item() {
                test_single_item::<$heap<char>>();
            }

            #[test]
            fn round_trip_from_single() {
                test_round_trip_from_single::<$heap<i32>>();
            }

            #[test]
            fn size_consistency() {
                test_size_consistency::<$heap<i32>>();
            }

            #[test]
            fn extreme_values() {
                test_extreme_values::<$heap<i64>>();
            }

            #[test]
            fn reuse_after_drain() {
                test_reuse_after_drain::<$heap<i32>>();
            }
        }
    };
}

heap_tests!(binary_max_heap, BinaryMaxHeap);
heap_tests!(std_binary_heap, BinaryHeap);

#[test]
fn test_binary_max_heap_stays_valid() {
    let mut heap = BinaryMaxHeap::new();
    for i in 0..200u32 {
        heap.insert(i.wrapping_mul(2_654_435_761) % 1000);
        assert!(heap.is_heap());
    }
    while heap.remove_max().is_some() {
        assert!(heap.is_heap());
    }
}
