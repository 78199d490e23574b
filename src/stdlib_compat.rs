//! Standard library compatibility layer
//!
//! Implements [`Heap`] for `std::collections::BinaryHeap`, which is also a
//! max-heap. This lets a [`PriorityQueue`](crate::priority_queue::PriorityQueue)
//! run on top of the standard library heap, and gives tests a reference
//! implementation to compare [`BinaryMaxHeap`](crate::binary::BinaryMaxHeap) against.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BinaryHeap;
//! use todo_heap::priority_queue::PriorityQueue;
//!
//! let mut queue: PriorityQueue<i32, BinaryHeap<i32>> = PriorityQueue::default();
//! queue.insert(5);
//! queue.insert(7);
//! assert_eq!(queue.take_next(), Some(7));
//! ```

use std::collections::BinaryHeap;

use crate::traits::Heap;

impl<T: Ord> Heap<T> for BinaryHeap<T> {
    fn new() -> Self {
        BinaryHeap::new()
    }

    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn insert(&mut self, item: T) {
        self.push(item)
    }

    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self)
    }

    fn remove_max(&mut self) -> Option<T> {
        self.pop()
    }
}
