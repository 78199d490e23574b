//! Priority queue façade
//!
//! [`PriorityQueue`] presents retrieval-queue vocabulary (`insert` /
//! `take_next`) over any [`Heap`]. It keeps no state of its own: every call is
//! forwarded unchanged to the owned heap, so callers never depend on which
//! structure sits underneath.
//!
//! # Example
//!
//! ```rust
//! use todo_heap::priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert("low");
//! queue.insert("urgent");
//!
//! assert_eq!(queue.take_next(), Some("urgent"));
//! assert_eq!(queue.take_next(), Some("low"));
//! assert_eq!(queue.take_next(), None);
//! ```

use std::fmt;
use std::marker::PhantomData;

use log::trace;

use crate::binary::BinaryMaxHeap;
use crate::traits::Heap;

/// A queue that always hands out its greatest item next
///
/// # Type Parameters
/// - `T`: The item type; its [`Ord`] decides urgency
/// - `H`: The underlying heap, [`BinaryMaxHeap`] unless specified
pub struct PriorityQueue<T: Ord, H: Heap<T> = BinaryMaxHeap<T>> {
    heap: H,
    _phantom: PhantomData<T>,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue backed by a [`BinaryMaxHeap`]
    pub fn new() -> Self {
        Self::with_heap(BinaryMaxHeap::new())
    }

    /// Creates an empty queue with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_heap(BinaryMaxHeap::with_capacity(capacity))
    }
}

impl<T: Ord, H: Heap<T>> PriorityQueue<T, H> {
    /// Wraps an existing heap, keeping whatever it already holds
    pub fn with_heap(heap: H) -> Self {
        Self {
            heap,
            _phantom: PhantomData,
        }
    }

    /// Adds an item to the queue
    pub fn insert(&mut self, item: T) {
        self.heap.insert(item);
        trace!("queue insert, {} pending", self.heap.len());
    }

    /// Removes and returns the most urgent item
    ///
    /// Returns `None` when the queue is empty; the queue is left unchanged.
    pub fn take_next(&mut self) -> Option<T> {
        let next = self.heap.remove_max();
        trace!(
            "queue take_next ({}), {} pending",
            if next.is_some() { "hit" } else { "empty" },
            self.heap.len()
        );
        next
    }

    /// Returns the most urgent item without removing it
    pub fn peek_next(&self) -> Option<&T> {
        self.heap.peek()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Takes items out in urgency order until the queue is empty
    pub fn drain_ordered(&mut self) -> DrainOrdered<'_, T, H> {
        DrainOrdered { queue: self }
    }

    /// Consumes the queue, returning the underlying heap
    pub fn into_inner(self) -> H {
        self.heap
    }
}

impl<T: Ord, H: Heap<T>> Default for PriorityQueue<T, H> {
    fn default() -> Self {
        Self::with_heap(H::new())
    }
}

impl<T: Ord, H: Heap<T>> FromIterator<T> for PriorityQueue<T, H> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::default();
        queue.extend(iter);
        queue
    }
}

impl<T: Ord, H: Heap<T>> Extend<T> for PriorityQueue<T, H> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord, H: Heap<T> + Clone> Clone for PriorityQueue<T, H> {
    fn clone(&self) -> Self {
        Self::with_heap(self.heap.clone())
    }
}

impl<T: Ord, H: Heap<T> + fmt::Debug> fmt::Debug for PriorityQueue<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}

/// Iterator returned by [`PriorityQueue::drain_ordered`]
///
/// Items not consumed before the iterator is dropped stay in the queue.
pub struct DrainOrdered<'a, T: Ord, H: Heap<T>> {
    queue: &'a mut PriorityQueue<T, H>,
}

impl<T: Ord, H: Heap<T>> Iterator for DrainOrdered<'_, T, H> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.take_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T: Ord, H: Heap<T>> ExactSizeIterator for DrainOrdered<'_, T, H> {}
