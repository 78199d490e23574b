//! Common trait for max-heap data structures
//!
//! [`Heap`] is the seam between [`PriorityQueue`](crate::priority_queue::PriorityQueue)
//! and the structure that actually stores the items. The queue only ever talks
//! to this trait, so the underlying heap can be swapped without touching callers.
//!
//! Unlike a keyed heap that stores `(priority, item)` pairs, these heaps store
//! the items directly and order them with their own [`Ord`] implementation.
//! The greatest item is always the next one out.

/// Base trait for max-heap data structures
///
/// This trait mirrors the shape of Rust's `BinaryHeap`:
/// - `insert` adds an item
/// - `remove_max` removes and returns the greatest item
/// - `peek` returns the greatest item without removing it
///
/// Removal from an empty heap is not an error: it returns `None` and leaves
/// the heap untouched.
///
/// # Example
///
/// ```rust
/// use todo_heap::Heap;
/// use todo_heap::binary::BinaryMaxHeap;
///
/// let mut heap = BinaryMaxHeap::new();
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.peek(), Some(&3));
/// assert_eq!(heap.remove_max(), Some(3));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an item
    ///
    /// # Time Complexity
    /// O(log n), amortized over the backing storage's growth.
    fn insert(&mut self, item: T);

    /// Returns the greatest item without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the greatest item, or `None` if the heap is empty
    ///
    /// Equal items come out in no particular relative order.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove_max(&mut self) -> Option<T>;
}
