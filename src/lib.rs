//! Binary max-heap priority queue
//!
//! This crate provides an array-backed binary max-heap and a priority-queue
//! façade over it, plus a small scheduled-task type used by the `todo` binary.
//!
//! # Modules
//!
//! - [`binary`]: **BinaryMaxHeap**, the complete binary tree with sift-up on insert and
//!   sift-down on removal; O(log n) insert and remove-max, O(1) peek
//! - [`priority_queue`]: **PriorityQueue**, `insert` / `take_next` over any [`Heap`]
//! - [`stdlib_compat`]: [`Heap`] for `std::collections::BinaryHeap`
//! - [`task`]: **Task**, a due time and description that sorts soonest-first
//!
//! The heaps are single-threaded. Share one between threads by wrapping the
//! whole queue in a `Mutex`.
//!
//! # Example
//!
//! ```rust
//! use todo_heap::priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert(5);
//! queue.insert(1);
//! queue.insert(5);
//! queue.insert(3);
//!
//! let order: Vec<_> = queue.drain_ordered().collect();
//! assert_eq!(order, vec![5, 5, 3, 1]);
//! assert_eq!(queue.take_next(), None);
//! ```

pub mod binary;
pub mod priority_queue;
pub mod stdlib_compat;
pub mod task;
pub mod traits;

// Re-export the main trait for convenience
pub use traits::Heap;
