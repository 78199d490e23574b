//! Binary max-heap
//!
//! An array-backed complete binary tree that keeps its greatest item at the
//! root. The tree is laid out breadth-first in a `Vec`, so no child or parent
//! links are stored.
//!
//! Positions are 1-based tree positions: the root is position 1, the children
//! of position `p` are `2p` and `2p + 1`, and its parent is `p / 2`. Position
//! `p` lives at vector index `p - 1`.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity           |
//! |-------------------|----------------------|
//! | `insert`          | O(log n) amortized   |
//! | `remove_max`      | O(log n)             |
//! | `peek`            | O(1)                 |
//! | `From<Vec<T>>`    | O(n)                 |
//! | `into_sorted_vec` | O(n log n)           |
//!
//! # Example
//!
//! ```rust
//! use todo_heap::Heap;
//! use todo_heap::binary::BinaryMaxHeap;
//!
//! let mut heap = BinaryMaxHeap::new();
//! heap.insert(3);
//! heap.insert(1);
//! heap.insert(2);
//!
//! assert_eq!(heap.peek(), Some(&3));
//! assert_eq!(heap.remove_max(), Some(3));
//! assert_eq!(heap.remove_max(), Some(2));
//! assert_eq!(heap.remove_max(), Some(1));
//! assert_eq!(heap.remove_max(), None);
//! ```

use crate::traits::Heap;

/// A binary max-heap over items ordered by [`Ord`]
///
/// The backing vector grows geometrically, so its capacity is usually larger
/// than [`len`](Heap::len). Equal items are not kept in insertion order.
#[derive(Debug, Clone)]
pub struct BinaryMaxHeap<T> {
    /// Items in breadth-first tree order; `data[0]` is the maximum
    data: Vec<T>,
}

fn left_posn(posn: usize) -> usize {
    2 * posn
}

fn right_posn(posn: usize) -> usize {
    2 * posn + 1
}

fn parent_posn(posn: usize) -> usize {
    posn / 2
}

impl<T: Ord> Heap<T> for BinaryMaxHeap<T> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len());
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn remove_max(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        // The last leaf takes the root's place.
        let result = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(1, self.data.len());
        }

        Some(result)
    }
}

impl<T: Ord> BinaryMaxHeap<T> {
    /// Creates an empty heap with room for at least `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Number of items the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more items
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Removes every item
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the items in tree order, which is not sorted order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// The backing storage in tree order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning the backing vector in tree order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its items in ascending order
    ///
    /// This is an in-place heapsort: the root is repeatedly moved behind the
    /// shrinking tree.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            self.sift_down(1, end);
        }
        self.data
    }

    /// Checks the max-heap property for every parent/child pair
    pub fn is_heap(&self) -> bool {
        (2..=self.data.len()).all(|posn| !self.is_larger(posn, parent_posn(posn)))
    }

    /// A position is valid iff it falls within `[1, len]`
    fn is_valid(&self, posn: usize) -> bool {
        posn >= 1 && posn <= self.data.len()
    }

    /// Strictly-greater comparison of the items at two positions
    fn is_larger(&self, i: usize, j: usize) -> bool {
        self.data[i - 1] > self.data[j - 1]
    }

    fn swap_posns(&mut self, i: usize, j: usize) {
        self.data.swap(i - 1, j - 1);
    }

    /// Move the item at `posn` up while it is strictly larger than its parent
    fn sift_up(&mut self, mut posn: usize) {
        loop {
            let parent = parent_posn(posn);
            if !self.is_valid(parent) || !self.is_larger(posn, parent) {
                break;
            }
            self.swap_posns(posn, parent);
            posn = parent;
        }
    }

    /// Move the item at `posn` down while a child is strictly larger
    ///
    /// Only positions `<= end` are part of the tree, which lets heapsort work
    /// on a prefix of the vector. The tree is always complete, so a right
    /// child never exists without a left one.
    fn sift_down(&mut self, mut posn: usize, end: usize) {
        debug_assert!(end <= self.data.len());
        loop {
            let left = left_posn(posn);
            let right = right_posn(posn);

            let candidate = if right <= end {
                // Ties go to the left child.
                if self.is_larger(right, left) {
                    right
                } else {
                    left
                }
            } else if left <= end {
                left
            } else {
                break;
            };

            if !self.is_larger(candidate, posn) {
                break;
            }
            self.swap_posns(candidate, posn);
            posn = candidate;
        }
    }
}

impl<T: Ord> Default for BinaryMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for BinaryMaxHeap<T> {
    /// Builds a heap bottom-up in O(n)
    fn from(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        let len = heap.data.len();
        for posn in (1..=parent_posn(len)).rev() {
            heap.sift_down(posn, len);
        }
        heap
    }
}

impl<T: Ord> From<BinaryMaxHeap<T>> for Vec<T> {
    fn from(heap: BinaryMaxHeap<T>) -> Self {
        heap.into_vec()
    }
}

impl<T: Ord> FromIterator<T> for BinaryMaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> Extend<T> for BinaryMaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a BinaryMaxHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
