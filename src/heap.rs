//! Array-backed binary heap.
//!
//! A dense `Vec` with the heap-order invariant: every parent dominates its
//! children, where "dominates" means smaller for [`HeapKind::Min`] and larger
//! for [`HeapKind::Max`] under the heap's comparison function. Comparisons
//! are strict, so equal elements are not kept in insertion order.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `insert`  | O(log n)   |
//! | `extract` | O(log n)   |
//! | `peek`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use service_dispatch::heap::{BinaryHeap, HeapKind};
//!
//! let mut heap = BinaryHeap::new(HeapKind::Min);
//! for value in [5, 2, 8, 1, 3] {
//!     heap.insert(value);
//! }
//! assert_eq!(heap.peek(), Ok(&1));
//!
//! let mut sorted = Vec::new();
//! while let Ok(value) = heap.extract() {
//!     sorted.push(value);
//! }
//! assert_eq!(sorted, vec![1, 2, 3, 5, 8]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::{DispatchError, Result};

/// Which end of the ordering sits at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapKind {
    Min,
    Max,
}

/// Comparison function type used when the element's natural order applies.
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

pub struct BinaryHeap<T, C = NaturalOrder<T>> {
    data: Vec<T>,
    kind: HeapKind,
    compare: C,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates a heap ordered by `T`'s natural ordering.
    pub fn new(kind: HeapKind) -> Self {
        Self::with_comparator(kind, Ord::cmp)
    }
}

impl<T, C> BinaryHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates a heap ordered by `compare`.
    pub fn with_comparator(kind: HeapKind, compare: C) -> Self {
        Self {
            data: Vec::new(),
            kind,
            compare,
        }
    }

    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn insert(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the root.
    pub fn extract(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(DispatchError::EmptyHeap);
        }
        // swap_remove moves the last element into the root slot
        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    /// Returns the root without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(DispatchError::EmptyHeap)
    }

    /// True when the parent must move below the child.
    fn should_swap(&self, parent: usize, child: usize) -> bool {
        let ordering = (self.compare)(&self.data[parent], &self.data[child]);
        match self.kind {
            HeapKind::Min => ordering == Ordering::Greater,
            HeapKind::Max => ordering == Ordering::Less,
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.should_swap(parent, index) {
                self.data.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut target = index;

            if left < len && self.should_swap(target, left) {
                target = left;
            }
            if right < len && self.should_swap(target, right) {
                target = right;
            }

            if target == index {
                break;
            }
            self.data.swap(index, target);
            index = target;
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("kind", &self.kind)
            .field("data", &self.data)
            .finish()
    }
}
