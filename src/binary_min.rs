//! Binary Min-Heap implementation
//!
//! An implicit binary min-heap laid out in a contiguous, growable buffer.
//! The root lives at index 0 and the children of index `i` live at
//! `2i + 1` and `2i + 2`.
//!
//! Elements are ordered by a [`Compare`] implementation bound at
//! construction: [`NaturalOrder`] by default, or any comparator passed to
//! [`BinaryMinHeap::with_comparator`].
//!
//! # Time Complexity
//!
//! | Operation     | Complexity          |
//! |---------------|---------------------|
//! | `insert`      | O(log n) amortized  |
//! | `extract_min` | O(log n)            |
//! | `peek_min`    | O(1)                |
//! | `len`         | O(1)                |
//! | `to_snapshot` | O(n)                |
//!
//! # Example
//!
//! ```rust
//! use binary_min_heap::BinaryMinHeap;
//!
//! let mut heap = BinaryMinHeap::new();
//! heap.insert(3);
//! heap.insert(1);
//! heap.insert(2);
//!
//! assert_eq!(heap.peek_min(), Ok(&1));
//! assert_eq!(heap.extract_min(), Ok(1));
//! assert_eq!(heap.extract_min(), Ok(2));
//! assert_eq!(heap.extract_min(), Ok(3));
//! assert!(heap.extract_min().is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::compare::{Compare, NaturalOrder};
use crate::traits::{HeapError, PriorityQueue};

/// Number of slots allocated by a freshly constructed heap
pub const INITIAL_CAPACITY: usize = 10;

/// An array-backed binary min-heap
///
/// The backing buffer starts at [`INITIAL_CAPACITY`] slots and doubles
/// whenever an insert finds it full. It never shrinks: neither
/// [`extract_min`](Self::extract_min) nor [`clear`](Self::clear) release
/// memory.
#[derive(Clone)]
pub struct BinaryMinHeap<T, C = NaturalOrder> {
    /// Live elements in heap order; `data.len()` is the element count
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> BinaryMinHeap<T, NaturalOrder> {
    /// Creates an empty heap ordered by `T`'s natural order
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> BinaryMinHeap<T, C> {
    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of slots in the backing buffer
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Removes every element, keeping the backing buffer
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the live elements in heap order
    ///
    /// Index `i` has children at `2i + 1` and `2i + 2`.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the bound comparator
    pub fn comparator(&self) -> &C {
        &self.cmp
    }
}

impl<T, C: Compare<T>> BinaryMinHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    ///
    /// ```rust
    /// use binary_min_heap::BinaryMinHeap;
    ///
    /// let mut heap = BinaryMinHeap::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// heap.insert("three");
    /// heap.insert("a");
    /// heap.insert("of");
    /// assert_eq!(heap.extract_min(), Ok("a"));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(INITIAL_CAPACITY),
            cmp,
        }
    }

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Inserts an element
    pub fn insert(&mut self, item: T) {
        if self.data.len() == self.data.capacity() {
            self.grow();
        }
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }

        // Moves the last element into the root slot
        let min = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(min)
    }

    /// Single ordering seam shared by both sift directions
    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.cmp.compare(&self.data[a], &self.data[b]) == Ordering::Less
    }

    /// Doubles the backing buffer
    fn grow(&mut self) {
        let additional = self.data.capacity().max(1);
        self.data.reserve_exact(additional);
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.less(index, parent) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let smaller = if right < len && self.less(right, left) {
                right
            } else {
                left
            };

            if self.less(smaller, index) {
                self.data.swap(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }
}

impl<T: Clone, C> BinaryMinHeap<T, C> {
    /// Returns a copy of the live elements in heap order
    ///
    /// The copy is independent of the heap: later inserts or removals do
    /// not affect it. It is *not* sorted; use repeated
    /// [`extract_min`](Self::extract_min) for sorted output.
    pub fn to_snapshot(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for BinaryMinHeap<T, C> {
    fn len(&self) -> usize {
        BinaryMinHeap::len(self)
    }

    fn is_empty(&self) -> bool {
        BinaryMinHeap::is_empty(self)
    }

    fn clear(&mut self) {
        BinaryMinHeap::clear(self)
    }

    fn peek_min(&self) -> Result<&T, HeapError> {
        BinaryMinHeap::peek_min(self)
    }

    fn insert(&mut self, item: T) {
        BinaryMinHeap::insert(self, item)
    }

    fn extract_min(&mut self) -> Result<T, HeapError> {
        BinaryMinHeap::extract_min(self)
    }
}

impl<T: Ord> Default for BinaryMinHeap<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryMinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryMinHeap")
            .field("data", &self.data)
            .field("capacity", &self.data.capacity())
            .finish_non_exhaustive()
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryMinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryMinHeap<T, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
