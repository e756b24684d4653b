//! Common traits for priority queues
//!
//! This module provides the [`PriorityQueue`] contract shared by the heap in
//! this crate and by the tooling that consumes it (the DOT exporter, the
//! timing driver and the generic test suites).
//!
//! Unlike `std::collections::BinaryHeap`, which is a max-heap whose accessors
//! return `Option`, queues here are min-queues and report an empty queue as
//! [`HeapError::Empty`].

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The queue holds no elements
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "priority queue is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for min-priority queues
///
/// - `insert` adds an element
/// - `extract_min` removes and returns the minimum
/// - `peek_min` returns the minimum without removing it
///
/// Ordering is decided by the queue itself (natural order or a comparator
/// bound at construction), so the trait carries no `Ord` bound.
///
/// # Example
///
/// ```rust
/// use binary_min_heap::{BinaryMinHeap, HeapError, PriorityQueue};
///
/// fn drain<Q: PriorityQueue<i32>>(queue: &mut Q) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Ok(item) = queue.extract_min() {
///         out.push(item);
///     }
///     out
/// }
///
/// let mut heap = BinaryMinHeap::new();
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(drain(&mut heap), vec![1, 2, 3]);
/// assert_eq!(heap.peek_min(), Err(HeapError::Empty));
/// ```
pub trait PriorityQueue<T> {
    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element from the queue
    fn clear(&mut self);

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue holds no elements.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_min(&self) -> Result<&T, HeapError>;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized for array-backed heaps.
    fn insert(&mut self, item: T);

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue holds no elements.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_min(&mut self) -> Result<T, HeapError>;
}
