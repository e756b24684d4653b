//! Binary Min-Heap Priority Queue for Rust
//!
//! This crate provides an array-backed binary min-heap with a pluggable
//! ordering, plus the tooling that exercises it.
//!
//! # Features
//!
//! - **BinaryMinHeap**: O(log n) insert and extract-min, O(1) peek-min, doubling growth
//! - **Comparators**: natural `Ord` order, closures, or reversed order via [`compare`]
//! - **DOT export**: visualize the implicit tree with Graphviz via [`dot`]
//! - **Timing driver**: measure `peek_min` across heap sizes via [`timing`]
//!
//! # Example
//!
//! ```rust
//! use binary_min_heap::{BinaryMinHeap, HeapError};
//!
//! let mut heap = BinaryMinHeap::new();
//! for v in [5, 1, 4, 2, 3, 0] {
//!     heap.insert(v);
//! }
//! assert_eq!(heap.len(), 6);
//! assert_eq!(heap.peek_min(), Ok(&0));
//!
//! let drained: Vec<_> = std::iter::from_fn(|| heap.extract_min().ok()).collect();
//! assert_eq!(drained, vec![0, 1, 2, 3, 4, 5]);
//! assert_eq!(heap.extract_min(), Err(HeapError::Empty));
//! ```

pub mod binary_min;
pub mod compare;
pub mod dot;
pub mod timing;
pub mod traits;

// Re-export the main types for convenience
pub use binary_min::BinaryMinHeap;
pub use traits::{HeapError, PriorityQueue};
