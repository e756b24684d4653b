//! Comparators
//!
//! Every ordering decision a heap makes goes through a [`Compare`]
//! implementation chosen when the heap is constructed:
//!
//! - [`NaturalOrder`] uses the element type's own [`Ord`] implementation
//! - any closure `Fn(&T, &T) -> Ordering` can be supplied directly
//! - [`Reverse`] flips another comparator, turning a min-heap into a max-heap
//!
//! # Example
//!
//! ```rust
//! use binary_min_heap::compare::{Compare, NaturalOrder, Reverse};
//! use std::cmp::Ordering;
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reverse(NaturalOrder).compare(&1, &2), Ordering::Greater);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"z"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over `T`
///
/// Implementations must be a valid total order (antisymmetric, transitive,
/// consistent) for the heap guarantees to hold. Heaps do not validate this;
/// an inconsistent comparator yields an unspecified, but memory-safe,
/// element order.
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders elements by their [`Ord`] implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Compare<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Inverts the wrapped comparator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&2, &2), Ordering::Equal);
        assert_eq!(NaturalOrder.compare("b", "a"), Ordering::Greater);
    }

    #[test]
    fn test_closure_comparator() {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        assert_eq!(by_abs.compare(&-5, &3), Ordering::Greater);
        assert_eq!(by_abs.compare(&-3, &3), Ordering::Equal);
    }

    #[test]
    fn test_reverse() {
        let rev = Reverse(NaturalOrder);
        assert_eq!(rev.compare(&1, &2), Ordering::Greater);
        assert_eq!(rev.compare(&2, &1), Ordering::Less);
        assert_eq!(rev.compare(&7, &7), Ordering::Equal);
    }
}
