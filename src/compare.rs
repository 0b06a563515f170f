//! The comparator capability used by [`DaryHeap`](crate::DaryHeap)
//!
//! Heap order is not an intrinsic property of the element type: it is an
//! injected strategy, supplied at construction and threaded through every
//! restructuring step. This keeps one container covering every ordering mode:
//!
//! - [`NaturalOrder`]: the element's own `Ord` (min-heap behavior)
//! - [`Reversed`]: flips any comparator (turns a min-heap into a max-heap)
//! - [`ByKey`]: orders elements by an extracted key
//! - any closure `Fn(&T, &T) -> Ordering`, including closures that capture
//!   state; the captured environment plays the role of a comparison context
//!
//! A comparator must be a consistent total order. The heap does not (and
//! cannot cheaply) validate this; an inconsistent order produces an arbitrary
//! element arrangement, never memory unsafety.

use std::cmp::Ordering;

/// A total order over values of type `T`.
///
/// `compare(a, b)` returning [`Ordering::Less`] means `a` sorts toward the
/// root of the heap.
///
/// # Example
///
/// ```rust
/// use rust_dary_heap::compare::{Compare, NaturalOrder};
/// use std::cmp::Ordering;
///
/// assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
/// assert_eq!(NaturalOrder.compare(&2, &2), Ordering::Equal);
/// ```
pub trait Compare<T> {
    /// Compares two values under this order.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Closures are comparators.
///
/// This is what makes stateful orderings cheap to express: whatever the
/// closure captures travels with the heap and is consulted on every
/// comparison.
///
/// ```rust
/// use rust_dary_heap::compare::Compare;
/// use std::cmp::Ordering;
///
/// let weights = [10u32, 1, 7];
/// let cmp = move |a: &usize, b: &usize| weights[*a].cmp(&weights[*b]);
/// assert_eq!(cmp.compare(&1, &2), Ordering::Less);
/// ```
impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their own [`Ord`] implementation.
///
/// This is the default comparator of [`DaryHeap`](crate::DaryHeap) and yields
/// min-heap behavior: the smallest element sits at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Compare<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reverses an inner comparator.
///
/// `Reversed(NaturalOrder)` turns the heap into a max-heap; there is no
/// separate max/min mode on the container itself.
///
/// ```rust
/// use rust_dary_heap::compare::{Compare, NaturalOrder, Reversed};
/// use std::cmp::Ordering;
///
/// assert_eq!(Reversed(NaturalOrder).compare(&1, &2), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T, C: Compare<T>> Compare<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Orders elements by a key extracted from each element.
///
/// Useful when the element type has no `Ord` of its own, or when only part of
/// it should drive the heap order.
///
/// ```rust
/// use rust_dary_heap::compare::{ByKey, Compare};
/// use std::cmp::Ordering;
///
/// let by_len = ByKey(|s: &&str| s.len());
/// assert_eq!(by_len.compare(&"ab", &"c"), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Compare<T> for ByKey<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}
