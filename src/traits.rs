//! Ordering predicates and errors
//!
//! A [`TreeHeap`](crate::TreeHeap) never compares values with `Ord` directly.
//! It asks an [`Order`] whether one value is *out of order* relative to
//! another: `out_of_order(a, b)` is true when `b` should sit above `a`.
//! That single question drives both sift-up and sift-down, and the choice of
//! predicate decides whether the heap yields minima, maxima or anything else.
//!
//! - [`MinOrder`]: the smallest value is at the top (the default)
//! - [`MaxOrder`]: the largest value is at the top
//! - [`FnOrder`]: any `Fn(&T, &T) -> bool` closure

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no element to peek at or pop
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty: no top element exists"),
        }
    }
}

impl std::error::Error for HeapError {}

/// The comparison primitive of a heap
///
/// `out_of_order(a, b)` returns true when `a` is "worse" than `b`, i.e. `b`
/// should be preferred over `a` at a shared position.
///
/// Implementations must behave like a strict ordering over the values
/// actually inserted: irreflexive (`out_of_order(x, x)` is false) and
/// consistent between calls. This is not checked at runtime; a predicate
/// that breaks it leaves the heap's order unspecified, though never its
/// memory safety.
///
/// # Example
///
/// ```rust
/// use tree_heap::{Order, TreeHeap};
///
/// /// Orders strings by length, shortest first
/// struct ByLen;
///
/// impl Order<String> for ByLen {
///     fn out_of_order(&self, a: &String, b: &String) -> bool {
///         a.len() > b.len()
///     }
/// }
///
/// let mut heap = TreeHeap::with_order(ByLen);
/// heap.push("three".to_string());
/// heap.push("a".to_string());
/// heap.push("to".to_string());
/// assert_eq!(heap.pop(), "a");
/// ```
pub trait Order<T> {
    fn out_of_order(&self, a: &T, b: &T) -> bool;
}

/// Min-heap ordering: a larger value is worse than a smaller one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T: PartialOrd> Order<T> for MinOrder {
    #[inline]
    fn out_of_order(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Max-heap ordering: a smaller value is worse than a larger one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: PartialOrd> Order<T> for MaxOrder {
    #[inline]
    fn out_of_order(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Adapts a closure into an [`Order`]
///
/// The closure receives `(a, b)` and returns true when `a` is worse than `b`.
#[derive(Clone, Copy)]
pub struct FnOrder<F>(pub F);

impl<T, F> Order<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn out_of_order(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnOrder(..)")
    }
}

impl<T, O: Order<T> + ?Sized> Order<T> for &O {
    #[inline]
    fn out_of_order(&self, a: &T, b: &T) -> bool {
        (**self).out_of_order(a, b)
    }
}
