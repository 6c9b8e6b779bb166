//! Binary heap over a linked tree
//!
//! [`TreeHeap`] keeps its elements in a complete binary tree of owned
//! [`Node`]s rather than in a `Vec`. The tree never needs to grow a buffer:
//! every push allocates exactly one node and every pop frees exactly one.
//!
//! The shape is never stored. Because the tree is always complete, the
//! element count alone says where the next free slot (on push) and the last
//! occupied slot (on pop) are, and [`path`](crate::path::path) turns that
//! slot number into the left/right moves that reach it. Sift-up and
//! sift-down then exchange values along that path; nodes themselves never
//! move.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//! | `len`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use tree_heap::TreeHeap;
//!
//! let mut heap = TreeHeap::new();
//! for x in [5, 3, 8, 1, 4] {
//!     heap.push(x);
//! }
//!
//! assert_eq!(heap.len(), 5);
//! assert_eq!(*heap.peek(), 1);
//! assert_eq!(heap.pop(), 1);
//! assert_eq!(heap.pop(), 3);
//! ```

use std::fmt;
use std::mem;

use log::trace;

use crate::node::{Direction, Node};
use crate::path::{depth, path};
use crate::traits::{FnOrder, HeapError, MinOrder, Order};

/// A priority queue stored as a complete binary tree of owned nodes
///
/// `O` decides which element is on top; see [`Order`]. The default,
/// [`MinOrder`], makes this a min-heap.
pub struct TreeHeap<T, O = MinOrder> {
    root: Option<Box<Node<T>>>,
    len: usize,
    order: O,
}

impl<T: PartialOrd> TreeHeap<T> {
    /// Creates an empty min-heap
    pub fn new() -> Self {
        Self::with_order(MinOrder)
    }
}

impl<T, F> TreeHeap<T, FnOrder<F>>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty heap ordered by a closure
    ///
    /// `out_of_order(a, b)` must return true when `b` belongs above `a`.
    ///
    /// ```rust
    /// use tree_heap::TreeHeap;
    ///
    /// let mut heap = TreeHeap::with_fn(|a: &i32, b: &i32| a < b);
    /// heap.push(2);
    /// heap.push(9);
    /// heap.push(4);
    /// assert_eq!(*heap.peek(), 9);
    /// ```
    pub fn with_fn(out_of_order: F) -> Self {
        Self::with_order(FnOrder(out_of_order))
    }
}

impl<T, O: Order<T>> TreeHeap<T, O> {
    /// Creates an empty heap using `order` to rank elements
    pub fn with_order(order: O) -> Self {
        Self {
            root: None,
            len: 0,
            order,
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels in the tree (0 when empty)
    pub fn height(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            depth(self.len) + 1
        }
    }

    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the top element
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn peek(&self) -> &T {
        self.try_peek().unwrap_or_else(|e| panic!("peek: {}", e))
    }

    /// Returns the top element, or [`HeapError::Empty`]
    pub fn try_peek(&self) -> Result<&T, HeapError> {
        self.root
            .as_deref()
            .map(Node::value)
            .ok_or(HeapError::Empty)
    }

    /// Inserts an element
    ///
    /// The element goes into the first free slot of the last level, then
    /// rises toward the root while its parent is out of order with it.
    pub fn push(&mut self, value: T) {
        self.len += 1;
        let slot = self.len;
        let steps = path(slot);
        trace!("push: slot {} at depth {}", slot, steps.len());

        let Some((&last, to_parent)) = steps.split_last() else {
            self.root = Some(Box::new(Node::leaf(value)));
            self.check_invariants();
            return;
        };

        let root = self
            .root
            .as_deref_mut()
            .expect("a heap with more than one slot has a root");
        let parent = descend(root, to_parent);
        let displaced = parent.set_child(last, Box::new(Node::leaf(value)));
        debug_assert!(displaced.is_none(), "slot {} was already occupied", slot);

        sift_up(root, &steps, &self.order);
        self.check_invariants();
    }

    /// Removes and returns the top element
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().unwrap_or_else(|e| panic!("pop: {}", e))
    }

    /// Removes and returns the top element, or [`HeapError::Empty`]
    ///
    /// The last leaf is detached and its value moved into the root, which
    /// then sinks until neither child is preferred over it.
    pub fn try_pop(&mut self) -> Result<T, HeapError> {
        let slot = self.len;
        if slot == 0 {
            return Err(HeapError::Empty);
        }
        trace!("pop: detaching slot {}", slot);

        if slot == 1 {
            let root = self.root.take().expect("a non-empty heap has a root");
            self.len = 0;
            return Ok(root.into_value());
        }

        let steps = path(slot);
        let (&last, to_parent) = steps
            .split_last()
            .expect("every slot below the root has a non-empty path");
        let root = self
            .root
            .as_deref_mut()
            .expect("a non-empty heap has a root");
        let leaf = descend(root, to_parent)
            .take_child(last)
            .expect("the last slot of a complete tree is occupied");
        debug_assert!(leaf.is_leaf(), "slot {} is not a leaf", slot);
        self.len -= 1;

        let top = mem::replace(root.value_mut(), leaf.into_value());
        sift_down(root, &self.order);
        self.check_invariants();
        Ok(top)
    }

    /// Drops every element
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Assembles a heap from a hand-built tree, bypassing every invariant
    #[cfg(test)]
    pub(crate) fn from_parts(root: Option<Box<Node<T>>>, len: usize, order: O) -> Self {
        Self { root, len, order }
    }

    #[inline]
    fn check_invariants(&self) {
        #[cfg(all(debug_assertions, feature = "debug-invariants"))]
        {
            if let Err(violation) = crate::invariants::check(self) {
                panic!("heap invariant broken: {}", violation);
            }
        }
    }
}

/// Follows `steps` down from `node`
fn descend<'a, T>(mut node: &'a mut Node<T>, steps: &[Direction]) -> &'a mut Node<T> {
    for &dir in steps {
        node = node
            .child_mut(dir)
            .expect("every slot on the path to an occupied slot is occupied");
    }
    node
}

/// Restores heap order along `steps`, from the deepest pair upward
///
/// Recurses down to the parent of the path's last node, then compares and
/// swaps one parent/child pair per level on the way back. Returns whether
/// the value at `node`'s child on the path changed, so that a level above an
/// unchanged pair skips its comparison. Recursion depth is the path length,
/// which is below `usize::BITS`.
fn sift_up<T, O: Order<T>>(node: &mut Node<T>, steps: &[Direction], order: &O) -> bool {
    let Some((&dir, rest)) = steps.split_first() else {
        return false;
    };
    let (value, child) = node.split_mut(dir);
    let child = child.expect("every slot on the path to an occupied slot is occupied");

    if !rest.is_empty() && !sift_up(child, rest, order) {
        return false;
    }
    if order.out_of_order(value, child.value()) {
        mem::swap(value, child.value_mut());
        true
    } else {
        false
    }
}

/// Sinks the value at `node` until no child is preferred over it
///
/// When both children compare equal the right child is taken.
fn sift_down<T, O: Order<T>>(mut node: &mut Node<T>, order: &O) {
    loop {
        let Node { value, left, right } = node;
        let child = match (left.as_deref_mut(), right.as_deref_mut()) {
            (None, right) => {
                debug_assert!(right.is_none(), "right child without a left sibling");
                return;
            }
            // A node with only a left child sits just above the last level.
            (Some(left), None) => {
                if order.out_of_order(value, left.value()) {
                    mem::swap(value, left.value_mut());
                }
                return;
            }
            (Some(left), Some(right)) => {
                let preferred = if order.out_of_order(left.value(), right.value()) {
                    right.value()
                } else {
                    left.value()
                };
                if !order.out_of_order(value, preferred) {
                    return;
                }
                if order.out_of_order(right.value(), left.value()) {
                    left
                } else {
                    right
                }
            }
        };
        mem::swap(value, child.value_mut());
        node = child;
    }
}

impl<T, O: Order<T> + Default> Default for TreeHeap<T, O> {
    fn default() -> Self {
        Self::with_order(O::default())
    }
}

impl<T, O: Order<T>> Extend<T> for TreeHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, O: Order<T> + Default> FromIterator<T> for TreeHeap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}

impl<T: fmt::Debug, O> fmt::Debug for TreeHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeHeap")
            .field("len", &self.len)
            .field("top", &self.root.as_deref().map(Node::value))
            .finish()
    }
}
