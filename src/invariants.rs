//! Structural checks for [`TreeHeap`]
//!
//! [`check`] walks the whole tree and verifies the two properties every
//! operation relies on:
//!
//! - **Shape**: the tree is complete. Numbering nodes the way an array
//!   layout would (root 1, children of `i` at `2i` and `2i + 1`), exactly the
//!   slots `1..=len` are occupied.
//! - **Heap order**: no parent is out of order with either child.
//!
//! A right child without a left sibling is reported on its own, since it
//! points at a path-decoding bug rather than a comparison bug.
//!
//! The walk is O(n). It backs the tests, the Kani harnesses, and (with the
//! `debug-invariants` feature in debug builds) a re-check after every
//! mutation.

use std::fmt;

use log::debug;

use crate::node::{Direction, Node};
use crate::traits::Order;
use crate::tree_heap::TreeHeap;

/// A broken heap invariant, located by 1-based slot number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A slot in `1..=len` holds no node
    MissingNode { slot: usize },
    /// A node sits beyond slot `len`
    ExtraNode { slot: usize },
    /// A node has a right child but no left child
    RightWithoutLeft { slot: usize },
    /// A parent is out of order with its child
    HeapOrder { parent: usize, child: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::MissingNode { slot } => {
                write!(f, "slot {} should be occupied but holds no node", slot)
            }
            InvariantViolation::ExtraNode { slot } => {
                write!(f, "slot {} lies past the last element but holds a node", slot)
            }
            InvariantViolation::RightWithoutLeft { slot } => {
                write!(f, "node at slot {} has a right child but no left child", slot)
            }
            InvariantViolation::HeapOrder { parent, child } => {
                write!(f, "parent at slot {} is out of order with child at slot {}", parent, child)
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Verifies shape and heap order of `heap`
///
/// # Example
///
/// ```rust
/// use tree_heap::{invariants, TreeHeap};
///
/// let heap: TreeHeap<i32> = [4, 1, 3].into_iter().collect();
/// assert!(invariants::check(&heap).is_ok());
/// ```
pub fn check<T, O: Order<T>>(heap: &TreeHeap<T, O>) -> Result<(), InvariantViolation> {
    let result = match heap.root() {
        None if heap.is_empty() => Ok(()),
        None => Err(InvariantViolation::MissingNode { slot: 1 }),
        Some(root) => check_subtree(root, 1, heap.len(), heap.order()),
    };
    if let Err(violation) = &result {
        debug!("invariant check failed at len {}: {}", heap.len(), violation);
    }
    result
}

fn check_subtree<T, O: Order<T>>(
    node: &Node<T>,
    slot: usize,
    len: usize,
    order: &O,
) -> Result<(), InvariantViolation> {
    if slot > len {
        return Err(InvariantViolation::ExtraNode { slot });
    }
    if node.child(Direction::Left).is_none() && node.child(Direction::Right).is_some() {
        return Err(InvariantViolation::RightWithoutLeft { slot });
    }

    for (dir, offset) in [(Direction::Left, 0), (Direction::Right, 1)] {
        // A child slot that overflows usize is necessarily past `len`.
        let child_slot = slot
            .checked_mul(2)
            .and_then(|s| s.checked_add(offset))
            .unwrap_or(usize::MAX);

        match node.child(dir) {
            Some(child) => {
                if order.out_of_order(node.value(), child.value()) {
                    return Err(InvariantViolation::HeapOrder {
                        parent: slot,
                        child: child_slot,
                    });
                }
                check_subtree(child, child_slot, len, order)?;
            }
            None if child_slot <= len => {
                return Err(InvariantViolation::MissingNode { slot: child_slot });
            }
            None => {}
        }
    }
    Ok(())
}
