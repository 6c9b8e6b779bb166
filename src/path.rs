//! Index-to-path decoding
//!
//! An array-backed complete binary tree keeps the children of slot `i` at
//! `2i` and `2i + 1` (1-based). Reading the binary digits of a slot index
//! below its leading one gives the left/right moves that reach it from the
//! root: a `0` bit is a step left, a `1` bit a step right.
//!
//! [`path`] performs that decoding without touching any tree, which lets a
//! linked tree of owned nodes use the same addressing as the array layout.
//!
//! ```text
//!             1
//!         /       \
//!        2         3            path(5)  = [Left, Right]
//!      /   \     /   \          path(6)  = [Right, Left]
//!     4     5   6     7         path(12) = [Right, Left, Left]
//! ```

use smallvec::SmallVec;

use crate::node::Direction;

/// Root-first sequence of steps
///
/// A `usize` slot index has fewer than `usize::BITS` digits below its
/// leading one, so the inline capacity always suffices.
pub type Path = SmallVec<[Direction; 64]>;

/// Decodes the root-first path to the 1-based slot `n`
///
/// `path(1)` is empty: slot 1 is the root.
///
/// # Panics
///
/// Panics if `n` is zero, which addresses no slot.
pub fn path(mut n: usize) -> Path {
    assert!(n > 0, "slot indices are 1-based; 0 addresses no node");

    // Steps come out deepest first.
    let mut steps = Path::new();
    while n >= 2 {
        steps.push(if n % 2 == 0 {
            Direction::Left
        } else {
            Direction::Right
        });
        n /= 2;
    }
    steps.reverse();
    steps
}

/// Number of steps between the root and slot `n`
///
/// This is `path(n).len()` without building the path.
pub fn depth(n: usize) -> usize {
    assert!(n > 0, "slot indices are 1-based; 0 addresses no node");
    (usize::BITS - 1 - n.leading_zeros()) as usize
}
