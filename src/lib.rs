//! Binary Heap over an Explicit Tree
//!
//! This crate provides [`TreeHeap`], a priority queue with standard binary
//! heap complexity whose elements live in a complete binary tree of owned
//! nodes instead of a contiguous array.
//!
//! # Features
//!
//! - **No buffer growth**: each push allocates one node, each pop frees one
//! - **Array addressing without an array**: [`path::path`] decodes a 1-based
//!   slot index into the left/right moves that reach it, so the tree is
//!   filled and emptied in exactly the order an array heap would use
//! - **Pluggable ordering**: min-heap by default, [`MaxOrder`] for a
//!   max-heap, or any closure through [`TreeHeap::with_fn`]
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
//! use tree_heap::{MaxOrder, TreeHeap};
//!
//! let mut heap = TreeHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//! assert_eq!(*heap.peek(), 3);
//! assert_eq!(heap.pop(), 3);
//!
//! let mut max_heap = TreeHeap::with_order(MaxOrder);
//! max_heap.extend([2, 9, 4]);
//! assert_eq!(max_heap.pop(), 9);
//! ```
//!
//! # Contract
//!
//! [`TreeHeap::peek`] and [`TreeHeap::pop`] panic on an empty heap; use
//! [`TreeHeap::try_peek`] / [`TreeHeap::try_pop`] to get a [`HeapError`]
//! instead. The ordering predicate must behave like a strict ordering; that
//! is not checked.

pub mod invariants;
pub mod node;
pub mod path;
pub mod traits;
pub mod tree_heap;

// Re-export the main types for convenience
pub use node::{Direction, Node};
pub use traits::{FnOrder, HeapError, MaxOrder, MinOrder, Order};
pub use tree_heap::TreeHeap;
