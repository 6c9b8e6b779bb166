//! Tree nodes
//!
//! A [`Node`] is a single slot holding one value and at most two owned
//! children. It knows nothing about heap order; [`TreeHeap`](crate::TreeHeap)
//! drives it exclusively through path-directed descent.
//!
//! Children are held in `Option<Box<Node<T>>>`, so each node is owned by
//! exactly one parent slot and dropping a node drops its whole subtree.

use std::fmt;

/// One step of a root-to-slot path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

/// A node of the heap tree
///
/// In a tree built by [`TreeHeap`](crate::TreeHeap) a node never has a right
/// child without a left one, because the last level fills left to right.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a leaf holding `value`
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Creates an internal node from a value and two already-owned children
    pub fn with_children(
        value: T,
        left: Option<Box<Node<T>>>,
        right: Option<Box<Node<T>>>,
    ) -> Self {
        Self { value, left, right }
    }

    /// Returns the stored value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the stored value mutably; callers keep heap order themselves
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the node and returns its value, dropping any children
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns true if the node has neither child
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the child in direction `dir`, if any
    pub fn child(&self, dir: Direction) -> Option<&Node<T>> {
        match dir {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    pub fn child_mut(&mut self, dir: Direction) -> Option<&mut Node<T>> {
        self.slot_mut(dir).as_deref_mut()
    }

    /// Moves `node` into the slot for `dir`, returning whatever was there
    pub fn set_child(&mut self, dir: Direction, node: Box<Node<T>>) -> Option<Box<Node<T>>> {
        self.slot_mut(dir).replace(node)
    }

    /// Detaches and returns the child in direction `dir`
    pub fn take_child(&mut self, dir: Direction) -> Option<Box<Node<T>>> {
        self.slot_mut(dir).take()
    }

    /// Borrows this node's value and one of its children at the same time
    pub(crate) fn split_mut(&mut self, dir: Direction) -> (&mut T, Option<&mut Node<T>>) {
        let child = match dir {
            Direction::Left => self.left.as_deref_mut(),
            Direction::Right => self.right.as_deref_mut(),
        };
        (&mut self.value, child)
    }

    fn slot_mut(&mut self, dir: Direction) -> &mut Option<Box<Node<T>>> {
        match dir {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
