//! This crate exposes a link-based Binary Search Tree (BST) holding an
//! ordered multiset of values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Equal values route
//!    right, so duplicates accumulate in right subtrees rather than being
//!    rejected or overwritten.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching the tree takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`), and an in-order
//! traversal visits the values in ascending sorted order. This tree does
//! *not* restructure itself on every mutation the way an AVL or red-black
//! tree does: values inserted in sorted order degenerate into a chain until
//! [`Tree::rebalance`] is explicitly asked to rebuild a height-balanced
//! structure from the current contents.
//!
//! Search and insertion come in recursive and iterative flavors
//! ([`Tree::find`]/[`Tree::find_iter`], [`Tree::add`]/[`Tree::add_iter`])
//! that always agree; the iterative forms keep deep, badly skewed trees
//! from exhausting the call stack.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod linked;
pub mod traverse;

#[cfg(test)]
mod test;

pub use error::TreeError;
pub use linked::Tree;
