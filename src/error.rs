//! The error taxonomy for tree mutations.
//!
//! Expected absences (a miss from [`find`][crate::Tree::find], a
//! [`replace`][crate::Tree::replace] of a value that isn't there, a
//! [`successor`][crate::Tree::successor] of the maximum) are `Option`s, not
//! errors. Only a mutation that was asked to do something impossible fails
//! with a [`TreeError`].

use thiserror::Error;

/// Error type for fallible [`Tree`][crate::Tree] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// [`remove`][crate::Tree::remove] was asked for a value the tree does
    /// not hold. The tree is left untouched.
    #[error("item not found in tree")]
    ItemNotFound,
}
