//! Error types for the integer list.

use thiserror::Error;

/// Result type alias for list operations.
pub type ListResult<T> = Result<T, ListError>;

/// Precondition violations reported by [`IntList`](crate::IntList).
///
/// Both variants are caller mistakes, not runtime conditions of the list itself.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// Index outside `0..length`.
    #[error("Index {index} out of range for list of length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    /// `remove_last` called on an empty list.
    #[error("Cannot remove the last element of an empty list")]
    EmptyList,
}

impl ListError {
    /// Creates an IndexOutOfRange error.
    pub fn index_out_of_range(index: usize, length: usize) -> Self {
        Self::IndexOutOfRange { index, length }
    }

    /// Creates an EmptyList error.
    pub fn empty_list() -> Self {
        Self::EmptyList
    }
}
