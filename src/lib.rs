//! IntList - a mutable sequence of integers built on a singly-linked chain.
//!
//! The list exposes a small contract-driven surface:
//!
//! - **Queries**: `len`, `element_at`, `to_vec` (a fresh snapshot), `iter`
//! - **Mutators**: `add` appends at the tail, `remove_last` detaches the tail
//! - **Failures**: out-of-range reads and removal from an empty list return a
//!   [`ListError`] instead of touching the list
//!
//! # Example
//!
//! ```rust
//! use intlist::{IntList, ListError};
//!
//! let mut list = IntList::new();
//! list.add(5);
//! list.add(3);
//! list.add(9);
//!
//! assert_eq!(list.to_vec(), vec![5, 3, 9]);
//! assert_eq!(list.element_at(1), Ok(3));
//!
//! assert_eq!(list.remove_last(), Ok(9));
//! assert_eq!(list.len(), 2);
//!
//! list.remove_last().unwrap();
//! list.remove_last().unwrap();
//! assert_eq!(list.remove_last(), Err(ListError::EmptyList));
//! ```

pub mod error;

// List module
pub mod list;

// Re-exports for convenience
pub use error::{ListError, ListResult};
pub use list::{IntList, Iter};
