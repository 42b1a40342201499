//! Integer list module.
//!
//! Provides `IntList`, a growable sequence of `i32` stored as a singly-linked chain.

mod node;
pub mod int_list;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports for convenience
pub use int_list::{IntList, Iter};
