//! Growable containers with a pluggable storage contract.
//!
//! [`Container`] is the storage-independent contract, [`Vector`] its
//! contiguous growable implementation, and [`Stack`]/[`DynStack`] restrict
//! either to LIFO operations.

pub mod container;
pub mod error;
pub mod iter;
pub mod stack;
pub mod vector;

pub use container::Container;
pub use error::Error;
pub use stack::{DynStack, Stack};
pub use vector::Vector;
