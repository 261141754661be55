//! Public API types for the scytale workspace
//!
//! This crate provides the error taxonomy shared by every scytale crate:
//! validation failures are caller-correctable and carry a human-readable
//! reason, structural faults are fatal for the current stream.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
