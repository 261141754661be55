//! Common value types for transform primitives

#[cfg(feature = "alloc")]
pub mod digest;

#[cfg(feature = "alloc")]
pub use digest::Digest;
