//! Stream-oriented cryptographic transform primitives
//!
//! This crate implements the transform engines behind the scytale service:
//! a fixed-block XXTEA cipher, an OFB streaming mode built on it, a one-time
//! pad with an optional data-parallel path, a streaming SHA-1 digest, the
//! Four-Square digraph cipher, and a bitmap-aware encryption wrapper. The
//! shared discipline is accumulating network-delivered chunks into fixed-size
//! cryptographic blocks and finalizing a padded remainder.
//!
//! The algorithms are implemented for correctness and pedagogical clarity,
//! not side-channel resistance. Key management is the caller's concern; keys
//! arrive as plain bytes.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher family: accumulator, XXTEA engine, OFB mode
#[cfg(feature = "block")]
pub mod block;
#[cfg(feature = "block")]
pub use block::{BlockAccumulator, Ofb, Xxtea};

// Hash function implementations
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "hash")]
pub use hash::Sha1;

// One-time pad primitive
#[cfg(feature = "otp")]
pub mod otp;

// Classical ciphers
#[cfg(feature = "classical")]
pub mod classical;
#[cfg(feature = "classical")]
pub use classical::FourSquare;

// Format-aware encryption wrappers
#[cfg(feature = "format")]
pub mod format;
#[cfg(feature = "format")]
pub use format::{BmpDecryptor, BmpEncryptor};

// Type system
pub mod types;
#[cfg(feature = "alloc")]
pub use types::Digest;
