//! Hash function implementations
//!
//! Streaming digests that absorb input in arbitrary-length chunks and
//! produce a fixed-size [`Digest`](crate::types::Digest) on finalization.

use crate::error::Result;

pub mod sha1;

pub use sha1::Sha1;

/// Type-level constants for a hash algorithm
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;
    /// Internal block size in bytes
    const BLOCK_SIZE: usize;
    /// Human-readable algorithm identifier
    const ALGORITHM_ID: &'static str;
}

/// Trait for streaming hash functions
pub trait HashFunction: Sized {
    /// Marker type carrying the algorithm constants
    type Algorithm: HashAlgorithm;
    /// Digest type produced on finalization
    type Output;

    /// Creates a fresh hasher
    fn new() -> Self;

    /// Absorbs input, chainable
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Completes the computation and returns the digest
    ///
    /// Finalization is idempotent: repeated calls return the same digest
    /// until new input arrives, which starts a fresh computation.
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Convenience one-shot digest of a byte slice
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Digest size in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Internal block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the algorithm name
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }
}
