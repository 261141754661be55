//! Block cipher family: accumulator, XXTEA engine, and streaming modes
//!
//! Stream transports deliver chunks of arbitrary length; block ciphers
//! consume fixed-size blocks. The [`BlockAccumulator`] bridges the two, the
//! [`Xxtea`] engine transforms whole blocks, and [`Ofb`] chains the engine
//! into a stream cipher mode.

use crate::error::Result;

pub mod accumulator;
pub mod modes;
pub mod xxtea;

// Re-exports
pub use accumulator::{strip_padding, BlockAccumulator, PAD_MARKER};
pub use modes::Ofb;
pub use xxtea::Xxtea;

/// Trait for block ciphers operating on fixed-size byte blocks
pub trait BlockCipher {
    /// Marker type carrying the algorithm constants
    type Algorithm: CipherAlgorithm;

    /// The block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Encrypts a single block in place
    ///
    /// The block must be exactly `block_size()` bytes.
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    ///
    /// The block must be exactly `block_size()` bytes.
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}

/// Type-level constants for a block cipher algorithm
pub trait CipherAlgorithm {
    /// Minimum key size in bytes
    const KEY_SIZE: usize;
    /// Block size in bytes
    const BLOCK_SIZE: usize;
    /// Human-readable algorithm identifier
    const ALGORITHM_ID: &'static str;

    /// Returns the algorithm name
    fn name() -> &'static str {
        Self::ALGORITHM_ID
    }
}
