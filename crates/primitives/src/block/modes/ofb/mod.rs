//! Output Feedback (OFB) mode implementation
//!
//! OFB turns a block cipher into a synchronous stream cipher: the feedback
//! register starts at the IV and is encrypted to produce each keystream
//! block, which is XORed into the data and becomes the next register value.
//! Only the forward direction of the cipher is ever used, so encryption and
//! decryption are the same operation and full blocks never need padding
//! semantics of their own.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::BlockCipher;
use crate::error::{validate, Result};

/// OFB mode wrapping a block cipher
///
/// The wrapper is stateful: each processed block advances the feedback
/// register, so blocks must be fed in stream order. Encrypting and
/// decrypting use the same method.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ofb<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
    register: Vec<u8>,
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Ofb<B> {
    /// Creates an OFB instance from a cipher and an initialization vector
    ///
    /// The IV must be at least one block long; the first `block_size()`
    /// bytes seed the feedback register.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::min_length("OFB initialization vector", iv.len(), B::block_size())?;

        Ok(Self {
            cipher,
            register: iv[..B::block_size()].to_vec(),
        })
    }

    /// Transforms one block in place and advances the keystream
    ///
    /// The block must be exactly `block_size()` bytes. Applying the same
    /// sequence of calls with the same cipher and IV inverts itself.
    pub fn process_block(&mut self, block: &mut [u8]) -> Result<()> {
        validate::length("OFB block", block.len(), B::block_size())?;

        self.cipher.encrypt_block(&mut self.register)?;
        for (b, k) in block.iter_mut().zip(&self.register) {
            *b ^= k;
        }
        Ok(())
    }
}
