//! XXTEA block cipher over fixed 1024-word blocks
//!
//! Corrected Block TEA applied to a fixed block of 1024 32-bit words
//! (4096 bytes). The whole word array is mixed for `6 + 52/n` rounds, each
//! word updated from its left and right neighbours, a running sum advanced
//! by the TEA delta constant, and a key word selected by position and round
//! phase. Block buffering and padding are delegated to the accumulator; the
//! engine itself is deterministic and keeps no state beyond the key.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};

/// TEA key schedule constant
const DELTA: u32 = 0x9e37_79b9;

/// Block size in 32-bit words
pub const XXTEA_BLOCK_WORDS: usize = 1024;

/// Block size in bytes
pub const XXTEA_BLOCK_SIZE: usize = XXTEA_BLOCK_WORDS * 4;

/// Minimum key length in bytes (four 32-bit words)
pub const XXTEA_KEY_SIZE: usize = 16;

/// Type-level constants for the fixed-block XXTEA variant
pub enum XxteaAlgorithm {}

impl CipherAlgorithm for XxteaAlgorithm {
    const KEY_SIZE: usize = XXTEA_KEY_SIZE;
    const BLOCK_SIZE: usize = XXTEA_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "XXTEA-4096";
}

/// XXTEA engine with a fixed 4096-byte block
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Xxtea {
    key: [u32; 4],
}

impl fmt::Debug for Xxtea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Xxtea").finish_non_exhaustive()
    }
}

impl Xxtea {
    /// Creates an engine from key bytes
    ///
    /// The key must be at least 16 bytes; the first 16 are taken as four
    /// big-endian 32-bit words.
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::min_length("XXTEA key", key.len(), XXTEA_KEY_SIZE)?;

        let mut words = [0u32; 4];
        for (i, word) in words.iter_mut().enumerate() {
            *word = BigEndian::read_u32(&key[i * 4..]);
        }
        Ok(Self { key: words })
    }

    /// One-shot encryption of up to one block, zero-extended to block size
    ///
    /// The output is always exactly [`XXTEA_BLOCK_SIZE`] bytes.
    pub fn encrypt_oneshot(block: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        validate::max_length("XXTEA one-shot block", block.len(), XXTEA_BLOCK_SIZE)?;
        let engine = Self::new(key)?;

        let mut buf = [0u8; XXTEA_BLOCK_SIZE];
        buf[..block.len()].copy_from_slice(block);
        engine.encrypt_block(&mut buf)?;
        Ok(buf.to_vec())
    }

    /// One-shot decryption counterpart of [`Self::encrypt_oneshot`]
    pub fn decrypt_oneshot(block: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        validate::max_length("XXTEA one-shot block", block.len(), XXTEA_BLOCK_SIZE)?;
        let engine = Self::new(key)?;

        let mut buf = [0u8; XXTEA_BLOCK_SIZE];
        buf[..block.len()].copy_from_slice(block);
        engine.decrypt_block(&mut buf)?;
        Ok(buf.to_vec())
    }

    fn mix(y: u32, z: u32, sum: u32, key: &[u32; 4], p: u32, e: u32) -> u32 {
        ((z >> 5 ^ y << 2).wrapping_add(y >> 3 ^ z << 4))
            ^ ((sum ^ y).wrapping_add(key[((p & 3) ^ e) as usize] ^ z))
    }

    fn encrypt_words(v: &mut [u32; XXTEA_BLOCK_WORDS], key: &[u32; 4]) {
        let n = XXTEA_BLOCK_WORDS as u32;
        let rounds = 6 + 52 / n;

        let mut sum = 0u32;
        let mut z = v[XXTEA_BLOCK_WORDS - 1];
        for _ in 0..rounds {
            sum = sum.wrapping_add(DELTA);
            let e = (sum >> 2) & 3;
            for p in 0..XXTEA_BLOCK_WORDS - 1 {
                let y = v[p + 1];
                v[p] = v[p].wrapping_add(Self::mix(y, z, sum, key, p as u32, e));
                z = v[p];
            }
            let y = v[0];
            v[XXTEA_BLOCK_WORDS - 1] = v[XXTEA_BLOCK_WORDS - 1]
                .wrapping_add(Self::mix(y, z, sum, key, n - 1, e));
            z = v[XXTEA_BLOCK_WORDS - 1];
        }
    }

    fn decrypt_words(v: &mut [u32; XXTEA_BLOCK_WORDS], key: &[u32; 4]) {
        let n = XXTEA_BLOCK_WORDS as u32;
        let rounds = 6 + 52 / n;

        let mut sum = rounds.wrapping_mul(DELTA);
        let mut y = v[0];
        for _ in 0..rounds {
            let e = (sum >> 2) & 3;
            for p in (1..XXTEA_BLOCK_WORDS).rev() {
                let z = v[p - 1];
                v[p] = v[p].wrapping_sub(Self::mix(y, z, sum, key, p as u32, e));
                y = v[p];
            }
            let z = v[XXTEA_BLOCK_WORDS - 1];
            v[0] = v[0].wrapping_sub(Self::mix(y, z, sum, key, 0, e));
            y = v[0];
            sum = sum.wrapping_sub(DELTA);
        }
    }

    fn unpack(block: &[u8]) -> [u32; XXTEA_BLOCK_WORDS] {
        let mut words = [0u32; XXTEA_BLOCK_WORDS];
        for (i, word) in words.iter_mut().enumerate() {
            *word = BigEndian::read_u32(&block[i * 4..]);
        }
        words
    }

    fn pack(words: &[u32; XXTEA_BLOCK_WORDS], block: &mut [u8]) {
        for (i, word) in words.iter().enumerate() {
            BigEndian::write_u32(&mut block[i * 4..], *word);
        }
    }
}

impl BlockCipher for Xxtea {
    type Algorithm = XxteaAlgorithm;

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("XXTEA block", block.len(), XXTEA_BLOCK_SIZE)?;

        let mut words = Self::unpack(block);
        Self::encrypt_words(&mut words, &self.key);
        Self::pack(&words, block);
        words.zeroize();
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("XXTEA block", block.len(), XXTEA_BLOCK_SIZE)?;

        let mut words = Self::unpack(block);
        Self::decrypt_words(&mut words, &self.key);
        Self::pack(&words, block);
        words.zeroize();
        Ok(())
    }
}
