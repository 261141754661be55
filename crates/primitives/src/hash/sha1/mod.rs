//! SHA-1 hash function implementation
//!
//! Streaming SHA-1 as specified in FIPS PUB 180-4: 512-bit blocks, an
//! 80-round compression over five 32-bit state words, and Merkle-Damgard
//! length padding. SHA-1 is cryptographically broken for collision
//! resistance and is provided for checksum-style integrity tagging only.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use crate::error::Result;
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;

/// Digest size in bytes
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// Internal block size in bytes
pub const SHA1_BLOCK_SIZE: usize = 64;

/// Round constants, one per 20-round phase
const K: [u32; 4] = [0x5a82_7999, 0x6ed9_eba1, 0x8f1b_bcdc, 0xca62_c1d6];

/// Marker type for the SHA-1 algorithm
pub enum Sha1Algorithm {}

impl HashAlgorithm for Sha1Algorithm {
    const OUTPUT_SIZE: usize = SHA1_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA1_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-1";
}

/// SHA-1 hash function state
///
/// Finalization caches the digest: repeated [`HashFunction::finalize`] calls
/// return the same value, and the next [`HashFunction::update`] implicitly
/// starts a fresh computation.
#[derive(Clone, Zeroize)]
pub struct Sha1 {
    state: [u32; 5],
    buffer: [u8; SHA1_BLOCK_SIZE],
    buffer_idx: usize,
    total_bytes: u64,
    completed: Option<[u8; SHA1_OUTPUT_SIZE]>,
}

impl Drop for Sha1 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        <Self as HashFunction>::new()
    }
}

impl Sha1 {
    fn init_state() -> [u32; 5] {
        [
            0x6745_2301,
            0xefcd_ab89,
            0x98ba_dcfe,
            0x1032_5476,
            0xc3d2_e1f0,
        ]
    }

    fn reset(&mut self) {
        self.state = Self::init_state();
        self.buffer = [0u8; SHA1_BLOCK_SIZE];
        self.buffer_idx = 0;
        self.total_bytes = 0;
        self.completed = None;
    }

    fn compress(state: &mut [u32; 5], block: &[u8; SHA1_BLOCK_SIZE]) {
        let mut w = [0u32; 80];
        for (i, word) in w.iter_mut().take(16).enumerate() {
            *word = BigEndian::read_u32(&block[i * 4..]);
        }
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        let mut a = state[0];
        let mut b = state[1];
        let mut c = state[2];
        let mut d = state[3];
        let mut e = state[4];

        for (i, &word) in w.iter().enumerate() {
            let (f, k) = match i / 20 {
                0 => ((b & c) | (!b & d), K[0]),
                1 => (b ^ c ^ d, K[1]),
                2 => ((b & c) | (b & d) | (c & d), K[2]),
                _ => (b ^ c ^ d, K[3]),
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(word);
            e = d;
            d = c;
            c = b;
            b = a.rotate_left(30);
            a = temp;
        }

        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
        state[4] = state[4].wrapping_add(e);

        w.zeroize();
    }

    fn update_internal(&mut self, mut input: &[u8]) {
        while !input.is_empty() {
            let fill = core::cmp::min(input.len(), SHA1_BLOCK_SIZE - self.buffer_idx);
            self.buffer[self.buffer_idx..self.buffer_idx + fill].copy_from_slice(&input[..fill]);
            self.buffer_idx += fill;
            input = &input[fill..];
            if self.buffer_idx == SHA1_BLOCK_SIZE {
                let mut block = [0u8; SHA1_BLOCK_SIZE];
                block.copy_from_slice(&self.buffer);
                Self::compress(&mut self.state, &block);
                self.total_bytes += SHA1_BLOCK_SIZE as u64;
                self.buffer_idx = 0;
                block.zeroize();
            }
        }
    }

    fn finalize_internal(&mut self) -> [u8; SHA1_OUTPUT_SIZE] {
        self.total_bytes += self.buffer_idx as u64;
        let bit_len = self.total_bytes * 8;

        self.buffer[self.buffer_idx] = 0x80;
        if self.buffer_idx >= 56 {
            for b in &mut self.buffer[self.buffer_idx + 1..] {
                *b = 0;
            }
            let mut block = [0u8; SHA1_BLOCK_SIZE];
            block.copy_from_slice(&self.buffer);
            Self::compress(&mut self.state, &block);
            self.buffer = [0u8; SHA1_BLOCK_SIZE];
        } else {
            for b in &mut self.buffer[self.buffer_idx + 1..56] {
                *b = 0;
            }
        }

        BigEndian::write_u64(&mut self.buffer[56..], bit_len);
        let mut block = [0u8; SHA1_BLOCK_SIZE];
        block.copy_from_slice(&self.buffer);
        Self::compress(&mut self.state, &block);
        block.zeroize();

        let mut out = [0u8; SHA1_OUTPUT_SIZE];
        for (i, &word) in self.state.iter().enumerate() {
            BigEndian::write_u32(&mut out[i * 4..], word);
        }
        out
    }
}

impl HashFunction for Sha1 {
    type Algorithm = Sha1Algorithm;
    type Output = Digest<SHA1_OUTPUT_SIZE>;

    fn new() -> Self {
        Sha1 {
            state: Self::init_state(),
            buffer: [0u8; SHA1_BLOCK_SIZE],
            buffer_idx: 0,
            total_bytes: 0,
            completed: None,
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        if self.completed.is_some() {
            self.reset();
        }
        self.update_internal(data);
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        if let Some(digest) = self.completed {
            return Ok(Digest::new(digest));
        }
        let digest = self.finalize_internal();
        self.completed = Some(digest);
        Ok(Digest::new(digest))
    }
}
