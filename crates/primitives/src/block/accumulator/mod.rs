//! Fixed-block accumulation of arbitrary-length chunk streams
//!
//! Transports deliver chunks of any length, in order; block ciphers need
//! exactly `N` bytes at a time. The accumulator copies incoming chunks into
//! an internal buffer and hands back one full block each time the buffer
//! fills. At end of stream, [`BlockAccumulator::finalize`] completes the
//! partial remainder into a single padded block: a `0x80` marker at the
//! first free byte, zeros to the end of the block.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::Zeroize;

/// Sentinel byte denoting the start of padding in a final partial block
pub const PAD_MARKER: u8 = 0x80;

/// Push-based accumulator producing fixed `N`-byte blocks
#[derive(Clone, Zeroize)]
pub struct BlockAccumulator<const N: usize> {
    buffer: [u8; N],
    fill: usize,
}

impl<const N: usize> BlockAccumulator<N> {
    /// Creates an empty accumulator
    pub fn new() -> Self {
        Self {
            buffer: [0u8; N],
            fill: 0,
        }
    }

    /// Whether no partial, unflushed data remains
    pub fn is_empty(&self) -> bool {
        self.fill == 0
    }

    /// Feeds a chunk of any length, returning every block that filled
    ///
    /// Blocks are returned in input order. Bytes that do not complete a
    /// block stay buffered for the next call or for [`Self::finalize`].
    pub fn feed(&mut self, mut chunk: &[u8]) -> Vec<[u8; N]> {
        let mut ready = Vec::new();
        while !chunk.is_empty() {
            let take = core::cmp::min(chunk.len(), N - self.fill);
            self.buffer[self.fill..self.fill + take].copy_from_slice(&chunk[..take]);
            self.fill += take;
            chunk = &chunk[take..];
            if self.fill == N {
                ready.push(self.buffer);
                self.fill = 0;
            }
        }
        ready
    }

    /// Completes the buffered remainder into one padded block
    ///
    /// Returns `None` when the buffer is empty. Otherwise writes the
    /// [`PAD_MARKER`] at the first free byte, zero-fills the rest, resets
    /// the accumulator, and returns the block.
    pub fn finalize(&mut self) -> Option<[u8; N]> {
        if self.fill == 0 {
            return None;
        }

        self.buffer[self.fill] = PAD_MARKER;
        for b in &mut self.buffer[self.fill + 1..] {
            *b = 0;
        }
        self.fill = 0;
        Some(self.buffer)
    }
}

impl<const N: usize> Default for BlockAccumulator<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Drop for BlockAccumulator<N> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Strips block padding from a final decrypted block
///
/// Implements the marker convention exactly: a trailing zero run is
/// permitted before the `0x80` marker; the block is returned unchanged when
/// no marker is found at the end. Apply only to the final block of a
/// stream, never to interior blocks.
///
/// The convention is ambiguous when genuine plaintext ends in `0x80`
/// followed by zeros; such data is over-stripped.
pub fn strip_padding(block: &[u8]) -> &[u8] {
    let mut end = block.len();
    while end > 0 && block[end - 1] == 0 {
        end -= 1;
    }
    if end > 0 && block[end - 1] == PAD_MARKER {
        &block[..end - 1]
    } else {
        block
    }
}

#[cfg(test)]
mod tests;
