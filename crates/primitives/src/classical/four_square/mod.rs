//! Four-Square digraph cipher
//!
//! Two keyed 5x5 grids sit beside two plain-alphabet grids. Text is reduced
//! to a 25-letter alphabet (lowercase, j folded into i, everything else
//! dropped) and processed in letter pairs: the pair's positions in the plain
//! grids select one letter from each keyed grid. Case, spacing, and
//! punctuation are not preserved.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Error, Result};

/// The 25-letter cipher alphabet, j omitted
pub const ALPHABET: [u8; 25] = *b"abcdefghiklmnopqrstuvwxyz";

/// Grid side length
const SIDE: usize = 5;

/// Filler letter appended when the plaintext has an odd letter count
const FILLER: u8 = b'x';

/// Four-Square cipher with two keyed grids
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct FourSquare {
    key1: [u8; 25],
    key2: [u8; 25],
}

/// Reduces text to the cipher alphabet
///
/// Lowercases ASCII letters, folds j into i, and drops everything else.
pub fn normalize(text: &str) -> Vec<u8> {
    text.chars()
        .filter_map(|c| match c.to_ascii_lowercase() {
            'j' => Some(b'i'),
            c @ 'a'..='z' => Some(c as u8),
            _ => None,
        })
        .collect()
}

impl FourSquare {
    /// Creates a cipher from two key strings
    ///
    /// Each key is normalized and must yield at least 25 letters; the first
    /// 25 fill the corresponding grid row by row. Keys are taken as given,
    /// duplicates included.
    pub fn new(key1: &str, key2: &str) -> Result<Self> {
        Ok(Self {
            key1: Self::grid_from("Four-Square key 1", key1)?,
            key2: Self::grid_from("Four-Square key 2", key2)?,
        })
    }

    fn grid_from(context: &'static str, key: &str) -> Result<[u8; 25]> {
        let letters = normalize(key);
        validate::min_length(context, letters.len(), SIDE * SIDE)?;

        let mut grid = [0u8; 25];
        grid.copy_from_slice(&letters[..SIDE * SIDE]);
        Ok(grid)
    }

    /// Position of a letter in a grid, row and column
    ///
    /// An absent letter maps to the top-left cell rather than failing, so a
    /// keyed grid with duplicates still transforms every input.
    fn position(grid: &[u8; 25], letter: u8) -> (usize, usize) {
        grid.iter()
            .position(|&g| g == letter)
            .map(|i| (i / SIDE, i % SIDE))
            .unwrap_or((0, 0))
    }

    /// Encrypts text, returning the normalized ciphertext letters
    ///
    /// Odd-length plaintext is padded with a trailing `x`.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let mut letters = normalize(plaintext);
        if letters.len() % 2 != 0 {
            letters.push(FILLER);
        }

        let mut out = String::with_capacity(letters.len());
        for pair in letters.chunks_exact(2) {
            let (ra, ca) = Self::position(&ALPHABET, pair[0]);
            let (rb, cb) = Self::position(&ALPHABET, pair[1]);
            out.push(self.key1[ra * SIDE + cb] as char);
            out.push(self.key2[rb * SIDE + ca] as char);
        }
        Ok(out)
    }

    /// Decrypts ciphertext produced by [`Self::encrypt`]
    ///
    /// The normalized ciphertext must have an even letter count; a trailing
    /// filler letter from encryption is not removed.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let letters = normalize(ciphertext);
        if letters.len() % 2 != 0 {
            return Err(Error::param(
                "Four-Square ciphertext",
                "normalized length must be even",
            ));
        }

        let mut out = String::with_capacity(letters.len());
        for pair in letters.chunks_exact(2) {
            let (ra, cb) = Self::position(&self.key1, pair[0]);
            let (rb, ca) = Self::position(&self.key2, pair[1]);
            out.push(ALPHABET[ra * SIDE + ca] as char);
            out.push(ALPHABET[rb * SIDE + cb] as char);
        }
        Ok(out)
    }
}
