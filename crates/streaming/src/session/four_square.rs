//! Four-Square cipher session

use scytale_primitives::classical::FourSquare;

use crate::error::{Result, StreamingResultExt};

/// Four-Square cipher session
///
/// Text-oriented rather than byte-oriented: each call transforms one whole
/// string. Because the cipher pairs letters, a message split mid-pair across
/// calls would encrypt differently, so callers send complete messages.
pub struct FourSquareSession {
    cipher: FourSquare,
}

impl FourSquareSession {
    /// Creates a session from two key strings of at least 25 letters each
    pub fn new(key1: &str, key2: &str) -> Result<Self> {
        Ok(Self {
            cipher: FourSquare::new(key1, key2).map_primitive_err()?,
        })
    }

    /// Encrypts a message, returning normalized ciphertext letters
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        self.cipher.encrypt(plaintext).map_primitive_err()
    }

    /// Decrypts a message produced by [`Self::encrypt`]
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        self.cipher.decrypt(ciphertext).map_primitive_err()
    }
}
