//! One-time pad sessions

use rand::rngs::OsRng;

use scytale_primitives::otp;

use crate::error::{Result, StreamingResultExt};

/// Worker lane count used when none is configured
pub const DEFAULT_OTP_LANES: usize = 4;

/// One-time pad session
///
/// Stateless per chunk: each call stands alone, so chunks may be processed
/// in any order as long as chunk and key slices stay paired. Key material
/// for encryption comes from the operating system CSPRNG.
#[derive(Clone, Copy, Debug)]
pub struct OtpSession {
    lanes: usize,
}

impl OtpSession {
    /// Creates a session with the default lane count
    pub fn new() -> Self {
        Self {
            lanes: DEFAULT_OTP_LANES,
        }
    }

    /// Creates a session with an explicit lane count
    pub fn with_lanes(lanes: usize) -> Self {
        Self { lanes }
    }

    /// Encrypts a chunk under a fresh random key, returning `(ciphertext, key)`
    pub fn encrypt(&self, chunk: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
        Ok(otp::generate(chunk, &mut OsRng))
    }

    /// XORs a chunk with its key slice across the configured lanes
    ///
    /// Decryption of [`Self::encrypt`] output, or encryption under a
    /// caller-supplied key.
    pub fn apply(&self, chunk: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        otp::xor_parallel(chunk, key, self.lanes).map_primitive_err()
    }
}

impl Default for OtpSession {
    fn default() -> Self {
        Self::new()
    }
}
