//! Streaming digest and digest-verification sessions

use scytale_primitives::hash::sha1::SHA1_OUTPUT_SIZE;
use scytale_primitives::hash::{HashFunction, Sha1};
use scytale_primitives::types::Digest;

use crate::error::{Result, StreamingResultExt};

/// Streaming SHA-1 digest session
///
/// Absorbs payload chunks and renders the digest as a `0x`-prefixed
/// lowercase hex string on finalization. Finalizing twice yields the same
/// string; feeding more data afterwards starts a new digest.
#[derive(Default)]
pub struct DigestSession {
    hasher: Sha1,
}

impl DigestSession {
    /// Creates a fresh digest session
    pub fn new() -> Self {
        Self { hasher: Sha1::new() }
    }

    /// Absorbs one payload chunk
    pub fn update(&mut self, chunk: &[u8]) -> Result<()> {
        self.hasher.update(chunk).map_primitive_err()?;
        Ok(())
    }

    /// Completes the digest, returning `0x` followed by 40 hex digits
    pub fn finalize(&mut self) -> Result<String> {
        let digest = self.hasher.finalize().map_primitive_err()?;
        Ok(format!("0x{}", digest.to_hex()))
    }
}

/// Streaming digest verification session
///
/// Created from an expected digest string, absorbs the payload, and reports
/// whether the computed digest matches. The comparison is constant-time.
pub struct DigestVerifySession {
    hasher: Sha1,
    expected: Digest<SHA1_OUTPUT_SIZE>,
}

impl DigestVerifySession {
    /// Creates a verification session from the expected digest
    ///
    /// Accepts 40 hex digits with or without a `0x` prefix, in either case.
    pub fn new(expected: &str) -> Result<Self> {
        let hex_str = expected
            .strip_prefix("0x")
            .or_else(|| expected.strip_prefix("0X"))
            .unwrap_or(expected);
        let expected = Digest::from_hex(hex_str).map_primitive_err()?;

        Ok(Self {
            hasher: Sha1::new(),
            expected,
        })
    }

    /// Absorbs one payload chunk
    pub fn update(&mut self, chunk: &[u8]) -> Result<()> {
        self.hasher.update(chunk).map_primitive_err()?;
        Ok(())
    }

    /// Completes the digest and compares it against the expected value
    pub fn finalize(&mut self) -> Result<bool> {
        let digest = self.hasher.finalize().map_primitive_err()?;
        Ok(digest.ct_eq(&self.expected))
    }
}
