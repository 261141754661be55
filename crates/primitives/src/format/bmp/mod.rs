//! Header-preserving one-time-pad encryption for BMP images
//!
//! A Windows bitmap starts with a 54-byte header (14-byte file header plus
//! the 40-byte BITMAPINFOHEADER). Leaving it intact keeps the ciphertext
//! openable as an image while the pixel data is scrambled. The pixel bytes
//! are encrypted with a one-time pad; the emitted key stream carries 54
//! zero bytes in the header position so key and output stay offset-aligned.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use rand::{CryptoRng, RngCore};

use crate::error::{validate, Result};
use crate::otp;

/// Combined BMP file and info header size in bytes
pub const BMP_HEADER_SIZE: usize = 54;

/// Borrows the 54-byte header of a bitmap byte sequence
///
/// Fails when fewer than [`BMP_HEADER_SIZE`] bytes are present.
pub fn header(bmp: &[u8]) -> Result<&[u8]> {
    validate::min_length("BMP header", bmp.len(), BMP_HEADER_SIZE)?;
    Ok(&bmp[..BMP_HEADER_SIZE])
}

/// Borrows the pixel data behind the header of a bitmap byte sequence
///
/// Fails when fewer than [`BMP_HEADER_SIZE`] bytes are present; a
/// header-only sequence yields an empty body.
pub fn body(bmp: &[u8]) -> Result<&[u8]> {
    validate::min_length("BMP header", bmp.len(), BMP_HEADER_SIZE)?;
    Ok(&bmp[BMP_HEADER_SIZE..])
}

/// Whether the stream's header bytes have been seen yet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HeaderState {
    Pending,
    Consumed,
}

/// Streaming BMP encryptor
///
/// The first chunk must contain the complete 54-byte header; it is copied
/// through unencrypted. Everything after it is one-time-pad encrypted with
/// fresh random key material.
#[derive(Clone, Debug)]
pub struct BmpEncryptor {
    header: HeaderState,
}

impl BmpEncryptor {
    /// Creates an encryptor awaiting the header chunk
    pub fn new() -> Self {
        Self {
            header: HeaderState::Pending,
        }
    }

    /// Encrypts one chunk, returning `(output, key)` of equal length
    ///
    /// On the first chunk the leading 54 bytes pass through verbatim and the
    /// key is zero-filled over that range. The key bytes for each chunk must
    /// be retained in order to decrypt the stream.
    pub fn encrypt<R: CryptoRng + RngCore>(
        &mut self,
        chunk: &[u8],
        rng: &mut R,
    ) -> Result<(Vec<u8>, Vec<u8>)> {
        match self.header {
            HeaderState::Pending => {
                let head = header(chunk)?;
                self.header = HeaderState::Consumed;

                let (body_out, body_key) = otp::generate(body(chunk)?, rng);

                let mut out = Vec::with_capacity(chunk.len());
                out.extend_from_slice(head);
                out.extend_from_slice(&body_out);

                let mut key = vec![0u8; BMP_HEADER_SIZE];
                key.extend_from_slice(&body_key);
                Ok((out, key))
            }
            HeaderState::Consumed => Ok(otp::generate(chunk, rng)),
        }
    }
}

impl Default for BmpEncryptor {
    fn default() -> Self {
        Self::new()
    }
}

/// Streaming BMP decryptor, the inverse of [`BmpEncryptor`]
///
/// Each chunk is XORed against the matching slice of the recorded key
/// stream; on the first chunk the 54 header bytes of both are skipped.
#[derive(Clone, Debug)]
pub struct BmpDecryptor {
    header: HeaderState,
}

impl BmpDecryptor {
    /// Creates a decryptor awaiting the header chunk
    pub fn new() -> Self {
        Self {
            header: HeaderState::Pending,
        }
    }

    /// Decrypts one chunk with its matching key slice
    ///
    /// The key must be at least as long as the chunk, with the same
    /// alignment the encryptor emitted.
    pub fn decrypt(&mut self, chunk: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        match self.header {
            HeaderState::Pending => {
                let head = header(chunk)?;
                validate::min_length("BMP key chunk", key.len(), chunk.len())?;
                self.header = HeaderState::Consumed;

                let mut out = Vec::with_capacity(chunk.len());
                out.extend_from_slice(head);
                out.extend_from_slice(&otp::xor(body(chunk)?, &key[BMP_HEADER_SIZE..])?);
                Ok(out)
            }
            HeaderState::Consumed => otp::xor(chunk, key),
        }
    }
}

impl Default for BmpDecryptor {
    fn default() -> Self {
        Self::new()
    }
}
