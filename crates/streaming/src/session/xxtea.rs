//! XXTEA block cipher sessions

use zeroize::Zeroize;

use scytale_primitives::block::xxtea::XXTEA_BLOCK_SIZE;
use scytale_primitives::block::{strip_padding, BlockAccumulator, BlockCipher, Xxtea};

use crate::error::{validate_session_state, Result, StreamingResultExt};

/// Streaming XXTEA encryption session
///
/// Accumulates chunks into 4096-byte blocks and emits each block's
/// ciphertext as it completes. Finalization pads and encrypts the partial
/// remainder, if any.
pub struct XxteaEncryptSession {
    cipher: Xxtea,
    accumulator: BlockAccumulator<XXTEA_BLOCK_SIZE>,
    finalized: bool,
}

impl XxteaEncryptSession {
    /// Creates a session from key bytes
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            cipher: Xxtea::new(key).map_primitive_err()?,
            accumulator: BlockAccumulator::new(),
            finalized: false,
        })
    }

    /// Whether no partial, unflushed data remains buffered
    ///
    /// When this returns `false` at end of stream, [`Self::finalize`] will
    /// emit one more padded ciphertext block.
    pub fn is_empty(&self) -> bool {
        self.accumulator.is_empty()
    }

    /// Encrypts one chunk, returning ciphertext for every block that filled
    pub fn process(&mut self, chunk: &[u8]) -> Result<Vec<u8>> {
        validate_session_state(!self.finalized, "XXTEA encrypt", "session already finalized")?;

        let mut out = Vec::new();
        for mut block in self.accumulator.feed(chunk) {
            self.cipher.encrypt_block(&mut block).map_primitive_err()?;
            out.extend_from_slice(&block);
        }
        Ok(out)
    }

    /// Completes the stream, encrypting the padded remainder
    pub fn finalize(&mut self) -> Result<Vec<u8>> {
        validate_session_state(!self.finalized, "XXTEA encrypt", "session already finalized")?;
        self.finalized = true;

        match self.accumulator.finalize() {
            Some(mut block) => {
                self.cipher.encrypt_block(&mut block).map_primitive_err()?;
                Ok(block.to_vec())
            }
            None => Ok(Vec::new()),
        }
    }
}

/// Streaming XXTEA decryption session
///
/// Decrypts each completed ciphertext block but holds the most recent one
/// back, so the true final block can have its padding stripped at
/// finalization. Interior blocks are emitted untouched.
pub struct XxteaDecryptSession {
    cipher: Xxtea,
    accumulator: BlockAccumulator<XXTEA_BLOCK_SIZE>,
    pending: Option<Vec<u8>>,
    finalized: bool,
}

impl XxteaDecryptSession {
    /// Creates a session from key bytes
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            cipher: Xxtea::new(key).map_primitive_err()?,
            accumulator: BlockAccumulator::new(),
            pending: None,
            finalized: false,
        })
    }

    /// Decrypts one chunk, returning every block known not to be the last
    pub fn process(&mut self, chunk: &[u8]) -> Result<Vec<u8>> {
        validate_session_state(!self.finalized, "XXTEA decrypt", "session already finalized")?;

        let mut out = Vec::new();
        for mut block in self.accumulator.feed(chunk) {
            self.cipher.decrypt_block(&mut block).map_primitive_err()?;
            if let Some(mut previous) = self.pending.replace(block.to_vec()) {
                out.append(&mut previous);
            }
        }
        Ok(out)
    }

    /// Completes the stream, unpadding and emitting the held-back block
    ///
    /// Fails when the ciphertext did not arrive as a whole number of blocks.
    pub fn finalize(&mut self) -> Result<Vec<u8>> {
        validate_session_state(!self.finalized, "XXTEA decrypt", "session already finalized")?;
        validate_session_state(
            self.accumulator.is_empty(),
            "XXTEA decrypt",
            "ciphertext truncated mid-block",
        )?;
        self.finalized = true;

        match self.pending.take() {
            Some(mut block) => {
                let out = strip_padding(&block).to_vec();
                block.zeroize();
                Ok(out)
            }
            None => Ok(Vec::new()),
        }
    }
}

impl Drop for XxteaDecryptSession {
    fn drop(&mut self) {
        if let Some(block) = &mut self.pending {
            block.zeroize();
        }
    }
}
