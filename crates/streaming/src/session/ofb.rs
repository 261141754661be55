//! XXTEA-OFB stream cipher sessions

use zeroize::Zeroize;

use scytale_primitives::block::xxtea::XXTEA_BLOCK_SIZE;
use scytale_primitives::block::{strip_padding, BlockAccumulator, Ofb, Xxtea};

use crate::error::{validate_session_state, Result, StreamingResultExt};

/// Streaming XXTEA-OFB encryption session
///
/// Like the raw XXTEA session but chained through OFB mode: a keystream
/// derived from the key and IV is XORed into each block, so identical
/// plaintext blocks encrypt differently. The IV travels with the stream
/// setup, outside this session's concern.
pub struct OfbEncryptSession {
    mode: Ofb<Xxtea>,
    accumulator: BlockAccumulator<XXTEA_BLOCK_SIZE>,
    finalized: bool,
}

impl OfbEncryptSession {
    /// Creates a session from key and IV bytes
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self> {
        let cipher = Xxtea::new(key).map_primitive_err()?;
        Ok(Self {
            mode: Ofb::new(cipher, iv).map_primitive_err()?,
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
        validate_session_state(!self.finalized, "OFB encrypt", "session already finalized")?;

        let mut out = Vec::new();
        for mut block in self.accumulator.feed(chunk) {
            self.mode.process_block(&mut block).map_primitive_err()?;
            out.extend_from_slice(&block);
        }
        Ok(out)
    }

    /// Completes the stream, encrypting the padded remainder
    pub fn finalize(&mut self) -> Result<Vec<u8>> {
        validate_session_state(!self.finalized, "OFB encrypt", "session already finalized")?;
        self.finalized = true;

        match self.accumulator.finalize() {
            Some(mut block) => {
                self.mode.process_block(&mut block).map_primitive_err()?;
                Ok(block.to_vec())
            }
            None => Ok(Vec::new()),
        }
    }
}

/// Streaming XXTEA-OFB decryption session
///
/// OFB decryption applies the same keystream as encryption. The most recent
/// block is held back so padding is stripped from the true final block only.
pub struct OfbDecryptSession {
    mode: Ofb<Xxtea>,
    accumulator: BlockAccumulator<XXTEA_BLOCK_SIZE>,
    pending: Option<Vec<u8>>,
    finalized: bool,
}

impl OfbDecryptSession {
    /// Creates a session from key and IV bytes
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self> {
        let cipher = Xxtea::new(key).map_primitive_err()?;
        Ok(Self {
            mode: Ofb::new(cipher, iv).map_primitive_err()?,
            accumulator: BlockAccumulator::new(),
            pending: None,
            finalized: false,
        })
    }

    /// Decrypts one chunk, returning every block known not to be the last
    pub fn process(&mut self, chunk: &[u8]) -> Result<Vec<u8>> {
        validate_session_state(!self.finalized, "OFB decrypt", "session already finalized")?;

        let mut out = Vec::new();
        for mut block in self.accumulator.feed(chunk) {
            self.mode.process_block(&mut block).map_primitive_err()?;
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
        validate_session_state(!self.finalized, "OFB decrypt", "session already finalized")?;
        validate_session_state(
            self.accumulator.is_empty(),
            "OFB decrypt",
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

impl Drop for OfbDecryptSession {
    fn drop(&mut self) {
        if let Some(block) = &mut self.pending {
            block.zeroize();
        }
    }
}
