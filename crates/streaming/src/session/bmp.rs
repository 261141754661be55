//! Header-preserving BMP encryption sessions

use rand::rngs::OsRng;

use scytale_primitives::format::{BmpDecryptor, BmpEncryptor};

use crate::error::{Result, StreamingResultExt};

/// Streaming BMP encryption session
///
/// The first chunk must carry the complete 54-byte bitmap header, which
/// passes through unencrypted; pixel data is one-time-pad encrypted with
/// key material from the operating system CSPRNG. The returned key chunks
/// must be retained in order for decryption.
#[derive(Default)]
pub struct BmpEncryptSession {
    encryptor: BmpEncryptor,
}

impl BmpEncryptSession {
    /// Creates a session awaiting the header chunk
    pub fn new() -> Self {
        Self {
            encryptor: BmpEncryptor::new(),
        }
    }

    /// Encrypts one chunk, returning `(output, key)` of equal length
    pub fn process(&mut self, chunk: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
        self.encryptor.encrypt(chunk, &mut OsRng).map_primitive_err()
    }
}

/// Streaming BMP decryption session, the inverse of [`BmpEncryptSession`]
#[derive(Default)]
pub struct BmpDecryptSession {
    decryptor: BmpDecryptor,
}

impl BmpDecryptSession {
    /// Creates a session awaiting the header chunk
    pub fn new() -> Self {
        Self {
            decryptor: BmpDecryptor::new(),
        }
    }

    /// Decrypts one chunk against its recorded key slice
    pub fn process(&mut self, chunk: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        self.decryptor.decrypt(chunk, key).map_primitive_err()
    }
}
