//! Chunk-at-a-time transform sessions
//!
//! This crate wraps the scytale primitives in stateful sessions shaped for
//! stream transports: a session is created from key material carried by the
//! first message of a stream, absorbs payload chunks of arbitrary length in
//! order, and finalizes when the stream ends. Output for a given chunk
//! sequence is independent of how the bytes were split across chunks.
//!
//! Every session follows the same lifecycle discipline: chunks may not be
//! processed after finalization, and decrypt sessions report a malformed
//! stream (such as a partial trailing block) at finalize time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod session;

pub use error::{Error, Result};
pub use session::{
    BmpDecryptSession, BmpEncryptSession, DigestSession, DigestVerifySession, FourSquareSession,
    OfbDecryptSession, OfbEncryptSession, OtpSession, XxteaDecryptSession, XxteaEncryptSession,
};
