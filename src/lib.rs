//! # scytale
//!
//! A streaming cryptographic-transform core: stream-oriented cipher and hash
//! primitives plus per-stream session objects for chunked request/response
//! transports.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! scytale = "0.1"
//! ```
//!
//! ## Features
//!
//! - `streaming` (default): per-stream session objects for the transform
//!   service (requires `std`)
//! - `std` (default): standard library support
//! - `alloc`: allocator support without `std`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `scytale-api`: Error taxonomy shared across the workspace
//! - `scytale-primitives`: Transform primitives (XXTEA, OFB, OTP, SHA-1,
//!   Four-Square, bitmap wrapper)
//! - `scytale-streaming`: Per-stream sessions mapping transport chunk
//!   streams onto the primitives

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use scytale_api as api;
pub use scytale_primitives as primitives;

// Feature-gated re-exports
#[cfg(feature = "streaming")]
pub use scytale_streaming as streaming;

// Re-export commonly paired dependencies
pub use zeroize;

#[cfg(feature = "streaming")]
pub use rand;

/// Common imports for scytale users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    #[cfg(any(feature = "std", feature = "alloc"))]
    pub use crate::primitives::{
        block::{BlockCipher, CipherAlgorithm},
        hash::{HashAlgorithm, HashFunction},
    };

    // Re-export the primitive types
    #[cfg(any(feature = "std", feature = "alloc"))]
    pub use crate::primitives::{
        block::{BlockAccumulator, Ofb, Xxtea},
        classical::FourSquare,
        hash::Sha1,
        types::Digest,
    };

    // Session objects for the transform service
    #[cfg(feature = "streaming")]
    pub use crate::streaming::session::{
        BmpDecryptSession, BmpEncryptSession, DigestSession, DigestVerifySession,
        FourSquareSession, OfbDecryptSession, OfbEncryptSession, OtpSession,
        XxteaDecryptSession, XxteaEncryptSession,
    };
}
