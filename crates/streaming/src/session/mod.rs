//! Transform sessions, one module per algorithm family
//!
//! A session binds key material received at stream start to per-chunk
//! processing state. Encrypt and decrypt directions are distinct types
//! where their stream behavior differs: decrypt sessions hold back the most
//! recent block so padding can be stripped from the true final block once
//! the stream ends.

pub mod bmp;
pub mod digest;
pub mod four_square;
pub mod ofb;
pub mod otp;
pub mod xxtea;

pub use bmp::{BmpDecryptSession, BmpEncryptSession};
pub use digest::{DigestSession, DigestVerifySession};
pub use four_square::FourSquareSession;
pub use ofb::{OfbDecryptSession, OfbEncryptSession};
pub use otp::{OtpSession, DEFAULT_OTP_LANES};
pub use xxtea::{XxteaDecryptSession, XxteaEncryptSession};
