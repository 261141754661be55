//! Format-aware encryption wrappers
//!
//! Wrappers that keep a file format's structural header readable while
//! encrypting the payload behind it.

pub mod bmp;

pub use bmp::{BmpDecryptor, BmpEncryptor, BMP_HEADER_SIZE};
