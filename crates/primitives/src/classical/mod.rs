//! Classical ciphers
//!
//! Historical pen-and-paper ciphers. These offer no real confidentiality
//! and exist for educational traffic only.

pub mod four_square;

pub use four_square::FourSquare;
