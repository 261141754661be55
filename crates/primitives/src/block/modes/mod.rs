//! Streaming modes of operation for block ciphers

pub mod ofb;

pub use ofb::Ofb;
