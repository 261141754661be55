//! Fixed-size digest value type
//!
//! Provides the `Digest` type, representing the output of a cryptographic
//! hash function with a compile-time size guarantee.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;
use core::ops::Deref;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// A cryptographic digest of exactly `N` bytes
#[derive(Clone, Zeroize)]
pub struct Digest<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Digest<N> {
    /// Create a new digest from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != N {
            return Err(Error::Length {
                context: "Digest::from_slice",
                expected: N,
                actual: slice.len(),
            });
        }

        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// The digest length in bytes
    pub fn len(&self) -> usize {
        N
    }

    /// Whether the digest is zero-sized
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Convert to a lowercase hexadecimal string
    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }

    /// Create from a hexadecimal string
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)
            .map_err(|_| Error::param("hex_str", "invalid hexadecimal string"))?;
        Self::from_slice(&bytes)
    }

    /// Constant-time equality against another digest
    pub fn ct_eq(&self, other: &Self) -> bool {
        bool::from(self.data.ct_eq(&other.data))
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Digest<N> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> PartialEq for Digest<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<const N: usize> Eq for Digest<N> {}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>({})", N, self.to_hex())
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_rejects_wrong_length() {
        assert!(Digest::<20>::from_slice(&[0u8; 19]).is_err());
        assert!(Digest::<20>::from_slice(&[0u8; 20]).is_ok());
    }

    #[test]
    fn hex_round_trip() {
        let digest = Digest::new([0xabu8; 4]);
        assert_eq!(digest.to_hex(), "abababab");
        assert_eq!(Digest::<4>::from_hex("abababab").unwrap(), digest);
    }

    #[test]
    fn ct_eq_matches_eq() {
        let a = Digest::new([1u8, 2, 3, 4]);
        let b = Digest::new([1u8, 2, 3, 4]);
        let c = Digest::new([1u8, 2, 3, 5]);
        assert!(a.ct_eq(&b));
        assert!(!a.ct_eq(&c));
    }
}
