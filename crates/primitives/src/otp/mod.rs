//! One-time pad primitive
//!
//! Byte-wise XOR of data against a key of at least equal length. Encryption
//! and decryption are the same operation; `xor(xor(d, k), k) == d` for any
//! same-length key. Security rests entirely on the key being random, secret,
//! and never reused, which is the caller's concern.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use rand::{CryptoRng, RngCore};

use crate::error::{validate, Result};

/// XORs data with a key, returning the transformed bytes
///
/// Fails when the key is shorter than the data. Extra key bytes are ignored.
pub fn xor(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    validate::min_length("OTP key", key.len(), data.len())?;

    Ok(data.iter().zip(key).map(|(d, k)| d ^ k).collect())
}

/// XORs data with a key in place
pub fn xor_in_place(data: &mut [u8], key: &[u8]) -> Result<()> {
    validate::min_length("OTP key", key.len(), data.len())?;

    for (d, k) in data.iter_mut().zip(key) {
        *d ^= k;
    }
    Ok(())
}

/// Encrypts data under a freshly generated random key
///
/// Returns `(ciphertext, key)`, both exactly the length of the data.
pub fn generate<R: CryptoRng + RngCore>(data: &[u8], rng: &mut R) -> (Vec<u8>, Vec<u8>) {
    let mut key = vec![0u8; data.len()];
    rng.fill_bytes(&mut key);

    let ciphertext = data.iter().zip(&key).map(|(d, k)| d ^ k).collect();
    (ciphertext, key)
}

/// XORs data with a key across `lanes` worker threads
///
/// Data and key are split into `lanes` contiguous slices of `len / lanes`
/// bytes, the last lane absorbing the remainder; each lane is XORed on its
/// own scoped thread and the result reassembled in order. The split is
/// deterministic, and the output is bit-identical to [`xor`] for any lane
/// count.
#[cfg(feature = "std")]
pub fn xor_parallel(data: &[u8], key: &[u8], lanes: usize) -> Result<Vec<u8>> {
    validate::min_length("OTP key", key.len(), data.len())?;
    validate::parameter(lanes >= 1, "lanes", "lane count must be at least 1")?;

    if lanes == 1 || data.len() < lanes {
        return xor(data, key);
    }

    let mut out = vec![0u8; data.len()];
    let lane_len = data.len() / lanes;

    std::thread::scope(|scope| {
        let mut rest = out.as_mut_slice();
        for lane in 0..lanes {
            let start = lane * lane_len;
            let len = if lane == lanes - 1 {
                data.len() - start
            } else {
                lane_len
            };
            let (head, tail) = rest.split_at_mut(len);
            rest = tail;

            let data = &data[start..start + len];
            let key = &key[start..start + len];
            scope.spawn(move || {
                for (o, (d, k)) in head.iter_mut().zip(data.iter().zip(key)) {
                    *o = d ^ k;
                }
            });
        }
    });

    Ok(out)
}
