//! Behavioral tests for the transform sessions

use scytale_streaming::{
    BmpDecryptSession, BmpEncryptSession, DigestSession, DigestVerifySession, FourSquareSession,
    OfbDecryptSession, OfbEncryptSession, OtpSession, XxteaDecryptSession, XxteaEncryptSession,
};

const KEY: &[u8] = b"0123456789abcdef";
const IV: &[u8] = &[0x5au8; 4096];

fn sample_data(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[test]
fn digest_session_formats_with_prefix() {
    let mut session = DigestSession::new();
    session.update(b"abc").unwrap();
    assert_eq!(
        session.finalize().unwrap(),
        "0xa9993e364706816aba3e25717850c26c9cd0d89d"
    );
}

#[test]
fn digest_session_finalize_twice_is_stable() {
    let mut session = DigestSession::new();
    session.update(b"hello").unwrap();
    let first = session.finalize().unwrap();
    assert_eq!(session.finalize().unwrap(), first);
}

#[test]
fn digest_verify_accepts_matching_payload() {
    for expected in [
        "a9993e364706816aba3e25717850c26c9cd0d89d",
        "0xa9993e364706816aba3e25717850c26c9cd0d89d",
        "0XA9993E364706816ABA3E25717850C26C9CD0D89D",
    ] {
        let mut session = DigestVerifySession::new(expected).unwrap();
        session.update(b"a").unwrap();
        session.update(b"bc").unwrap();
        assert!(session.finalize().unwrap(), "expected form {}", expected);
    }
}

#[test]
fn digest_verify_rejects_mismatch_and_bad_input() {
    let mut session =
        DigestVerifySession::new("a9993e364706816aba3e25717850c26c9cd0d89d").unwrap();
    session.update(b"abd").unwrap();
    assert!(!session.finalize().unwrap());

    assert!(DigestVerifySession::new("not hex").is_err());
    assert!(DigestVerifySession::new("abcd").is_err());
}

#[test]
fn xxtea_session_round_trip_partial_block() {
    let data = sample_data(1000);

    let mut enc = XxteaEncryptSession::new(KEY).unwrap();
    let mut ciphertext = enc.process(&data).unwrap();
    ciphertext.extend(enc.finalize().unwrap());
    assert_eq!(ciphertext.len(), 4096);

    let mut dec = XxteaDecryptSession::new(KEY).unwrap();
    let mut recovered = dec.process(&ciphertext).unwrap();
    recovered.extend(dec.finalize().unwrap());
    assert_eq!(recovered, data);
}

#[test]
fn xxtea_session_round_trip_multiple_blocks() {
    let data = sample_data(10_000);

    let mut enc = XxteaEncryptSession::new(KEY).unwrap();
    let mut ciphertext = Vec::new();
    for chunk in data.chunks(1500) {
        ciphertext.extend(enc.process(chunk).unwrap());
    }
    ciphertext.extend(enc.finalize().unwrap());
    assert_eq!(ciphertext.len(), 3 * 4096);

    let mut dec = XxteaDecryptSession::new(KEY).unwrap();
    let mut recovered = Vec::new();
    for chunk in ciphertext.chunks(999) {
        recovered.extend(dec.process(chunk).unwrap());
    }
    recovered.extend(dec.finalize().unwrap());
    assert_eq!(recovered, data);
}

#[test]
fn xxtea_session_exact_multiple_has_no_padding_block() {
    let data = sample_data(4096);

    let mut enc = XxteaEncryptSession::new(KEY).unwrap();
    let mut ciphertext = enc.process(&data).unwrap();
    ciphertext.extend(enc.finalize().unwrap());
    assert_eq!(ciphertext.len(), 4096);

    let mut dec = XxteaDecryptSession::new(KEY).unwrap();
    let mut recovered = dec.process(&ciphertext).unwrap();
    recovered.extend(dec.finalize().unwrap());
    assert_eq!(recovered, data);
}

#[test]
fn xxtea_decrypt_rejects_truncated_stream() {
    let mut dec = XxteaDecryptSession::new(KEY).unwrap();
    dec.process(&[0u8; 5000]).unwrap();
    assert!(dec.finalize().is_err());
}

#[test]
fn xxtea_session_rejects_use_after_finalize() {
    let mut enc = XxteaEncryptSession::new(KEY).unwrap();
    enc.finalize().unwrap();
    assert!(enc.process(b"late").is_err());
    assert!(enc.finalize().is_err());

    let mut dec = XxteaDecryptSession::new(KEY).unwrap();
    dec.finalize().unwrap();
    assert!(dec.process(b"late").is_err());
}

#[test]
fn encrypt_sessions_expose_buffered_remainder() {
    let mut enc = XxteaEncryptSession::new(KEY).unwrap();
    assert!(enc.is_empty());
    enc.process(&[1, 2, 3]).unwrap();
    assert!(!enc.is_empty());
    // Topping up to a whole block flushes the buffer.
    enc.process(&sample_data(4093)).unwrap();
    assert!(enc.is_empty());
    enc.process(&[4]).unwrap();
    assert!(!enc.is_empty());
    enc.finalize().unwrap();
    assert!(enc.is_empty());

    let mut ofb = OfbEncryptSession::new(KEY, IV).unwrap();
    assert!(ofb.is_empty());
    ofb.process(&[9]).unwrap();
    assert!(!ofb.is_empty());
    ofb.finalize().unwrap();
    assert!(ofb.is_empty());
}

#[test]
fn empty_stream_encrypts_to_nothing() {
    let mut enc = XxteaEncryptSession::new(KEY).unwrap();
    assert!(enc.finalize().unwrap().is_empty());

    let mut dec = XxteaDecryptSession::new(KEY).unwrap();
    assert!(dec.finalize().unwrap().is_empty());
}

#[test]
fn ofb_session_round_trip() {
    let data = sample_data(9000);

    let mut enc = OfbEncryptSession::new(KEY, IV).unwrap();
    let mut ciphertext = Vec::new();
    for chunk in data.chunks(700) {
        ciphertext.extend(enc.process(chunk).unwrap());
    }
    ciphertext.extend(enc.finalize().unwrap());

    let mut dec = OfbDecryptSession::new(KEY, IV).unwrap();
    let mut recovered = dec.process(&ciphertext).unwrap();
    recovered.extend(dec.finalize().unwrap());
    assert_eq!(recovered, data);
}

#[test]
fn ofb_hides_repeating_plaintext_blocks() {
    let data = vec![7u8; 2 * 4096];

    let mut enc = OfbEncryptSession::new(KEY, IV).unwrap();
    let mut ciphertext = enc.process(&data).unwrap();
    ciphertext.extend(enc.finalize().unwrap());

    assert_ne!(&ciphertext[..4096], &ciphertext[4096..]);
}

#[test]
fn ofb_decrypt_needs_matching_iv() {
    let data = sample_data(100);

    let mut enc = OfbEncryptSession::new(KEY, IV).unwrap();
    let mut ciphertext = enc.process(&data).unwrap();
    ciphertext.extend(enc.finalize().unwrap());

    let mut dec = OfbDecryptSession::new(KEY, &[0u8; 4096]).unwrap();
    let mut recovered = dec.process(&ciphertext).unwrap();
    recovered.extend(dec.finalize().unwrap());
    assert_ne!(recovered, data);
}

#[test]
fn otp_session_round_trip() {
    let session = OtpSession::new();
    let data = sample_data(10_000);

    let (ciphertext, key) = session.encrypt(&data).unwrap();
    assert_eq!(ciphertext.len(), data.len());
    assert_ne!(ciphertext, data);
    assert_eq!(session.apply(&ciphertext, &key).unwrap(), data);
}

#[test]
fn otp_lane_count_does_not_change_output() {
    let data = sample_data(5000);
    let key = sample_data(5000);

    let reference = OtpSession::with_lanes(1).apply(&data, &key).unwrap();
    for lanes in [2, 3, 4, 8] {
        assert_eq!(
            OtpSession::with_lanes(lanes).apply(&data, &key).unwrap(),
            reference
        );
    }
}

#[test]
fn four_square_session_round_trip() {
    let session =
        FourSquareSession::new("zgptfoihmuwdrcnykeqaxvsbl", "mfnbdcrhsaxyogvituewlqzkp").unwrap();

    let ciphertext = session.encrypt("attack at dawn").unwrap();
    assert_eq!(ciphertext, "tiybfhtizbsy");
    assert_eq!(session.decrypt(&ciphertext).unwrap(), "attackatdawn");
}

#[test]
fn four_square_session_rejects_bad_keys() {
    assert!(FourSquareSession::new("too short", "abcdefghiklmnopqrstuvwxyz").is_err());
}

#[test]
fn bmp_session_round_trip_preserves_header() {
    let mut bmp = vec![0u8; 54 + 600];
    bmp[0] = b'B';
    bmp[1] = b'M';
    for (i, b) in bmp[54..].iter_mut().enumerate() {
        *b = (i % 253) as u8;
    }

    let mut enc = BmpEncryptSession::new();
    let mut dec = BmpDecryptSession::new();
    let mut recovered = Vec::new();
    let mut header_out = Vec::new();
    for (i, chunk) in bmp.chunks(200).enumerate() {
        let (out, key) = enc.process(chunk).unwrap();
        if i == 0 {
            header_out = out[..54].to_vec();
        }
        recovered.extend(dec.process(&out, &key).unwrap());
    }
    assert_eq!(header_out, &bmp[..54]);
    assert_eq!(recovered, bmp);
}

#[test]
fn bmp_session_rejects_short_header_chunk() {
    let mut enc = BmpEncryptSession::new();
    assert!(enc.process(&[0u8; 53]).is_err());
}
