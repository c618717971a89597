//! Property-based tests for the Blowfish modes and padding schemes

use bfcrypt_algorithms::block::{BlockCipher, BlockCipherMode, Blowfish, Cbc};
use bfcrypt_algorithms::padding::Padding;
use bfcrypt_params::utils::symmetric::BLOWFISH_P_ARRAY_LEN;
use bfcrypt_symmetric::{BlowfishCipher, Mode};
use proptest::prelude::*;

fn key() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 4..=56)
}

fn mode() -> impl Strategy<Value = Mode> {
    prop_oneof![
        Just(Mode::Ecb),
        any::<[u8; 8]>().prop_map(Mode::cbc),
        any::<[u8; 8]>().prop_map(Mode::cfb),
        any::<[u8; 8]>().prop_map(Mode::ofb),
        any::<[u8; 8]>().prop_map(Mode::pcbc),
        any::<[u8; 8]>().prop_map(Mode::ctr),
    ]
}

/// The key bytes as the key schedule consumes them
///
/// Keys are cycled across the P-array, so two keys with the same stream
/// (`abcd` and `abcdabcd`) derive the same subkeys.
fn key_stream(key: &[u8]) -> Vec<u8> {
    key.iter().copied().cycle().take(BLOWFISH_P_ARRAY_LEN * 4).collect()
}

/// Generate data that's a multiple of 8 bytes (Blowfish block size)
fn block_aligned_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<[u8; 8]>(), 0..=32).prop_map(|blocks| blocks.concat())
}

/// Data whose last byte is non-zero, so zero padding is lossless
fn zero_safe_data() -> impl Strategy<Value = Vec<u8>> {
    (prop::collection::vec(any::<u8>(), 0..=255), 1u8..=255).prop_map(|(mut v, last)| {
        v.push(last);
        v
    })
}

proptest! {
    #[test]
    fn pkcs7_roundtrip_any_mode(
        key in key(),
        mode in mode(),
        data in prop::collection::vec(any::<u8>(), 0..=256)
    ) {
        let cipher = BlowfishCipher::new(&key, &mode, Padding::Pkcs7).unwrap();
        let ciphertext = cipher.encrypt(&data).unwrap();

        if mode.is_stream() {
            prop_assert_eq!(ciphertext.len(), data.len());
        } else {
            prop_assert_eq!(ciphertext.len() % 8, 0);
            prop_assert!(ciphertext.len() > data.len());
            prop_assert!(ciphertext.len() <= data.len() + 8);
        }

        prop_assert_eq!(cipher.decrypt(&ciphertext).unwrap(), data);
    }

    #[test]
    fn iso7816_roundtrip_any_mode(
        key in key(),
        mode in mode(),
        data in prop::collection::vec(any::<u8>(), 0..=256)
    ) {
        let cipher = BlowfishCipher::new(&key, &mode, Padding::Iso7816).unwrap();
        let ciphertext = cipher.encrypt(&data).unwrap();
        prop_assert_eq!(cipher.decrypt(&ciphertext).unwrap(), data);
    }

    #[test]
    fn zero_padding_roundtrip(key in key(), mode in mode(), data in zero_safe_data()) {
        let cipher = BlowfishCipher::new(&key, &mode, Padding::ZeroPadding).unwrap();
        let ciphertext = cipher.encrypt(&data).unwrap();
        prop_assert_eq!(cipher.decrypt(&ciphertext).unwrap(), data);
    }

    #[test]
    fn no_padding_roundtrip_aligned(key in key(), mode in mode(), data in block_aligned_data()) {
        let cipher = BlowfishCipher::new(&key, &mode, Padding::NoPadding).unwrap();
        let ciphertext = cipher.encrypt(&data).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len());
        prop_assert_eq!(cipher.decrypt(&ciphertext).unwrap(), data);
    }

    #[test]
    fn blowfish_block_roundtrip(key in key(), block in any::<[u8; 8]>()) {
        let cipher = Blowfish::new(&key).unwrap();
        let mut buf = block;
        cipher.encrypt_block(&mut buf).unwrap();
        cipher.decrypt_block(&mut buf).unwrap();
        prop_assert_eq!(buf, block);
    }

    #[test]
    fn cbc_driver_roundtrip(
        key in key(),
        iv in any::<[u8; 8]>(),
        data in block_aligned_data()
    ) {
        let cbc = Cbc::new(Blowfish::new(&key).unwrap(), iv).unwrap();
        let ciphertext = cbc.encrypt(&data).unwrap();
        prop_assert_eq!(cbc.decrypt(&ciphertext).unwrap(), data);
    }

    #[test]
    fn pkcs7_pad_length(len in 0usize..32) {
        let data = vec![0xa5u8; len];
        let padded = Padding::Pkcs7.pad(&data, 8).unwrap();
        let added = padded.len() - len;
        prop_assert!((1..=8).contains(&added));
        prop_assert_eq!(padded.len() % 8, 0);

        let mut unpadded = padded;
        Padding::Pkcs7.unpad(&mut unpadded, 8).unwrap();
        prop_assert_eq!(unpadded, data);
    }

    #[test]
    fn ecb_is_deterministic_and_key_dependent(
        key_a in key(),
        key_b in key(),
        block in any::<[u8; 8]>()
    ) {
        prop_assume!(key_stream(&key_a) != key_stream(&key_b));
        let a = BlowfishCipher::new(&key_a, &Mode::Ecb, Padding::NoPadding).unwrap();
        let b = BlowfishCipher::new(&key_b, &Mode::Ecb, Padding::NoPadding).unwrap();

        prop_assert_eq!(a.encrypt(&block).unwrap(), a.encrypt(&block).unwrap());
        prop_assert_ne!(a.encrypt(&block).unwrap(), b.encrypt(&block).unwrap());
    }
}

#[test]
fn cycled_keys_share_a_schedule() {
    let short = BlowfishCipher::new(b"abcd", &Mode::Ecb, Padding::NoPadding).unwrap();
    let long = BlowfishCipher::new(b"abcdabcd", &Mode::Ecb, Padding::NoPadding).unwrap();
    let block = [0x42u8; 8];

    assert_eq!(key_stream(b"abcd"), key_stream(b"abcdabcd"));
    assert_eq!(short.encrypt(&block).unwrap(), long.encrypt(&block).unwrap());

    assert_ne!(key_stream(b"abcd"), key_stream(b"abce"));
}
