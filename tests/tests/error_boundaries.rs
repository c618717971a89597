//! Error reporting at the edges of the accepted inputs

use bfcrypt_api::Error;
use bfcrypt_params::utils::symmetric::{BLOWFISH_MAX_KEY_SIZE, BLOWFISH_MIN_KEY_SIZE};
use bfcrypt_symmetric::{BlowfishCipher, Mode, Padding};

const IV: [u8; 8] = [0x24; 8];

#[test]
fn key_size_limits() {
    for len in [0, BLOWFISH_MIN_KEY_SIZE - 1, BLOWFISH_MAX_KEY_SIZE + 1] {
        let err = BlowfishCipher::new(&vec![1u8; len], &Mode::Ecb, Padding::NoPadding).unwrap_err();
        assert_eq!(
            err,
            Error::KeySize {
                context: "Blowfish key",
                min: 4,
                max: 56,
                actual: len,
            }
        );
        assert!(err.to_string().contains("invalid key size"));
    }

    for len in [BLOWFISH_MIN_KEY_SIZE, 16, BLOWFISH_MAX_KEY_SIZE] {
        assert!(BlowfishCipher::new(&vec![1u8; len], &Mode::Ecb, Padding::NoPadding).is_ok());
    }
}

#[test]
fn iv_size_checked_for_every_chaining_mode() {
    let modes: [fn(Vec<u8>) -> Mode; 5] = [Mode::cbc, Mode::cfb, Mode::ofb, Mode::pcbc, Mode::ctr];
    for make in modes {
        for len in [0usize, 7, 9, 16] {
            let mode = make(vec![0u8; len]);
            let err = BlowfishCipher::new(b"a valid key", &mode, Padding::Pkcs7).unwrap_err();
            assert!(
                matches!(err, Error::InvalidIvSize { expected: 8, actual, .. } if actual == len),
                "{} accepted a {}-byte IV",
                mode.name(),
                len
            );
        }
    }
}

#[test]
fn unaligned_input_without_padding() {
    for mode in [Mode::Ecb, Mode::cbc(IV), Mode::pcbc(IV)] {
        let cipher = BlowfishCipher::new(b"a valid key", &mode, Padding::NoPadding).unwrap();
        assert!(matches!(
            cipher.encrypt(b"12345"),
            Err(Error::DataLength { block_size: 8, actual: 5, .. })
        ));
        assert!(matches!(
            cipher.decrypt(&[0u8; 15]),
            Err(Error::DataLength { block_size: 8, actual: 15, .. })
        ));
    }

    // stream modes take any length
    for mode in [Mode::cfb(IV), Mode::ofb(IV), Mode::ctr(IV)] {
        let cipher = BlowfishCipher::new(b"a valid key", &mode, Padding::NoPadding).unwrap();
        assert_eq!(cipher.encrypt(b"12345").unwrap().len(), 5);
    }
}

#[test]
fn padded_ciphertext_must_be_aligned() {
    let cipher = BlowfishCipher::new(b"a valid key", &Mode::cbc(IV), Padding::Pkcs7).unwrap();
    let mut ciphertext = cipher.encrypt(b"truncate me").unwrap();
    ciphertext.pop();
    assert!(matches!(cipher.decrypt(&ciphertext), Err(Error::DataLength { .. })));
}

#[test]
fn corrupted_padding() {
    for padding in [Padding::Pkcs7, Padding::Iso7816] {
        let cipher = BlowfishCipher::new(b"a valid key", &Mode::Ecb, padding).unwrap();
        let raw = BlowfishCipher::new(b"a valid key", &Mode::Ecb, Padding::NoPadding).unwrap();

        // a final block of 0x11 bytes is neither valid PKCS#7 nor ISO 7816-4
        let ciphertext = raw.encrypt(&[0x11u8; 16]).unwrap();
        let err = cipher.decrypt(&ciphertext).unwrap_err();
        assert!(matches!(err, Error::Padding { .. }), "{}", padding.name());
        assert!(err.to_string().contains("invalid padding"));
    }
}

#[test]
fn errors_carry_context() {
    let err = BlowfishCipher::new(b"key", &Mode::Ecb, Padding::NoPadding).unwrap_err();
    assert_eq!(err.context(), "Blowfish key");

    let err = BlowfishCipher::new(b"a valid key", &Mode::cfb([0u8; 4]), Padding::NoPadding)
        .unwrap_err();
    assert_eq!(err.context(), "CFB initialization vector");
}
