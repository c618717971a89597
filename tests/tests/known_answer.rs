//! Known-answer tests across the public layers

use bfcrypt_algorithms::block::{BlockCipher, BlockCipherMode, Blowfish, Ecb};
use bfcrypt_params::utils::symmetric::BLOWFISH_MIN_KEY_SIZE;
use bfcrypt_symmetric::{BlowfishCipher, Mode, Padding};
use bfcrypt_tests::unhex;
use bfcrypt_tests::vectors::{chaining, set_key, ECB};

#[test]
fn ecb_corpus_block_level() {
    for (key, pt, ct) in ECB {
        let cipher = Blowfish::new(&unhex(key)).unwrap();
        let mut block = unhex(pt);
        cipher.encrypt_block(&mut block).unwrap();
        assert_eq!(hex::encode(&block), *ct, "key {}", key);
        cipher.decrypt_block(&mut block).unwrap();
        assert_eq!(hex::encode(&block), *pt, "key {}", key);
    }
}

#[test]
fn ecb_corpus_through_facade() {
    for (key, pt, ct) in ECB {
        let cipher = BlowfishCipher::new(&unhex(key), &Mode::Ecb, Padding::NoPadding).unwrap();
        let ciphertext = cipher.encrypt(&unhex(pt)).unwrap();
        assert_eq!(hex::encode(&ciphertext), *ct);
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), unhex(pt));
    }
}

#[test]
fn ecb_driver_concatenates_blocks() {
    // all vectors sharing the first key, processed as one message
    let key = ECB[4].0;
    let ecb = Ecb::new(Blowfish::new(&unhex(key)).unwrap());

    let (pts, cts): (Vec<_>, Vec<_>) = ECB
        .iter()
        .filter(|(k, _, _)| *k == key)
        .map(|(_, pt, ct)| (unhex(pt), unhex(ct)))
        .unzip();
    assert!(pts.len() > 1);

    assert_eq!(ecb.encrypt(&pts.concat()).unwrap(), cts.concat());
}

#[test]
fn variable_key_lengths() {
    let full = unhex(set_key::KEY);
    for (i, ct) in set_key::CIPHERTEXTS.iter().enumerate() {
        let key = &full[..BLOWFISH_MIN_KEY_SIZE + i];
        let cipher = BlowfishCipher::new(key, &Mode::Ecb, Padding::NoPadding).unwrap();
        let ciphertext = cipher.encrypt(&unhex(set_key::PLAINTEXT)).unwrap();
        assert_eq!(hex::encode(ciphertext), *ct, "{}-byte key", key.len());
    }
}

#[test]
fn chaining_modes() {
    let key = unhex(chaining::KEY);
    let iv = unhex(chaining::IV);
    let message = unhex(chaining::MESSAGE);

    let cases = [
        (Mode::cbc(&iv), Padding::ZeroPadding, chaining::CBC_ZERO),
        (Mode::cbc(&iv), Padding::Pkcs7, chaining::CBC_PKCS7),
        (Mode::cbc(&iv), Padding::Iso7816, chaining::CBC_ISO7816),
        (Mode::pcbc(&iv), Padding::ZeroPadding, chaining::PCBC_ZERO),
        (Mode::cfb(&iv), Padding::NoPadding, chaining::CFB),
        (Mode::ofb(&iv), Padding::NoPadding, chaining::OFB),
        (Mode::ctr(&iv), Padding::NoPadding, chaining::CTR),
    ];

    for (mode, padding, expected) in cases {
        let cipher = BlowfishCipher::new(&key, &mode, padding).unwrap();
        let ciphertext = cipher.encrypt(&message).unwrap();
        assert_eq!(hex::encode(&ciphertext), expected, "{} / {}", mode.name(), padding.name());

        let decrypted = cipher.decrypt(&ciphertext).unwrap();
        if padding == Padding::ZeroPadding {
            // the message's own trailing NUL goes with the padding
            assert_eq!(decrypted, &message[..message.len() - 1]);
        } else {
            assert_eq!(decrypted, message);
        }
    }
}

#[test]
fn cfb_issue_415_regression() {
    let cipher =
        BlowfishCipher::new(b"passwordpassword", &Mode::cfb(b"12345678"), Padding::Pkcs7).unwrap();
    let ciphertext = cipher.encrypt(b"secret12").unwrap();
    assert_eq!(ciphertext, unhex("a90560142325e061"));
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), b"secret12");
}
