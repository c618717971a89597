//! Output Feedback (OFB) mode
//!
//! The keystream is the IV enciphered repeatedly and does not depend on the
//! message, so encryption and decryption are the same operation.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::super::{BlockCipher, BlockCipherMode, CipherMode};
use super::owned_iv;
use crate::error::Result;
use bfcrypt_internal::constant_time::xor_in_place;

/// OFB mode driver
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ofb<B: BlockCipher + Zeroize> {
    cipher: B,
    iv: Vec<u8>,
}

impl<B: BlockCipher + Zeroize> Ofb<B> {
    /// Creates a new OFB driver
    ///
    /// The IV must be exactly one block long and must never repeat under
    /// the same key.
    pub fn new<I: AsRef<[u8]>>(cipher: B, iv: I) -> Result<Self> {
        let iv = owned_iv::<B>("OFB initialization vector", iv.as_ref())?;
        Ok(Self { cipher, iv })
    }

    /// The initialization vector
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    fn apply_keystream(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut register = Zeroizing::new(self.iv.clone());
        let mut output = input.to_vec();

        for chunk in output.chunks_mut(B::block_size()) {
            self.cipher.encrypt_block(&mut register[..])?;
            xor_in_place(chunk, &register);
        }
        Ok(output)
    }
}

impl<B: BlockCipher + Zeroize> CipherMode for Ofb<B> {
    const REQUIRES_IV: bool = true;
    const IS_STREAM: bool = true;

    fn name() -> &'static str {
        "OFB"
    }
}

impl<B: BlockCipher + Zeroize> BlockCipherMode<B> for Ofb<B> {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.apply_keystream(plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.apply_keystream(ciphertext)
    }
}
