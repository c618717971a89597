//! Cipher Block Chaining (CBC) mode
//!
//! Each plaintext block is XORed with the previous ciphertext block (the IV
//! for the first block) before encryption, as in NIST SP 800-38A.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::{BlockCipher, BlockCipherMode, CipherMode};
use super::owned_iv;
use crate::error::{validate, Result};
use bfcrypt_internal::constant_time::xor_in_place;

/// CBC mode driver
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher + Zeroize> {
    cipher: B,
    iv: Vec<u8>,
}

impl<B: BlockCipher + Zeroize> Cbc<B> {
    /// Creates a new CBC driver
    ///
    /// The IV must be exactly one block long.
    pub fn new<I: AsRef<[u8]>>(cipher: B, iv: I) -> Result<Self> {
        let iv = owned_iv::<B>("CBC initialization vector", iv.as_ref())?;
        Ok(Self { cipher, iv })
    }

    /// The initialization vector
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }
}

impl<B: BlockCipher + Zeroize> CipherMode for Cbc<B> {
    const REQUIRES_IV: bool = true;
    const IS_STREAM: bool = false;

    fn name() -> &'static str {
        "CBC"
    }
}

impl<B: BlockCipher + Zeroize> BlockCipherMode<B> for Cbc<B> {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::block_aligned("CBC plaintext", plaintext.len(), block_size)?;

        let mut output = plaintext.to_vec();
        let mut prev: &[u8] = &self.iv;
        for block in output.chunks_exact_mut(block_size) {
            xor_in_place(block, prev);
            self.cipher.encrypt_block(block)?;
            prev = block;
        }
        Ok(output)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::block_aligned("CBC ciphertext", ciphertext.len(), block_size)?;

        let mut output = ciphertext.to_vec();
        for (i, block) in output.chunks_exact_mut(block_size).enumerate() {
            self.cipher.decrypt_block(block)?;
            let prev = match i {
                0 => &self.iv[..],
                _ => &ciphertext[(i - 1) * block_size..i * block_size],
            };
            xor_in_place(block, prev);
        }
        Ok(output)
    }
}
