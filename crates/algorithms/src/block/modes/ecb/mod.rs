//! Electronic Codebook (ECB) mode
//!
//! Each block is enciphered independently. Equal plaintext blocks produce
//! equal ciphertext blocks, so ECB leaks structure and should only be used
//! for single-block payloads or interoperability.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::{BlockCipher, BlockCipherMode, CipherMode};
use crate::error::{validate, Result};

/// ECB mode driver
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ecb<B: BlockCipher + Zeroize> {
    cipher: B,
}

impl<B: BlockCipher + Zeroize> Ecb<B> {
    /// Creates a new ECB driver; ECB takes no IV
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// The wrapped block cipher
    pub fn cipher(&self) -> &B {
        &self.cipher
    }
}

impl<B: BlockCipher + Zeroize> CipherMode for Ecb<B> {
    const REQUIRES_IV: bool = false;
    const IS_STREAM: bool = false;

    fn name() -> &'static str {
        "ECB"
    }
}

impl<B: BlockCipher + Zeroize> BlockCipherMode<B> for Ecb<B> {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::block_aligned("ECB plaintext", plaintext.len(), block_size)?;

        let mut output = plaintext.to_vec();
        for block in output.chunks_exact_mut(block_size) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(output)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::block_aligned("ECB ciphertext", ciphertext.len(), block_size)?;

        let mut output = ciphertext.to_vec();
        for block in output.chunks_exact_mut(block_size) {
            self.cipher.decrypt_block(block)?;
        }
        Ok(output)
    }
}
