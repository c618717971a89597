//! Cipher Feedback (CFB) mode with full-block feedback
//!
//! The shift register starts as the IV and is replaced by each ciphertext
//! block. A short final block uses only the leading keystream bytes, so the
//! ciphertext is exactly as long as the plaintext and no padding is needed.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::super::{BlockCipher, BlockCipherMode, CipherMode};
use super::owned_iv;
use crate::error::Result;

/// CFB mode driver
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cfb<B: BlockCipher + Zeroize> {
    cipher: B,
    iv: Vec<u8>,
}

impl<B: BlockCipher + Zeroize> Cfb<B> {
    /// Creates a new CFB driver
    ///
    /// The IV must be exactly one block long.
    pub fn new<I: AsRef<[u8]>>(cipher: B, iv: I) -> Result<Self> {
        let iv = owned_iv::<B>("CFB initialization vector", iv.as_ref())?;
        Ok(Self { cipher, iv })
    }

    /// The initialization vector
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }
}

impl<B: BlockCipher + Zeroize> CipherMode for Cfb<B> {
    const REQUIRES_IV: bool = true;
    const IS_STREAM: bool = true;

    fn name() -> &'static str {
        "CFB"
    }
}

impl<B: BlockCipher + Zeroize> BlockCipherMode<B> for Cfb<B> {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut register = Zeroizing::new(self.iv.clone());
        let mut output = plaintext.to_vec();

        for chunk in output.chunks_mut(B::block_size()) {
            self.cipher.encrypt_block(&mut register[..])?;
            for (byte, feedback) in chunk.iter_mut().zip(register.iter_mut()) {
                *byte ^= *feedback;
                *feedback = *byte;
            }
        }
        Ok(output)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut register = Zeroizing::new(self.iv.clone());
        let mut output = ciphertext.to_vec();

        for chunk in output.chunks_mut(B::block_size()) {
            self.cipher.encrypt_block(&mut register[..])?;
            for (byte, feedback) in chunk.iter_mut().zip(register.iter_mut()) {
                let c = *byte;
                *byte ^= *feedback;
                *feedback = c;
            }
        }
        Ok(output)
    }
}
