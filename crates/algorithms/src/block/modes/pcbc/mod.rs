//! Propagating Cipher Block Chaining (PCBC) mode
//!
//! Like CBC, but the value chained into the next block is the XOR of the
//! previous plaintext and ciphertext blocks, so a corrupted ciphertext block
//! garbles every block after it.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::super::{BlockCipher, BlockCipherMode, CipherMode};
use super::owned_iv;
use crate::error::{validate, Result};
use bfcrypt_internal::constant_time::xor_in_place;

/// PCBC mode driver
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Pcbc<B: BlockCipher + Zeroize> {
    cipher: B,
    iv: Vec<u8>,
}

impl<B: BlockCipher + Zeroize> Pcbc<B> {
    /// Creates a new PCBC driver
    ///
    /// The IV must be exactly one block long.
    pub fn new<I: AsRef<[u8]>>(cipher: B, iv: I) -> Result<Self> {
        let iv = owned_iv::<B>("PCBC initialization vector", iv.as_ref())?;
        Ok(Self { cipher, iv })
    }

    /// The initialization vector
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }
}

impl<B: BlockCipher + Zeroize> CipherMode for Pcbc<B> {
    const REQUIRES_IV: bool = true;
    const IS_STREAM: bool = false;

    fn name() -> &'static str {
        "PCBC"
    }
}

impl<B: BlockCipher + Zeroize> BlockCipherMode<B> for Pcbc<B> {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::block_aligned("PCBC plaintext", plaintext.len(), block_size)?;

        let mut chain = Zeroizing::new(self.iv.clone());
        let mut output = plaintext.to_vec();

        for (block, input) in output
            .chunks_exact_mut(block_size)
            .zip(plaintext.chunks_exact(block_size))
        {
            xor_in_place(block, &chain);
            self.cipher.encrypt_block(block)?;
            chain.copy_from_slice(input);
            xor_in_place(&mut chain, block);
        }
        Ok(output)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::block_aligned("PCBC ciphertext", ciphertext.len(), block_size)?;

        let mut chain = Zeroizing::new(self.iv.clone());
        let mut output = ciphertext.to_vec();

        for (block, input) in output
            .chunks_exact_mut(block_size)
            .zip(ciphertext.chunks_exact(block_size))
        {
            self.cipher.decrypt_block(block)?;
            xor_in_place(block, &chain);
            chain.copy_from_slice(input);
            xor_in_place(&mut chain, block);
        }
        Ok(output)
    }
}
