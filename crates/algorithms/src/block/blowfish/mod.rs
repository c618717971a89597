//! Blowfish block cipher
//!
//! Bruce Schneier's 64-bit block cipher: a 16-round Feistel network keyed by
//! an 18-word P-array and four 256-entry S-boxes, all derived from a 32 to
//! 448 bit key.
//!
//! ## Side channels
//!
//! The round function indexes the S-boxes with secret-dependent bytes, so
//! this implementation is not constant-time with respect to cache timing.

use byteorder::{BigEndian, ByteOrder};
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use bfcrypt_params::utils::symmetric::{
    BLOWFISH_BLOCK_SIZE, BLOWFISH_MAX_KEY_SIZE, BLOWFISH_MIN_KEY_SIZE,
};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};

mod constants;
mod feistel;
mod schedule;

pub use schedule::Schedule;

/// Type-level constants for Blowfish
pub enum BlowfishAlgorithm {}

impl CipherAlgorithm for BlowfishAlgorithm {
    const MIN_KEY_SIZE: usize = BLOWFISH_MIN_KEY_SIZE;
    const MAX_KEY_SIZE: usize = BLOWFISH_MAX_KEY_SIZE;
    const BLOCK_SIZE: usize = BLOWFISH_BLOCK_SIZE;

    fn name() -> &'static str {
        "Blowfish"
    }
}

/// Blowfish block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Blowfish {
    schedule: Schedule,
}

impl Blowfish {
    /// Wraps an already derived schedule
    pub fn from_schedule(schedule: Schedule) -> Self {
        Self { schedule }
    }

    /// The derived subkeys
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}

impl BlockCipher for Blowfish {
    type Algorithm = BlowfishAlgorithm;

    fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            schedule: Schedule::derive(key)?,
        })
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("Blowfish block", block.len(), BLOWFISH_BLOCK_SIZE)?;

        let (l, r) = self
            .schedule
            .encrypt_words(BigEndian::read_u32(&block[..4]), BigEndian::read_u32(&block[4..]));
        BigEndian::write_u32(&mut block[..4], l);
        BigEndian::write_u32(&mut block[4..], r);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("Blowfish block", block.len(), BLOWFISH_BLOCK_SIZE)?;

        let (l, r) = self
            .schedule
            .decrypt_words(BigEndian::read_u32(&block[..4]), BigEndian::read_u32(&block[4..]));
        BigEndian::write_u32(&mut block[..4], l);
        BigEndian::write_u32(&mut block[4..], r);
        Ok(())
    }
}

impl fmt::Debug for Blowfish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blowfish").finish_non_exhaustive()
    }
}
