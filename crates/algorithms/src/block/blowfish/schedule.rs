//! Blowfish key schedule
//!
//! The schedule starts from the pi-derived tables, folds the key into the
//! P-array, then overwrites every P and S entry with successive encryptions
//! of an all-zero block. Each of those encryptions runs against the state as
//! rewritten so far, so the schedule is built in place through `&mut self`
//! and only handed out once complete.

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use bfcrypt_params::utils::symmetric::{
    BLOWFISH_MAX_KEY_SIZE, BLOWFISH_MIN_KEY_SIZE, BLOWFISH_P_ARRAY_LEN, BLOWFISH_SBOX_COUNT,
    BLOWFISH_SBOX_LEN,
};

use super::constants::{P_INIT, S0_INIT, S1_INIT, S2_INIT, S3_INIT};
use crate::error::{validate, Result};

/// Derived Blowfish subkeys: the P-array and the four key-dependent S-boxes
///
/// Immutable once derived; zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Schedule {
    pub(super) p: [u32; BLOWFISH_P_ARRAY_LEN],
    pub(super) s: [[u32; BLOWFISH_SBOX_LEN]; BLOWFISH_SBOX_COUNT],
}

impl Schedule {
    /// Derives the schedule for `key`
    ///
    /// Keys must be between 4 and 56 bytes long.
    pub fn derive(key: &[u8]) -> Result<Self> {
        validate::key_size(
            "Blowfish key",
            key.len(),
            BLOWFISH_MIN_KEY_SIZE,
            BLOWFISH_MAX_KEY_SIZE,
        )?;

        let mut schedule = Self::initial();
        schedule.mix_key(key);
        schedule.expand();
        Ok(schedule)
    }

    /// The key-independent starting state
    fn initial() -> Self {
        Self {
            p: P_INIT,
            s: [S0_INIT, S1_INIT, S2_INIT, S3_INIT],
        }
    }

    /// XORs the key, cycled and packed big-endian, into the P-array
    fn mix_key(&mut self, key: &[u8]) {
        let mut pos = 0;
        for word in self.p.iter_mut() {
            let mut data = 0u32;
            for _ in 0..4 {
                data = (data << 8) | u32::from(key[pos]);
                pos = (pos + 1) % key.len();
            }
            *word ^= data;
        }
    }

    /// Replaces P and then S0..S3 pairwise with a chained encryption of zero
    fn expand(&mut self) {
        let (mut l, mut r) = (0u32, 0u32);

        for i in (0..BLOWFISH_P_ARRAY_LEN).step_by(2) {
            (l, r) = self.encrypt_words(l, r);
            self.p[i] = l;
            self.p[i + 1] = r;
        }

        for sbox in 0..BLOWFISH_SBOX_COUNT {
            for i in (0..BLOWFISH_SBOX_LEN).step_by(2) {
                (l, r) = self.encrypt_words(l, r);
                self.s[sbox][i] = l;
                self.s[sbox][i + 1] = r;
            }
        }
    }
}

impl fmt::Debug for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schedule").finish_non_exhaustive()
    }
}
