//! Initialization vector with a compile-time size
//!
//! The chaining and feedback modes take their IV as raw bytes and check the
//! length at runtime; `Iv` is the typed form callers can generate and keep.

use core::fmt;
use core::ops::Deref;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use bfcrypt_internal::constant_time::ct_eq;
use bfcrypt_params::utils::symmetric::BLOWFISH_IV_SIZE;

use crate::error::{validate, Result};

/// Generic initialization vector with compile-time size guarantee
#[derive(Clone, Zeroize)]
pub struct Iv<const N: usize> {
    data: [u8; N],
}

/// IV sized for the Blowfish block
pub type BlowfishIv = Iv<BLOWFISH_IV_SIZE>;

impl<const N: usize> Iv<N> {
    /// Create a new IV from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed IV
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::iv_size("initialization vector", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);

        Ok(Self { data })
    }

    /// Generate a random IV
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; N];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Get the size of this IV in bytes
    pub fn size() -> usize {
        N
    }
}

impl<const N: usize> AsRef<[u8]> for Iv<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Iv<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> PartialEq for Iv<N> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.data, other.data)
    }
}

impl<const N: usize> Eq for Iv<N> {}

impl<const N: usize> fmt::Debug for Iv<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iv<{}>({:02x?})", N, &self.data[..])
    }
}
