//! Trait for complete symmetric ciphers (block cipher + mode + padding)

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use crate::error::CipherResult;

/// A fully configured symmetric cipher
///
/// Implementors bind a key schedule, an operating mode and a padding
/// scheme at construction. Both operations take `&self`: any chaining state
/// lives only for the duration of one call, so a single instance can be
/// shared between threads.
pub trait SymmetricCipher {
    /// Encrypts a complete message
    fn encrypt(&self, plaintext: &[u8]) -> CipherResult<Vec<u8>>;

    /// Decrypts a complete message, removing padding if the mode uses it
    fn decrypt(&self, ciphertext: &[u8]) -> CipherResult<Vec<u8>>;

    /// Name of the underlying block cipher
    fn name(&self) -> &'static str;
}
