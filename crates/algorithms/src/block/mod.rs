//! Block cipher implementations and modes of operation
//!
//! This module contains the Blowfish block cipher and the operating modes
//! that drive any [`BlockCipher`] across a multi-block message.
//!
//! ## Example usage
//!
//! ```
//! use bfcrypt_algorithms::block::{BlockCipher, BlockCipherMode, Blowfish, Cbc};
//!
//! let cipher = Blowfish::new(b"an example key").unwrap();
//! let mode = Cbc::new(cipher, [0u8; 8]).unwrap();
//!
//! let plaintext = b"exactly sixteen!"; // 2 blocks
//! let ciphertext = mode.encrypt(plaintext).unwrap();
//! let decrypted = mode.decrypt(&ciphertext).unwrap();
//!
//! assert_eq!(&plaintext[..], &decrypted[..]);
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::Result;

pub mod blowfish;
pub mod modes;

// Re-exports
pub use blowfish::{Blowfish, Schedule};
pub use modes::{
    cbc::Cbc,
    cfb::Cfb,
    ctr::{CounterPosition, Ctr},
    ecb::Ecb,
    ofb::Ofb,
    pcbc::Pcbc,
};

/// Marker trait for cipher algorithms with compile-time properties
pub trait CipherAlgorithm {
    /// Smallest accepted key in bytes
    const MIN_KEY_SIZE: usize;

    /// Largest accepted key in bytes
    const MAX_KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// Trait for block ciphers operating on one block at a time
pub trait BlockCipher: Sized {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// Runs the key schedule for `key`
    ///
    /// Fails when the key length is outside the algorithm's accepted range.
    fn new(key: &[u8]) -> Result<Self>;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the block cipher
    fn name() -> &'static str {
        Self::Algorithm::name()
    }
}

/// Marker trait for block cipher operating modes
pub trait CipherMode {
    /// Whether the mode requires an initialization vector
    const REQUIRES_IV: bool;

    /// Whether the mode turns the block cipher into a keystream generator
    ///
    /// Stream modes accept any input length, keep ciphertext the same length
    /// as plaintext and never pad.
    const IS_STREAM: bool;

    /// Mode name
    fn name() -> &'static str;
}

/// Trait for mode drivers bound to a block cipher
///
/// Drivers take `&self`: chaining state is created from the IV at the start
/// of every call and dropped at its end.
pub trait BlockCipherMode<C: BlockCipher>: CipherMode {
    /// Encrypts a message
    ///
    /// Block modes require `plaintext` to be a whole number of blocks.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts a message
    ///
    /// Block modes require `ciphertext` to be a whole number of blocks.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// Returns the mode name
    fn mode_name() -> &'static str {
        <Self as CipherMode>::name()
    }
}
