//! Public API traits and error types for the bfcrypt library
//!
//! This crate provides the public API surface shared by the bfcrypt crates:
//! the error taxonomy, the `validate` helpers and the trait implemented by
//! the high-level ciphers.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
#[cfg(feature = "alloc")]
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{CipherResult, Error, Result};
#[cfg(feature = "alloc")]
pub use traits::SymmetricCipher;
