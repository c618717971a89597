//! Configured Blowfish cipher for the bfcrypt library
//!
//! This crate composes the primitives in `bfcrypt-algorithms` into a single
//! value: a key schedule, an operating mode with its IV and a padding
//! scheme, fixed at construction.
//!
//! Operations are reported through the `log` facade. No logger is installed
//! here; key bytes, IVs and message contents are never logged.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod blowfish;
pub mod error;

// Re-export main types for convenience
pub use blowfish::{BlowfishCipher, Mode};
pub use bfcrypt_algorithms::padding::Padding;
pub use bfcrypt_algorithms::types::BlowfishIv;

// Re-export the API error system instead of custom error types
pub use bfcrypt_api::error::{validate, Error, Result};
pub use bfcrypt_api::SymmetricCipher;
