//! Blowfish block cipher, operating modes and padding schemes
//!
//! This crate holds the cipher core of bfcrypt:
//!
//! - [`block::Blowfish`]: the key schedule and 64-bit Feistel block transform
//! - [`block::modes`]: ECB, CBC, CFB, OFB, PCBC and CTR drivers over any
//!   [`block::BlockCipher`]
//! - [`padding::Padding`]: none, zero, PKCS#7 and ISO/IEC 7816-4 padding
//! - [`types::Iv`]: a fixed-size initialization vector
//!
//! Derived subkeys and per-call chaining state are zeroized on drop. The
//! crate works without `std` but needs an allocator.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher and modes
pub mod block;
pub use block::{
    BlockCipher, BlockCipherMode, Blowfish, Cbc, Cfb, CipherAlgorithm, CipherMode, CounterPosition,
    Ctr, Ecb, Ofb, Pcbc, Schedule,
};

// Padding schemes
pub mod padding;
pub use padding::Padding;

// Type system
pub mod types;
pub use types::{BlowfishIv, Iv};
