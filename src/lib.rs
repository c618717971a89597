//! # bfcrypt
//!
//! The Blowfish block cipher with classic operating modes and padding.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bfcrypt = "0.3"
//! ```
//!
//! ```
//! use bfcrypt::prelude::*;
//!
//! let iv = [0x42u8; 8];
//! let cipher = BlowfishCipher::new(b"sixteen byte key", &Mode::cbc(iv), Padding::Pkcs7)?;
//!
//! let ciphertext = cipher.encrypt(b"attack at dawn")?;
//! assert_eq!(ciphertext.len(), 16);
//! assert_eq!(cipher.decrypt(&ciphertext)?, b"attack at dawn");
//! # Ok::<(), bfcrypt::prelude::Error>(())
//! ```
//!
//! ## Features
//!
//! - `cipher` (default): the [`BlowfishCipher`](symmetric::BlowfishCipher) facade
//! - `algorithms`: the block cipher, mode drivers and padding on their own
//! - `serde`: `Serialize`/`Deserialize` for the `Mode` and `Padding` selectors
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`bfcrypt-api`]: error type, validation helpers, cipher trait
//! - [`bfcrypt-params`]: Blowfish constants
//! - [`bfcrypt-algorithms`]: key schedule, block transform, modes, padding
//! - [`bfcrypt-symmetric`]: the configured cipher

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use bfcrypt_api as api;
pub use bfcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use bfcrypt_algorithms as algorithms;

#[cfg(feature = "cipher")]
pub use bfcrypt_symmetric as symmetric;

/// Common imports for bfcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    #[cfg(feature = "alloc")]
    pub use crate::api::SymmetricCipher;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        BlockCipher, BlockCipherMode, Blowfish, BlowfishIv, Cbc, Cfb, Ctr, Ecb, Ofb, Padding,
        Pcbc,
    };

    #[cfg(feature = "cipher")]
    pub use crate::symmetric::{BlowfishCipher, Mode};
}
