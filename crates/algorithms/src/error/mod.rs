//! Error handling for the cipher primitives
//!
//! The primitives share the API error type instead of defining their own,
//! so errors cross crate boundaries without conversion.

pub use bfcrypt_api::error::{validate, Error, Result};
