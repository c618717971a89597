//! Error handling for the configured cipher
//!
//! The facade surfaces the API error type unchanged.

pub use bfcrypt_api::error::{validate, Error, Result};
