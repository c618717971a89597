//! Error handling for the bfcrypt ecosystem

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

/// Result type for cipher operations
pub type CipherResult<T> = Result<T>;
