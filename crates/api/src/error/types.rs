//! Error type definitions for cipher operations

use thiserror::Error as ThisError;

/// Primary error type for cipher operations
///
/// Variants carry only static context strings and sizes, never key or
/// plaintext material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Key length outside the range accepted by the algorithm
    #[error("{context}: invalid key size (expected {min}..={max} bytes, got {actual})")]
    KeySize {
        context: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    /// Initialization vector missing or not exactly one block long
    #[error("{context}: invalid IV size (expected {expected} bytes, got {actual})")]
    InvalidIvSize {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Input is not a multiple of the block size where alignment is required
    #[error("{context}: data length {actual} is not a multiple of the {block_size}-byte block size")]
    DataLength {
        context: &'static str,
        block_size: usize,
        actual: usize,
    },

    /// Padding bytes failed validation while unpadding
    #[error("{context}: invalid padding")]
    Padding {
        context: &'static str,
    },

    /// A configuration parameter is out of range
    #[error("{name}: {reason}")]
    Parameter {
        name: &'static str,
        reason: &'static str,
    },

    /// A fixed-size buffer had the wrong length (API contract violation)
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// The context string recorded when the error was raised
    pub fn context(&self) -> &'static str {
        match *self {
            Self::KeySize { context, .. }
            | Self::InvalidIvSize { context, .. }
            | Self::DataLength { context, .. }
            | Self::Padding { context }
            | Self::InvalidLength { context, .. } => context,
            Self::Parameter { name, .. } => name,
        }
    }
}
