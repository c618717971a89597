//! Trait definitions for the bfcrypt API

pub mod symmetric;

pub use symmetric::SymmetricCipher;
