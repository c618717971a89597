//! Constant values for bfcrypt cryptographic operations

pub mod symmetric;
