//! Constants for symmetric encryption algorithms

/// Blowfish block size in bytes (64-bit block)
pub const BLOWFISH_BLOCK_SIZE: usize = 8;

/// Smallest accepted Blowfish key in bytes (32 bits)
pub const BLOWFISH_MIN_KEY_SIZE: usize = 4;

/// Largest accepted Blowfish key in bytes (448 bits)
pub const BLOWFISH_MAX_KEY_SIZE: usize = 56;

/// Number of Feistel rounds
pub const BLOWFISH_ROUNDS: usize = 16;

/// Length of the P-array: one subkey per round plus two whitening words
pub const BLOWFISH_P_ARRAY_LEN: usize = BLOWFISH_ROUNDS + 2;

/// Number of S-boxes
pub const BLOWFISH_SBOX_COUNT: usize = 4;

/// Entries per S-box
pub const BLOWFISH_SBOX_LEN: usize = 256;

/// IV size for the chaining and feedback modes (one block)
pub const BLOWFISH_IV_SIZE: usize = BLOWFISH_BLOCK_SIZE;
