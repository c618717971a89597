//! Constant values for bfcrypt
//!
//! Sizes and round counts shared by the algorithm and facade crates.

#![no_std]

pub mod utils;
