//! Internal utilities for the bfcrypt library
//!
//! Not part of the public API; shared by the algorithm crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
