//! Type-safe wrappers for cipher inputs
//!
//! Fixed-size values get their own types so a mis-sized buffer is rejected
//! once, at the boundary, instead of deep inside a mode driver.

pub mod iv;

pub use iv::{BlowfishIv, Iv};
