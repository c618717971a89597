//! Validation utilities shared by the bfcrypt crates

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Parameter { name, reason });
    }
    Ok(())
}

/// Validate a fixed length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a key length against an inclusive range
#[inline(always)]
pub fn key_size(context: &'static str, actual: usize, min: usize, max: usize) -> Result<()> {
    if actual < min || actual > max {
        return Err(Error::KeySize {
            context,
            min,
            max,
            actual,
        });
    }
    Ok(())
}

/// Validate an initialization vector length
#[inline(always)]
pub fn iv_size(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidIvSize {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a buffer is a whole number of blocks
#[inline(always)]
pub fn block_aligned(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if actual % block_size != 0 {
        return Err(Error::DataLength {
            context,
            block_size,
            actual,
        });
    }
    Ok(())
}

/// Validate padding
#[inline(always)]
pub fn padding(is_valid: bool, context: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::Padding { context });
    }
    Ok(())
}
