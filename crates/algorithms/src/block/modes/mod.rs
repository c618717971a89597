//! Block cipher modes of operation
//!
//! Block modes (ECB, CBC, PCBC) only accept whole blocks and leave padding
//! to [`crate::padding`]. Stream modes (CFB, OFB, CTR) turn the cipher into a
//! keystream generator and accept any length.
//!
//! Every driver borrows itself immutably: chaining state starts from the IV
//! at the beginning of each call, so one driver can be shared across threads.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::BlockCipher;
use crate::error::{validate, Result};

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;
pub mod pcbc;

/// Checks an IV against the block size and takes an owned copy
pub(crate) fn owned_iv<B: BlockCipher>(context: &'static str, iv: &[u8]) -> Result<Vec<u8>> {
    validate::iv_size(context, iv.len(), B::block_size())?;
    Ok(iv.to_vec())
}
