//! Padding schemes for block modes
//!
//! Padding extends a plaintext to a whole number of blocks before a block
//! mode runs and is removed again after decryption. Stream modes never pad.
//!
//! | scheme        | appended bytes                     | on aligned input |
//! |---------------|------------------------------------|------------------|
//! | `NoPadding`   | none, input must be aligned        | nothing          |
//! | `ZeroPadding` | `0x00` up to the boundary          | nothing          |
//! | `Pkcs7`       | `n` copies of `n`                  | a full block     |
//! | `Iso7816`     | `0x80` then `0x00` to the boundary | a full block     |
//!
//! Zero padding is ambiguous: unpadding strips every trailing zero byte, so
//! plaintexts that end in `0x00` do not survive a round trip.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use subtle::ConstantTimeGreater;
use zeroize::Zeroize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{validate, Error, Result};
use bfcrypt_internal::constant_time::ct_tail_eq;

/// Marker byte that starts ISO/IEC 7816-4 padding
const ISO7816_MARKER: u8 = 0x80;

/// Padding scheme applied around block modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Padding {
    /// No padding; block modes reject unaligned input
    #[default]
    NoPadding,
    /// Zero bytes up to the block boundary
    ZeroPadding,
    /// PKCS#7: `n` bytes of value `n`, always at least one byte
    Pkcs7,
    /// ISO/IEC 7816-4: a `0x80` marker then zero bytes, always at least one byte
    Iso7816,
}

impl Padding {
    /// PKCS#5, which is PKCS#7 restricted to 8-byte blocks
    pub const PKCS5: Self = Self::Pkcs7;

    /// Scheme name
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoPadding => "NoPadding",
            Self::ZeroPadding => "ZeroPadding",
            Self::Pkcs7 => "PKCS7",
            Self::Iso7816 => "ISO7816-4",
        }
    }

    /// Returns a padded copy of `data`
    ///
    /// `NoPadding` fails with `DataLength` when `data` is not a whole number
    /// of blocks.
    pub fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        let rem = data.len() % block_size;
        let fill = block_size - rem;

        let padded = match self {
            Self::NoPadding => {
                validate::block_aligned("unpadded plaintext", data.len(), block_size)?;
                data.to_vec()
            }
            Self::ZeroPadding => {
                let mut out = data.to_vec();
                if rem != 0 {
                    out.resize(data.len() + fill, 0);
                }
                out
            }
            Self::Pkcs7 => {
                let mut out = Vec::with_capacity(data.len() + fill);
                out.extend_from_slice(data);
                out.resize(data.len() + fill, fill as u8);
                out
            }
            Self::Iso7816 => {
                let mut out = Vec::with_capacity(data.len() + fill);
                out.extend_from_slice(data);
                out.push(ISO7816_MARKER);
                out.resize(data.len() + fill, 0);
                out
            }
        };
        Ok(padded)
    }

    /// Strips padding from `data` in place
    ///
    /// Removed bytes are zeroized before the buffer is shortened. On error
    /// `data` is left untouched.
    pub fn unpad(&self, data: &mut Vec<u8>, block_size: usize) -> Result<()> {
        let keep = match self {
            Self::NoPadding => return Ok(()),
            Self::ZeroPadding => data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1),
            Self::Pkcs7 => data.len() - pkcs7_len(data, block_size)?,
            Self::Iso7816 => iso7816_start(data, block_size)?,
        };

        data[keep..].zeroize();
        data.truncate(keep);
        Ok(())
    }
}

/// Length of a PKCS#7 pad, checked without branching on the pad bytes
fn pkcs7_len(data: &[u8], block_size: usize) -> Result<usize> {
    let Some(&last) = data.last() else {
        return Err(Error::Padding {
            context: "PKCS#7 padding",
        });
    };

    let window = &data[data.len().saturating_sub(block_size)..];
    let in_range = last.ct_gt(&0) & !last.ct_gt(&(block_size as u8));
    let valid = in_range & ct_tail_eq(window, last as usize, last);

    validate::padding(bool::from(valid), "PKCS#7 padding")?;
    Ok(last as usize)
}

/// Offset of the ISO/IEC 7816-4 marker
fn iso7816_start(data: &[u8], block_size: usize) -> Result<usize> {
    let marker = data.iter().rposition(|&b| b != 0);
    let valid = match marker {
        Some(pos) => data[pos] == ISO7816_MARKER && data.len() - pos <= block_size,
        None => false,
    };

    validate::padding(valid, "ISO/IEC 7816-4 padding")?;
    Ok(marker.unwrap_or(0))
}
