//! Operating mode selector

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use bfcrypt_algorithms::block::{Blowfish, Cbc, Cfb, CipherMode, Ctr, Ecb, Ofb, Pcbc};

/// Operating mode, carrying the IV for the modes that need one
///
/// IV lengths are checked when a cipher is built from the mode, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "lowercase"))]
pub enum Mode {
    /// Electronic codebook
    Ecb,
    /// Cipher block chaining
    Cbc {
        /// Initialization vector, one block
        iv: Vec<u8>,
    },
    /// Cipher feedback with full-block feedback
    Cfb {
        /// Initialization vector, one block
        iv: Vec<u8>,
    },
    /// Output feedback
    Ofb {
        /// Initialization vector, one block
        iv: Vec<u8>,
    },
    /// Propagating cipher block chaining
    Pcbc {
        /// Initialization vector, one block
        iv: Vec<u8>,
    },
    /// Counter mode, the whole block is a big-endian counter
    Ctr {
        /// Initial counter block
        iv: Vec<u8>,
    },
}

impl Mode {
    /// CBC with the given IV
    pub fn cbc<I: AsRef<[u8]>>(iv: I) -> Self {
        Self::Cbc {
            iv: iv.as_ref().to_vec(),
        }
    }

    /// CFB with the given IV
    pub fn cfb<I: AsRef<[u8]>>(iv: I) -> Self {
        Self::Cfb {
            iv: iv.as_ref().to_vec(),
        }
    }

    /// OFB with the given IV
    pub fn ofb<I: AsRef<[u8]>>(iv: I) -> Self {
        Self::Ofb {
            iv: iv.as_ref().to_vec(),
        }
    }

    /// PCBC with the given IV
    pub fn pcbc<I: AsRef<[u8]>>(iv: I) -> Self {
        Self::Pcbc {
            iv: iv.as_ref().to_vec(),
        }
    }

    /// CTR starting from the given counter block
    pub fn ctr<I: AsRef<[u8]>>(iv: I) -> Self {
        Self::Ctr {
            iv: iv.as_ref().to_vec(),
        }
    }

    /// Mode name as reported by the driver
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ecb => <Ecb<Blowfish> as CipherMode>::name(),
            Self::Cbc { .. } => <Cbc<Blowfish> as CipherMode>::name(),
            Self::Cfb { .. } => <Cfb<Blowfish> as CipherMode>::name(),
            Self::Ofb { .. } => <Ofb<Blowfish> as CipherMode>::name(),
            Self::Pcbc { .. } => <Pcbc<Blowfish> as CipherMode>::name(),
            Self::Ctr { .. } => <Ctr<Blowfish> as CipherMode>::name(),
        }
    }

    /// The IV, if the mode carries one
    pub fn iv(&self) -> Option<&[u8]> {
        match self {
            Self::Ecb => None,
            Self::Cbc { iv }
            | Self::Cfb { iv }
            | Self::Ofb { iv }
            | Self::Pcbc { iv }
            | Self::Ctr { iv } => Some(iv.as_slice()),
        }
    }

    /// Whether the mode runs as a keystream and ignores padding
    pub fn is_stream(&self) -> bool {
        match self {
            Self::Ecb => <Ecb<Blowfish> as CipherMode>::IS_STREAM,
            Self::Cbc { .. } => <Cbc<Blowfish> as CipherMode>::IS_STREAM,
            Self::Cfb { .. } => <Cfb<Blowfish> as CipherMode>::IS_STREAM,
            Self::Ofb { .. } => <Ofb<Blowfish> as CipherMode>::IS_STREAM,
            Self::Pcbc { .. } => <Pcbc<Blowfish> as CipherMode>::IS_STREAM,
            Self::Ctr { .. } => <Ctr<Blowfish> as CipherMode>::IS_STREAM,
        }
    }
}
