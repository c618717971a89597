//! Blowfish with a fixed mode and padding
//!
//! # Examples
//!
//! ```
//! use bfcrypt_symmetric::{BlowfishCipher, Mode, Padding, Result};
//!
//! fn example() -> Result<()> {
//!     let iv = BlowfishCipher::random_iv();
//!     let cipher = BlowfishCipher::new(b"correct horse", &Mode::cfb(&iv), Padding::NoPadding)?;
//!
//!     // CFB is a stream mode: no padding, ciphertext as long as the input
//!     let ciphertext = cipher.encrypt(b"any length at all")?;
//!     assert_eq!(ciphertext.len(), 17);
//!
//!     let decrypted = cipher.decrypt(&ciphertext)?;
//!     assert_eq!(decrypted, b"any length at all");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use bfcrypt_algorithms::block::{
    BlockCipher, BlockCipherMode, Blowfish, Cbc, Cfb, Ctr, Ecb, Ofb, Pcbc,
};
use bfcrypt_algorithms::padding::Padding;
use bfcrypt_algorithms::types::BlowfishIv;
use bfcrypt_api::{CipherResult, SymmetricCipher};

use crate::error::Result;

mod mode;

pub use mode::Mode;

/// Mode driver bound to the derived key schedule
#[derive(Clone)]
enum Driver {
    Ecb(Ecb<Blowfish>),
    Cbc(Cbc<Blowfish>),
    Cfb(Cfb<Blowfish>),
    Ofb(Ofb<Blowfish>),
    Pcbc(Pcbc<Blowfish>),
    Ctr(Ctr<Blowfish>),
}

impl Driver {
    fn build(key: &[u8], mode: &Mode) -> Result<Self> {
        let cipher = Blowfish::new(key)?;
        let driver = match mode {
            Mode::Ecb => Self::Ecb(Ecb::new(cipher)),
            Mode::Cbc { iv } => Self::Cbc(Cbc::new(cipher, iv)?),
            Mode::Cfb { iv } => Self::Cfb(Cfb::new(cipher, iv)?),
            Mode::Ofb { iv } => Self::Ofb(Ofb::new(cipher, iv)?),
            Mode::Pcbc { iv } => Self::Pcbc(Pcbc::new(cipher, iv)?),
            Mode::Ctr { iv } => Self::Ctr(Ctr::new(cipher, iv)?),
        };
        Ok(driver)
    }
}

/// Runs `$body` with `$m` bound to whichever driver is active
macro_rules! with_driver {
    ($driver:expr, $m:ident => $body:expr) => {
        match $driver {
            Driver::Ecb($m) => $body,
            Driver::Cbc($m) => $body,
            Driver::Cfb($m) => $body,
            Driver::Ofb($m) => $body,
            Driver::Pcbc($m) => $body,
            Driver::Ctr($m) => $body,
        }
    };
}

/// Blowfish bound to a key, an operating mode and a padding scheme
///
/// Construction runs the key schedule once. The cipher is immutable after
/// that, so `encrypt` and `decrypt` can be called concurrently from several
/// threads on one instance.
#[derive(Clone)]
pub struct BlowfishCipher {
    driver: Driver,
    padding: Padding,
}

impl BlowfishCipher {
    /// Builds a cipher from a 4 to 56 byte key, a mode and a padding scheme
    ///
    /// Fails with `KeySize` for an out-of-range key and `InvalidIvSize` when
    /// the mode's IV is not exactly one block. Stream modes (CFB, OFB, CTR) accept
    /// any padding scheme and never apply it.
    pub fn new(key: &[u8], mode: &Mode, padding: Padding) -> Result<Self> {
        let driver = match Driver::build(key, mode) {
            Ok(driver) => driver,
            Err(err) => {
                debug!("Blowfish-{} construction rejected: {}", mode.name(), err);
                return Err(err);
            }
        };

        if mode.is_stream() && padding != Padding::NoPadding {
            debug!(
                "Blowfish-{} is a stream mode; {} padding will not be applied",
                mode.name(),
                padding.name()
            );
        }
        debug!(
            "Blowfish-{} cipher ready (padding: {}, key: {} bytes)",
            mode.name(),
            padding.name(),
            key.len()
        );

        Ok(Self { driver, padding })
    }

    /// Encrypts `plaintext`, padding it first under a block mode
    ///
    /// With `NoPadding` a block mode fails with `DataLength` unless the input
    /// is a whole number of 8-byte blocks.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let result = with_driver!(&self.driver, m => encrypt_with(m, self.padding, plaintext));
        self.report("encrypt", plaintext.len(), &result);
        result
    }

    /// Decrypts `ciphertext` and strips the padding
    ///
    /// Fails with `DataLength` for unaligned block-mode input and `Padding`
    /// when the recovered padding is malformed. No partial plaintext is
    /// returned on failure.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let result = with_driver!(&self.driver, m => decrypt_with(m, self.padding, ciphertext));
        self.report("decrypt", ciphertext.len(), &result);
        result
    }

    /// Generates a block-sized IV from `rng`
    pub fn generate_iv<R: RngCore + CryptoRng>(rng: &mut R) -> BlowfishIv {
        BlowfishIv::random(rng)
    }

    /// Generates a block-sized IV from the operating system
    #[cfg(feature = "std")]
    pub fn random_iv() -> BlowfishIv {
        BlowfishIv::random(&mut rand::rngs::OsRng)
    }

    /// Name of the configured mode
    pub fn mode_name(&self) -> &'static str {
        with_driver!(&self.driver, m => mode_name_of(m))
    }

    /// The configured padding scheme
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Whether the configured mode is a stream mode
    pub fn is_stream(&self) -> bool {
        matches!(self.driver, Driver::Cfb(_) | Driver::Ofb(_) | Driver::Ctr(_))
    }

    /// The configured mode, including its IV
    pub fn mode(&self) -> Mode {
        match &self.driver {
            Driver::Ecb(_) => Mode::Ecb,
            Driver::Cbc(m) => Mode::cbc(m.iv()),
            Driver::Cfb(m) => Mode::cfb(m.iv()),
            Driver::Ofb(m) => Mode::ofb(m.iv()),
            Driver::Pcbc(m) => Mode::pcbc(m.iv()),
            Driver::Ctr(m) => Mode::ctr(m.iv()),
        }
    }

    /// The configured IV; `None` for ECB
    pub fn iv(&self) -> Option<&[u8]> {
        match &self.driver {
            Driver::Ecb(_) => None,
            Driver::Cbc(m) => Some(m.iv()),
            Driver::Cfb(m) => Some(m.iv()),
            Driver::Ofb(m) => Some(m.iv()),
            Driver::Pcbc(m) => Some(m.iv()),
            Driver::Ctr(m) => Some(m.iv()),
        }
    }

    /// Block size in bytes
    pub fn block_size() -> usize {
        Blowfish::block_size()
    }

    fn report(&self, op: &'static str, input_len: usize, result: &Result<Vec<u8>>) {
        match result {
            Ok(output) => trace!(
                "Blowfish-{} {}: {} -> {} bytes",
                self.mode_name(),
                op,
                input_len,
                output.len()
            ),
            Err(err) => debug!(
                "Blowfish-{} {} of {} bytes rejected: {}",
                self.mode_name(),
                op,
                input_len,
                err
            ),
        }
    }
}

fn mode_name_of<M: BlockCipherMode<Blowfish>>(_: &M) -> &'static str {
    M::mode_name()
}

fn encrypt_with<M>(mode: &M, padding: Padding, plaintext: &[u8]) -> Result<Vec<u8>>
where
    M: BlockCipherMode<Blowfish>,
{
    if M::IS_STREAM {
        return mode.encrypt(plaintext);
    }
    let padded = Zeroizing::new(padding.pad(plaintext, Blowfish::block_size())?);
    mode.encrypt(&padded)
}

fn decrypt_with<M>(mode: &M, padding: Padding, ciphertext: &[u8]) -> Result<Vec<u8>>
where
    M: BlockCipherMode<Blowfish>,
{
    if M::IS_STREAM {
        return mode.decrypt(ciphertext);
    }
    let mut plaintext = Zeroizing::new(mode.decrypt(ciphertext)?);
    padding.unpad(&mut plaintext, Blowfish::block_size())?;
    Ok(core::mem::take(&mut *plaintext))
}

impl SymmetricCipher for BlowfishCipher {
    fn encrypt(&self, plaintext: &[u8]) -> CipherResult<Vec<u8>> {
        BlowfishCipher::encrypt(self, plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> CipherResult<Vec<u8>> {
        BlowfishCipher::decrypt(self, ciphertext)
    }

    fn name(&self) -> &'static str {
        <Blowfish as BlockCipher>::name()
    }
}

impl fmt::Debug for BlowfishCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlowfishCipher")
            .field("mode", &self.mode_name())
            .field("padding", &self.padding)
            .finish_non_exhaustive()
    }
}
