//! Counter (CTR) mode
//!
//! Counter mode turns the block cipher into a stream cipher by encrypting
//! successive values of a counter block and XORing the result with the
//! message. The IV is the initial counter block; a big-endian counter field
//! inside it is incremented once per block and wraps within its width.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::super::{BlockCipher, BlockCipherMode, CipherMode};
use super::owned_iv;
use crate::error::{validate, Result};
use bfcrypt_internal::constant_time::xor_in_place;

/// Widest counter field supported, in bytes
const MAX_COUNTER_SIZE: usize = 8;

/// Counter position within the counter block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPosition {
    /// Counter occupies the first `counter_size` bytes
    Prefix,

    /// Counter occupies the last `counter_size` bytes
    Postfix,

    /// Counter starts at the given byte offset
    Custom(usize),
}

/// CTR mode driver
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ctr<B: BlockCipher + Zeroize> {
    cipher: B,
    iv: Vec<u8>,
    counter_position: usize,
    counter_size: usize,
}

impl<B: BlockCipher + Zeroize> Ctr<B> {
    /// Creates a new CTR driver counting over the whole block
    ///
    /// For Blowfish the full 8-byte IV is one big-endian counter. The IV must
    /// never repeat under the same key, and no two messages may share
    /// counter values.
    pub fn new<I: AsRef<[u8]>>(cipher: B, iv: I) -> Result<Self> {
        let counter_size = B::block_size().min(MAX_COUNTER_SIZE);
        Self::with_counter_params(cipher, iv, CounterPosition::Postfix, counter_size)
    }

    /// Creates a new CTR driver with a custom counter layout
    ///
    /// * `iv` - initial counter block, exactly one block long
    /// * `counter_pos` - where the counter field sits in the block
    /// * `counter_size` - width of the counter field in bytes (1-8)
    ///
    /// Bytes outside the counter field are a fixed nonce.
    pub fn with_counter_params<I: AsRef<[u8]>>(
        cipher: B,
        iv: I,
        counter_pos: CounterPosition,
        counter_size: usize,
    ) -> Result<Self> {
        let block_size = B::block_size();
        let iv = owned_iv::<B>("CTR initial counter block", iv.as_ref())?;

        validate::parameter(
            counter_size > 0 && counter_size <= MAX_COUNTER_SIZE && counter_size <= block_size,
            "counter_size",
            "Counter size must be between 1 and 8 bytes and fit in one block",
        )?;

        let counter_position = match counter_pos {
            CounterPosition::Prefix => 0,
            CounterPosition::Postfix => block_size - counter_size,
            CounterPosition::Custom(offset) => {
                validate::parameter(
                    offset <= block_size - counter_size,
                    "counter_position",
                    "Counter with specified size doesn't fit at offset in block",
                )?;
                offset
            }
        };

        Ok(Self {
            cipher,
            iv,
            counter_position,
            counter_size,
        })
    }

    /// The initial counter block
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    /// Applies the keystream starting `block_offset` blocks into the stream
    ///
    /// `apply_keystream_at(&data[n * 8..], n)` produces the same bytes as the
    /// matching tail of a full `encrypt(data)`, which allows random access
    /// into a CTR stream.
    pub fn apply_keystream_at(&self, input: &[u8], block_offset: u64) -> Result<Vec<u8>> {
        let mut counter = Zeroizing::new(self.iv.clone());
        self.advance(&mut counter, block_offset);

        let mut keystream = Zeroizing::new(self.iv.clone());
        let mut output = input.to_vec();

        for chunk in output.chunks_mut(B::block_size()) {
            keystream.copy_from_slice(&counter);
            self.cipher.encrypt_block(&mut keystream[..])?;
            xor_in_place(chunk, &keystream);
            self.advance(&mut counter, 1);
        }
        Ok(output)
    }

    /// Adds `by` to the counter field, wrapping within its width
    fn advance(&self, block: &mut [u8], by: u64) {
        let start = MAX_COUNTER_SIZE - self.counter_size;
        let field = &mut block[self.counter_position..self.counter_position + self.counter_size];

        let mut wide = [0u8; MAX_COUNTER_SIZE];
        wide[start..].copy_from_slice(field);
        let value = BigEndian::read_u64(&wide).wrapping_add(by);
        BigEndian::write_u64(&mut wide, value);
        field.copy_from_slice(&wide[start..]);

        wide.zeroize();
    }
}

impl<B: BlockCipher + Zeroize> CipherMode for Ctr<B> {
    const REQUIRES_IV: bool = true;
    const IS_STREAM: bool = true;

    fn name() -> &'static str {
        "CTR"
    }
}

impl<B: BlockCipher + Zeroize> BlockCipherMode<B> for Ctr<B> {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.apply_keystream_at(plaintext, 0)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.apply_keystream_at(ciphertext, 0)
    }
}
