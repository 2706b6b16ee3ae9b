//! Bit Encoder and Padder
//!
//! Messages are carried through preprocessing as a [`BitBuffer`]: packed
//! bytes plus an exact bit count, most-significant bit first. Bits past
//! `bit_len` in the last byte are always zero, which lets zero fill grow
//! the buffer without touching existing bytes.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::{DigestError, Result};
use crate::params::{BLOCK_BITS, LENGTH_FIELD_BITS, MAX_PADDING_BYTES, PAD_TARGET_BITS};

/// Owned, append-only bit sequence
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bytes: Vec<u8>,
    bit_len: u64,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty buffer with room for `bytes` packed bytes
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
            bit_len: 0,
        }
    }

    /// Take the first `bit_len` bits of `bytes` (MSB first).
    ///
    /// Used for messages that do not end on a byte boundary.
    pub fn from_bits(bytes: &[u8], bit_len: u64) -> Result<Self> {
        let available = message_bit_len(bytes.len())?;
        if bit_len > available {
            return Err(DigestError::BitLength { bit_len, available });
        }

        let mut packed = bytes[..byte_len(bit_len)].to_vec();
        let spare = (bit_len % 8) as u32;
        if let (Some(last), true) = (packed.last_mut(), spare != 0) {
            *last &= 0xFFu8 << (8 - spare);
        }

        Ok(Self {
            bytes: packed,
            bit_len,
        })
    }

    #[inline]
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Packed bytes; a trailing partial byte is zero-filled on the right
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bit at `index`, or `None` past the end
    pub fn bit(&self, index: u64) -> Option<bool> {
        if index >= self.bit_len {
            return None;
        }
        let byte = self.bytes[(index / 8) as usize];
        Some(byte & (0x80 >> (index % 8)) != 0)
    }

    #[inline]
    fn is_byte_aligned(&self) -> bool {
        self.bit_len % 8 == 0
    }

    pub fn push_bit(&mut self, bit: bool) {
        let offset = self.bit_len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            if let Some(last) = self.bytes.last_mut() {
                *last |= 0x80 >> offset;
            }
        }
        self.bit_len += 1;
    }

    /// Append the low `count` bits of `value`, highest first.
    ///
    /// # Panics
    ///
    /// Panics if `count > 64`.
    pub fn append_bits(&mut self, value: u64, count: u32) {
        assert!(count <= 64, "cannot append {count} bits from a u64");

        if self.is_byte_aligned() && count % 8 == 0 {
            let be = value.to_be_bytes();
            self.bytes.extend_from_slice(&be[be.len() - (count / 8) as usize..]);
            self.bit_len += u64::from(count);
            return;
        }

        for shift in (0..count).rev() {
            self.push_bit((value >> shift) & 1 == 1);
        }
    }

    /// Append `count` zero bits.
    pub fn append_zeros(&mut self, count: u64) {
        let bit_len = self.bit_len + count;
        self.bytes.resize(byte_len(bit_len), 0);
        self.bit_len = bit_len;
    }

    /// Append whole bytes, MSB first.
    pub fn extend_from_bytes(&mut self, data: &[u8]) {
        if self.is_byte_aligned() {
            self.bytes.extend_from_slice(data);
            self.bit_len += 8 * data.len() as u64;
        } else {
            for &byte in data {
                self.append_bits(u64::from(byte), 8);
            }
        }
    }
}

#[inline]
fn byte_len(bit_len: u64) -> usize {
    bit_len.div_ceil(8) as usize
}

/// Bit length of a `len`-byte message, checked against the 64-bit field
pub fn message_bit_len(len: usize) -> Result<u64> {
    u64::try_from(len)
        .ok()
        .and_then(|n| n.checked_mul(8))
        .ok_or(DigestError::InputTooLarge {
            bits: len as u128 * 8,
        })
}

/// Zero bits the padder inserts after the `1` bit for a `bit_len`-bit message
///
/// Minimal `k >= 0` with `(bit_len + 1 + k) ≡ 448 (mod 512)`.
/// A message already at 448 after the `1` bit gets `k = 0`, not a
/// whole block of zeros; only that matches the published digests.
#[inline]
pub fn zero_fill_bits(bit_len: u64) -> u64 {
    let after_one = (bit_len % BLOCK_BITS + 1) % BLOCK_BITS;
    (PAD_TARGET_BITS + BLOCK_BITS - after_one) % BLOCK_BITS
}

/// Total length after padding a `bit_len`-bit message
pub fn padded_bit_len(bit_len: u64) -> Result<u64> {
    let suffix = 1 + zero_fill_bits(bit_len) + u64::from(LENGTH_FIELD_BITS);
    bit_len
        .checked_add(suffix)
        .ok_or(DigestError::InputTooLarge {
            bits: u128::from(bit_len) + u128::from(suffix),
        })
}

/// Bit Encoder: the exact bit representation of `message`
pub fn encode(message: &[u8]) -> Result<BitBuffer> {
    message_bit_len(message.len())?;

    let mut bits = BitBuffer::with_capacity(message.len().saturating_add(MAX_PADDING_BYTES));
    bits.extend_from_bytes(message);
    Ok(bits)
}

/// Padder: append `1`, the zero fill, and the 64-bit big-endian original length.
pub fn pad(mut bits: BitBuffer) -> Result<BitBuffer> {
    let original = bits.bit_len();
    let total = padded_bit_len(original)?;
    let fill = zero_fill_bits(original);

    bits.bytes.reserve(byte_len(total) - bits.bytes.len());
    bits.push_bit(true);
    bits.append_zeros(fill);
    bits.append_bits(original, LENGTH_FIELD_BITS);

    debug_assert_eq!(bits.bit_len(), total);
    log::trace!("padded {original} bits with {fill} zero bits to {total} bits");

    Ok(bits)
}
