//! Block Splitter
//!
//! Cuts a padded stream into 512-bit blocks of sixteen big-endian words.

use core::slice::ChunksExact;

use crate::bits::BitBuffer;
use crate::error::{DigestError, Result};
use crate::params::{BLOCK_BITS, BLOCK_SIZE, BLOCK_WORDS};

/// One 512-bit block as sixteen 32-bit words
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    words: [u32; BLOCK_WORDS],
}

impl Block {
    /// Decode 64 bytes into big-endian words
    #[inline]
    pub fn from_bytes(bytes: &[u8; BLOCK_SIZE]) -> Self {
        let mut words = [0u32; BLOCK_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self { words }
    }

    pub const fn from_words(words: [u32; BLOCK_WORDS]) -> Self {
        Self { words }
    }

    #[inline]
    pub fn words(&self) -> &[u32; BLOCK_WORDS] {
        &self.words
    }
}

/// Blocks of a padded stream, in stream order
#[derive(Clone, Debug)]
pub struct Blocks<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        self.chunks
            .next()
            .and_then(|chunk| <&[u8; BLOCK_SIZE]>::try_from(chunk).ok())
            .map(Block::from_bytes)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Blocks<'_> {}

/// Split a padded stream into blocks.
///
/// The stream must be a positive multiple of 512 bits; anything else means
/// the padder is broken and is reported as
/// [`DigestError::InternalInvariantViolation`].
pub fn split(padded: &BitBuffer) -> Result<Blocks<'_>> {
    let bit_len = padded.bit_len();
    if bit_len == 0 || bit_len % BLOCK_BITS != 0 {
        return Err(DigestError::InternalInvariantViolation { bit_len });
    }

    Ok(Blocks {
        chunks: padded.as_bytes().chunks_exact(BLOCK_SIZE),
    })
}
