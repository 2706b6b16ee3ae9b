//! End-to-end SHA-1 pipeline
//!
//! encode -> pad -> split -> (expand, compress per block) -> assemble.
//! Every call starts from a fresh [`State`]; nothing carries over between
//! messages.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::bits::{BitBuffer, encode, pad};
use crate::block::split;
use crate::compress::State;
use crate::digest::{Digest, assemble};
use crate::error::Result;

/// Reusable SHA-1 hasher
///
/// Keeps the state and block count of the most recent message, which is
/// handy for diagnostics. Reusing an instance never changes results.
#[derive(Clone, Debug, Default)]
pub struct Sha1 {
    state: State,
    blocks: u64,
}

impl Sha1 {
    pub fn new() -> Self {
        Self {
            state: State::new(),
            blocks: 0,
        }
    }

    /// Hash a byte message.
    ///
    /// # Panics
    ///
    /// Panics if the message's bit length does not fit in 64 bits. Use
    /// [`Sha1::try_hash`] to get the error instead.
    pub fn hash(&mut self, input: &[u8]) -> Digest {
        match self.try_hash(input) {
            Ok(digest) => digest,
            Err(e) => panic!("cannot hash {} byte message: {e}", input.len()),
        }
    }

    pub fn try_hash(&mut self, input: &[u8]) -> Result<Digest> {
        let padded = pad(encode(input)?)?;
        self.digest_padded(&padded)
    }

    /// Hash a message given at bit granularity.
    pub fn hash_bits(&mut self, bits: BitBuffer) -> Result<Digest> {
        let padded = pad(bits)?;
        self.digest_padded(&padded)
    }

    /// Blocks compressed for the last message
    pub fn blocks_processed(&self) -> u64 {
        self.blocks
    }

    /// State after the last message (its digest, as registers)
    pub fn state(&self) -> State {
        self.state
    }

    fn digest_padded(&mut self, padded: &BitBuffer) -> Result<Digest> {
        self.state = State::new();
        self.blocks = 0;

        for block in split(padded)? {
            self.state.absorb(&block);
            self.blocks += 1;
        }

        log::debug!(
            "hashed {} bits in {} blocks",
            padded.bit_len(),
            self.blocks
        );
        Ok(assemble(self.state))
    }
}

/// Convenience function for single-shot hashing
///
/// # Panics
///
/// Same as [`Sha1::hash`].
pub fn hash(input: &[u8]) -> Digest {
    Sha1::new().hash(input)
}

pub fn try_hash(input: &[u8]) -> Result<Digest> {
    Sha1::new().try_hash(input)
}

/// Hash a bit-granular message.
pub fn hash_bits(bits: BitBuffer) -> Result<Digest> {
    Sha1::new().hash_bits(bits)
}

/// Hash independent messages, results in input order.
///
/// Each message gets its own hasher, so the work spreads across threads
/// when the `parallel` feature is enabled.
#[cfg(feature = "parallel")]
pub fn hash_many<M: AsRef<[u8]> + Sync>(messages: &[M]) -> Vec<Digest> {
    messages
        .par_iter()
        .map_init(Sha1::new, |hasher, message| hasher.hash(message.as_ref()))
        .collect()
}

/// Hash independent messages, results in input order (sequential fallback).
#[cfg(not(feature = "parallel"))]
pub fn hash_many<M: AsRef<[u8]>>(messages: &[M]) -> Vec<Digest> {
    let mut hasher = Sha1::new();
    messages
        .iter()
        .map(|message| hasher.hash(message.as_ref()))
        .collect()
}
