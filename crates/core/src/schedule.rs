//! Message Scheduler

use crate::block::Block;
use crate::params::{BLOCK_WORDS, SCHEDULE_WORDS};

/// Eighty schedule words for one block
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    words: [u32; SCHEDULE_WORDS],
}

impl Schedule {
    #[inline]
    pub fn words(&self) -> &[u32; SCHEDULE_WORDS] {
        &self.words
    }
}

/// Expand a block: words 0..16 verbatim, then
/// `W[i] = rotl1(W[i-3] ^ W[i-8] ^ W[i-14] ^ W[i-16])`.
#[inline(always)]
pub fn expand(block: &Block) -> Schedule {
    let mut w = [0u32; SCHEDULE_WORDS];
    w[..BLOCK_WORDS].copy_from_slice(block.words());

    for i in BLOCK_WORDS..SCHEDULE_WORDS {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    Schedule { words: w }
}
