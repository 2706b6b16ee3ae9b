//! Built-in self test
//!
//! Published SHA-1 vectors plus the padding boundaries where a message
//! starts needing a second block.

use serde::Serialize;

use crate::algorithm::{BitBuffer, Sha1};

/// Published vectors: (name, message, expected digest)
pub const VECTORS: [(&str, &[u8], &str); 5] = [
    ("empty", b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
    ("abc", b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d"),
    (
        "448-bit",
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
    ),
    (
        "896-bit",
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        "a49b2446a02c645bf419f995b67091253a04a259",
    ),
    (
        "quick-brown-fox",
        b"The quick brown fox jumps over the lazy dog",
        "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
    ),
];

const MILLION_A: &str = "34aa973cd4c4daa4f61eeb2bdbad27316534016f";

/// Message bit lengths and the block count padding must produce
const BLOCK_BOUNDARIES: [(u64, u64); 6] = [
    (0, 1),
    (440, 1),
    (447, 1),
    (448, 2),
    (959, 2),
    (960, 3),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
}

impl CheckOutcome {
    fn new(name: String, expected: String, actual: String) -> Self {
        let passed = expected == actual;
        Self {
            name,
            expected,
            actual,
            passed,
        }
    }
}

/// Run every check; failures are reported, not raised.
pub fn run() -> Vec<CheckOutcome> {
    let mut hasher = Sha1::new();
    let mut outcomes = Vec::with_capacity(VECTORS.len() + BLOCK_BOUNDARIES.len() + 1);

    for (name, message, expected) in VECTORS {
        let actual = hasher.hash(message).to_hex();
        outcomes.push(CheckOutcome::new(name.to_string(), expected.to_string(), actual));
    }

    let million = vec![b'a'; 1_000_000];
    outcomes.push(CheckOutcome::new(
        "million-a".to_string(),
        MILLION_A.to_string(),
        hasher.hash(&million).to_hex(),
    ));

    let filler = [0x5Au8; 128];
    for (bit_len, blocks) in BLOCK_BOUNDARIES {
        let actual = BitBuffer::from_bits(&filler, bit_len)
            .and_then(|bits| hasher.hash_bits(bits))
            .map(|_| hasher.blocks_processed().to_string())
            .unwrap_or_else(|e| e.to_string());

        outcomes.push(CheckOutcome::new(
            format!("blocks-at-{bit_len}-bits"),
            blocks.to_string(),
            actual,
        ));
    }

    log::debug!("Self test ran {} checks", outcomes.len());
    outcomes
}

pub fn all_passed(outcomes: &[CheckOutcome]) -> bool {
    outcomes.iter().all(|outcome| outcome.passed)
}
