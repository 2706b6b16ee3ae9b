//! SHA-1 Algorithm Parameters
//!
//! Sizes and public constants from FIPS 180-4 (sections 4.2.1, 5.1.1, 5.3.1).

/// Compression block size in bits
pub const BLOCK_BITS: u64 = 512;

/// Compression block size in bytes
pub const BLOCK_SIZE: usize = 64;

/// 32-bit words per block
pub const BLOCK_WORDS: usize = 16;

/// Words in the expanded message schedule
pub const SCHEDULE_WORDS: usize = 80;

/// Rounds per compression call
pub const ROUNDS: usize = 80;

/// Rounds sharing one boolean function and additive constant
pub const ROUNDS_PER_GROUP: usize = 20;

/// Width of the trailing message-length field in bits
pub const LENGTH_FIELD_BITS: u32 = 64;

/// Zero fill stops when the stream length is congruent to this (mod 512)
pub const PAD_TARGET_BITS: u64 = BLOCK_BITS - LENGTH_FIELD_BITS as u64;

/// Upper bound on bytes added by padding (1 + 511 + 64 bits)
pub const MAX_PADDING_BYTES: usize = 72;

/// Number of state registers (A..E)
pub const STATE_WORDS: usize = 5;

/// Digest size in bytes (160 bits)
pub const DIGEST_SIZE: usize = 20;

/// Length of the hexadecimal rendering of a digest
pub const HEX_DIGEST_LEN: usize = 2 * DIGEST_SIZE;

/// Initial hash value H(0)
pub const INITIAL_STATE: [u32; STATE_WORDS] =
    [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Additive round constants, one per 20-round group
pub const ROUND_CONSTANTS: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];
