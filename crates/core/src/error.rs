//! Error taxonomy for the digest pipeline
//!
//! Every variant is fatal for the call that produced it. The algorithm is
//! deterministic, so a failed call fails identically on retry.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use thiserror::Error;

use crate::text::TextEncoding;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// The bit length of the message (or of its padded form) does not fit
    /// the 64-bit length field.
    #[error("message of {bits} bits does not fit the 64-bit length field")]
    InputTooLarge { bits: u128 },

    /// The block splitter received a stream that is not a positive multiple
    /// of 512 bits. Only a padding defect can produce this.
    #[error("padded stream of {bit_len} bits is not a positive multiple of 512 bits")]
    InternalInvariantViolation { bit_len: u64 },

    /// Text contains a character the selected encoding cannot represent.
    #[error("character {character:?} at position {index} cannot be encoded as {encoding}")]
    Encoding {
        encoding: TextEncoding,
        character: char,
        index: usize,
    },

    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("requested {bit_len} bits but only {available} were supplied")]
    BitLength { bit_len: u64, available: u64 },

    #[error("invalid hex digest: {0}")]
    InvalidHex(String),
}

pub type Result<T> = core::result::Result<T, DigestError>;
