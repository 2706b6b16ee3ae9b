//! # SHA-1 Core Algorithm
//!
//! A bit-exact SHA-1 (FIPS 180-4) built as an explicit pipeline of small,
//! pure stages:
//!
//! ```text
//! message --encode--> bits --pad--> padded --split--> blocks
//!     blocks --expand--> schedule --compress--> state --assemble--> digest
//! ```
//!
//! ## Stages
//!
//! - **Bit Encoder** ([`encode`]): bytes to an exact, MSB-first bit buffer
//! - **Padder** ([`pad`]): `1` bit, minimal zero fill, 64-bit big-endian length
//! - **Block Splitter** ([`split`]): 512-bit blocks of sixteen big-endian words
//! - **Message Scheduler** ([`expand`]): sixteen words to eighty
//! - **Compressor** ([`compress`]): 80 rounds folded into the five-register state
//! - **Digest Assembler** ([`assemble`]): 160-bit digest, hex rendering
//!
//! ## Example
//!
//! ```rust
//! use sha1_core::{Sha1, TextEncoding, hash, hash_str};
//!
//! // Single-shot hashing
//! let digest = hash(b"abc");
//! assert_eq!(digest.to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
//!
//! // Text goes through a named encoding first
//! let same = hash_str("abc", TextEncoding::Utf8).unwrap();
//! assert_eq!(digest, same);
//!
//! // Reusable hasher
//! let mut hasher = Sha1::new();
//! let empty = hasher.hash(b"");
//! assert_eq!(empty.to_string(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
//! assert_eq!(hasher.blocks_processed(), 1);
//! ```
//!
//! ## no_std Support
//!
//! This crate supports `no_std` environments with the `alloc` crate:
//!
//! ```toml
//! [dependencies]
//! sha1-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod bits;
mod block;
mod compress;
mod digest;
mod error;
mod hasher;
mod params;
mod schedule;
mod text;

pub use bits::{BitBuffer, encode, message_bit_len, pad, padded_bit_len, zero_fill_bits};
pub use block::{Block, Blocks, split};
pub use compress::{State, compress};
pub use digest::{Digest, assemble};
pub use error::{DigestError, Result};
pub use hasher::{Sha1, hash, hash_bits, hash_many, try_hash};
pub use params::*;
pub use schedule::{Schedule, expand};
pub use text::{TextEncoding, encode_text, hash_str};

#[cfg(test)]
mod tests;
