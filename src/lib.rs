//! SHA-1 Digest Tool Library
//!
//! Hashes text, files and standard input with the bit-exact SHA-1 pipeline
//! from `sha1-core`.
//!
//! # Overview
//!
//! - [`algorithm`]: the core pipeline (re-export of `sha1_core`)
//! - [`config`]: output and encoding settings, loadable from JSON
//! - [`source`]: input sources and per-input hash records
//! - [`output`]: rendering of records as `sha1sum`-style lines or JSON
//! - [`selftest`]: published vectors and padding boundary checks
//!
//! # Example
//!
//! ```rust
//! use sha1d::source::{InputSource, hash_source};
//! use sha1d::TextEncoding;
//!
//! let record = hash_source(&InputSource::Text("abc".into()), TextEncoding::Utf8).unwrap();
//! assert_eq!(record.digest.to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
//! assert_eq!(record.bytes, 3);
//! ```

// Re-export the core algorithm
pub use sha1_core as algorithm;

pub mod config;
pub mod output;
pub mod selftest;
pub mod source;

// Convenience re-exports
pub use algorithm::{hash, hash_many, try_hash, Digest, DigestError, Sha1, TextEncoding};
