//! Text to bytes boundary
//!
//! Digests are sensitive to encoding, so text never enters the pipeline
//! without a named [`TextEncoding`]. UTF-8 is the default.

#[cfg(not(feature = "std"))]
use alloc::{borrow::Cow, string::ToString, vec::Vec};
#[cfg(feature = "std")]
use std::borrow::Cow;

use core::fmt;
use core::str::FromStr;

use crate::digest::Digest;
use crate::error::{DigestError, Result};
use crate::hasher::try_hash;

/// Byte encoding applied to text before hashing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextEncoding {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "utf-8", alias = "utf8"))]
    Utf8,
    #[cfg_attr(feature = "serde", serde(rename = "utf-16be", alias = "utf16be"))]
    Utf16Be,
    #[cfg_attr(feature = "serde", serde(rename = "utf-16le", alias = "utf16le"))]
    Utf16Le,
    /// ISO-8859-1: code points up to U+00FF
    #[cfg_attr(feature = "serde", serde(rename = "latin1"))]
    Latin1,
    #[cfg_attr(feature = "serde", serde(rename = "ascii"))]
    Ascii,
}

impl TextEncoding {
    pub const ALL: [TextEncoding; 5] = [
        TextEncoding::Utf8,
        TextEncoding::Utf16Be,
        TextEncoding::Utf16Le,
        TextEncoding::Latin1,
        TextEncoding::Ascii,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf16Be => "utf-16be",
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::Latin1 => "latin1",
            TextEncoding::Ascii => "ascii",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "utf-16be" | "utf16be" => Ok(TextEncoding::Utf16Be),
            "utf-16le" | "utf16le" => Ok(TextEncoding::Utf16Le),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            "ascii" | "us-ascii" => Ok(TextEncoding::Ascii),
            _ => Err(DigestError::UnknownEncoding(s.to_string())),
        }
    }
}

/// Encode `text` for hashing.
///
/// UTF-8 borrows the string as-is. Single-byte encodings fail on the first
/// character outside their range; `index` in the error counts characters,
/// not bytes.
pub fn encode_text(text: &str, encoding: TextEncoding) -> Result<Cow<'_, [u8]>> {
    match encoding {
        TextEncoding::Utf8 => Ok(Cow::Borrowed(text.as_bytes())),
        TextEncoding::Utf16Be => Ok(Cow::Owned(
            text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
        )),
        TextEncoding::Utf16Le => Ok(Cow::Owned(
            text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        )),
        TextEncoding::Latin1 => narrow(text, encoding, 0xFF).map(Cow::Owned),
        TextEncoding::Ascii => narrow(text, encoding, 0x7F).map(Cow::Owned),
    }
}

fn narrow(text: &str, encoding: TextEncoding, max: u8) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(index, character)| {
            u8::try_from(character)
                .ok()
                .filter(|&byte| byte <= max)
                .ok_or(DigestError::Encoding {
                    encoding,
                    character,
                    index,
                })
        })
        .collect()
}

/// Hash `text` under `encoding`.
pub fn hash_str(text: &str, encoding: TextEncoding) -> Result<Digest> {
    try_hash(&encode_text(text, encoding)?)
}
