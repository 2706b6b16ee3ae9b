//! Rendering of hash records

use std::io::{self, Write};

use crate::config::{Config, OutputFormat};
use crate::source::HashRecord;
use crate::Digest;

pub fn hex_digest(digest: &Digest, uppercase: bool) -> String {
    if uppercase {
        hex::encode_upper(digest)
    } else {
        hex::encode(digest)
    }
}

/// Write one record in the configured format.
///
/// JSON always carries the lowercase digest; `uppercase` only affects
/// hex lines.
pub fn write_record<W: Write>(out: &mut W, record: &HashRecord, config: &Config) -> io::Result<()> {
    match config.format {
        OutputFormat::Hex => writeln!(
            out,
            "{}  {}",
            hex_digest(&record.digest, config.uppercase),
            record.source
        ),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)
        }
        OutputFormat::Raw => out.write_all(record.digest.as_bytes()),
    }
}
