//! Input sources
//!
//! Text arguments pass through the configured [`TextEncoding`]; files and
//! standard input are hashed byte for byte.

use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use thiserror::Error;

use crate::algorithm::encode_text;
use crate::{try_hash, Digest, DigestError, TextEncoding};

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error(transparent)]
    Digest(#[from] DigestError),
}

/// Where a message comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Label printed next to the digest (`-` for stdin, like sha1sum)
    pub fn label(&self) -> String {
        match self {
            InputSource::Text(text) => format!("{text:?}"),
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "-".to_string(),
        }
    }

    /// Message bytes for this source
    pub fn read_bytes(&self, encoding: TextEncoding) -> Result<Vec<u8>, SourceError> {
        match self {
            InputSource::Text(text) => Ok(encode_text(text, encoding)?.into_owned()),
            InputSource::File(path) => fs::read(path).map_err(|source| SourceError::Io {
                path: path.clone(),
                source,
            }),
            InputSource::Stdin => {
                let mut data = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut data)
                    .map_err(SourceError::Stdin)?;
                Ok(data)
            }
        }
    }
}

/// Digest of one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashRecord {
    pub source: String,
    pub digest: Digest,
    pub bytes: u64,
}

pub fn hash_source(source: &InputSource, encoding: TextEncoding) -> Result<HashRecord, SourceError> {
    let data = source.read_bytes(encoding)?;
    let digest = try_hash(&data)?;
    let label = source.label();

    log::info!("Hashed {} ({} bytes)", label, data.len());

    Ok(HashRecord {
        source: label,
        digest,
        bytes: data.len() as u64,
    })
}

/// Hash files on a dedicated pool of `threads` workers.
///
/// Results keep the order of `paths`; one unreadable file does not stop
/// the others.
pub fn hash_files(
    paths: &[PathBuf],
    threads: usize,
) -> Result<Vec<Result<HashRecord, SourceError>>, rayon::ThreadPoolBuildError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;

    log::debug!("Hashing {} files on {} threads", paths.len(), threads);

    Ok(pool.install(|| {
        paths
            .par_iter()
            .map(|path| hash_source(&InputSource::File(path.clone()), TextEncoding::Utf8))
            .collect()
    }))
}
