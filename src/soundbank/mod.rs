//! Access to the Wwise SoundBank container format: chunk parsing, blob
//! replacement, and serialization.

pub mod error;
pub mod parser;
pub mod replace;
pub mod types;
pub mod writer;

#[cfg(test)]
pub(crate) mod testutil;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bytes::Bytes;

pub use error::{ParseError, ReplaceError};
pub use parser::parse_soundbank_bytes;
pub use replace::BlobReplacement;
pub use types::*;

/// Load and parse a SoundBank file from disk.
pub fn load_soundbank_file(path: &Path) -> Result<Soundbank> {
    let contents = fs::read(path)
        .with_context(|| format!("Failed to read SoundBank file: {:?}", path))?;
    let bank = parse_soundbank_bytes(&Bytes::from(contents))
        .with_context(|| format!("Failed to parse SoundBank file: {:?}", path))?;
    Ok(bank)
}
