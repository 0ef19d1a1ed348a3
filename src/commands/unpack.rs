use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::soundbank::Soundbank;
use crate::verbose;

use super::blob_filename;

/// Extract every blob payload to its own file in `output_folder`, named
/// by 1-based blob position.
pub fn unpack_blobs(bank: &Soundbank, output_folder: &Path) -> Result<()> {
    fs::create_dir_all(output_folder).context("Failed to create output directory")?;

    let mut total = 0u64;
    for (i, blob) in bank.data.blobs.iter().enumerate() {
        let filename = blob_filename(i);
        let out_path = output_folder.join(&filename);
        fs::write(&out_path, &blob.payload)
            .with_context(|| format!("Failed to write blob file: {:?}", out_path))?;

        if verbose() {
            eprintln!("Extracted blob: {}", filename);
        }
        total += blob.payload.len() as u64;
    }

    println!("Total bytes written: {}", total);
    Ok(())
}
