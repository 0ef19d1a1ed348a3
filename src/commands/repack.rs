use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{ensure, Context, Result};
use bytes::Bytes;
use glob::glob;

use crate::soundbank::{BlobReplacement, Soundbank};
use crate::verbose;

use super::blob_index_from_filename;

/// Gather replacement wems from `target_folder`, resolving each file
/// name to a blob position. Files whose names encode no position are
/// skipped with a warning.
fn find_replacements(target_folder: &Path) -> Result<Vec<BlobReplacement>> {
    let pattern = target_folder.join("*.wem");
    let pattern = pattern
        .to_str()
        .context("Target folder path is not valid UTF-8")?;

    let mut replacements = Vec::new();
    for entry in glob(pattern).context("Failed to scan target directory")? {
        let path = entry.context("Failed to read target directory entry")?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let Some(blob_index) = blob_index_from_filename(name) else {
            eprintln!("Skipping target with no blob position in its name: {:?}", path);
            continue;
        };

        let contents = fs::read(&path)
            .with_context(|| format!("Failed to read replacement wem: {:?}", path))?;
        if verbose() {
            eprintln!(
                "Replacing blob at position {} with {:?} ({} bytes)",
                blob_index + 1,
                path,
                contents.len()
            );
        }
        replacements.push(BlobReplacement {
            blob_index,
            payload: Bytes::from(contents),
        });
    }

    Ok(replacements)
}

/// Replace blobs from `target_folder` into the bank, then write the
/// rebuilt bank to `output_file`.
pub fn repack_blobs(bank: &mut Soundbank, target_folder: &Path, output_file: &Path) -> Result<()> {
    let replacements = find_replacements(target_folder)?;
    ensure!(
        !replacements.is_empty(),
        "No replacement .wem files found in {:?}",
        target_folder
    );

    bank.replace_blobs(&replacements)
        .context("Failed to apply blob replacements")?;

    let file = File::create(output_file)
        .with_context(|| format!("Failed to create output file: {:?}", output_file))?;
    let mut out = BufWriter::new(file);
    let written = bank.write_to(&mut out).context("Failed to write SoundBank")?;
    out.flush().context("Failed to flush output file")?;

    println!("Wrote {} bytes of the SoundBank file", written);
    Ok(())
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use tempfile::tempdir;

    use super::*;
    use crate::soundbank::parse_soundbank_bytes;
    use crate::soundbank::testutil::sample_bank;

    #[test]
    fn test_repack_replaces_named_blobs() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("targets");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("001.wem"), [0xCC, 0xCC]).unwrap();
        // Not a blob position; skipped.
        fs::write(target.join("notes.wem"), [0xFF]).unwrap();

        let mut bank = parse_soundbank_bytes(&Bytes::from(sample_bank())).unwrap();
        let output = dir.path().join("out.bnk");
        repack_blobs(&mut bank, &target, &output).unwrap();

        let rebuilt = fs::read(&output).unwrap();
        assert_eq!(rebuilt.len(), sample_bank().len());

        let rebuilt = parse_soundbank_bytes(&Bytes::from(rebuilt)).unwrap();
        assert_eq!(&rebuilt.data.blobs[0].payload[..], &[0xCC, 0xCC]);
        assert_eq!(&rebuilt.data.blobs[1].payload[..], &[0xBB; 4]);
    }

    #[test]
    fn test_repack_with_no_targets_fails() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("empty");
        fs::create_dir_all(&target).unwrap();

        let mut bank = parse_soundbank_bytes(&Bytes::from(sample_bank())).unwrap();
        let output = dir.path().join("out.bnk");
        assert!(repack_blobs(&mut bank, &target, &output).is_err());
    }
}
