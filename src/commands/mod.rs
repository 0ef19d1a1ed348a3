pub mod info;
pub mod repack;
pub mod unpack;

/// On-disk name for the blob at list position `index`: 1-based, zero
/// padded, e.g. position 0 -> "001.wem".
pub fn blob_filename(index: usize) -> String {
    format!("{:03}.wem", index + 1)
}

/// Inverse of [`blob_filename`]. Accepts any 1-based numeric stem with a
/// `.wem` extension; returns the zero-based blob position.
pub fn blob_index_from_filename(name: &str) -> Option<usize> {
    let stem = name.strip_suffix(".wem")?;
    let position: usize = stem.parse().ok()?;
    position.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_filename() {
        assert_eq!(blob_filename(0), "001.wem");
        assert_eq!(blob_filename(74), "075.wem");
        assert_eq!(blob_filename(999), "1000.wem");
    }

    #[test]
    fn test_blob_index_from_filename() {
        assert_eq!(blob_index_from_filename("001.wem"), Some(0));
        assert_eq!(blob_index_from_filename("075.wem"), Some(74));
        assert_eq!(blob_index_from_filename("75.wem"), Some(74));

        // Position 0 does not exist: names are 1-based.
        assert_eq!(blob_index_from_filename("000.wem"), None);
        assert_eq!(blob_index_from_filename("cover.wem"), None);
        assert_eq!(blob_index_from_filename("001.ogg"), None);
    }
}
