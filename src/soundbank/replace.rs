use std::collections::HashMap;

use bytes::Bytes;

use super::error::ReplaceError;
use super::types::{Padding, Soundbank};

/// A blob payload to splice into an existing bank.
#[derive(Debug, Clone)]
pub struct BlobReplacement {
    /// Zero-based position into the bank's blob list, in index order.
    pub blob_index: usize,
    /// The new payload. Must not exceed the current payload's length.
    pub payload: Bytes,
}

impl Soundbank {
    /// Replace the payload of the blob at `blob_index`. The freed bytes
    /// join the blob's trailing padding as a zero fill of the same total
    /// span, so no other blob's offset moves and the DATA chunk length
    /// stays fixed. Growth is not supported.
    pub fn replace_blob(&mut self, blob_index: usize, payload: Bytes) -> Result<(), ReplaceError> {
        self.replace_blobs(&[BlobReplacement {
            blob_index,
            payload,
        }])
    }

    /// Apply a batch of replacements atomically: the whole batch is
    /// validated against the current state before any entry is applied,
    /// and a failing entry leaves the bank untouched.
    pub fn replace_blobs(&mut self, replacements: &[BlobReplacement]) -> Result<(), ReplaceError> {
        let count = self.data.blobs.len();

        // Pending lengths make repeated positions validate as if the
        // batch were applied sequentially.
        let mut pending: HashMap<usize, u64> = HashMap::new();
        for r in replacements {
            let blob = self
                .data
                .blobs
                .get(r.blob_index)
                .ok_or(ReplaceError::IndexOutOfRange {
                    index: r.blob_index,
                    count,
                })?;
            let old_length = pending
                .get(&r.blob_index)
                .copied()
                .unwrap_or(blob.descriptor.length as u64);
            let new_length = r.payload.len() as u64;
            if new_length > old_length {
                return Err(ReplaceError::UnsupportedGrowth {
                    index: r.blob_index,
                    new_length,
                    old_length,
                });
            }
            pending.insert(r.blob_index, new_length);
        }

        for r in replacements {
            let blob = &mut self.data.blobs[r.blob_index];
            let shrink = blob.descriptor.length as u64 - r.payload.len() as u64;

            blob.descriptor.length = r.payload.len() as u32;
            blob.payload = r.payload.clone();
            blob.padding = Padding::Zeros(shrink + blob.padding.len());

            // Keep both index views in step with the blob's descriptor.
            let desc = blob.descriptor;
            self.index.entries[r.blob_index] = desc;
            self.index.by_id.insert(desc.blob_id, desc);
        }

        Ok(())
    }
}
