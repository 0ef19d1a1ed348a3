use thiserror::Error;

use super::types::ChunkTag;

/// Structural failures while parsing a SoundBank. All of these are fatal:
/// the format has no recovery mechanism, and a corrupt index invalidates
/// every subsequent offset computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer than 8 bytes remained where a chunk header was expected.
    #[error("truncated chunk header")]
    TruncatedHeader,

    /// A chunk declared more payload bytes than the source holds.
    #[error("chunk {tag} needs {needed} bytes but only {available} are available")]
    TruncatedChunk {
        tag: ChunkTag,
        needed: u64,
        available: u64,
    },

    /// The same blob id appeared twice in the index chunk.
    #[error("{0} is a repeated blob id in the index")]
    DuplicateBlobId(u32),

    /// An index record's byte range escapes the DATA payload.
    #[error("blob {0} lies outside the data chunk")]
    BlobOutOfBounds(u32),

    /// The DATA chunk appeared before any index chunk; blob offsets
    /// cannot be resolved without the index.
    #[error("encountered the data chunk before the index chunk")]
    DataBeforeIndex,

    /// No BKHD chunk was found by end of input.
    #[error("no bank header chunk found")]
    MissingBankHeader,

    /// No DATA chunk was found by end of input.
    #[error("no data chunk found; this file holds no blobs")]
    MissingDataChunk,
}

/// Failures while replacing blob payloads. Reported per call; the bank is
/// left untouched when any of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplaceError {
    /// The replacement payload is longer than the blob it replaces.
    /// Growing a blob would shift every subsequent offset.
    #[error(
        "replacement for blob at position {index} is {new_length} bytes, \
         larger than the original {old_length} bytes"
    )]
    UnsupportedGrowth {
        index: usize,
        new_length: u64,
        old_length: u64,
    },

    /// The replacement targets a blob position that does not exist.
    #[error("blob position {index} is out of range for a bank of {count} blobs")]
    IndexOutOfRange { index: usize, count: usize },
}
