use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;

/// The number of bytes framing every chunk: 4-byte tag + u32 length.
pub const CHUNK_HEADER_BYTES: usize = 8;

/// The known, fixed portion of a BKHD chunk, excluding its own header.
pub const BANK_HEADER_BYTES: usize = 8;

/// A single blob descriptor record within the DIDX chunk.
pub const INDEX_ENTRY_BYTES: usize = 12;

/// The tag of the bank header (BKHD) chunk.
pub const BANK_HEADER_TAG: ChunkTag = ChunkTag(*b"BKHD");

/// The tag of the data index (DIDX) chunk.
pub const INDEX_TAG: ChunkTag = ChunkTag(*b"DIDX");

/// The tag of the DATA chunk.
pub const DATA_TAG: ChunkTag = ChunkTag(*b"DATA");

/// A 4-byte ASCII chunk identifier, not NUL-terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkTag(pub [u8; 4]);

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// The 8-byte frame preceding every chunk. `length` counts the payload
/// that follows, excluding the frame itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub tag: ChunkTag,
    pub length: u32,
}

/// Bank-level metadata at the start of the BKHD payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankDescriptor {
    pub version: u32,
    pub bank_id: u32,
}

/// The location of a single blob within the DATA chunk. `offset` is
/// relative to the start of the DATA payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobDescriptor {
    pub blob_id: u32,
    pub offset: u32,
    pub length: u32,
}

/// The BKHD chunk. Everything past the fixed descriptor is preserved
/// verbatim in `trailing`.
#[derive(Debug, Clone)]
pub struct BankHeaderChunk {
    pub header: ChunkHeader,
    pub descriptor: BankDescriptor,
    pub trailing: Bytes,
}

/// The DIDX chunk: blob descriptors in file order, plus an id-keyed map.
/// Both views are kept in sync across mutations; `entries` preserves the
/// original record order for serialization.
#[derive(Debug, Clone)]
pub struct IndexChunk {
    pub header: ChunkHeader,
    pub entries: Vec<BlobDescriptor>,
    pub by_id: HashMap<u32, BlobDescriptor>,
}

impl IndexChunk {
    /// The count of blobs indexed by this chunk.
    pub fn blob_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all indexed blob payload lengths, excluding padding.
    pub fn total_blob_size(&self) -> u64 {
        self.entries.iter().map(|d| d.length as u64).sum()
    }
}

/// The bytes between a blob's payload and the start of the next blob
/// (or the end of the DATA chunk). Normally NUL alignment padding read
/// from the source file; after a replacement, a synthetic zero fill.
#[derive(Debug, Clone)]
pub enum Padding {
    View(Bytes),
    Zeros(u64),
}

impl Padding {
    pub fn len(&self) -> u64 {
        match self {
            Padding::View(bytes) => bytes.len() as u64,
            Padding::Zeros(len) => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single embedded audio entity: its descriptor, a lazy view over its
/// payload, and the padding that runs up to the next blob's start.
#[derive(Debug, Clone)]
pub struct Blob {
    pub descriptor: BlobDescriptor,
    pub payload: Bytes,
    pub padding: Padding,
}

impl Blob {
    /// Bytes this blob owns on disk: payload plus trailing padding.
    /// Replacements shift the split point but never this total.
    pub fn span(&self) -> u64 {
        self.payload.len() as u64 + self.padding.len()
    }
}

/// The DATA chunk: every blob payload plus inter-blob padding, in index
/// order.
#[derive(Debug, Clone)]
pub struct DataChunk {
    pub header: ChunkHeader,
    pub blobs: Vec<Blob>,
}

/// Any chunk whose tag is not recognised, passed through byte-exact.
#[derive(Debug, Clone)]
pub struct UnknownChunk {
    pub header: ChunkHeader,
    pub raw: Bytes,
}

/// A parsed Wwise SoundBank.
#[derive(Debug, Clone)]
pub struct Soundbank {
    pub bank_header: BankHeaderChunk,
    pub index: IndexChunk,
    pub data: DataChunk,
    /// Unrecognised chunks, in the order they appeared in the source.
    pub others: Vec<UnknownChunk>,
}

impl fmt::Display for BankHeaderChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: len({}) version({}) id({})",
            self.header.tag, self.header.length, self.descriptor.version, self.descriptor.bank_id
        )
    }
}

impl fmt::Display for IndexChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: len({}) blob_count({})",
            self.header.tag,
            self.header.length,
            self.blob_count()
        )?;
        writeln!(f, "{} blob total size: {}", self.header.tag, self.total_blob_size())
    }
}

impl fmt::Display for DataChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: len({})", self.header.tag, self.header.length)
    }
}

impl fmt::Display for UnknownChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: len({})", self.header.tag, self.header.length)
    }
}

impl fmt::Display for Soundbank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bank_header)?;
        write!(f, "{}", self.index)?;
        write!(f, "{}", self.data)?;
        for other in &self.others {
            write!(f, "{}", other)?;
        }
        Ok(())
    }
}
