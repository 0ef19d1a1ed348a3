use std::collections::HashMap;

use bytes::Bytes;
use nom::{
    bytes::complete::take,
    multi::count,
    number::complete::le_u32,
    IResult,
};

use super::error::ParseError;
use super::types::*;

// Parser for a chunk header
fn parse_chunk_header(input: &[u8]) -> IResult<&[u8], ChunkHeader> {
    let (input, tag) = take(4usize)(input)?;
    let (input, length) = le_u32(input)?;

    let mut id = [0u8; 4];
    id.copy_from_slice(tag);

    Ok((
        input,
        ChunkHeader {
            tag: ChunkTag(id),
            length,
        },
    ))
}

// Parser for the fixed portion of the BKHD payload
fn parse_bank_descriptor(input: &[u8]) -> IResult<&[u8], BankDescriptor> {
    let (input, version) = le_u32(input)?;
    let (input, bank_id) = le_u32(input)?;
    Ok((input, BankDescriptor { version, bank_id }))
}

// Parser for a single 12-byte DIDX record
fn parse_blob_descriptor(input: &[u8]) -> IResult<&[u8], BlobDescriptor> {
    let (input, blob_id) = le_u32(input)?;
    let (input, offset) = le_u32(input)?;
    let (input, length) = le_u32(input)?;
    Ok((
        input,
        BlobDescriptor {
            blob_id,
            offset,
            length,
        },
    ))
}

/// Build the BKHD chunk from its payload. The payload past the fixed
/// descriptor may carry platform-specific fields; it is kept verbatim.
pub(crate) fn parse_bank_header_chunk(
    header: ChunkHeader,
    payload: Bytes,
) -> Result<BankHeaderChunk, ParseError> {
    debug_assert_eq!(header.tag, BANK_HEADER_TAG);

    if payload.len() < BANK_HEADER_BYTES {
        return Err(ParseError::TruncatedChunk {
            tag: header.tag,
            needed: BANK_HEADER_BYTES as u64,
            available: payload.len() as u64,
        });
    }
    let (_, descriptor) =
        parse_bank_descriptor(&payload).map_err(|_| ParseError::TruncatedChunk {
            tag: header.tag,
            needed: BANK_HEADER_BYTES as u64,
            available: payload.len() as u64,
        })?;

    Ok(BankHeaderChunk {
        header,
        descriptor,
        trailing: payload.slice(BANK_HEADER_BYTES..),
    })
}

/// Build the DIDX chunk from its payload. The record count derives from
/// the declared chunk length; a trailing non-record remainder is ignored.
pub(crate) fn parse_index_chunk(
    header: ChunkHeader,
    payload: Bytes,
) -> Result<IndexChunk, ParseError> {
    debug_assert_eq!(header.tag, INDEX_TAG);

    let entry_count = header.length as usize / INDEX_ENTRY_BYTES;
    let (_, entries) =
        count(parse_blob_descriptor, entry_count)(&payload[..]).map_err(|_| {
            ParseError::TruncatedChunk {
                tag: header.tag,
                needed: (entry_count * INDEX_ENTRY_BYTES) as u64,
                available: payload.len() as u64,
            }
        })?;

    let mut by_id = HashMap::with_capacity(entry_count);
    for desc in &entries {
        if by_id.insert(desc.blob_id, *desc).is_some() {
            return Err(ParseError::DuplicateBlobId(desc.blob_id));
        }
    }

    Ok(IndexChunk {
        header,
        entries,
        by_id,
    })
}

/// Build the DATA chunk by slicing each indexed blob, in index order, out
/// of the payload. Padding for a blob runs from the end of its payload to
/// the next blob's offset, or to the end of the chunk for the last blob.
pub(crate) fn parse_data_chunk(
    header: ChunkHeader,
    payload: Bytes,
    index: &IndexChunk,
) -> Result<DataChunk, ParseError> {
    debug_assert_eq!(header.tag, DATA_TAG);

    let mut blobs = Vec::with_capacity(index.entries.len());
    for (i, desc) in index.entries.iter().enumerate() {
        let start = desc.offset as u64;
        let end = start + desc.length as u64;
        if end > payload.len() as u64 {
            return Err(ParseError::BlobOutOfBounds(desc.blob_id));
        }

        let next_start = match index.entries.get(i + 1) {
            Some(next) => {
                let next_start = next.offset as u64;
                if next_start < end || next_start > payload.len() as u64 {
                    return Err(ParseError::BlobOutOfBounds(next.blob_id));
                }
                next_start
            }
            // The last blob's padding runs to the end of the chunk.
            None => payload.len() as u64,
        };

        blobs.push(Blob {
            descriptor: *desc,
            payload: payload.slice(start as usize..end as usize),
            padding: Padding::View(payload.slice(end as usize..next_start as usize)),
        });
    }

    Ok(DataChunk { header, blobs })
}

/// Parse a full SoundBank from the start of `source`. Chunks are consumed
/// sequentially and dispatched by tag; running out of input at a chunk
/// boundary ends the parse cleanly.
pub fn parse_soundbank_bytes(source: &Bytes) -> Result<Soundbank, ParseError> {
    let mut cursor = 0usize;
    let mut bank_header = None;
    let mut index: Option<IndexChunk> = None;
    let mut data = None;
    let mut others = Vec::new();

    while cursor < source.len() {
        let remaining = &source[cursor..];
        let (_, header) =
            parse_chunk_header(remaining).map_err(|_| ParseError::TruncatedHeader)?;
        cursor += CHUNK_HEADER_BYTES;

        let payload_len = header.length as usize;
        if source.len() - cursor < payload_len {
            return Err(ParseError::TruncatedChunk {
                tag: header.tag,
                needed: header.length as u64,
                available: (source.len() - cursor) as u64,
            });
        }
        let payload = source.slice(cursor..cursor + payload_len);
        cursor += payload_len;

        match header.tag {
            BANK_HEADER_TAG => {
                bank_header = Some(parse_bank_header_chunk(header, payload)?);
            }
            INDEX_TAG => {
                index = Some(parse_index_chunk(header, payload)?);
            }
            DATA_TAG => {
                let index = index.as_ref().ok_or(ParseError::DataBeforeIndex)?;
                data = Some(parse_data_chunk(header, payload, index)?);
            }
            _ => others.push(UnknownChunk {
                header,
                raw: payload,
            }),
        }
    }

    match (bank_header, index, data) {
        (None, _, _) => Err(ParseError::MissingBankHeader),
        (_, None, _) | (_, _, None) => Err(ParseError::MissingDataChunk),
        (Some(bank_header), Some(index), Some(data)) => Ok(Soundbank {
            bank_header,
            index,
            data,
            others,
        }),
    }
}
