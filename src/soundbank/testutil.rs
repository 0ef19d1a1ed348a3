//! Byte-level SoundBank fixtures shared by the unit tests.

/// A tagged chunk: 4-byte tag, little-endian payload length, payload.
pub fn chunk(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + payload.len());
    out.extend_from_slice(tag);
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
    out
}

/// A single 12-byte DIDX record.
pub fn index_entry(blob_id: u32, offset: u32, length: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(12);
    out.extend_from_slice(&blob_id.to_le_bytes());
    out.extend_from_slice(&offset.to_le_bytes());
    out.extend_from_slice(&length.to_le_bytes());
    out
}

/// A BKHD chunk with the given descriptor and trailing bytes.
pub fn bank_header_chunk(version: u32, bank_id: u32, trailing: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(8 + trailing.len());
    payload.extend_from_slice(&version.to_le_bytes());
    payload.extend_from_slice(&bank_id.to_le_bytes());
    payload.extend_from_slice(trailing);
    chunk(b"BKHD", &payload)
}

/// A small complete bank: BKHD with 2 trailing bytes, two 4-byte blobs
/// each followed by 4 bytes of NUL padding, and one unknown HIRC chunk.
pub fn sample_bank() -> Vec<u8> {
    let mut index_payload = Vec::new();
    index_payload.extend_from_slice(&index_entry(1, 0, 4));
    index_payload.extend_from_slice(&index_entry(2, 8, 4));

    let mut data_payload = Vec::new();
    data_payload.extend_from_slice(&[0xAA; 4]);
    data_payload.extend_from_slice(&[0; 4]);
    data_payload.extend_from_slice(&[0xBB; 4]);
    data_payload.extend_from_slice(&[0; 4]);

    let mut bytes = bank_header_chunk(120, 9999, &[0xDE, 0xAD]);
    bytes.extend_from_slice(&chunk(b"DIDX", &index_payload));
    bytes.extend_from_slice(&chunk(b"DATA", &data_payload));
    bytes.extend_from_slice(&chunk(b"HIRC", &[9, 9, 9]));
    bytes
}
