use std::io::{self, Write};

use super::types::*;

impl ChunkHeader {
    /// Write the 8-byte frame: tag, then little-endian payload length.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<u64> {
        w.write_all(&self.tag.0)?;
        w.write_all(&self.length.to_le_bytes())?;
        Ok(CHUNK_HEADER_BYTES as u64)
    }
}

impl BankHeaderChunk {
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<u64> {
        let mut written = self.header.write_to(w)?;
        w.write_all(&self.descriptor.version.to_le_bytes())?;
        w.write_all(&self.descriptor.bank_id.to_le_bytes())?;
        written += BANK_HEADER_BYTES as u64;
        w.write_all(&self.trailing)?;
        Ok(written + self.trailing.len() as u64)
    }
}

impl IndexChunk {
    /// Entries go out in their original record order, even when a
    /// replacement has since shortened one of them.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<u64> {
        let mut written = self.header.write_to(w)?;
        for desc in &self.entries {
            w.write_all(&desc.blob_id.to_le_bytes())?;
            w.write_all(&desc.offset.to_le_bytes())?;
            w.write_all(&desc.length.to_le_bytes())?;
            written += INDEX_ENTRY_BYTES as u64;
        }
        Ok(written)
    }
}

impl Padding {
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<u64> {
        match self {
            Padding::View(bytes) => {
                w.write_all(bytes)?;
                Ok(bytes.len() as u64)
            }
            Padding::Zeros(len) => {
                // Stream from a fixed buffer; zero fills can span megabytes.
                const ZEROS: [u8; 4096] = [0; 4096];
                let mut remaining = *len;
                while remaining > 0 {
                    let n = remaining.min(ZEROS.len() as u64) as usize;
                    w.write_all(&ZEROS[..n])?;
                    remaining -= n as u64;
                }
                Ok(*len)
            }
        }
    }
}

impl DataChunk {
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<u64> {
        let mut written = self.header.write_to(w)?;
        for blob in &self.blobs {
            w.write_all(&blob.payload)?;
            written += blob.payload.len() as u64;
            written += blob.padding.write_to(w)?;
        }
        Ok(written)
    }
}

impl UnknownChunk {
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<u64> {
        let written = self.header.write_to(w)?;
        w.write_all(&self.raw)?;
        Ok(written + self.raw.len() as u64)
    }
}

impl Soundbank {
    /// Serialize the full bank: BKHD, DIDX, DATA, then any unrecognised
    /// chunks in their original encounter order. Returns bytes written;
    /// on error the sink is left partially written.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<u64> {
        let mut written = self.bank_header.write_to(w)?;
        written += self.index.write_to(w)?;
        written += self.data.write_to(w)?;
        for other in &self.others {
            written += other.write_to(w)?;
        }
        Ok(written)
    }
}
