use std::fmt;

use crate::compression::crc::Crc32;

/// A PNG chunk: length, 4-byte type tag, payload, CRC-32 of tag and payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub kind: [u8; 4],
    pub data: Vec<u8>,
}

impl Chunk {
    /// Length field, type tag and CRC field.
    pub const OVERHEAD: usize = 12;

    pub fn new(kind: [u8; 4], data: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            data: data.into(),
        }
    }

    pub fn crc(&self) -> u32 {
        chunk_crc(&self.kind, &self.data)
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.reserve(Self::OVERHEAD + self.data.len());
        out.extend_from_slice(&(self.data.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.kind);
        out.extend_from_slice(&self.data);
        out.extend_from_slice(&self.crc().to_be_bytes());
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_to(&mut out);
        out
    }
}

pub fn chunk_crc(kind: &[u8; 4], data: &[u8]) -> u32 {
    let mut crc = Crc32::new();
    crc.update(kind);
    crc.update(data);
    crc.finish()
}

/// Printable form of a chunk type tag.
pub struct Kind<'a>(pub &'a [u8; 4]);

impl fmt::Display for Kind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.0))
    }
}

/// A chunk as it appears in a byte stream, borrowing its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawChunk<'a> {
    pub kind: [u8; 4],
    pub data: &'a [u8],
    pub crc: u32,
}

impl RawChunk<'_> {
    /// Critical chunks have an uppercase first letter.
    pub fn is_critical(&self) -> bool {
        self.kind[0].is_ascii_uppercase()
    }

    pub fn crc_matches(&self) -> bool {
        chunk_crc(&self.kind, self.data) == self.crc
    }
}

/// Splits one chunk off the front of `bytes`.
///
/// Returns `None` if fewer bytes remain than the chunk's length field claims.
pub fn read_chunk(bytes: &[u8]) -> Option<(RawChunk<'_>, &[u8])> {
    let length = u32::from_be_bytes(bytes.get(0..4)?.try_into().ok()?) as usize;
    let kind: [u8; 4] = bytes.get(4..8)?.try_into().ok()?;
    let data_end = 8usize.checked_add(length)?;
    let data = bytes.get(8..data_end)?;
    let crc = u32::from_be_bytes(bytes.get(data_end..data_end + 4)?.try_into().ok()?);

    Some((RawChunk { kind, data, crc }, &bytes[data_end + 4..]))
}
