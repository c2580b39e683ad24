#![allow(dead_code)]

use lib_icon::constants::PNG_SIGNATURE;

pub struct ParsedChunk {
    pub length: u32,
    pub kind: [u8; 4],
    pub data: Vec<u8>,
    pub crc: u32,
}

/// Walks the chunk stream by hand, independently of the library's reader.
pub fn split_chunks(png: &[u8]) -> Vec<ParsedChunk> {
    assert!(png.starts_with(&PNG_SIGNATURE), "missing PNG signature");

    let mut chunks = Vec::new();
    let mut pos = PNG_SIGNATURE.len();
    while pos < png.len() {
        let length = u32::from_be_bytes(png[pos..pos + 4].try_into().unwrap());
        let kind: [u8; 4] = png[pos + 4..pos + 8].try_into().unwrap();
        let data_end = pos + 8 + length as usize;
        let data = png[pos + 8..data_end].to_vec();
        let crc = u32::from_be_bytes(png[data_end..data_end + 4].try_into().unwrap());
        chunks.push(ParsedChunk {
            length,
            kind,
            data,
            crc,
        });
        pos = data_end + 4;
    }
    chunks
}

/// Reference CRC-32 from flate2.
pub fn reference_crc(kind: &[u8; 4], data: &[u8]) -> u32 {
    let mut crc = flate2::Crc::new();
    crc.update(kind);
    crc.update(data);
    crc.sum()
}

/// RGBA buffer where every channel varies across the image.
pub fn gradient(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[
                (x * 7) as u8,
                (y * 13) as u8,
                (x * y) as u8,
                255 - (x + y) as u8,
            ]);
        }
    }
    data
}

/// Splices a chunk in right after IHDR.
pub fn insert_after_header(png: &[u8], chunk: &[u8]) -> Vec<u8> {
    // signature + IHDR (4 + 4 + 13 + 4)
    let split = PNG_SIGNATURE.len() + 25;
    let mut out = png[..split].to_vec();
    out.extend_from_slice(chunk);
    out.extend_from_slice(&png[split..]);
    out
}
