use super::chunk::{chunk_crc, read_chunk, Kind};
use super::format::{Header, Image};
use crate::compression::{decompress, DecompressionError};
use crate::constants::{BYTES_PER_PIXEL, IDAT, IEND, IHDR, PNG_SIGNATURE};
use log::{debug, error, info, warn};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Invalid or missing PNG signature")]
    InvalidSignature,
    #[error("Unexpected end of data after {0} bytes")]
    UnexpectedEof(usize),
    #[error("CRC mismatch in {kind} chunk: stored {expected:#010x}, computed {actual:#010x}")]
    CrcMismatch {
        kind: String,
        expected: u32,
        actual: u32,
    },
    #[error("First chunk is not a valid IHDR")]
    MissingHeader,
    #[error("Stream ends without an IEND chunk")]
    MissingEnd,
    #[error("Unsupported image layout: {0}")]
    Unsupported(String),
    #[error("Invalid filter type {filter} on row {row}")]
    InvalidFilter { row: usize, filter: u8 },
    #[error("Scanline data is {actual} bytes, expected {expected}")]
    ScanlineLength { expected: usize, actual: usize },

    #[error("Decompression failed")]
    DecompressionFailed(#[from] DecompressionError),
}

/// Decodes a non-interlaced 8-bit RGBA PNG into raw pixels.
pub fn decode(encoded_data: &[u8]) -> Result<Image, DecodeError> {
    info!("Starting decoding");

    // Check the signature
    if !encoded_data.starts_with(&PNG_SIGNATURE) {
        error!("Invalid format or missing PNG signature");
        return Err(DecodeError::InvalidSignature);
    }
    debug!("Signature validated successfully");

    let mut rest = &encoded_data[PNG_SIGNATURE.len()..];
    let mut header: Option<Header> = None;
    let mut compressed_data = Vec::new();
    let mut ended = false;

    while !rest.is_empty() {
        let offset = encoded_data.len() - rest.len();
        let (chunk, tail) = read_chunk(rest).ok_or_else(|| {
            error!("Truncated chunk at offset {}", offset);
            DecodeError::UnexpectedEof(offset)
        })?;
        rest = tail;

        if !chunk.crc_matches() {
            let actual = chunk_crc(&chunk.kind, chunk.data);
            error!("CRC mismatch in {} chunk", Kind(&chunk.kind));
            return Err(DecodeError::CrcMismatch {
                kind: Kind(&chunk.kind).to_string(),
                expected: chunk.crc,
                actual,
            });
        }
        debug!(
            "Read {} chunk with {} bytes",
            Kind(&chunk.kind),
            chunk.data.len()
        );

        match (chunk.kind, header) {
            (IHDR, None) => {
                let parsed = Header::from_bytes(chunk.data).ok_or_else(|| {
                    error!("Malformed IHDR payload of {} bytes", chunk.data.len());
                    DecodeError::MissingHeader
                })?;
                if !parsed.is_rgba8() {
                    error!("Unsupported header {:?}", parsed);
                    return Err(DecodeError::Unsupported(format!(
                        "bit depth {}, color type {}, interlace {}",
                        parsed.bit_depth, parsed.color_type, parsed.interlace
                    )));
                }
                if parsed.width == 0 || parsed.height == 0 {
                    return Err(DecodeError::Unsupported(format!(
                        "empty image {}x{}",
                        parsed.width, parsed.height
                    )));
                }
                debug!(
                    "Image dimensions read: width={} height={}",
                    parsed.width, parsed.height
                );
                header = Some(parsed);
            }
            (_, None) => {
                error!("Expected IHDR, found {}", Kind(&chunk.kind));
                return Err(DecodeError::MissingHeader);
            }
            (IDAT, Some(_)) => compressed_data.extend_from_slice(chunk.data),
            (IEND, Some(_)) => {
                ended = true;
                break;
            }
            (kind, Some(_)) if chunk.is_critical() => {
                error!("Unsupported critical chunk {}", Kind(&kind));
                return Err(DecodeError::Unsupported(format!(
                    "critical chunk {}",
                    Kind(&kind)
                )));
            }
            (kind, Some(_)) => warn!("Skipping ancillary chunk {}", Kind(&kind)),
        }
    }

    let header = header.ok_or(DecodeError::MissingHeader)?;
    if !ended {
        error!("Stream ended without IEND");
        return Err(DecodeError::MissingEnd);
    }
    debug!("Compressed data length: {}", compressed_data.len());

    let scanlines = decompress(&compressed_data)?;
    let rgba_data = unfilter(&header, &scanlines)?;
    info!("Decoding successful");

    Ok(Image::new(header.width, header.height, rgba_data))
}

/// Reverses the per-row filters and strips the filter bytes.
fn unfilter(header: &Header, scanlines: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let too_large = || DecodeError::Unsupported("image too large".to_string());
    let stride = header.stride().ok_or_else(too_large)?;
    let expected = stride
        .checked_mul(header.height as usize)
        .ok_or_else(too_large)?;
    if scanlines.len() != expected {
        error!(
            "Scanline buffer holds {} bytes, expected {}",
            scanlines.len(),
            expected
        );
        return Err(DecodeError::ScanlineLength {
            expected,
            actual: scanlines.len(),
        });
    }

    let row_len = stride - 1;
    let mut rgba_data = vec![0u8; row_len * header.height as usize];
    let zero_row = vec![0u8; row_len];

    for (row, line) in scanlines.chunks_exact(stride).enumerate() {
        let filter = line[0];
        let (done, current) = rgba_data.split_at_mut(row * row_len);
        let current = &mut current[..row_len];
        let previous = if row == 0 {
            &zero_row[..]
        } else {
            &done[(row - 1) * row_len..]
        };
        current.copy_from_slice(&line[1..]);

        for i in 0..row_len {
            let left = if i >= BYTES_PER_PIXEL {
                current[i - BYTES_PER_PIXEL]
            } else {
                0
            };
            let up = previous[i];
            let up_left = if i >= BYTES_PER_PIXEL {
                previous[i - BYTES_PER_PIXEL]
            } else {
                0
            };

            let predictor = match filter {
                0 => 0,
                1 => left,
                2 => up,
                3 => ((left as u16 + up as u16) / 2) as u8,
                4 => paeth(left, up, up_left),
                _ => {
                    error!("Invalid filter type {} on row {}", filter, row);
                    return Err(DecodeError::InvalidFilter { row, filter });
                }
            };
            current[i] = current[i].wrapping_add(predictor);
        }
    }

    Ok(rgba_data)
}

fn paeth(a: u8, b: u8, c: u8) -> u8 {
    let p = a as i16 + b as i16 - c as i16;
    let pa = (p - a as i16).abs();
    let pb = (p - b as i16).abs();
    let pc = (p - c as i16).abs();
    if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    }
}
