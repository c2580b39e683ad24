use std::fs;
use std::io;
use std::path::Path;

use log::{debug, error, info};
use thiserror::Error;

use super::chunk::Chunk;
use super::format::{rgba_len, Header, ImageDescriptor};
use crate::compression::{compress, CompressionError};
use crate::constants::{IDAT, IEND, IHDR, MAX_DIMENSION, PNG_SIGNATURE};

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Failed to compress image data")]
    CompressionFailed(#[from] CompressionError),
    #[error("Image dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
    #[error("Image dimensions {width}x{height} exceed the PNG limit of {}", MAX_DIMENSION)]
    DimensionTooLarge { width: u32, height: u32 },
    #[error("Invalid pixel data length: expected {expected} bytes, got {actual}")]
    PixelDataLength { expected: usize, actual: usize },
}

pub fn encode(width: u32, height: u32, rgba_data: &[u8]) -> Result<Vec<u8>, EncodingError> {
    info!("Starting encoding of {}x{} image", width, height);

    check_dimensions(width, height)?;

    let too_large = || {
        error!("Image {}x{} does not fit in memory", width, height);
        EncodingError::DimensionTooLarge { width, height }
    };
    let expected = rgba_len(width, height).ok_or_else(too_large)?;
    let scanlines_len = expected
        .checked_add(height as usize)
        .ok_or_else(too_large)?;
    if rgba_data.len() != expected {
        error!(
            "Pixel buffer holds {} bytes, {}x{} RGBA needs {}",
            rgba_data.len(),
            width,
            height,
            expected
        );
        return Err(EncodingError::PixelDataLength {
            expected,
            actual: rgba_data.len(),
        });
    }

    let mut encoded_data: Vec<u8> = Vec::new();

    // Step 1: Signature
    encoded_data.extend_from_slice(&PNG_SIGNATURE);

    // Step 2: Header
    let header = Header::rgba8(width, height);
    Chunk::new(IHDR, header.to_bytes()).write_to(&mut encoded_data);
    debug!("Header written: {:?}", header);

    // Step 3: Scanlines, each prefixed with filter type 0 (none)
    let row_len = expected / height as usize;
    let mut scanlines = Vec::with_capacity(scanlines_len);
    for row in rgba_data.chunks_exact(row_len) {
        scanlines.push(0);
        scanlines.extend_from_slice(row);
    }
    debug!("Raw scanline buffer: {} bytes", scanlines.len());

    // Step 4: Compressed pixel data
    let compressed_data = compress(&scanlines)?;
    Chunk::new(IDAT, compressed_data).write_to(&mut encoded_data);

    // Step 5: End marker
    Chunk::new(IEND, Vec::new()).write_to(&mut encoded_data);

    info!("Encoding completed: {} bytes", encoded_data.len());
    Ok(encoded_data)
}

fn check_dimensions(width: u32, height: u32) -> Result<(), EncodingError> {
    if width == 0 || height == 0 {
        error!("Refusing to encode empty image {}x{}", width, height);
        return Err(EncodingError::ZeroDimension { width, height });
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        error!("Image {}x{} is too large for a PNG header", width, height);
        return Err(EncodingError::DimensionTooLarge { width, height });
    }
    Ok(())
}

/// Encodes a solid-color image.
pub fn encode_solid(descriptor: &ImageDescriptor) -> Result<Vec<u8>, EncodingError> {
    let ImageDescriptor { width, height, .. } = *descriptor;
    // Checked before the pixel buffer is allocated.
    check_dimensions(width, height)?;
    let rgba_data = descriptor.rgba_data().ok_or_else(|| {
        error!("Image {}x{} does not fit in memory", width, height);
        EncodingError::DimensionTooLarge { width, height }
    })?;
    encode(width, height, &rgba_data)
}

/// Writes an encoded image as the full contents of `path`, replacing any existing file.
pub fn write(path: impl AsRef<Path>, png: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    fs::write(path, png)?;
    debug!("Wrote {} bytes to {}", png.len(), path.display());
    Ok(())
}
