pub mod crc;

use std::io::{self, Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::{debug, error, info};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompressionError {
    #[error("zlib compression failed")]
    DeflateFailed(#[source] io::Error),
}

#[derive(Error, Debug)]
pub enum DecompressionError {
    #[error("zlib decompression failed")]
    InflateFailed(#[source] io::Error),
}

/// Compresses `data` into a zlib stream (header, deflate blocks, Adler-32).
pub fn compress(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    info!("Starting compression");
    debug!("Input data length: {}", data.len());

    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 4), Compression::default());
    encoder.write_all(data).map_err(deflate_failed)?;
    let compressed = encoder.finish().map_err(deflate_failed)?;

    info!(
        "Compression completed successfully: {} -> {} bytes",
        data.len(),
        compressed.len()
    );

    Ok(compressed)
}

fn deflate_failed(e: io::Error) -> CompressionError {
    error!("Deflate stream failed: {}", e);
    CompressionError::DeflateFailed(e)
}

pub fn decompress(data: &[u8]) -> Result<Vec<u8>, DecompressionError> {
    info!("Starting decompression");
    debug!("Input data length: {}", data.len());

    let mut inflated = Vec::new();
    ZlibDecoder::new(data)
        .read_to_end(&mut inflated)
        .map_err(|e| {
            error!("Inflate stream failed: {}", e);
            DecompressionError::InflateFailed(e)
        })?;

    info!("Decompression completed successfully: {} bytes", inflated.len());

    Ok(inflated)
}
