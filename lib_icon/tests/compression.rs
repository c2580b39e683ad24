mod common;

use common::{gradient, reference_crc};
use lib_icon::compression::crc::{crc32, Crc32};
use lib_icon::compression::{compress, decompress};
use lib_icon::constants::{BRAND_COLOR, IEND, IHDR};
use lib_icon::image::chunk::chunk_crc;

#[test]
fn test_comp_decomp_repeating_color() {
    let data = BRAND_COLOR.repeat(64 * 64);

    let compressed = compress(&data).unwrap();

    // Single color should result in very good compression
    assert!(compressed.len() < data.len() / 20);

    let decompressed = decompress(&compressed).unwrap();
    assert_eq!(decompressed, data);
}

#[test]
fn test_comp_decomp_gradient() {
    let data = gradient(16, 16);

    let compressed = compress(&data).unwrap();
    let decompressed = decompress(&compressed).unwrap();
    assert_eq!(decompressed, data);
}

#[test]
fn test_compressed_stream_is_zlib() {
    let compressed = compress(b"placeholder").unwrap();

    // CM = 8 (deflate), window <= 32K, FCHECK makes the header a multiple of 31
    assert_eq!(compressed[0] & 0x0F, 8);
    assert!(compressed[0] >> 4 <= 7);
    assert_eq!(u16::from_be_bytes([compressed[0], compressed[1]]) % 31, 0);

    // Adler-32 trailer of "placeholder"
    let trailer = &compressed[compressed.len() - 4..];
    let mut a: u32 = 1;
    let mut b: u32 = 0;
    for &byte in b"placeholder" {
        a = (a + byte as u32) % 65521;
        b = (b + a) % 65521;
    }
    assert_eq!(u32::from_be_bytes(trailer.try_into().unwrap()), (b << 16) | a);
}

#[test]
fn test_decompress_rejects_garbage() {
    assert!(decompress(&[0xFF, 0x00, 0x12, 0x34]).is_err());
}

#[test]
fn test_crc_matches_reference() {
    let data = gradient(7, 9);
    assert_eq!(chunk_crc(&IHDR, &data), reference_crc(&IHDR, &data));

    let mut crc = Crc32::new();
    crc.update(&data[..10]);
    crc.update(&data[10..]);
    assert_eq!(crc.finish(), crc32(&data));
}

#[test]
fn test_crc_known_values() {
    assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
    assert_eq!(chunk_crc(&IEND, &[]), 0xAE42_6082);
}
