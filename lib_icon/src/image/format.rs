use crate::constants::{
    BIT_DEPTH, BRAND_COLOR, BYTES_PER_PIXEL, COLOR_TYPE_RGBA, COMPRESSION_METHOD, FILTER_METHOD,
    INTERLACE_NONE,
};

/// A solid-color image waiting to be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub width: u32,
    pub height: u32,
    pub color: [u8; 4],
}

impl ImageDescriptor {
    pub fn new(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            width,
            height,
            color,
        }
    }

    pub fn square(size: u32, color: [u8; 4]) -> Self {
        Self::new(size, size, color)
    }

    /// Size of the RGBA buffer, `None` if it does not fit in memory.
    pub fn byte_len(&self) -> Option<usize> {
        rgba_len(self.width, self.height)
    }

    /// Expands the color into a row-major RGBA buffer.
    pub fn rgba_data(&self) -> Option<Vec<u8>> {
        let pixels = self.byte_len()? / BYTES_PER_PIXEL;
        Some(self.color.repeat(pixels))
    }
}

/// Bytes needed for `width * height` RGBA pixels, `None` on overflow.
pub fn rgba_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(BYTES_PER_PIXEL)
}

impl Default for ImageDescriptor {
    fn default() -> Self {
        Self::square(32, BRAND_COLOR)
    }
}

/// Raw RGBA8 pixels, row-major, as read back by the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub rgba_data: Vec<u8>,
}

impl Image {
    pub fn new(width: u32, height: u32, rgba_data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba_data,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let pixel = self.rgba_data.get(offset..offset + BYTES_PER_PIXEL)?;
        Some([pixel[0], pixel[1], pixel[2], pixel[3]])
    }

    /// Returns the single color every pixel shares, if there is one.
    pub fn uniform_color(&self) -> Option<[u8; 4]> {
        let mut pixels = self.rgba_data.chunks_exact(BYTES_PER_PIXEL);
        let first = pixels.next()?;
        if pixels.all(|p| p == first) {
            Some([first[0], first[1], first[2], first[3]])
        } else {
            None
        }
    }
}

/// IHDR payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub compression: u8,
    pub filter: u8,
    pub interlace: u8,
}

impl Header {
    pub const SIZE: usize = 13;

    /// Header for an 8-bit RGBA, non-interlaced image.
    pub fn rgba8(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bit_depth: BIT_DEPTH,
            color_type: COLOR_TYPE_RGBA,
            compression: COMPRESSION_METHOD,
            filter: FILTER_METHOD,
            interlace: INTERLACE_NONE,
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.width.to_be_bytes());
        bytes[4..8].copy_from_slice(&self.height.to_be_bytes());
        bytes[8] = self.bit_depth;
        bytes[9] = self.color_type;
        bytes[10] = self.compression;
        bytes[11] = self.filter;
        bytes[12] = self.interlace;
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::SIZE {
            return None;
        }
        Some(Self {
            width: u32::from_be_bytes(bytes[0..4].try_into().ok()?),
            height: u32::from_be_bytes(bytes[4..8].try_into().ok()?),
            bit_depth: bytes[8],
            color_type: bytes[9],
            compression: bytes[10],
            filter: bytes[11],
            interlace: bytes[12],
        })
    }

    pub fn is_rgba8(&self) -> bool {
        *self == Self::rgba8(self.width, self.height)
    }

    /// Size of one filtered scanline: filter byte plus pixel bytes.
    pub fn stride(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(BYTES_PER_PIXEL)?
            .checked_add(1)
    }
}
