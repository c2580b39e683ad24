pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

pub const IHDR: [u8; 4] = *b"IHDR";
pub const IDAT: [u8; 4] = *b"IDAT";
pub const IEND: [u8; 4] = *b"IEND";

// IHDR field values for 8-bit truecolor with alpha
pub const BIT_DEPTH: u8 = 8;
pub const COLOR_TYPE_RGBA: u8 = 6;
pub const COMPRESSION_METHOD: u8 = 0;
pub const FILTER_METHOD: u8 = 0;
pub const INTERLACE_NONE: u8 = 0;

pub const BYTES_PER_PIXEL: usize = 4;

/// Largest width or height a PNG header may declare.
pub const MAX_DIMENSION: u32 = (1 << 31) - 1;

/// #3498db, fully opaque.
pub const BRAND_COLOR: [u8; 4] = [0x34, 0x98, 0xDB, 0xFF];

/// Directory (relative to the generator crate) that receives the icons.
pub const ICONS_DIR: &str = "icons";

/// A square PNG icon rendered at `size` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub file_name: &'static str,
}

/// A byte copy of an already generated icon under another name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconAlias {
    pub source: &'static str,
    pub file_name: &'static str,
}

pub const ICON_TARGETS: [IconTarget; 4] = [
    IconTarget {
        size: 32,
        file_name: "32x32.png",
    },
    IconTarget {
        size: 128,
        file_name: "128x128.png",
    },
    IconTarget {
        size: 256,
        file_name: "128x128@2x.png",
    },
    IconTarget {
        size: 512,
        file_name: "icon.png",
    },
];

// Packaging tools look for these names; the content stays PNG.
pub const ICON_ALIASES: [IconAlias; 2] = [
    IconAlias {
        source: "32x32.png",
        file_name: "icon.icns",
    },
    IconAlias {
        source: "32x32.png",
        file_name: "icon.ico",
    },
];
