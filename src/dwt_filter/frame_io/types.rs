//! Frame data types

/// Single 8-bit intensity plane, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayFrame {
    /// Width of the frame in pixels
    pub width: usize,
    /// Height of the frame in pixels
    pub height: usize,
    /// `width * height` samples
    pub data: Vec<u8>,
}

impl GrayFrame {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self::new(width, height, vec![value; width * height])
    }
}

/// TIFF compression methods
#[derive(Debug, Clone, Copy, Default)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    #[default]
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression, balanced level
    Deflate,
}
