use std::io::{Cursor, Write};

use tiff::encoder::compression::DeflateLevel;
use tiff::encoder::{Compression, TiffEncoder, colortype};
use tracing::debug;

use crate::dwt_filter::common::error::{FilterError, Result};
use crate::dwt_filter::frame_io::types::{GrayFrame, TiffCompression};
use crate::dwt_filter::frame_io::writer::FrameWriter;

#[derive(Debug, Default)]
pub struct TiffFrameWriter {
    pub compression: TiffCompression,
}

impl TiffFrameWriter {
    pub fn new(compression: TiffCompression) -> Self {
        Self { compression }
    }
}

impl FrameWriter for TiffFrameWriter {
    fn write_frame(&self, frame: &GrayFrame, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding TIFF frame: {}x{}", frame.width, frame.height);

        let compression = match self.compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::Deflate => Compression::Deflate(DeflateLevel::Balanced),
        };

        let mut buffer = Vec::new();
        let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer))
            .map_err(|e| FilterError::EncodeError(e.to_string()))?
            .with_compression(compression);

        encoder
            .write_image::<colortype::Gray8>(frame.width as u32, frame.height as u32, &frame.data)
            .map_err(|e| FilterError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete");
        Ok(())
    }
}
