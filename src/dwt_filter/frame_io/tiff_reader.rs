//! Grayscale TIFF frame reader built on the `tiff` crate.

use std::io::Cursor;

use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tracing::debug;

use crate::dwt_filter::common::error::{FilterError, Result};
use crate::dwt_filter::frame_io::reader::FrameReader;
use crate::dwt_filter::frame_io::types::GrayFrame;

/// Reads single-channel 8-bit TIFF images. Other color types are rejected
/// since the filter only processes one intensity plane.
pub struct TiffFrameReader;

impl FrameReader for TiffFrameReader {
    fn read_frame(&self, data: &[u8]) -> Result<GrayFrame> {
        debug!("Decoding TIFF frame, {} bytes", data.len());

        let mut decoder =
            Decoder::new(Cursor::new(data)).map_err(|e| FilterError::DecodeError(e.to_string()))?;
        let (width, height) = decoder
            .dimensions()
            .map_err(|e| FilterError::DecodeError(e.to_string()))?;
        let color = decoder
            .colortype()
            .map_err(|e| FilterError::DecodeError(e.to_string()))?;
        if color != ColorType::Gray(8) {
            return Err(FilterError::DecodeError(format!(
                "expected 8-bit grayscale, found {:?}",
                color
            )));
        }

        let data = match decoder
            .read_image()
            .map_err(|e| FilterError::DecodeError(e.to_string()))?
        {
            DecodingResult::U8(values) => values,
            _ => {
                return Err(FilterError::DecodeError(
                    "unexpected sample format".to_string(),
                ));
            }
        };

        debug!("Decoded frame: {}x{}", width, height);
        Ok(GrayFrame::new(width as usize, height as usize, data))
    }
}
