use crate::dwt_filter::common::error::Result;
use crate::dwt_filter::frame_io::types::GrayFrame;

pub trait FrameReader {
    fn read_frame(&self, data: &[u8]) -> Result<GrayFrame>;
}
