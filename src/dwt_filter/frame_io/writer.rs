use std::io::Write;

use crate::dwt_filter::common::error::Result;
use crate::dwt_filter::frame_io::types::GrayFrame;

pub trait FrameWriter {
    fn write_frame(&self, frame: &GrayFrame, output: &mut dyn Write) -> Result<()>;
}
