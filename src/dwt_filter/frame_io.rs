//! Frame I/O module
//!
//! Format-agnostic frame reading and writing, with TIFF implementations
//! for 8-bit grayscale frames.

mod reader;
mod tiff_reader;
mod tiff_writer;
pub mod types;
mod writer;

pub use reader::FrameReader;
pub use tiff_reader::TiffFrameReader;
pub use tiff_writer::TiffFrameWriter;
pub use types::{GrayFrame, TiffCompression};
pub use writer::FrameWriter;
