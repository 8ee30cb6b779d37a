//! Wavelet-domain frame filter
//!
//! Every frame goes through the same fixed pipeline:
//! widen to f64, forward 2D wavelet transform, band mask (with a snapshot of
//! the unmasked coefficients), optional detail-window re-insertion, optional
//! inverse transform, narrow back to 8 bits, optional window overlay.
//!
//! [`DwtFilter`] is the per-stream instance; [`FramePipeline`] wraps it with
//! a frame reader and writer for file-based use.

pub mod common;
pub mod config;
pub mod convert;
pub mod filter;
pub mod frame_io;
pub mod kernel;
pub mod mask;
pub mod overlay;
pub mod pipeline;
pub mod reinsert;
pub mod timing;
pub mod transform;

#[cfg(test)]
mod tests;

pub use common::{FilterError, Result};

pub use config::{FilterConfig, FilterConfigBuilder};

pub use convert::Narrowing;

pub use filter::DwtFilter;

pub use frame_io::{
    FrameReader,
    FrameWriter,
    GrayFrame,
    TiffCompression,
    TiffFrameReader,
    TiffFrameWriter,
};

pub use kernel::{Kernel, WaveletDescriptor, WaveletFamily};

pub use mask::BandMode;

pub use pipeline::FramePipeline;

pub use reinsert::DetailWindow;

pub use timing::PipelineTimings;

pub use transform::TransformLayout;
