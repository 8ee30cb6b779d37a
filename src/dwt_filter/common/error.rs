use thiserror::Error;

use crate::dwt_filter::kernel::WaveletFamily;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Unsupported wavelet: family={family:?}, order={order}")]
    InvalidWavelet { family: WaveletFamily, order: u32 },

    #[error("Frame holds {actual} samples but the configured geometry expects {expected}")]
    GeometryMismatch { expected: usize, actual: usize },

    #[error("Transform length {length} is shorter than the kernel filter length {filter_length}")]
    TransformLength { length: usize, filter_length: usize },

    #[error("Invalid frame dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Detail window {0} does not fit a {1}x{2} frame")]
    InvalidWindow(String, usize, usize),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Failed to decode frame: {0}")]
    DecodeError(String),

    #[error("Failed to encode frame: {0}")]
    EncodeError(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
