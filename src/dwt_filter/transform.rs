//! 2D transform engine module
//!
//! Periodic, full-depth forward and inverse wavelet transforms applied
//! separably over a row-major coefficient buffer.

mod engine;
mod step;

pub use engine::{TransformEngine, TransformLayout};
