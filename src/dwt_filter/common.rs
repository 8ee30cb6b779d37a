//! Common utilities module
//!
//! This module contains shared utilities used across the filter pipeline.

pub mod error;

pub use error::{FilterError, Result};
