//! JSON configuration for the `dwt_filter_rs` demo binary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dwt_filter::{
    BandMode,
    DetailWindow,
    FilterConfig,
    Narrowing,
    Result,
    TiffCompression,
    TransformLayout,
    WaveletDescriptor,
};

#[derive(Debug, Deserialize)]
pub struct FilterToolConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub filter: FilterSection,
    #[serde(default)]
    pub compression: CompressionName,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FilterSection {
    /// Wavelet token, e.g. `h2`, `dc8` or `b305`
    pub wavelet: String,
    /// `low`/`lowpass` or `high`/`highpass`
    pub band: String,
    pub cutoff: usize,
    pub inverse: bool,
    pub window: Option<WindowSection>,
    pub copy_vertical_detail: bool,
    pub symmetric_window: bool,
    pub draw_overlay: bool,
    pub round: bool,
    pub standard_layout: bool,
}

impl Default for FilterSection {
    fn default() -> Self {
        let defaults = FilterConfig::default();
        Self {
            wavelet: WaveletDescriptor::haar().to_string(),
            band: defaults.band.to_string(),
            cutoff: defaults.cutoff,
            inverse: defaults.inverse,
            window: None,
            copy_vertical_detail: defaults.copy_vertical_detail,
            symmetric_window: defaults.symmetric_window,
            draw_overlay: defaults.draw_overlay,
            round: false,
            standard_layout: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WindowSection {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionName {
    #[default]
    None,
    Lzw,
    Deflate,
}

impl From<CompressionName> for TiffCompression {
    fn from(name: CompressionName) -> Self {
        match name {
            CompressionName::None => TiffCompression::None,
            CompressionName::Lzw => TiffCompression::Lzw,
            CompressionName::Deflate => TiffCompression::Deflate,
        }
    }
}

impl FilterSection {
    pub fn wavelet(&self) -> Result<WaveletDescriptor> {
        self.wavelet.parse()
    }

    pub fn to_filter_config(&self) -> Result<FilterConfig> {
        let band: BandMode = self.band.parse()?;
        Ok(FilterConfig::builder()
            .band(band)
            .cutoff(self.cutoff)
            .inverse(self.inverse)
            .detail_window(
                self.window
                    .map(|w| DetailWindow::new(w.x, w.y, w.width, w.height)),
            )
            .copy_vertical_detail(self.copy_vertical_detail)
            .symmetric_window(self.symmetric_window)
            .draw_overlay(self.draw_overlay)
            .narrowing(if self.round {
                Narrowing::Round
            } else {
                Narrowing::Truncate
            })
            .layout(if self.standard_layout {
                TransformLayout::Standard
            } else {
                TransformLayout::NonStandard
            })
            .build())
    }
}

pub fn load_config(path: &Path) -> std::result::Result<FilterToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
