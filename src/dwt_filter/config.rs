//! Filter configuration types

use crate::dwt_filter::convert::Narrowing;
use crate::dwt_filter::mask::BandMode;
use crate::dwt_filter::reinsert::{DetailWindow, ReinsertOptions};
use crate::dwt_filter::transform::TransformLayout;

/// Per-frame filter parameters
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    /// Which band survives the mask
    pub band: BandMode,
    /// Coarse block size; clamped to `min(width, height)` when applied
    pub cutoff: usize,
    /// Reconstruct pixels with the inverse transform (false emits coefficients)
    pub inverse: bool,
    /// Window whose first-level detail is restored after masking
    pub detail_window: Option<DetailWindow>,
    /// Also restore the vertical-detail cells of the window
    pub copy_vertical_detail: bool,
    /// Use height-derived bounds for re-insertion rows and the overlay's
    /// bottom edge instead of width-derived ones
    pub symmetric_window: bool,
    /// Whether to draw the window outline into the output frame
    pub draw_overlay: bool,
    pub narrowing: Narrowing,
    pub layout: TransformLayout,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            band: BandMode::default(),
            cutoff: 0,
            inverse: true,
            detail_window: None,
            copy_vertical_detail: false,
            symmetric_window: false,
            draw_overlay: true,
            narrowing: Narrowing::Truncate,
            layout: TransformLayout::NonStandard,
        }
    }
}

impl FilterConfig {
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::default()
    }

    pub fn reinsert_options(&self) -> ReinsertOptions {
        ReinsertOptions {
            copy_vertical_detail: self.copy_vertical_detail,
            symmetric: self.symmetric_window,
        }
    }
}

/// Builder for FilterConfig
#[derive(Default)]
pub struct FilterConfigBuilder {
    band: Option<BandMode>,
    cutoff: Option<usize>,
    inverse: Option<bool>,
    detail_window: Option<Option<DetailWindow>>,
    copy_vertical_detail: Option<bool>,
    symmetric_window: Option<bool>,
    draw_overlay: Option<bool>,
    narrowing: Option<Narrowing>,
    layout: Option<TransformLayout>,
}

impl FilterConfigBuilder {
    pub fn band(mut self, band: BandMode) -> Self {
        self.band = Some(band);
        self
    }

    pub fn cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    pub fn inverse(mut self, enable: bool) -> Self {
        self.inverse = Some(enable);
        self
    }

    pub fn detail_window(mut self, window: Option<DetailWindow>) -> Self {
        self.detail_window = Some(window);
        self
    }

    pub fn copy_vertical_detail(mut self, enable: bool) -> Self {
        self.copy_vertical_detail = Some(enable);
        self
    }

    pub fn symmetric_window(mut self, enable: bool) -> Self {
        self.symmetric_window = Some(enable);
        self
    }

    pub fn draw_overlay(mut self, enable: bool) -> Self {
        self.draw_overlay = Some(enable);
        self
    }

    pub fn narrowing(mut self, narrowing: Narrowing) -> Self {
        self.narrowing = Some(narrowing);
        self
    }

    pub fn layout(mut self, layout: TransformLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn build(self) -> FilterConfig {
        let default = FilterConfig::default();
        FilterConfig {
            band: self.band.unwrap_or(default.band),
            cutoff: self.cutoff.unwrap_or(default.cutoff),
            inverse: self.inverse.unwrap_or(default.inverse),
            detail_window: self.detail_window.unwrap_or(default.detail_window),
            copy_vertical_detail: self.copy_vertical_detail.unwrap_or(default.copy_vertical_detail),
            symmetric_window: self.symmetric_window.unwrap_or(default.symmetric_window),
            draw_overlay: self.draw_overlay.unwrap_or(default.draw_overlay),
            narrowing: self.narrowing.unwrap_or(default.narrowing),
            layout: self.layout.unwrap_or(default.layout),
        }
    }
}
