use tracing::{debug, info, instrument, warn};

use crate::dwt_filter::common::error::{FilterError, Result};
use crate::dwt_filter::config::FilterConfig;
use crate::dwt_filter::convert::{narrow, widen};
use crate::dwt_filter::kernel::{Kernel, WaveletDescriptor, resolve};
use crate::dwt_filter::mask::snapshot_and_mask;
use crate::dwt_filter::overlay::draw_window_border;
use crate::dwt_filter::reinsert::reinsert_detail_window;
use crate::dwt_filter::timing::{PipelineTimings, Timer};
use crate::dwt_filter::transform::TransformEngine;

/// Buffers tied to one negotiated frame geometry.
#[derive(Debug)]
struct FrameBuffers {
    width: usize,
    height: usize,
    coeffs: Vec<f64>,
    snapshot: Vec<f64>,
    engine: TransformEngine,
}

/// Single-frame wavelet filter instance.
///
/// Call [`configure`](Self::configure) before the first
/// [`process`](Self::process) and again whenever the frame geometry changes.
/// Kernel and configuration changes take effect on the next frame.
#[derive(Debug)]
pub struct DwtFilter {
    kernel: Kernel,
    requested: FilterConfig,
    config: FilterConfig,
    buffers: Option<FrameBuffers>,
}

impl DwtFilter {
    /// Filter with a Haar kernel and the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_kernel(WaveletDescriptor::haar())
    }

    pub fn with_kernel(descriptor: WaveletDescriptor) -> Result<Self> {
        let kernel = resolve(descriptor)?;
        let config = FilterConfig::default();
        Ok(Self {
            kernel,
            requested: config.clone(),
            config,
            buffers: None,
        })
    }

    /// (Re)allocates the coefficient buffer, snapshot and transform workspace
    /// for a `width x height` frame.
    pub fn configure(&mut self, width: usize, height: usize) -> Result<()> {
        match self.buffers.as_mut() {
            Some(buffers) if buffers.width == width && buffers.height == height => {
                debug!("Geometry unchanged at {}x{}", width, height);
                return Ok(());
            }
            Some(buffers) => {
                buffers.engine.resize(width, height)?;
                buffers.width = width;
                buffers.height = height;
                buffers.coeffs = vec![0.0; width * height];
                buffers.snapshot = vec![0.0; width * height];
            }
            None => {
                let engine = TransformEngine::new(width, height, self.requested.layout)?;
                self.buffers = Some(FrameBuffers {
                    width,
                    height,
                    coeffs: vec![0.0; width * height],
                    snapshot: vec![0.0; width * height],
                    engine,
                });
            }
        }
        info!("Configured geometry {}x{}", width, height);

        self.config = self.effective_config(&self.requested, width, height, false)?;
        Ok(())
    }

    /// Swaps the active kernel. On failure the previous kernel stays active.
    pub fn set_kernel(&mut self, descriptor: WaveletDescriptor) -> Result<()> {
        match resolve(descriptor) {
            Ok(kernel) => {
                info!(
                    "Kernel changed from {} to {}",
                    self.kernel.descriptor(),
                    descriptor
                );
                self.kernel = kernel;
                Ok(())
            }
            Err(e) => {
                warn!("Keeping kernel {}: {}", self.kernel.descriptor(), e);
                Err(e)
            }
        }
    }

    /// Replaces the filter configuration. The cutoff is clamped to the
    /// configured geometry; a detail window that does not fit it is rejected
    /// and the previous configuration stays active.
    pub fn set_filter_config(&mut self, config: FilterConfig) -> Result<()> {
        let effective = match self.geometry() {
            Some((width, height)) => self.effective_config(&config, width, height, true)?,
            None => config.clone(),
        };
        if let Some(buffers) = self.buffers.as_mut() {
            buffers.engine.set_layout(effective.layout);
        }
        debug!("Filter config updated: {:?}", effective);
        self.requested = config;
        self.config = effective;
        Ok(())
    }

    fn effective_config(
        &self,
        config: &FilterConfig,
        width: usize,
        height: usize,
        reject_window: bool,
    ) -> Result<FilterConfig> {
        let mut effective = config.clone();

        let max_cutoff = width.min(height);
        if effective.cutoff > max_cutoff {
            warn!("Cutoff {} clamped to {}", effective.cutoff, max_cutoff);
            effective.cutoff = max_cutoff;
        }

        if let Some(window) = effective.detail_window {
            if !window.fits(width, height, effective.symmetric_window) {
                if reject_window {
                    return Err(FilterError::InvalidWindow(window.to_string(), width, height));
                }
                warn!(
                    "Detail window {} does not fit {}x{}, disabling it",
                    window, width, height
                );
                effective.detail_window = None;
            }
        }

        Ok(effective)
    }

    /// Runs the whole pipeline over `pixels` in place.
    pub fn process(&mut self, pixels: &mut [u8]) -> Result<()> {
        self.process_with_timings(pixels).map(|_| ())
    }

    #[instrument(skip(self, pixels), fields(len = pixels.len(), kernel = %self.kernel.descriptor()))]
    pub fn process_with_timings(&mut self, pixels: &mut [u8]) -> Result<PipelineTimings> {
        let kernel = &self.kernel;
        let config = &self.config;
        let buffers = self.buffers.as_mut().ok_or(FilterError::GeometryMismatch {
            expected: 0,
            actual: pixels.len(),
        })?;
        let (width, height) = (buffers.width, buffers.height);
        if pixels.len() != width * height {
            return Err(FilterError::GeometryMismatch {
                expected: width * height,
                actual: pixels.len(),
            });
        }

        let mut timings = PipelineTimings::new();

        let timer = Timer::start("widen");
        widen(pixels, &mut buffers.coeffs);
        timings.record(timer);

        {
            let _span = tracing::info_span!("forward", width, height).entered();
            let timer = Timer::start("forward");
            buffers.engine.forward(&mut buffers.coeffs, kernel)?;
            timings.record(timer);
        }

        {
            let _span = tracing::info_span!("mask", band = %config.band, cutoff = config.cutoff).entered();
            let timer = Timer::start("mask");
            snapshot_and_mask(
                &mut buffers.coeffs,
                &mut buffers.snapshot,
                width,
                height,
                config.band,
                config.cutoff,
            );
            timings.record(timer);
        }

        if let Some(window) = &config.detail_window {
            let _span = tracing::info_span!("reinsert", window = %window).entered();
            let timer = Timer::start("reinsert");
            reinsert_detail_window(
                &buffers.snapshot,
                &mut buffers.coeffs,
                width,
                height,
                window,
                config.reinsert_options(),
            );
            timings.record(timer);
        }

        if config.inverse {
            let _span = tracing::info_span!("inverse").entered();
            let timer = Timer::start("inverse");
            buffers.engine.inverse(&mut buffers.coeffs, kernel)?;
            timings.record(timer);
        }

        let timer = Timer::start("narrow");
        narrow(&buffers.coeffs, pixels, config.narrowing);
        timings.record(timer);

        if let Some(window) = config.detail_window.filter(|_| config.draw_overlay) {
            let timer = Timer::start("overlay");
            draw_window_border(pixels, width, height, &window, config.symmetric_window);
            timings.record(timer);
        }

        debug!(
            "Frame processed in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Configuration as applied to frames (cutoff clamped, window validated).
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn geometry(&self) -> Option<(usize, usize)> {
        self.buffers.as_ref().map(|b| (b.width, b.height))
    }
}
