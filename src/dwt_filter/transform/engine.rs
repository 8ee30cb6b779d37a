use tracing::debug;

use crate::dwt_filter::common::error::{FilterError, Result};
use crate::dwt_filter::kernel::Kernel;
use crate::dwt_filter::transform::step::{Direction, pyramid, step};

/// Arrangement of the 2D decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformLayout {
    /// One row step and one column step per level, recursing into the
    /// approximation quadrant (Mallat layout).
    #[default]
    NonStandard,
    /// Full 1D pyramid on every row, then on every column.
    Standard,
}

/// In-place separable 2D wavelet transform over a row-major `width * height`
/// buffer. Owns the scratch buffers, sized to `max(width, height)`.
#[derive(Debug)]
pub struct TransformEngine {
    width: usize,
    height: usize,
    layout: TransformLayout,
    line: Vec<f64>,
    work: Vec<f64>,
}

impl TransformEngine {
    pub fn new(width: usize, height: usize, layout: TransformLayout) -> Result<Self> {
        validate_dimensions(width, height)?;
        let longest = width.max(height);
        Ok(Self {
            width,
            height,
            layout,
            line: vec![0.0; longest],
            work: vec![0.0; longest],
        })
    }

    /// Reallocates the scratch buffers for a new geometry.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        validate_dimensions(width, height)?;
        let longest = width.max(height);
        self.width = width;
        self.height = height;
        self.line.resize(longest, 0.0);
        self.work.resize(longest, 0.0);
        debug!("Transform workspace resized to {}x{}", width, height);
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn layout(&self) -> TransformLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: TransformLayout) {
        self.layout = layout;
    }

    pub fn forward(&mut self, coeffs: &mut [f64], kernel: &Kernel) -> Result<()> {
        self.check(coeffs, kernel)?;
        match self.layout {
            TransformLayout::NonStandard => {
                for (w, h) in self.levels() {
                    self.rows(coeffs, kernel, w, h, Direction::Forward);
                    self.columns(coeffs, kernel, w, h, Direction::Forward);
                }
            }
            TransformLayout::Standard => self.standard(coeffs, kernel, Direction::Forward),
        }
        Ok(())
    }

    pub fn inverse(&mut self, coeffs: &mut [f64], kernel: &Kernel) -> Result<()> {
        self.check(coeffs, kernel)?;
        match self.layout {
            TransformLayout::NonStandard => {
                for (w, h) in self.levels().into_iter().rev() {
                    self.columns(coeffs, kernel, w, h, Direction::Inverse);
                    self.rows(coeffs, kernel, w, h, Direction::Inverse);
                }
            }
            TransformLayout::Standard => self.standard(coeffs, kernel, Direction::Inverse),
        }
        Ok(())
    }

    fn check(&self, coeffs: &[f64], kernel: &Kernel) -> Result<()> {
        let expected = self.width * self.height;
        if coeffs.len() != expected {
            return Err(FilterError::GeometryMismatch {
                expected,
                actual: coeffs.len(),
            });
        }
        let shortest = self.width.min(self.height);
        if shortest < kernel.filter_length() {
            return Err(FilterError::TransformLength {
                length: shortest,
                filter_length: kernel.filter_length(),
            });
        }
        Ok(())
    }

    /// Active region per decomposition level; a side stops halving once it
    /// reaches one sample.
    fn levels(&self) -> Vec<(usize, usize)> {
        let mut levels = Vec::new();
        let (mut w, mut h) = (self.width, self.height);
        while w >= 2 || h >= 2 {
            levels.push((w, h));
            if w >= 2 {
                w /= 2;
            }
            if h >= 2 {
                h /= 2;
            }
        }
        levels
    }

    fn rows(&mut self, coeffs: &mut [f64], kernel: &Kernel, w: usize, h: usize, direction: Direction) {
        if w < 2 {
            return;
        }
        for r in 0..h {
            let start = r * self.width;
            step(kernel, &mut coeffs[start..start + w], w, direction, &mut self.work);
        }
    }

    fn columns(&mut self, coeffs: &mut [f64], kernel: &Kernel, w: usize, h: usize, direction: Direction) {
        if h < 2 {
            return;
        }
        for c in 0..w {
            for r in 0..h {
                self.line[r] = coeffs[r * self.width + c];
            }
            step(kernel, &mut self.line, h, direction, &mut self.work);
            for r in 0..h {
                coeffs[r * self.width + c] = self.line[r];
            }
        }
    }

    fn standard(&mut self, coeffs: &mut [f64], kernel: &Kernel, direction: Direction) {
        match direction {
            Direction::Forward => {
                self.full_rows(coeffs, kernel, direction);
                self.full_columns(coeffs, kernel, direction);
            }
            Direction::Inverse => {
                self.full_columns(coeffs, kernel, direction);
                self.full_rows(coeffs, kernel, direction);
            }
        }
    }

    fn full_rows(&mut self, coeffs: &mut [f64], kernel: &Kernel, direction: Direction) {
        let width = self.width;
        for r in 0..self.height {
            let start = r * width;
            pyramid(kernel, &mut coeffs[start..start + width], width, direction, &mut self.work);
        }
    }

    fn full_columns(&mut self, coeffs: &mut [f64], kernel: &Kernel, direction: Direction) {
        let (width, height) = (self.width, self.height);
        for c in 0..width {
            for r in 0..height {
                self.line[r] = coeffs[r * width + c];
            }
            pyramid(kernel, &mut self.line, height, direction, &mut self.work);
            for r in 0..height {
                coeffs[r * width + c] = self.line[r];
            }
        }
    }
}

fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 || !width.is_power_of_two() || !height.is_power_of_two() {
        return Err(FilterError::InvalidDimensions(width, height));
    }
    Ok(())
}
