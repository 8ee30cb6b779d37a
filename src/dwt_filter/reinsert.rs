//! Detail-window re-insertion
//!
//! Restores, inside a pixel-space window, the first-level detail
//! coefficients that the band mask discarded. The window is mapped onto the
//! first decomposition scale (`width / 2` columns, `height / 2` rows) and the
//! matching cells of the detail quadrants are copied back from the pre-mask
//! snapshot.

use std::fmt;

/// Pixel-space rectangle whose fine-scale detail survives the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetailWindow {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl DetailWindow {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether re-insertion and overlay stay inside a `frame_width x frame_height`
    /// frame. Width-derived row bounds (the non-symmetric mode) also need
    /// `y + width` to fit. A window whose edges overflow `usize` never fits.
    pub fn fits(&self, frame_width: usize, frame_height: usize, symmetric: bool) -> bool {
        let within = |start: usize, extent: usize, limit: usize| {
            start.checked_add(extent).is_some_and(|end| end <= limit)
        };
        let fits_x = within(self.x, self.width, frame_width);
        let fits_y = within(self.y, self.height, frame_height);
        let fits_rows = symmetric || within(self.y, self.width, frame_height);
        fits_x && fits_y && fits_rows
    }
}

impl fmt::Display for DetailWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Which cells the re-insertion copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReinsertOptions {
    /// Also copy the vertical-detail cell (shifted down only)
    pub copy_vertical_detail: bool,
    /// Bound the row loop by the scaled height instead of the scaled width
    pub symmetric: bool,
}

/// Region of one decomposition scale covered by a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledWindow {
    pub x: usize,
    pub y: usize,
    pub columns: usize,
    pub rows: usize,
    pub scale_x: usize,
    pub scale_y: usize,
}

impl ScaledWindow {
    /// Maps `window` to the first decomposition scale of a `width x height`
    /// transform, truncating like integer division.
    ///
    /// Columns scale by `width / 2` and rows by `height / 2`. On square
    /// frames both equal the single scale `height / 2`; on rectangular ones
    /// the column offset stays inside the row.
    pub fn first_level(window: &DetailWindow, width: usize, height: usize, symmetric: bool) -> Self {
        let scale_x = width / 2;
        let scale_y = height / 2;
        let columns = window.width * scale_x / width;
        let rows = if symmetric {
            window.height * scale_y / height
        } else {
            columns
        };
        Self {
            x: window.x * scale_x / width,
            y: window.y * scale_y / height,
            columns,
            rows,
            scale_x,
            scale_y,
        }
    }
}

/// Copies the window's first-level detail cells from `snapshot` into
/// `coeffs`. The caller guarantees that `window` fits the frame
/// (see [`DetailWindow::fits`]).
pub fn reinsert_detail_window(
    snapshot: &[f64],
    coeffs: &mut [f64],
    width: usize,
    height: usize,
    window: &DetailWindow,
    options: ReinsertOptions,
) {
    debug_assert_eq!(snapshot.len(), coeffs.len());
    let scaled = ScaledWindow::first_level(window, width, height, options.symmetric);

    for i in 0..scaled.rows {
        let row = scaled.y + i;
        for j in 0..scaled.columns {
            let col = scaled.x + j;

            let horizontal = row * width + col + scaled.scale_x;
            coeffs[horizontal] = snapshot[horizontal];

            let diagonal = (row + scaled.scale_y) * width + col + scaled.scale_x;
            coeffs[diagonal] = snapshot[diagonal];

            if options.copy_vertical_detail {
                let vertical = (row + scaled.scale_y) * width + col;
                coeffs[vertical] = snapshot[vertical];
            }
        }
    }
}
