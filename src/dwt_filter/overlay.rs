//! Debug overlay marking the detail window in the output frame.

use crate::dwt_filter::reinsert::DetailWindow;

pub const BORDER_VALUE: u8 = 255;

/// Draws a one-pixel outline of `window` into a row-major 8-bit frame.
///
/// Top edge at `y` and vertical edges at `x` and `x + width`. The bottom edge
/// sits at `y + width` unless `symmetric` is set, in which case it uses
/// `y + height`. Pixels past the frame edge are skipped.
pub fn draw_window_border(pixels: &mut [u8], width: usize, height: usize, window: &DetailWindow, symmetric: bool) {
    debug_assert_eq!(pixels.len(), width * height);
    let bottom = if symmetric {
        window.y.saturating_add(window.height)
    } else {
        window.y.saturating_add(window.width)
    };

    for row in [window.y, bottom] {
        if row >= height {
            continue;
        }
        for col in window.x..window.x.saturating_add(window.width).min(width) {
            pixels[row * width + col] = BORDER_VALUE;
        }
    }

    for col in [window.x, window.x.saturating_add(window.width)] {
        if col >= width {
            continue;
        }
        for row in window.y..window.y.saturating_add(window.height).min(height) {
            pixels[row * width + col] = BORDER_VALUE;
        }
    }
}
