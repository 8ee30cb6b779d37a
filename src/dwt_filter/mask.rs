//! Band mask policy
//!
//! Zeroes coefficients by their row/column index against a cutoff: indices
//! below the cutoff are treated as coarse scale, the rest as fine scale.

use std::fmt;
use std::str::FromStr;

use crate::dwt_filter::common::error::FilterError;

/// Which part of the decomposition survives the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BandMode {
    /// Keep only the top-left `cutoff x cutoff` block
    LowPass,
    /// Zero the top-left `cutoff x cutoff` block; with a zero cutoff the
    /// frame passes through unchanged
    #[default]
    HighPass,
}

impl fmt::Display for BandMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandMode::LowPass => f.write_str("lowpass"),
            BandMode::HighPass => f.write_str("highpass"),
        }
    }
}

impl FromStr for BandMode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "lowpass" => Ok(BandMode::LowPass),
            "high" | "highpass" => Ok(BandMode::HighPass),
            _ => Err(FilterError::InvalidToken(format!("band '{}'", s))),
        }
    }
}

/// Applies the band mask in place. `cutoff` larger than `min(width, height)`
/// behaves as `min(width, height)`.
pub fn apply_band_mask(coeffs: &mut [f64], width: usize, height: usize, band: BandMode, cutoff: usize) {
    debug_assert_eq!(coeffs.len(), width * height);
    let cutoff = cutoff.min(width).min(height);

    match band {
        BandMode::HighPass => {
            for row in coeffs.chunks_exact_mut(width).take(cutoff) {
                row[..cutoff].fill(0.0);
            }
        }
        BandMode::LowPass => {
            for (r, row) in coeffs.chunks_exact_mut(width).enumerate() {
                if r < cutoff {
                    row[cutoff..].fill(0.0);
                } else {
                    row.fill(0.0);
                }
            }
        }
    }
}

/// Copies `coeffs` into `snapshot`, then applies the band mask to `coeffs`.
pub fn snapshot_and_mask(
    coeffs: &mut [f64],
    snapshot: &mut [f64],
    width: usize,
    height: usize,
    band: BandMode,
    cutoff: usize,
) {
    snapshot.copy_from_slice(coeffs);
    apply_band_mask(coeffs, width, height, band, cutoff);
}
