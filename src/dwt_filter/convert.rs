//! Conversion between 8-bit intensity samples and f64 coefficient buffers.
//!
//! Narrowing relies on Rust's float-to-integer `as` cast, which saturates:
//! values below 0 become 0, values above 255 become 255 and NaN becomes 0.
//! `Narrowing::Truncate` drops the fractional part before the cast,
//! `Narrowing::Round` rounds half away from zero first.

/// How coefficients are narrowed back to 8-bit samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Narrowing {
    /// Truncate toward zero, then saturate to [0, 255]
    #[default]
    Truncate,
    /// Round to nearest, then saturate to [0, 255]
    Round,
}

/// Copies every pixel into the coefficient buffer. Exact for all inputs.
pub fn widen(pixels: &[u8], coeffs: &mut [f64]) {
    debug_assert_eq!(pixels.len(), coeffs.len());
    for (dst, &src) in coeffs.iter_mut().zip(pixels) {
        *dst = f64::from(src);
    }
}

pub fn narrow(coeffs: &[f64], pixels: &mut [u8], narrowing: Narrowing) {
    debug_assert_eq!(pixels.len(), coeffs.len());
    match narrowing {
        Narrowing::Truncate => {
            for (dst, &src) in pixels.iter_mut().zip(coeffs) {
                *dst = src as u8;
            }
        }
        Narrowing::Round => {
            for (dst, &src) in pixels.iter_mut().zip(coeffs) {
                *dst = src.round() as u8;
            }
        }
    }
}
