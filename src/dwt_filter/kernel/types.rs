//! Wavelet kernel descriptor types

use std::fmt;
use std::str::FromStr;

use crate::dwt_filter::common::error::FilterError;

/// Wavelet families understood by the kernel registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaveletFamily {
    /// Haar wavelet (order 2 only)
    Haar,
    /// Daubechies extremal-phase wavelets, order = number of taps
    Daubechies,
    /// Biorthogonal B-spline wavelets, order = 100 * Nr + Nd
    BSpline,
}

impl WaveletFamily {
    fn token(self) -> char {
        match self {
            WaveletFamily::Haar => 'h',
            WaveletFamily::Daubechies => 'd',
            WaveletFamily::BSpline => 'b',
        }
    }
}

/// Already-parsed wavelet selection. Resolved into a [`Kernel`](super::Kernel)
/// by [`resolve`](super::resolve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WaveletDescriptor {
    pub family: WaveletFamily,
    pub order: u32,
    pub centered: bool,
}

impl WaveletDescriptor {
    pub fn new(family: WaveletFamily, order: u32, centered: bool) -> Self {
        Self {
            family,
            order,
            centered,
        }
    }

    pub fn haar() -> Self {
        Self::new(WaveletFamily::Haar, 2, false)
    }
}

impl Default for WaveletDescriptor {
    fn default() -> Self {
        Self::haar()
    }
}

impl fmt::Display for WaveletDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.family.token(),
            if self.centered { "c" } else { "" },
            self.order
        )
    }
}

/// Parses tokens such as `h2`, `hc2`, `d4`, `dc20`, `b103` or `bc309`.
///
/// Only the syntax is checked here; whether the order is supported for the
/// family is decided by the registry.
impl FromStr for WaveletDescriptor {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        let invalid = || FilterError::InvalidToken(format!("wavelet '{}'", s));

        let mut chars = token.chars();
        let family = match chars.next() {
            Some('h') => WaveletFamily::Haar,
            Some('d') => WaveletFamily::Daubechies,
            Some('b') => WaveletFamily::BSpline,
            _ => return Err(invalid()),
        };
        let rest = chars.as_str();
        let (centered, digits) = match rest.strip_prefix('c') {
            Some(digits) => (true, digits),
            None => (false, rest),
        };
        let order = digits.parse::<u32>().map_err(|_| invalid())?;

        Ok(Self::new(family, order, centered))
    }
}
