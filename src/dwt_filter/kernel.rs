//! Wavelet kernel module
//!
//! Resolves a [`WaveletDescriptor`] into an immutable [`Kernel`] holding the
//! analysis and synthesis filters used by the transform engine.

mod bspline;
mod daubechies;
mod registry;
pub mod types;

pub use registry::{resolve, supported_orders};
pub use types::{WaveletDescriptor, WaveletFamily};

/// Concrete filter bank for one descriptor.
///
/// `h1`/`g1` are the analysis low/high-pass filters, `h2`/`g2` the synthesis
/// ones; all four share the same even length. For orthogonal families the
/// analysis and synthesis filters coincide.
#[derive(Debug, Clone)]
pub struct Kernel {
    descriptor: WaveletDescriptor,
    h1: Vec<f64>,
    g1: Vec<f64>,
    h2: Vec<f64>,
    g2: Vec<f64>,
    offset: usize,
}

impl Kernel {
    fn from_lowpass(descriptor: WaveletDescriptor, analysis: Vec<f64>, synthesis: Vec<f64>) -> Self {
        let g1 = alternating_flip(&synthesis);
        let g2 = alternating_flip(&analysis);
        let offset = if descriptor.centered { analysis.len() / 2 } else { 0 };
        Self {
            descriptor,
            h1: analysis,
            g1,
            h2: synthesis,
            g2,
            offset,
        }
    }

    pub fn descriptor(&self) -> WaveletDescriptor {
        self.descriptor
    }

    /// Number of taps; also the shortest row/column the kernel can transform.
    pub fn filter_length(&self) -> usize {
        self.h1.len()
    }

    /// Start of the periodic filter window relative to the output position.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn analysis(&self) -> (&[f64], &[f64]) {
        (&self.h1, &self.g1)
    }

    pub fn synthesis(&self) -> (&[f64], &[f64]) {
        (&self.h2, &self.g2)
    }
}

/// `g[k] = (-1)^k h[n-1-k]`
fn alternating_flip(h: &[f64]) -> Vec<f64> {
    let n = h.len();
    (0..n)
        .map(|k| if k % 2 == 0 { h[n - 1 - k] } else { -h[n - 1 - k] })
        .collect()
}

pub(crate) fn binomial(n: usize, k: usize) -> f64 {
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}
