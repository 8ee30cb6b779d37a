//! Biorthogonal B-spline (Cohen-Daubechies-Feauveau) filter pairs.
//!
//! For order `100 * nr + nd` the synthesis low-pass is the binomial spline
//! `sqrt(2) * ((1 + z) / 2)^nr` and the analysis low-pass is its dual
//! `sqrt(2) * ((1 + z) / 2)^nd * Q(z)` with
//! `Q(z) = sum_{k<K} C(K-1+k, k) (-1/4)^k (1 - z)^(2k) z^(K-1-k)`,
//! `K = (nr + nd) / 2`. Both filters are symmetric and are placed around a
//! common center inside one even-length support, which makes
//! `sum_k analysis[k] * synthesis[k + 2m] = delta(m)`.

use std::f64::consts::SQRT_2;

use super::binomial;

/// Orders accepted for the B-spline family.
pub(super) const ORDERS: [u32; 11] = [103, 105, 202, 204, 206, 208, 301, 303, 305, 307, 309];

/// Returns `(analysis_lowpass, synthesis_lowpass)` padded to the same even length.
pub(super) fn lowpass_pair(order: u32) -> (Vec<f64>, Vec<f64>) {
    let nr = (order / 100) as usize;
    let nd = (order % 100) as usize;
    let k = (nr + nd) / 2;

    let synthesis = binomial_filter(nr);

    let mut q = vec![0.0; 2 * k - 1];
    for j in 0..k {
        let weight = binomial(k - 1 + j, j) * (-0.25f64).powi(j as i32);
        let shift = k - 1 - j;
        for (i, c) in one_minus_z_pow(2 * j).into_iter().enumerate() {
            q[shift + i] += weight * c;
        }
    }
    let analysis = poly_mul(&binomial_filter(nd), &q);

    let support = analysis.len().max(synthesis.len());
    let padded = support + support % 2;
    (center(&analysis, support, padded), center(&synthesis, support, padded))
}

/// `sqrt(2) * ((1 + z) / 2)^n` as ascending coefficients.
fn binomial_filter(n: usize) -> Vec<f64> {
    let scale = SQRT_2 / 2f64.powi(n as i32);
    (0..=n).map(|i| binomial(n, i) * scale).collect()
}

/// `(1 - z)^n` as ascending coefficients.
fn one_minus_z_pow(n: usize) -> Vec<f64> {
    (0..=n)
        .map(|i| if i % 2 == 0 { binomial(n, i) } else { -binomial(n, i) })
        .collect()
}

fn poly_mul(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

fn center(filter: &[f64], support: usize, padded: usize) -> Vec<f64> {
    let offset = (support - filter.len()) / 2;
    let mut out = vec![0.0; padded];
    out[offset..offset + filter.len()].copy_from_slice(filter);
    out
}
