//! Daubechies extremal-phase low-pass filters.
//!
//! The filter with `2N` taps is obtained by spectral factorization of the
//! Daubechies polynomial `P(y) = sum_{k<N} C(N-1+k, k) y^k` where
//! `y = (2 - z - 1/z) / 4`. Each root of `P` maps to a reciprocal pair of
//! z-plane zeros; keeping the zero inside the unit circle for every pair and
//! adding `N` zeros at `z = -1` yields the minimum-phase filter.

use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};

use num_complex::Complex64;

use super::binomial;

const MAX_ITERATIONS: usize = 1000;
const ROOT_TOLERANCE: f64 = 1e-15;

/// Low-pass analysis filter with `taps` coefficients, normalized so that the
/// coefficients sum to `sqrt(2)` (and their squares sum to 1).
pub(super) fn lowpass(taps: usize) -> Vec<f64> {
    let n = taps / 2;
    if n <= 1 {
        return vec![FRAC_1_SQRT_2; 2];
    }

    let p: Vec<f64> = (0..n).map(|k| binomial(n - 1 + k, k)).collect();

    let mut poly = vec![Complex64::new(1.0, 0.0)];
    for _ in 0..n {
        poly = poly_mul(&poly, &[Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)]);
    }
    for y in polynomial_roots(&p) {
        let b = Complex64::new(2.0, 0.0) - y * 4.0;
        let disc = (b * b - 4.0).sqrt();
        let z1 = (b + disc) * 0.5;
        let z2 = (b - disc) * 0.5;
        let zero = if z1.norm() < 1.0 { z1 } else { z2 };
        poly = poly_mul(&poly, &[-zero, Complex64::new(1.0, 0.0)]);
    }

    // Ascending powers of z put the energy at the tail; reverse for the
    // conventional ordering (h[0] = 0.48296... for four taps).
    let mut h: Vec<f64> = poly.iter().rev().map(|c| c.re).collect();
    let scale = SQRT_2 / h.iter().sum::<f64>();
    for v in h.iter_mut() {
        *v *= scale;
    }
    h
}

fn poly_mul(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    let mut out = vec![Complex64::new(0.0, 0.0); a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

fn eval(coeffs: &[Complex64], x: Complex64) -> Complex64 {
    coeffs
        .iter()
        .rev()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * x + c)
}

/// Roots of the real polynomial with ascending coefficients `coeffs`
/// (Durand-Kerner iteration).
fn polynomial_roots(coeffs: &[f64]) -> Vec<Complex64> {
    let degree = coeffs.len() - 1;
    if degree == 0 {
        return Vec::new();
    }
    let lead = coeffs[degree];
    let monic: Vec<Complex64> = coeffs
        .iter()
        .map(|&c| Complex64::new(c / lead, 0.0))
        .collect();

    let seed = Complex64::new(0.4, 0.9);
    let mut roots: Vec<Complex64> = (0..degree).map(|i| seed.powu(i as u32)).collect();

    for _ in 0..MAX_ITERATIONS {
        let mut max_delta = 0.0f64;
        for i in 0..degree {
            let mut den = Complex64::new(1.0, 0.0);
            for j in 0..degree {
                if i != j {
                    den *= roots[i] - roots[j];
                }
            }
            let delta = eval(&monic, roots[i]) / den;
            roots[i] -= delta;
            max_delta = max_delta.max(delta.norm());
        }
        if max_delta < ROOT_TOLERANCE {
            break;
        }
    }
    roots
}
