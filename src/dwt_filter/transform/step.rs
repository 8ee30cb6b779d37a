use crate::dwt_filter::kernel::Kernel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

/// One periodic filter-bank step over `data[..n]`.
///
/// Forward writes the `n/2` approximation coefficients followed by the `n/2`
/// details; inverse consumes that layout and rebuilds the signal. `work`
/// must hold at least `n` values.
pub(super) fn step(kernel: &Kernel, data: &mut [f64], n: usize, direction: Direction, work: &mut [f64]) {
    let half = n / 2;
    let taps = kernel.filter_length();
    // Keeps (i + nmod + k) non-negative while wrapping like i - offset + k.
    let nmod = taps * n - kernel.offset();
    let work = &mut work[..n];
    work.fill(0.0);

    match direction {
        Direction::Forward => {
            let (h, g) = kernel.analysis();
            for ii in 0..half {
                let ni = 2 * ii + nmod;
                let mut approx = 0.0;
                let mut detail = 0.0;
                for k in 0..taps {
                    let sample = data[(ni + k) % n];
                    approx += h[k] * sample;
                    detail += g[k] * sample;
                }
                work[ii] = approx;
                work[ii + half] = detail;
            }
        }
        Direction::Inverse => {
            let (h, g) = kernel.synthesis();
            for ii in 0..half {
                let ni = 2 * ii + nmod;
                let approx = data[ii];
                let detail = data[ii + half];
                for k in 0..taps {
                    work[(ni + k) % n] += h[k] * approx + g[k] * detail;
                }
            }
        }
    }

    data[..n].copy_from_slice(work);
}

/// Full-depth 1D pyramid over `data[..n]` (`n` a power of two).
pub(super) fn pyramid(kernel: &Kernel, data: &mut [f64], n: usize, direction: Direction, work: &mut [f64]) {
    match direction {
        Direction::Forward => {
            let mut len = n;
            while len >= 2 {
                step(kernel, data, len, direction, work);
                len >>= 1;
            }
        }
        Direction::Inverse => {
            let mut len = 2;
            while len <= n {
                step(kernel, data, len, direction, work);
                len <<= 1;
            }
        }
    }
}
