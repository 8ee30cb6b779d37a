use tracing::debug;

use crate::dwt_filter::common::error::{FilterError, Result};
use crate::dwt_filter::kernel::types::{WaveletDescriptor, WaveletFamily};
use crate::dwt_filter::kernel::{Kernel, bspline, daubechies};

const HAAR_ORDERS: [u32; 1] = [2];
const DAUBECHIES_ORDERS: [u32; 9] = [4, 6, 8, 10, 12, 14, 16, 18, 20];

/// Orders the registry accepts for `family`.
pub fn supported_orders(family: WaveletFamily) -> &'static [u32] {
    match family {
        WaveletFamily::Haar => &HAAR_ORDERS,
        WaveletFamily::Daubechies => &DAUBECHIES_ORDERS,
        WaveletFamily::BSpline => &bspline::ORDERS,
    }
}

fn is_supported(descriptor: &WaveletDescriptor) -> bool {
    supported_orders(descriptor.family).contains(&descriptor.order)
}

/// Builds the kernel for `descriptor`, or fails with
/// [`FilterError::InvalidWavelet`] when the family does not support the order.
pub fn resolve(descriptor: WaveletDescriptor) -> Result<Kernel> {
    if !is_supported(&descriptor) {
        return Err(FilterError::InvalidWavelet {
            family: descriptor.family,
            order: descriptor.order,
        });
    }

    let kernel = match descriptor.family {
        WaveletFamily::Haar | WaveletFamily::Daubechies => {
            let h = daubechies::lowpass(descriptor.order as usize);
            Kernel::from_lowpass(descriptor, h.clone(), h)
        }
        WaveletFamily::BSpline => {
            let (analysis, synthesis) = bspline::lowpass_pair(descriptor.order);
            Kernel::from_lowpass(descriptor, analysis, synthesis)
        }
    };

    debug!(
        "Resolved wavelet {} ({} taps, offset {})",
        descriptor,
        kernel.filter_length(),
        kernel.offset()
    );
    Ok(kernel)
}
