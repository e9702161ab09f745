// Copyright 2025 the Pillbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float math shims for `no_std` builds, mirroring kurbo's `std`/`libm`
//! strategy.

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("pillbox_presentation requires either the `std` or `libm` feature");

#[cfg(feature = "std")]
#[inline]
pub(crate) fn sin(x: f64) -> f64 {
    x.sin()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn sin(x: f64) -> f64 {
    libm::sin(x)
}
