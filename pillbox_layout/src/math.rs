// Copyright 2025 the Pillbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float math shims for `no_std` builds, mirroring kurbo's `std`/`libm`
//! strategy.

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("pillbox_layout requires either the `std` or `libm` feature");

#[cfg(feature = "std")]
#[inline]
pub(crate) fn ceil(x: f64) -> f64 {
    x.ceil()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn ceil(x: f64) -> f64 {
    libm::ceil(x)
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn floor(x: f64) -> f64 {
    x.floor()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn floor(x: f64) -> f64 {
    libm::floor(x)
}
