// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! Float comparisons with a shared absolute epsilon.
//!
//! The whole kernel compares against a single absolute threshold:
//! - The base unit is 1mm, with an expected working range of
//!   1um (1e-3) to 1m (1e+3).
//! - STL stores 32bit floats with a machine epsilon of ~1e-7.
//!   Points that are considered separate during construction must
//!   not collapse to identical coordinates in the STL output.
//! - Whether two points are considered separate must not depend on
//!   their proximity to the origin, which rules out a relative
//!   comparison: 100.0000001 vs 100.0000002 and 101.0000001 vs
//!   101.0000002 would otherwise compare differently.

/// Absolute tolerance used by every equality and degeneracy test.
pub const EPSILON: f64 = 1e-6;

/// Check if a value is within [`EPSILON`] of zero.
#[inline]
pub fn is_zero(n: f64) -> bool {
    n.abs() < EPSILON
}
