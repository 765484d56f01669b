// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! Typed failures for the geometry kernel.
//!
//! Every failure is unrecoverable at the point of occurrence and
//! propagates to the caller unchanged. The kernel never retries and
//! never coerces an error to zero or NaN, except where a method
//! documents a zero result for degenerate input.

use thiserror::Error;

/// Result alias used throughout the kernel.
pub type GeoResult<T> = Result<T, GeoError>;

/// Geometry failures surfaced by the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeoError {
    /// Normalization or normal/angle computation on a zero-magnitude
    /// or zero-area input.
    #[error("cannot normalize a vector of zero magnitude")]
    DegenerateVector,

    /// Intersection requested between parallel lines.
    #[error("cannot find intersection of parallel lines")]
    ParallelLines,

    /// Three-plane intersection with a vanishing triple product.
    #[error("cannot find intersection of parallel planes")]
    ParallelPlanes,

    /// Line-plane intersection or axis projection with the line
    /// parallel to the plane.
    #[error("cannot find intersection of parallel line and plane")]
    ParallelLineAndPlane,

    /// A hole boundary with no visible bridge point on the outer
    /// polygon. Indicates violated face preconditions (intersecting,
    /// nested, or out-of-winding holes).
    #[error("overlapping points or malformed polygon")]
    MalformedPolygon,
}
