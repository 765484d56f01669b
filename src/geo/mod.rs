// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! Geometry kernel - epsilon-robust primitives, stitching, and
//! triangulation.
//!
//! Everything here is an immutable value type; operations return new
//! values. Calls are safe to run concurrently because nothing is
//! mutated in place.

mod circle;
mod edge;
mod epsilon;
mod error;
mod face;
mod line;
mod matrix;
mod plane;
mod segment;
mod triangle;
mod vector;

pub use circle::Circle;
pub use edge::Edge;
pub use epsilon::{is_zero, EPSILON};
pub use error::{GeoError, GeoResult};
pub use face::Face;
pub use line::Line;
pub use matrix::Matrix;
pub use plane::Plane;
pub use segment::{ExtendMode, Segment};
pub use triangle::Triangle;
pub use vector::Vector;
