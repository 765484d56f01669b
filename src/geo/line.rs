// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! Infinite 3D line

use super::epsilon::is_zero;
use super::error::{GeoError, GeoResult};
use super::matrix::Matrix;
use super::vector::Vector;

/// Infinite line through `pos` along the unit vector `dir`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub pos: Vector,
    pub dir: Vector,
}

impl Line {
    /// Construct a line, normalizing the direction.
    pub fn new(pos: Vector, direction: Vector) -> GeoResult<Line> {
        Ok(Line {
            pos,
            dir: direction.normalized()?,
        })
    }

    pub fn translated(&self, vector: Vector) -> Line {
        Line {
            pos: self.pos + vector,
            dir: self.dir,
        }
    }

    pub fn transformed(&self, matrix: &Matrix) -> GeoResult<Line> {
        Ok(Line {
            pos: self.pos.transformed(matrix),
            dir: self.dir.transformed_normal(matrix)?,
        })
    }

    /// Return the absolute distance to the line.
    pub fn distance(&self, vector: Vector) -> f64 {
        let closest = self.pos + self.dir * self.dir.dot(vector - self.pos);
        (closest - vector).magnitude()
    }

    /// Return the signed distance to the line in the xy plane.
    ///
    /// The distance is positive on the clockwise side of the line
    /// and negative on the other.
    pub fn distance_2d(&self, vector: Vector) -> GeoResult<f64> {
        let dir = self.dir.normalized_2d()?;
        Ok(dir.x * (self.pos.y - vector.y) - dir.y * (self.pos.x - vector.x))
    }

    /// Return the midpoint of the closest points between two lines.
    ///
    /// Bourke's closest-point method. The result is the exact
    /// intersection when the lines truly meet. Fails with
    /// [`GeoError::ParallelLines`] otherwise.
    pub fn intersect(&self, other: &Line) -> GeoResult<Vector> {
        let delta = self.pos - other.pos;

        let doo = delta.dot(other.dir);
        let ds = delta.dot(self.dir);
        let os = other.dir.dot(self.dir);
        let oo = other.dir.dot(other.dir);
        let ss = self.dir.dot(self.dir);

        let numer = doo * os - ds * oo;
        let denom = ss * oo - os * os;

        if is_zero(denom) {
            return Err(GeoError::ParallelLines);
        }

        let mu_a = numer / denom;
        let mu_b = (doo + mu_a * os) / oo;

        let a = self.pos + self.dir * mu_a;
        let b = other.pos + other.dir * mu_b;
        Ok((a + b) / 2.0)
    }
}
