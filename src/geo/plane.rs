// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! Infinite plane

use super::epsilon::is_zero;
use super::error::{GeoError, GeoResult};
use super::line::Line;
use super::matrix::Matrix;
use super::vector::Vector;

/// Infinite plane through `pos` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub pos: Vector,
    pub normal: Vector,
}

impl Plane {
    /// Construct a plane, normalizing the normal.
    pub fn new(pos: Vector, normal: Vector) -> GeoResult<Plane> {
        Ok(Plane {
            pos,
            normal: normal.normalized()?,
        })
    }

    /// Plane of constant x.
    pub fn from_x(x: f64) -> Plane {
        Plane {
            pos: Vector::new(x, 0.0, 0.0),
            normal: Vector::new(1.0, 0.0, 0.0),
        }
    }

    /// Plane of constant y.
    pub fn from_y(y: f64) -> Plane {
        Plane {
            pos: Vector::new(0.0, y, 0.0),
            normal: Vector::new(0.0, 1.0, 0.0),
        }
    }

    /// Plane of constant z.
    pub fn from_z(z: f64) -> Plane {
        Plane {
            pos: Vector::new(0.0, 0.0, z),
            normal: Vector::new(0.0, 0.0, 1.0),
        }
    }

    pub fn from_points(a: Vector, b: Vector, c: Vector) -> GeoResult<Plane> {
        Plane::new(b, (b - a).cross(c - a))
    }

    /// Return the vertical plane along a line in the xy plane.
    pub fn from_line_2d(line: &Line) -> GeoResult<Plane> {
        Plane::new(line.pos.xy(), line.dir.ortho_2d())
    }

    pub fn translated(&self, vector: Vector) -> Plane {
        Plane {
            pos: self.pos + vector,
            normal: self.normal,
        }
    }

    pub fn transformed(&self, matrix: &Matrix) -> GeoResult<Plane> {
        Ok(Plane {
            pos: self.pos.transformed(matrix),
            normal: self.normal.transformed_normal(matrix)?,
        })
    }

    /// Return the signed distance in the direction of the normal.
    pub fn distance(&self, vector: Vector) -> f64 {
        (vector - self.pos).dot(self.normal)
    }

    /// Project a point onto the plane along the normal.
    pub fn project_normal(&self, vector: Vector) -> GeoResult<Vector> {
        self.intersect_line(&Line {
            pos: vector,
            dir: self.normal,
        })
    }

    /// Project a point onto the plane along the x axis.
    pub fn project_x(&self, vector: Vector) -> GeoResult<Vector> {
        if is_zero(self.normal.x) {
            return Err(GeoError::ParallelLineAndPlane);
        }
        let dist = self.normal.dot(self.pos - vector) / self.normal.x;
        Ok(Vector::new(vector.x + dist, vector.y, vector.z))
    }

    /// Project a point onto the plane along the y axis.
    pub fn project_y(&self, vector: Vector) -> GeoResult<Vector> {
        if is_zero(self.normal.y) {
            return Err(GeoError::ParallelLineAndPlane);
        }
        let dist = self.normal.dot(self.pos - vector) / self.normal.y;
        Ok(Vector::new(vector.x, vector.y + dist, vector.z))
    }

    /// Project a point onto the plane along the z axis.
    pub fn project_z(&self, vector: Vector) -> GeoResult<Vector> {
        if is_zero(self.normal.z) {
            return Err(GeoError::ParallelLineAndPlane);
        }
        let dist = self.normal.dot(self.pos - vector) / self.normal.z;
        Ok(Vector::new(vector.x, vector.y, vector.z + dist))
    }

    /// Intersect with a line, Bourke's method.
    pub fn intersect_line(&self, line: &Line) -> GeoResult<Vector> {
        let numer = self.normal.dot(self.pos - line.pos);
        let denom = self.normal.dot(line.dir);

        if is_zero(denom) {
            return Err(GeoError::ParallelLineAndPlane);
        }

        Ok(line.pos + line.dir * (numer / denom))
    }

    /// Intersect three planes, Bourke's cross-product formula.
    pub fn intersect_planes(&self, other1: &Plane, other2: &Plane) -> GeoResult<Vector> {
        let dot1 = other1.normal.dot(other1.pos);
        let dot2 = other2.normal.dot(other2.pos);
        let dot3 = self.normal.dot(self.pos);

        let cross23 = other2.normal.cross(self.normal);
        let cross31 = self.normal.cross(other1.normal);
        let cross12 = other1.normal.cross(other2.normal);

        let numer = cross23 * dot1 + cross31 * dot2 + cross12 * dot3;
        let denom = other1.normal.dot(cross23);

        if is_zero(denom) {
            return Err(GeoError::ParallelPlanes);
        }

        Ok(numer / denom)
    }
}
