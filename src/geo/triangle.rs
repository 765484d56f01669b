// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! 3-point primitive

use super::epsilon::is_zero;
use super::error::GeoResult;
use super::matrix::Matrix;
use super::vector::Vector;

/// Ordered triangle. Counterclockwise point order defines the
/// outward normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vector,
    pub b: Vector,
    pub c: Vector,
}

impl Triangle {
    pub fn new(a: Vector, b: Vector, c: Vector) -> Triangle {
        Triangle { a, b, c }
    }

    /// Check if the area is within epsilon of zero. Used throughout
    /// the meshing code as the cheap validity test.
    pub fn is_degenerate(&self) -> bool {
        is_zero(self.area())
    }

    pub fn area(&self) -> f64 {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(ac).magnitude() / 2.0
    }

    /// Return the circumradius, or 0 for degenerate triangles.
    pub fn circumradius(&self) -> f64 {
        let ca = self.a - self.c;
        let cb = self.b - self.c;
        let numer = ca.magnitude() * cb.magnitude() * (ca - cb).magnitude();
        let denom = 2.0 * ca.cross(cb).magnitude();
        if is_zero(denom) {
            0.0
        } else {
            numer / denom
        }
    }

    /// Return the unit normal. Fails for degenerate triangles.
    pub fn normal(&self) -> GeoResult<Vector> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(ac).normalized()
    }

    pub fn reversed(&self) -> Triangle {
        Triangle::new(self.c, self.b, self.a)
    }

    pub fn mirrored_x(&self) -> Triangle {
        Triangle::new(self.a.mirrored_x(), self.b.mirrored_x(), self.c.mirrored_x())
    }

    pub fn mirrored_y(&self) -> Triangle {
        Triangle::new(self.a.mirrored_y(), self.b.mirrored_y(), self.c.mirrored_y())
    }

    pub fn mirrored_z(&self) -> Triangle {
        Triangle::new(self.a.mirrored_z(), self.b.mirrored_z(), self.c.mirrored_z())
    }

    pub fn translated(&self, vector: Vector) -> Triangle {
        Triangle::new(self.a + vector, self.b + vector, self.c + vector)
    }

    pub fn transformed(&self, matrix: &Matrix) -> Triangle {
        Triangle::new(
            self.a.transformed(matrix),
            self.b.transformed(matrix),
            self.c.transformed(matrix),
        )
    }

    pub fn snapped(&self) -> Triangle {
        Triangle::new(self.a.snapped(), self.b.snapped(), self.c.snapped())
    }
}
