// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! 3D point/direction value type

use super::epsilon::is_zero;
use super::error::{GeoError, GeoResult};
use super::matrix::Matrix;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Immutable 3D point or direction.
///
/// Arithmetic goes through the standard operator traits. Equality is
/// exact; epsilon-aware comparison is only available through the named
/// [`Vector::is_close`] method so that tolerance semantics stay visible
/// at call sites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Compute the normal of a polygon via Newell's method.
    ///
    /// Fails with [`GeoError::DegenerateVector`] for fewer than 3
    /// non-collinear points.
    pub fn from_surface_normal(points: &[Vector]) -> GeoResult<Vector> {
        let mut x = 0.0;
        let mut y = 0.0;
        let mut z = 0.0;
        for i in 0..points.len() {
            let p = points[i];
            let q = points[(i + 1) % points.len()];
            x += (p.y - q.y) * (p.z + q.z);
            y += (p.z - q.z) * (p.x + q.x);
            z += (p.x - q.x) * (p.y + q.y);
        }
        Vector::new(x, y, z).normalized()
    }

    pub fn xy(self) -> Vector {
        Vector::new(self.x, self.y, 0.0)
    }

    pub fn xz(self) -> Vector {
        Vector::new(self.x, 0.0, self.z)
    }

    pub fn yz(self) -> Vector {
        Vector::new(0.0, self.y, self.z)
    }

    pub fn mirrored_x(self) -> Vector {
        Vector::new(-self.x, self.y, self.z)
    }

    pub fn mirrored_y(self) -> Vector {
        Vector::new(self.x, -self.y, self.z)
    }

    pub fn mirrored_z(self) -> Vector {
        Vector::new(self.x, self.y, -self.z)
    }

    pub fn translated(self, vector: Vector) -> Vector {
        self + vector
    }

    /// Apply an affine transform, row-vector convention.
    pub fn transformed(self, matrix: &Matrix) -> Vector {
        let m = &matrix.data;
        Vector::new(
            self.x * m[0] + self.y * m[4] + self.z * m[8] + m[12],
            self.x * m[1] + self.y * m[5] + self.z * m[9] + m[13],
            self.x * m[2] + self.y * m[6] + self.z * m[10] + m[14],
        )
    }

    /// Apply the rotational part of a transform and renormalize.
    pub fn transformed_normal(self, matrix: &Matrix) -> GeoResult<Vector> {
        let m = &matrix.data;
        Vector::new(
            self.x * m[0] + self.y * m[4] + self.z * m[8],
            self.x * m[1] + self.y * m[5] + self.z * m[9],
            self.x * m[2] + self.y * m[6] + self.z * m[10],
        )
        .normalized()
    }

    /// Snap almost-zero coordinates to positive zero exactly.
    pub fn snapped(self) -> Vector {
        Vector::new(
            if is_zero(self.x) { 0.0 } else { self.x },
            if is_zero(self.y) { 0.0 } else { self.y },
            if is_zero(self.z) { 0.0 } else { self.z },
        )
    }

    pub fn normalized(self) -> GeoResult<Vector> {
        let magnitude = self.magnitude();
        if is_zero(magnitude) {
            return Err(GeoError::DegenerateVector);
        }
        Ok(self / magnitude)
    }

    pub fn cross(self, other: Vector) -> Vector {
        Vector::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn magnitude(self) -> f64 {
        self.mag_squared().sqrt()
    }

    pub fn mag_squared(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Return the angle difference to the other vector, between 0 and pi.
    pub fn angle_between(self, other: Vector) -> GeoResult<f64> {
        let cos = self.normalized()?.dot(other.normalized()?);
        Ok(cos.clamp(-1.0, 1.0).acos())
    }

    /// Epsilon-aware closeness, component-wise absolute tolerance.
    pub fn is_close(self, other: Vector) -> bool {
        is_zero(self.x - other.x) && is_zero(self.y - other.y) && is_zero(self.z - other.z)
    }

    /// Return the counterclockwise orthogonal vector in the xy plane.
    pub fn ortho_2d(self) -> Vector {
        Vector::new(-self.y, self.x, 0.0)
    }

    pub fn normalized_2d(self) -> GeoResult<Vector> {
        let magnitude = self.magnitude_2d();
        if is_zero(magnitude) {
            return Err(GeoError::DegenerateVector);
        }
        Ok(Vector::new(self.x / magnitude, self.y / magnitude, 0.0))
    }

    pub fn magnitude_2d(self) -> f64 {
        self.mag_squared_2d().sqrt()
    }

    pub fn mag_squared_2d(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Return the angle difference to the x axis, between -pi and pi.
    pub fn angle_2d(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Strict lexicographic order over (x, y, z).
    pub fn cmp_xyz(&self, other: &Vector) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
            .then_with(|| self.z.total_cmp(&other.z))
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        Vector::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, scalar: f64) -> Vector {
        Vector::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}
