// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! Affine 4x4 transform, row-major, row-vector convention

use super::epsilon::is_zero;
use super::error::GeoResult;
use super::vector::Vector;
use std::ops::{Add, Mul, Sub};

/// Affine transform. Composition is `self * other`, applied
/// left-to-right on row vectors, so `p.transformed(&(a * b))`
/// applies `a` first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub data: [f64; 16],
}

#[rustfmt::skip]
const IDENTITY: [f64; 16] = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

impl Default for Matrix {
    fn default() -> Self {
        Matrix { data: IDENTITY }
    }
}

impl Matrix {
    pub fn new(data: [f64; 16]) -> Self {
        Matrix { data }
    }

    /// Return a rotation that aligns the source to the target vector.
    ///
    /// Rodrigues' formula via the skew-symmetric cross-product matrix.
    /// Already-aligned vectors yield the identity; exactly opposite
    /// vectors yield a half turn about an arbitrary perpendicular axis.
    pub fn from_alignment(source_dir: Vector, target_dir: Vector) -> GeoResult<Matrix> {
        let source = source_dir.normalized()?;
        let target = target_dir.normalized()?;

        if source.is_close(target) {
            return Ok(Matrix::default());
        }
        if source.is_close(-target) {
            let mut axis = source.cross(Vector::new(1.0, 0.0, 0.0));
            if is_zero(axis.magnitude()) {
                axis = source.cross(Vector::new(0.0, 1.0, 0.0));
            }
            return Ok(Matrix::half_turn(axis.normalized()?));
        }

        let c = source.cross(target);
        let d = source.dot(target);
        #[rustfmt::skip]
        let skew = Matrix::new([
            0.0,  c.z, -c.y, 0.0,
            -c.z, 0.0,  c.x, 0.0,
            c.y, -c.x,  0.0, 0.0,
            0.0,  0.0,  0.0, 0.0,
        ]);
        Ok(Matrix::default() + skew + skew * skew * (1.0 / (1.0 + d)))
    }

    /// Rotation by pi about a unit axis, `2uu' - I`.
    fn half_turn(u: Vector) -> Matrix {
        #[rustfmt::skip]
        let data = [
            2.0*u.x*u.x - 1.0, 2.0*u.x*u.y,       2.0*u.x*u.z,       0.0,
            2.0*u.x*u.y,       2.0*u.y*u.y - 1.0, 2.0*u.y*u.z,       0.0,
            2.0*u.x*u.z,       2.0*u.y*u.z,       2.0*u.z*u.z - 1.0, 0.0,
            0.0,               0.0,               0.0,               1.0,
        ];
        Matrix::new(data)
    }

    pub fn mirrored_x(self) -> Matrix {
        #[rustfmt::skip]
        let mirror = Matrix::new([
            -1.0, 0.0, 0.0, 0.0,
            0.0,  1.0, 0.0, 0.0,
            0.0,  0.0, 1.0, 0.0,
            0.0,  0.0, 0.0, 1.0,
        ]);
        self * mirror
    }

    pub fn mirrored_y(self) -> Matrix {
        #[rustfmt::skip]
        let mirror = Matrix::new([
            1.0,  0.0, 0.0, 0.0,
            0.0, -1.0, 0.0, 0.0,
            0.0,  0.0, 1.0, 0.0,
            0.0,  0.0, 0.0, 1.0,
        ]);
        self * mirror
    }

    pub fn mirrored_z(self) -> Matrix {
        #[rustfmt::skip]
        let mirror = Matrix::new([
            1.0, 0.0,  0.0, 0.0,
            0.0, 1.0,  0.0, 0.0,
            0.0, 0.0, -1.0, 0.0,
            0.0, 0.0,  0.0, 1.0,
        ]);
        self * mirror
    }

    pub fn rotated_x(self, angle: f64) -> Matrix {
        let cos = angle.cos();
        let sin = angle.sin();
        #[rustfmt::skip]
        let rotation = Matrix::new([
            1.0,  0.0, 0.0, 0.0,
            0.0,  cos, sin, 0.0,
            0.0, -sin, cos, 0.0,
            0.0,  0.0, 0.0, 1.0,
        ]);
        self * rotation
    }

    pub fn rotated_y(self, angle: f64) -> Matrix {
        let cos = angle.cos();
        let sin = angle.sin();
        #[rustfmt::skip]
        let rotation = Matrix::new([
            cos, 0.0, -sin, 0.0,
            0.0, 1.0,  0.0, 0.0,
            sin, 0.0,  cos, 0.0,
            0.0, 0.0,  0.0, 1.0,
        ]);
        self * rotation
    }

    pub fn rotated_z(self, angle: f64) -> Matrix {
        let cos = angle.cos();
        let sin = angle.sin();
        #[rustfmt::skip]
        let rotation = Matrix::new([
            cos,  sin, 0.0, 0.0,
            -sin, cos, 0.0, 0.0,
            0.0,  0.0, 1.0, 0.0,
            0.0,  0.0, 0.0, 1.0,
        ]);
        self * rotation
    }

    pub fn rotated_x_about(self, angle: f64, center: Vector) -> Matrix {
        self.translated(-center).rotated_x(angle).translated(center)
    }

    pub fn rotated_y_about(self, angle: f64, center: Vector) -> Matrix {
        self.translated(-center).rotated_y(angle).translated(center)
    }

    pub fn rotated_z_about(self, angle: f64, center: Vector) -> Matrix {
        self.translated(-center).rotated_z(angle).translated(center)
    }

    pub fn translated(self, vector: Vector) -> Matrix {
        #[rustfmt::skip]
        let translation = Matrix::new([
            1.0,      0.0,      0.0,      0.0,
            0.0,      1.0,      0.0,      0.0,
            0.0,      0.0,      1.0,      0.0,
            vector.x, vector.y, vector.z, 1.0,
        ]);
        self * translation
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, other: Matrix) -> Matrix {
        let mut data = [0.0; 16];
        for (i, value) in data.iter_mut().enumerate() {
            *value = self.data[i] + other.data[i];
        }
        Matrix::new(data)
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, other: Matrix) -> Matrix {
        let mut data = [0.0; 16];
        for (i, value) in data.iter_mut().enumerate() {
            *value = self.data[i] - other.data[i];
        }
        Matrix::new(data)
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, other: Matrix) -> Matrix {
        let s = &self.data;
        let o = &other.data;
        let mut data = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += s[row * 4 + k] * o[k * 4 + col];
                }
                data[row * 4 + col] = sum;
            }
        }
        Matrix::new(data)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        let mut data = [0.0; 16];
        for (i, value) in data.iter_mut().enumerate() {
            *value = self.data[i] * scalar;
        }
        Matrix::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_identity() {
        let v = Vector::new(1.0, 2.0, 3.0);
        assert_eq!(v.transformed(&Matrix::default()), v);
    }

    #[test]
    fn test_from_alignment() {
        let source = Vector::new(1.0, 2.0, 3.0);
        let target = Vector::new(-5.0, 0.2, 0.9);
        let matrix = Matrix::from_alignment(source, target).unwrap();
        let aligned = source.normalized().unwrap().transformed(&matrix);
        assert!(aligned.is_close(target.normalized().unwrap()));
    }

    #[test]
    fn test_from_alignment_aligned() {
        let dir = Vector::new(0.0, 0.0, 2.0);
        let matrix = Matrix::from_alignment(dir, dir).unwrap();
        assert_eq!(matrix, Matrix::default());
    }

    #[test]
    fn test_from_alignment_opposite() {
        for dir in [
            Vector::new(1.0, 0.0, 0.0),
            Vector::new(0.0, 0.0, 1.0),
            Vector::new(1.0, -2.0, 3.0),
        ] {
            let matrix = Matrix::from_alignment(dir, -dir).unwrap();
            let turned = dir.normalized().unwrap().transformed(&matrix);
            assert!(turned.is_close(-dir.normalized().unwrap()));
        }
    }

    #[test]
    fn test_rotated() {
        let v = Vector::new(1.0, 0.0, 0.0);
        let turned = v.transformed(&Matrix::default().rotated_z(FRAC_PI_2));
        assert!(turned.is_close(Vector::new(0.0, 1.0, 0.0)));

        let turned = v.transformed(&Matrix::default().rotated_y(FRAC_PI_2));
        assert!(turned.is_close(Vector::new(0.0, 0.0, -1.0)));

        let v = Vector::new(0.0, 1.0, 0.0);
        let turned = v.transformed(&Matrix::default().rotated_x(FRAC_PI_2));
        assert!(turned.is_close(Vector::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_rotated_about_center() {
        let center = Vector::new(1.0, 1.0, 0.0);
        let matrix = Matrix::default().rotated_z_about(PI, center);
        let turned = Vector::new(2.0, 1.0, 0.0).transformed(&matrix);
        assert!(turned.is_close(Vector::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_translated() {
        let matrix = Matrix::default().translated(Vector::new(1.0, 2.0, 3.0));
        let v = Vector::ZERO.transformed(&matrix);
        assert_eq!(v, Vector::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_composition_order() {
        // Rotate about z, then translate
        let matrix = Matrix::default()
            .rotated_z(FRAC_PI_2)
            .translated(Vector::new(10.0, 0.0, 0.0));
        let v = Vector::new(1.0, 0.0, 0.0).transformed(&matrix);
        assert!(v.is_close(Vector::new(10.0, 1.0, 0.0)));
    }

    #[test]
    fn test_mirrored() {
        let v = Vector::new(1.0, 2.0, 3.0);
        assert_eq!(
            v.transformed(&Matrix::default().mirrored_x()),
            v.mirrored_x()
        );
        assert_eq!(
            v.transformed(&Matrix::default().mirrored_y()),
            v.mirrored_y()
        );
        assert_eq!(
            v.transformed(&Matrix::default().mirrored_z()),
            v.mirrored_z()
        );
    }

    #[test]
    fn test_scalar_scale() {
        let doubled = Matrix::default() * 2.0;
        assert_abs_diff_eq!(doubled.data[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(doubled.data[5], 2.0, epsilon = 1e-12);
    }
}
