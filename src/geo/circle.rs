// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! 2D circle in the xy plane

use super::epsilon::is_zero;
use super::error::GeoResult;
use super::line::Line;
use super::vector::Vector;

/// Circle in the xy plane. The z coordinate of the center is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vector,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vector, radius: f64) -> Circle {
        Circle { center, radius }
    }

    /// Return the 0, 1 (tangent), or 2 intersections with a line.
    pub fn intersect_line_2d(&self, line: &Line) -> GeoResult<Vec<Vector>> {
        let center = self.center.xy();
        let line_pos = line.pos.xy();
        let line_dir = line.dir.normalized_2d()?;

        let b = 2.0 * line_dir.dot(line_pos - center);
        let c = center.mag_squared_2d() + line_pos.mag_squared_2d()
            - 2.0 * center.dot(line_pos)
            - self.radius * self.radius;
        let discriminant = b * b - 4.0 * c;

        if is_zero(discriminant) {
            return Ok(vec![line_pos + line_dir * (-b / 2.0)]);
        }
        if discriminant < 0.0 {
            return Ok(vec![]);
        }

        let u_neg = (-b - discriminant.sqrt()) / 2.0;
        let u_pos = (-b + discriminant.sqrt()) / 2.0;
        Ok(vec![line_pos + line_dir * u_neg, line_pos + line_dir * u_pos])
    }

    /// Return the 0, 1, or 2 intersections with another circle.
    ///
    /// Identical centers, circles too far apart, and one circle inside
    /// the other all yield the empty case.
    pub fn intersect_circle_2d(&self, other: &Circle) -> GeoResult<Vec<Vector>> {
        let a = self.center.xy();
        let b = other.center.xy();

        let pitch = (b - a).magnitude_2d();
        let is_separate = pitch > self.radius + other.radius;
        let is_inside = pitch < (self.radius - other.radius).abs();

        if is_zero(pitch) || is_separate || is_inside {
            return Ok(vec![]);
        }

        let mid_dir = (b - a).normalized()?;
        let mid_dist =
            (self.radius * self.radius - other.radius * other.radius + pitch * pitch)
                / (2.0 * pitch);
        let mid_pos = a + mid_dir * mid_dist;
        let chord_half = (self.radius * self.radius - mid_dist * mid_dist).sqrt();

        if is_zero(chord_half) {
            return Ok(vec![mid_pos]);
        }

        let chord_offset = mid_dir.ortho_2d() * chord_half;
        Ok(vec![mid_pos + chord_offset, mid_pos - chord_offset])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains_close(points: &[Vector], expected: Vector) -> bool {
        points.iter().any(|p| p.is_close(expected))
    }

    #[test]
    fn test_intersect_line_2d() {
        let circle = Circle::new(Vector::new(1.0, 0.0, 9.0), 2.0);

        // Secant through the center
        let line = Line::new(Vector::new(1.0, 5.0, 0.0), Vector::new(0.0, 1.0, 0.0)).unwrap();
        let hits = circle.intersect_line_2d(&line).unwrap();
        assert_eq!(hits.len(), 2);
        assert!(contains_close(&hits, Vector::new(1.0, -2.0, 0.0)));
        assert!(contains_close(&hits, Vector::new(1.0, 2.0, 0.0)));

        // Tangent
        let line = Line::new(Vector::new(0.0, 2.0, 0.0), Vector::new(1.0, 0.0, 0.0)).unwrap();
        let hits = circle.intersect_line_2d(&line).unwrap();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].is_close(Vector::new(1.0, 2.0, 0.0)));

        // Miss
        let line = Line::new(Vector::new(0.0, 5.0, 0.0), Vector::new(1.0, 0.0, 0.0)).unwrap();
        assert!(circle.intersect_line_2d(&line).unwrap().is_empty());
    }

    #[test]
    fn test_intersect_circle_2d() {
        let a = Circle::new(Vector::ZERO, 2.0);

        // Two intersections
        let b = Circle::new(Vector::new(2.0, 0.0, 0.0), 2.0);
        let hits = a.intersect_circle_2d(&b).unwrap();
        assert_eq!(hits.len(), 2);
        let chord = 3.0_f64.sqrt();
        assert!(contains_close(&hits, Vector::new(1.0, chord, 0.0)));
        assert!(contains_close(&hits, Vector::new(1.0, -chord, 0.0)));

        // Outer tangent
        let b = Circle::new(Vector::new(4.0, 0.0, 0.0), 2.0);
        let hits = a.intersect_circle_2d(&b).unwrap();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].is_close(Vector::new(2.0, 0.0, 0.0)));

        // Separate, contained, identical centers
        let b = Circle::new(Vector::new(9.0, 0.0, 0.0), 2.0);
        assert!(a.intersect_circle_2d(&b).unwrap().is_empty());
        let b = Circle::new(Vector::new(0.5, 0.0, 0.0), 0.5);
        assert!(a.intersect_circle_2d(&b).unwrap().is_empty());
        let b = Circle::new(Vector::ZERO, 1.0);
        assert!(a.intersect_circle_2d(&b).unwrap().is_empty());
    }
}
