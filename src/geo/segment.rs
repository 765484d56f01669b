// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! Bounded line piece

use super::epsilon::is_zero;
use super::error::GeoResult;
use super::vector::Vector;

/// How `Segment::intersect_2d` extends its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtendMode {
    /// Intersect the bounded segments only.
    Neither,
    /// Treat the other segment as an infinite line.
    Other,
    /// Treat both segments as infinite lines.
    Both,
}

/// Line piece bounded by two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vector,
    pub b: Vector,
}

impl Segment {
    pub fn new(a: Vector, b: Vector) -> Segment {
        Segment { a, b }
    }

    pub fn magnitude(&self) -> f64 {
        (self.b - self.a).magnitude()
    }

    pub fn magnitude_2d(&self) -> f64 {
        (self.b - self.a).magnitude_2d()
    }

    /// Return the segment offset to its counterclockwise side in the
    /// xy plane. Not robust for segments without xy extent.
    pub fn offset_2d(&self, distance: f64) -> GeoResult<Segment> {
        let offset = (self.a - self.b).ortho_2d().normalized_2d()? * distance;
        Ok(Segment::new(self.a.xy() + offset, self.b.xy() + offset))
    }

    /// Return the minimum xy distance from the point to the segment.
    ///
    /// A zero-length segment yields the distance to its point rather
    /// than an error.
    pub fn distance_2d(&self, vector: Vector) -> f64 {
        let a = self.a;
        let b = self.b;

        let numer = (vector.x - a.x) * (b.x - a.x) + (vector.y - a.y) * (b.y - a.y);
        let denom = (b.x - a.x) * (b.x - a.x) + (b.y - a.y) * (b.y - a.y);
        let u = if denom != 0.0 {
            (numer / denom).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let dx = a.x + u * (b.x - a.x) - vector.x;
        let dy = a.y + u * (b.y - a.y) - vector.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Return the xy intersection of two segments, or None.
    pub fn intersect_2d(&self, other: &Segment, extend: ExtendMode) -> Option<Vector> {
        let a = self.a;
        let b = self.b;
        let c = other.a;
        let d = other.b;

        let denom = (d.y - c.y) * (b.x - a.x) - (d.x - c.x) * (b.y - a.y);
        if is_zero(denom) {
            return None;
        }

        let ab_pos = ((d.x - c.x) * (a.y - c.y) - (d.y - c.y) * (a.x - c.x)) / denom;
        if extend != ExtendMode::Both && !(0.0..=1.0).contains(&ab_pos) {
            return None;
        }

        let cd_pos = ((b.x - a.x) * (a.y - c.y) - (b.y - a.y) * (a.x - c.x)) / denom;
        if extend == ExtendMode::Neither && !(0.0..=1.0).contains(&cd_pos) {
            return None;
        }

        Some(Vector::new(
            a.x + (b.x - a.x) * ab_pos,
            a.y + (b.y - a.y) * ab_pos,
            0.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_magnitude() {
        let seg = Segment::new(Vector::new(1.0, 1.0, 1.0), Vector::new(1.0, 4.0, 5.0));
        assert_abs_diff_eq!(seg.magnitude(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(seg.magnitude_2d(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_offset_2d() {
        let seg = Segment::new(Vector::new(0.0, 0.0, 9.0), Vector::new(2.0, 0.0, 9.0));
        let offset = seg.offset_2d(1.0).unwrap();
        assert!(offset.a.is_close(Vector::new(0.0, 1.0, 0.0)));
        assert!(offset.b.is_close(Vector::new(2.0, 1.0, 0.0)));
    }

    #[test]
    fn test_distance_2d() {
        let seg = Segment::new(Vector::new(0.0, 0.0, 9.0), Vector::new(2.0, 0.0, 9.0));
        assert_abs_diff_eq!(seg.distance_2d(Vector::new(1.0, 0.0, 0.0)), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(seg.distance_2d(Vector::new(1.0, 3.0, 0.0)), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(seg.distance_2d(Vector::new(-3.0, 4.0, 0.0)), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(seg.distance_2d(Vector::new(5.0, -4.0, 0.0)), 5.0, epsilon = 1e-12);

        // Zero-length segment degrades to point distance
        let point = Segment::new(Vector::new(1.0, 1.0, 0.0), Vector::new(1.0, 1.0, 0.0));
        assert_abs_diff_eq!(point.distance_2d(Vector::new(4.0, 5.0, 0.0)), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_intersect_2d() {
        let a = Segment::new(Vector::new(0.0, 0.0, 0.0), Vector::new(2.0, 2.0, 0.0));
        let b = Segment::new(Vector::new(0.0, 2.0, 0.0), Vector::new(2.0, 0.0, 0.0));
        let hit = a.intersect_2d(&b, ExtendMode::Neither).unwrap();
        assert!(hit.is_close(Vector::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_intersect_2d_out_of_bounds() {
        let a = Segment::new(Vector::new(0.0, 0.0, 0.0), Vector::new(1.0, 0.0, 0.0));
        let b = Segment::new(Vector::new(2.0, -1.0, 0.0), Vector::new(2.0, 1.0, 0.0));

        assert_eq!(a.intersect_2d(&b, ExtendMode::Neither), None);

        // Both as lines
        let c = Segment::new(Vector::new(2.0, 1.0, 0.0), Vector::new(2.0, 2.0, 0.0));
        let hit = a.intersect_2d(&c, ExtendMode::Both).unwrap();
        assert!(hit.is_close(Vector::new(2.0, 0.0, 0.0)));

        // Other as line: a must still contain the hit
        assert_eq!(a.intersect_2d(&c, ExtendMode::Other), None);
        let d = Segment::new(Vector::new(0.5, 1.0, 0.0), Vector::new(0.5, 2.0, 0.0));
        let hit = a.intersect_2d(&d, ExtendMode::Other).unwrap();
        assert!(hit.is_close(Vector::new(0.5, 0.0, 0.0)));
    }

    #[test]
    fn test_intersect_2d_parallel() {
        let a = Segment::new(Vector::new(0.0, 0.0, 0.0), Vector::new(1.0, 1.0, 0.0));
        let b = Segment::new(Vector::new(0.0, 1.0, 0.0), Vector::new(1.0, 2.0, 0.0));
        assert_eq!(a.intersect_2d(&b, ExtendMode::Both), None);
    }
}
