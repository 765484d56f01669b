// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! Ordered point sequence with hull, containment, and stitching
//! operations.

use super::epsilon::EPSILON;
use super::error::GeoResult;
use super::matrix::Matrix;
use super::segment::Segment;
use super::triangle::Triangle;
use super::vector::Vector;
use std::f64::consts::PI;
use std::ops::Deref;

/// Ordered sequence of points. There is no implicit closure;
/// operations that care take an explicit `is_closed` flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Edge {
    points: Vec<Vector>,
}

impl Edge {
    pub fn new() -> Edge {
        Edge { points: Vec::new() }
    }

    /// Counterclockwise convex hull of the xy projection, Andrew's
    /// monotone chain. Collinear boundary points are dropped and the
    /// chain seams are not duplicated.
    pub fn from_convex_hull_2d(points: &[Vector]) -> Edge {
        let mut sorted: Vec<Vector> = points.iter().map(|v| v.xy()).collect();
        sorted.sort_by(|a, b| a.cmp_xyz(b));

        let mut lower: Vec<Vector> = Vec::new();
        for &v in &sorted {
            while lower.len() >= 2
                && (lower[lower.len() - 2] - v).cross(lower[lower.len() - 1] - v).z <= 0.0
            {
                lower.pop();
            }
            lower.push(v);
        }

        let mut upper: Vec<Vector> = Vec::new();
        for &v in sorted.iter().rev() {
            while upper.len() >= 2
                && (upper[upper.len() - 2] - v).cross(upper[upper.len() - 1] - v).z <= 0.0
            {
                upper.pop();
            }
            upper.push(v);
        }

        lower.pop();
        upper.pop();
        lower.extend(upper);
        Edge { points: lower }
    }

    /// Concatenate edges into one.
    pub fn concat<'a, I>(edges: I) -> Edge
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut points = Vec::new();
        for edge in edges {
            points.extend_from_slice(&edge.points);
        }
        Edge { points }
    }

    pub fn push(&mut self, point: Vector) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Vector] {
        &self.points
    }

    pub fn to_segments(&self, is_closed: bool) -> Vec<Segment> {
        if self.points.is_empty() {
            return Vec::new();
        }
        let count = self.points.len();
        let seg_count = count - 1 + is_closed as usize;
        (0..seg_count)
            .map(|i| Segment::new(self.points[i], self.points[(i + 1) % count]))
            .collect()
    }

    pub fn xy(&self) -> Edge {
        self.points.iter().map(|v| v.xy()).collect()
    }

    pub fn xz(&self) -> Edge {
        self.points.iter().map(|v| v.xz()).collect()
    }

    pub fn yz(&self) -> Edge {
        self.points.iter().map(|v| v.yz()).collect()
    }

    pub fn mirrored_x(&self) -> Edge {
        self.points.iter().map(|v| v.mirrored_x()).collect()
    }

    pub fn mirrored_y(&self) -> Edge {
        self.points.iter().map(|v| v.mirrored_y()).collect()
    }

    pub fn mirrored_z(&self) -> Edge {
        self.points.iter().map(|v| v.mirrored_z()).collect()
    }

    pub fn reversed(&self) -> Edge {
        self.points.iter().rev().copied().collect()
    }

    pub fn scaled(&self, scalar: f64, center: Vector) -> Edge {
        self.points
            .iter()
            .map(|&v| (v - center) * scalar + center)
            .collect()
    }

    pub fn translated(&self, vector: Vector) -> Edge {
        self.points.iter().map(|&v| v + vector).collect()
    }

    pub fn transformed(&self, matrix: &Matrix) -> Edge {
        self.points.iter().map(|v| v.transformed(matrix)).collect()
    }

    pub fn snapped(&self) -> Edge {
        self.points.iter().map(|v| v.snapped()).collect()
    }

    /// Remove segments that are shorter than the threshold.
    ///
    /// Cleans up paths produced by near-coincident projection math.
    pub fn collapsed(&self, threshold: f64) -> Edge {
        self.to_segments(true)
            .iter()
            .filter(|s| s.magnitude() >= threshold)
            .map(|s| s.a)
            .collect()
    }

    /// Triangulate each pair of edge segments in order.
    ///
    /// Edges may overlap. If one edge has more segments than the
    /// other, its remaining segments are connected to the last point
    /// of the shorter edge.
    pub fn mesh_pairwise(&self, other: &Edge, is_closed: bool) -> GeoResult<Vec<Triangle>> {
        let mut triangles = Vec::new();

        if self.points.is_empty() || other.points.is_empty() {
            return Ok(triangles);
        }

        let self_len = self.points.len() as i64;
        let other_len = other.points.len() as i64;

        let self_end = self_len - 1 + is_closed as i64;
        let other_end = other_len - 1 + is_closed as i64;

        for i in 0..self_end.max(other_end) {
            let a = self.points[(self_end.min(i).rem_euclid(self_len)) as usize];
            let b = self.points[(self_end.min(i + 1).rem_euclid(self_len)) as usize];
            let c = other.points[(other_end.min(i + 1).rem_euclid(other_len)) as usize];
            let d = other.points[(other_end.min(i).rem_euclid(other_len)) as usize];

            // There are two possible pairs of triangles:
            //  --d----c->  --d----c->  other
            //    |1 / |      | \ 3|
            //    | / 0|      |2 \ |
            //  --a----b->  --a----b->  self

            let abc = Triangle::new(a, b, c);
            let cda = Triangle::new(c, d, a);
            let abd = Triangle::new(a, b, d);
            let dbc = Triangle::new(d, b, c);

            // Lookup table to determine which triangles to emit,
            // based on which are valid
            let valid = (!dbc.is_degenerate() as usize) << 3
                | (!abd.is_degenerate() as usize) << 2
                | (!cda.is_degenerate() as usize) << 1
                | !abc.is_degenerate() as usize;
            #[rustfmt::skip]
            const TABLE: [u8; 16] = [
                0b0000, 0b0000, 0b0000, 0b0001,
                0b0000, 0b0001, 0b0010, 0b0011,
                0b0000, 0b0001, 0b0010, 0b0011,
                0b0100, 0b1100, 0b1100, 0b0011,
            ];
            let mut bits = TABLE[valid];

            if valid == 0b1111 {
                // Bridgeable with either diagonal. Choose by the
                // Delaunay opposite-angle sum. The epsilon is not
                // strictly necessary, but it prevents irregular quad
                // diagonals due to rounding errors.
                let abc_angle = (a - b).angle_between(c - b)?;
                let cda_angle = (c - d).angle_between(a - d)?;
                if abc_angle + cda_angle > PI + EPSILON {
                    bits = 0b1100;
                }
            }

            if bits & 0b0001 != 0 {
                triangles.push(abc);
            }
            if bits & 0b0010 != 0 {
                triangles.push(cda);
            }
            if bits & 0b0100 != 0 {
                triangles.push(abd);
            }
            if bits & 0b1000 != 0 {
                triangles.push(dbc);
            }
        }

        Ok(triangles)
    }

    /// Triangulate reasonably parallel, non-intersecting edges.
    ///
    /// Greedy advance across two independently-paced cursors.
    /// Minimizes the normal deviation between subsequent triangles;
    /// for insignificant differences, prioritizes equilaterality.
    pub fn mesh_parallel(&self, other: &Edge, is_closed: bool) -> GeoResult<Vec<Triangle>> {
        let mut triangles: Vec<Triangle> = Vec::new();

        if self.points.is_empty() || other.points.is_empty() {
            return Ok(triangles);
        }

        let self_len = self.points.len() as i64;
        let other_len = other.points.len() as i64;

        let self_end = self_len - 1 + is_closed as i64;
        let other_end = other_len - 1 + is_closed as i64;

        let mut i: i64 = 0;
        let mut j: i64 = 0;
        while i < self_end || j < other_end {
            let a = self.points[(self_end.min(i).rem_euclid(self_len)) as usize];
            let b = self.points[(self_end.min(i + 1).rem_euclid(self_len)) as usize];
            let c = other.points[(other_end.min(j + 1).rem_euclid(other_len)) as usize];
            let d = other.points[(other_end.min(j).rem_euclid(other_len)) as usize];

            let abd = Triangle::new(a, b, d);
            let acd = Triangle::new(a, c, d);

            if i >= self_end {
                triangles.push(acd);
                j += 1;
                continue;
            }
            if j >= other_end {
                triangles.push(abd);
                i += 1;
                continue;
            }

            // Choose the triangle with the smaller normal deviation,
            // if the difference is significant enough.
            if let Some(prev) = triangles.last() {
                let prev_norm = prev.normal()?;
                let abd_dev = abd.normal()?.angle_between(prev_norm)?;
                let acd_dev = acd.normal()?.angle_between(prev_norm)?;
                if abd_dev < acd_dev - PI / 8.0 {
                    triangles.push(abd);
                    i += 1;
                    continue;
                }
                if acd_dev < abd_dev - PI / 8.0 {
                    triangles.push(acd);
                    j += 1;
                    continue;
                }
            }

            // Otherwise, choose the most equilateral triangle,
            // based on the circumcircle (Delaunay).
            if abd.circumradius() < acd.circumradius() + EPSILON {
                triangles.push(abd);
                i += 1;
            } else {
                triangles.push(acd);
                j += 1;
            }
        }

        Ok(triangles)
    }

    /// Check if the point is inside the simple closed edge.
    ///
    /// Points on the exact boundary may or may not be considered
    /// inside (PNPOLY ray test).
    pub fn contains_2d(&self, vector: Vector) -> bool {
        let count = self.points.len();
        let mut is_in = false;
        for i in 0..count {
            let a = self.points[(i + count - 1) % count];
            let b = self.points[i];
            if (a.y > vector.y) != (b.y > vector.y)
                && vector.x < (b.x - a.x) * (vector.y - a.y) / (b.y - a.y) + a.x
            {
                is_in = !is_in;
            }
        }
        is_in
    }

    /// Return the minimum xy distance to the simple closed edge,
    /// 0 for points inside.
    pub fn distance_2d(&self, vector: Vector) -> f64 {
        if self.contains_2d(vector) {
            return 0.0;
        }
        self.to_segments(true)
            .iter()
            .map(|s| s.distance_2d(vector))
            .fold(f64::INFINITY, f64::min)
    }
}

impl Deref for Edge {
    type Target = [Vector];

    fn deref(&self) -> &[Vector] {
        &self.points
    }
}

impl From<Vec<Vector>> for Edge {
    fn from(points: Vec<Vector>) -> Edge {
        Edge { points }
    }
}

impl FromIterator<Vector> for Edge {
    fn from_iter<I: IntoIterator<Item = Vector>>(iter: I) -> Edge {
        Edge {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Vector> for Edge {
    fn extend<I: IntoIterator<Item = Vector>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl IntoIterator for Edge {
    type Item = Vector;
    type IntoIter = std::vec::IntoIter<Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Edge {
    type Item = &'a Vector;
    type IntoIter = std::slice::Iter<'a, Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
