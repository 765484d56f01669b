// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! Coplanar polygon with holes and deferred triangulation.
//!
//! Ear clipping after Eberly's "Triangulation by Ear Clipping":
//! holes are spliced into the outer boundary through zero-width
//! connectors found by a rightward visibility ray, then ears are cut
//! with a per-vertex cache, and the result is improved by Delaunay
//! edge flips over an index arena.

use super::edge::Edge;
use super::epsilon::EPSILON;
use super::error::{GeoError, GeoResult};
use super::matrix::Matrix;
use super::triangle::Triangle;
use super::vector::Vector;
use ahash::AHashMap;

/// Coplanar polygon with optional holes, triangulated on demand.
///
/// Construction only stores the boundaries; the expensive work
/// happens in [`Face::triangulate`], so faces can be collected and
/// triangulated independently (and in parallel by the caller).
///
/// Requirements on the boundaries, not runtime-checked:
/// - no duplicate points
/// - no intersections
/// - no nested holes
/// - opposite point order for edge and holes
/// - reasonably coplanar points
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub edge: Edge,
    pub holes: Vec<Edge>,
}

impl Face {
    pub fn new(edge: Edge, holes: Vec<Edge>) -> Face {
        Face { edge, holes }
    }

    pub fn from_edge(edge: Edge) -> Face {
        Face {
            edge,
            holes: Vec::new(),
        }
    }

    /// Triangulate the stored polygon.
    ///
    /// The returned triangles reference only points from the input
    /// boundaries. Degenerate input surfaces as a typed error.
    pub fn triangulate(&self) -> GeoResult<Vec<Triangle>> {
        let mut real_points: Vec<Vector> = self.edge.points().to_vec();
        let mut poly_indexes: Vec<usize> = (0..real_points.len()).collect();
        let mut hole_indexes: Vec<Vec<usize>> = Vec::new();

        for hole in &self.holes {
            if !hole.is_empty() {
                let hole_start = real_points.len();
                let hole_end = hole_start + hole.len();
                hole_indexes.push((hole_start..hole_end).collect());
                real_points.extend_from_slice(hole.points());
            }
        }

        // Work in the xy plane of the polygon's fitted plane. This is
        // what makes "reasonably coplanar" input acceptable.
        let surface_normal = Vector::from_surface_normal(self.edge.points())?;
        let upright_matrix = Matrix::from_alignment(surface_normal, Vector::new(0.0, 0.0, 1.0))?;
        let upright_points: Vec<Vector> = real_points
            .iter()
            .map(|p| p.transformed(&upright_matrix).xy())
            .collect();

        merge_holes(&upright_points, &mut poly_indexes, hole_indexes)?;
        let ears = cut_ears(&upright_points, &poly_indexes)?;
        let triangles = flip_triangles(&upright_points, ears);

        Ok(triangles
            .iter()
            .map(|&[i, j, k]| Triangle::new(real_points[i], real_points[j], real_points[k]))
            .collect())
    }
}

/// Splice each hole into the outer boundary, rightmost hole first.
fn merge_holes(
    points: &[Vector],
    poly_indexes: &mut Vec<usize>,
    hole_indexes: Vec<Vec<usize>>,
) -> GeoResult<()> {
    // Reorder each hole to start at its rightmost point
    let mut ordered_holes: Vec<Vec<usize>> = hole_indexes
        .into_iter()
        .map(|hole| {
            let start = (0..hole.len())
                .max_by(|&i, &j| points[hole[i]].cmp_xyz(&points[hole[j]]))
                .unwrap_or(0);
            let mut rotated = hole[start..].to_vec();
            rotated.extend_from_slice(&hole[..start]);
            rotated
        })
        .collect();

    // Sort holes from right to left
    ordered_holes.sort_by(|h0, h1| points[h1[0]].cmp_xyz(&points[h0[0]]));

    // Connect each hole to a visible point on the right
    for hole in ordered_holes {
        let mut vis: Option<usize> = None;

        // Determine rightward search triangle abc
        //             .c
        // _____     .'/
        //      |  .' /
        // hole |.'  /
        // _____a---b--> ray
        //         /
        //  polygon

        let a = points[hole[0]]; // Rightward ray origin
        let mut b = Vector::new(f64::INFINITY, 0.0, 0.0); // Ray hit on polygon
        let mut c = Vector::new(f64::INFINITY, 0.0, 0.0); // Rightmost end of hit segment
        for i in 0..poly_indexes.len() {
            let j = (i + 1) % poly_indexes.len();
            let p = points[poly_indexes[i]]; // Polygon segment start
            let q = points[poly_indexes[j]]; // Polygon segment end
            if p.y == a.y && a.y == q.y {
                if a.x < p.x && a.x < q.x {
                    if p.x < q.x && p.x < b.x {
                        b = p;
                        c = p;
                        vis = Some(i);
                    } else if q.x < b.x {
                        b = q;
                        c = q;
                        vis = Some(j);
                    }
                }
            } else if p.y <= a.y && a.y <= q.y {
                let x = p.x - (p.y - a.y) * (q.x - p.x) / (q.y - p.y);
                if a.x < x && x < b.x {
                    b = Vector::new(x, a.y, 0.0);
                    if p.x > q.x {
                        c = p;
                        vis = Some(i);
                    } else {
                        c = q;
                        vis = Some(j);
                    }
                }
            }
        }

        // Check for a better reflex point inside the search triangle
        if b != c {
            // Ensure the triangle is counterclockwise
            if c.y < b.y {
                std::mem::swap(&mut b, &mut c);
            }

            let a_dir = (b - a).normalized_2d()?;
            let b_dir = (c - b).normalized_2d()?;
            let c_dir = (a - c).normalized_2d()?;
            let mut min_dist = f64::INFINITY;

            for i in 0..poly_indexes.len() {
                let p = points[poly_indexes[i]];
                let is_inside = a_dir.x * (a.y - p.y) - a_dir.y * (a.x - p.x) < -EPSILON
                    && b_dir.x * (b.y - p.y) - b_dir.y * (b.x - p.x) < -EPSILON
                    && c_dir.x * (c.y - p.y) - c_dir.y * (c.x - p.x) < -EPSILON;
                if is_inside {
                    let o = points[poly_indexes[(i + poly_indexes.len() - 1) % poly_indexes.len()]];
                    let q = points[poly_indexes[(i + 1) % poly_indexes.len()]];
                    let is_reflex = (p.x - o.x) * (q.y - p.y) - (q.x - p.x) * (p.y - o.y) < 0.0;
                    if is_reflex {
                        let dist = (p.x - a.x) * (p.x - a.x) + (p.y - a.y) * (p.y - a.y);
                        if dist < min_dist {
                            min_dist = dist;
                            vis = Some(i);
                        }
                    }
                }
            }
        }

        let vis = vis.ok_or(GeoError::MalformedPolygon)?;

        // Merge hole (vis -> hole -> hole[0] -> vis), duplicating the
        // bridge indexes to keep the polygon simple
        let mut splice: Vec<usize> = Vec::with_capacity(hole.len() + 2);
        splice.extend_from_slice(&hole);
        splice.push(hole[0]);
        splice.push(poly_indexes[vis]);
        poly_indexes.splice(vis + 1..vis + 1, splice);
    }

    Ok(())
}

/// Cached per-vertex quantities for the ear cutting loop.
#[derive(Clone)]
struct EarCandidate {
    ear: [usize; 3],
    a_dir: Vector,
    b_dir: Vector,
    c_dir: Vector,
    a_dot: f64,
    b_dot: f64,
    c_dot: f64,
    ear_height: f64,
}

/// Cut ears until 2 vertexes remain.
///
/// Per-vertex quantities are cached and invalidated only for the two
/// neighbors of a cut ear.
fn cut_ears(points: &[Vector], poly_indexes: &[usize]) -> GeoResult<Vec<[usize; 3]>> {
    let mut remaining: Vec<usize> = poly_indexes.to_vec();
    let mut cache: Vec<Option<EarCandidate>> = vec![None; remaining.len()];
    let mut ears: Vec<[usize; 3]> = Vec::new();

    for _ in 0..remaining.len().saturating_sub(2) {
        let mut cut = false;

        for i in 0..remaining.len() {
            let candidate = match cache[i].clone() {
                Some(candidate) => candidate,
                None => {
                    let ear = [
                        remaining[(i + remaining.len() - 1) % remaining.len()],
                        remaining[i],
                        remaining[(i + 1) % remaining.len()],
                    ];

                    let a = points[ear[0]];
                    let b = points[ear[1]];
                    let c = points[ear[2]];

                    let a_dir = (b - a).normalized_2d()?;
                    let b_dir = (c - b).normalized_2d()?;
                    let c_dir = (a - c).normalized_2d()?;

                    let a_dot = a_dir.y * a.x - a_dir.x * a.y + EPSILON;
                    let b_dot = b_dir.y * b.x - b_dir.x * b.y + EPSILON;
                    let c_dot = c_dir.y * c.x - c_dir.x * c.y + EPSILON;

                    let ear_height = c_dir.x * b.y - c_dir.y * b.x + c_dot;
                    let candidate = EarCandidate {
                        ear,
                        a_dir,
                        b_dir,
                        c_dir,
                        a_dot,
                        b_dot,
                        c_dot,
                        ear_height,
                    };
                    cache[i] = Some(candidate.clone());
                    candidate
                }
            };

            // Skip reflex and zero-height ears
            if candidate.ear_height < 0.0 {
                continue;
            }

            // Check if any remaining point is inside the ear
            let mut is_inside = false;
            for &j in &remaining {
                if candidate.ear.contains(&j) {
                    continue;
                }
                let p = points[j];
                is_inside = candidate.c_dir.y * p.x - candidate.c_dir.x * p.y < candidate.c_dot
                    && candidate.b_dir.y * p.x - candidate.b_dir.x * p.y < candidate.b_dot
                    && candidate.a_dir.y * p.x - candidate.a_dir.x * p.y < candidate.a_dot;
                if is_inside {
                    break;
                }
            }

            // Cut empty ear and invalidate its neighbors
            if !is_inside {
                ears.push(candidate.ear);
                remaining.remove(i);
                cache.remove(i);
                let len = cache.len();
                cache[(i + len - 1) % len] = None;
                cache[i % len] = None;
                cut = true;
                break;
            }
        }

        // No ear found; remaining input is degenerate
        if !cut {
            break;
        }
    }

    Ok(ears)
}

/// Improve triangle quality by flipping non-Delaunay interior edges.
///
/// Triangles live in a contiguous arena and the adjacency map stores
/// arena indices, so a flip is a pair of local array writes.
fn flip_triangles(points: &[Vector], ears: Vec<[usize; 3]>) -> Vec<[usize; 3]> {
    let mut triangles = ears;

    // Map counterclockwise edges to triangles for a fast lookup
    let mut lookup: AHashMap<(usize, usize), usize> = AHashMap::new();
    for (t, tri) in triangles.iter().enumerate() {
        for i in 0..3 {
            lookup.insert((tri[(i + 2) % 3], tri[i]), t);
        }
    }

    let mut pending: Vec<(usize, usize)> = lookup.keys().copied().collect();

    while let Some((a, b)) = pending.pop() {
        // c<---- b
        //  \ 0 // \
        //   \ // 1 \
        //    a ---->d

        let (t0, t1) = match (lookup.get(&(a, b)), lookup.get(&(b, a))) {
            (Some(&t0), Some(&t1)) => (t0, t1),
            _ => continue,
        };

        let (pos_a0, pos_b1) = match (
            triangles[t0].iter().position(|&v| v == a),
            triangles[t1].iter().position(|&v| v == b),
        ) {
            (Some(pos_a0), Some(pos_b1)) => (pos_a0, pos_b1),
            _ => continue,
        };

        let c = triangles[t0][(pos_a0 + 2) % 3];
        let d = triangles[t1][(pos_b1 + 2) % 3];

        let da = points[a] - points[d];
        let db = points[b] - points[d];
        let dc = points[c] - points[d];

        // Incircle test; the epsilon keeps near-cocircular quads from
        // flip-flopping
        let is_delaunay = (da.x * da.x + da.y * da.y) * (db.x * dc.y - dc.x * db.y)
            - (db.x * db.x + db.y * db.y) * (da.x * dc.y - dc.x * da.y)
            + (dc.x * dc.x + dc.y * dc.y) * (da.x * db.y - db.x * da.y)
            < EPSILON;

        if is_delaunay {
            continue;
        }

        // Flip the shared diagonal in place
        if let Some(pos_b0) = triangles[t0].iter().position(|&v| v == b) {
            triangles[t0][pos_b0] = d;
        }
        if let Some(pos_a1) = triangles[t1].iter().position(|&v| v == a) {
            triangles[t1][pos_a1] = c;
        }

        // Remap edges
        lookup.remove(&(a, b));
        lookup.remove(&(b, a));

        lookup.insert((d, c), t0);
        lookup.insert((c, a), t0);
        lookup.insert((a, d), t0);
        lookup.insert((c, d), t1);
        lookup.insert((d, b), t1);
        lookup.insert((b, c), t1);

        // Revisit neighboring edges
        pending.push((c, a));
        pending.push((a, d));
        pending.push((d, b));
        pending.push((b, c));
    }

    triangles
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_triangulate_vertical() {
        let edge = Edge::from(vec![
            Vector::new(-10.0, 0.0, -10.0),
            Vector::new(10.0, 0.0, -10.0),
            Vector::new(10.0, 0.0, 10.0),
            Vector::new(-10.0, 0.0, 10.0),
        ]);

        let tris = Face::from_edge(edge).triangulate().unwrap();
        let area: f64 = tris.iter().map(Triangle::area).sum();
        assert_eq!(tris.len(), 2);
        assert_abs_diff_eq!(area, 400.0, epsilon = 1e-9);
    }

    #[test]
    fn test_triangulate_flip_delaunay() {
        //    3
        //     \   Prefer diagonal
        //      \  (0, 2) over (1, 3)
        //       \
        // 0     2
        //  '. .'
        //    1

        let edge = Edge::from(vec![
            Vector::new(10.0, 20.0, 0.0),
            Vector::new(20.0, 10.0, 0.0),
            Vector::new(30.0, 20.0, 0.0),
            Vector::new(20.0, 50.0, 0.0),
        ]);

        let tris = Face::from_edge(edge).triangulate().unwrap();
        let mut areas: Vec<f64> = tris.iter().map(Triangle::area).collect();
        areas.sort_by(f64::total_cmp);
        assert_eq!(tris.len(), 2);
        assert_abs_diff_eq!(areas[0], 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(areas[1], 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_triangulate_sliver_ear() {
        //       2--1
        //     .'   |  Avoid sliver
        // 4--3     |  ear (2, 3, 5)
        // |        |
        // 5        |
        //          |
        //          0

        let edge = Edge::from(vec![
            Vector::new(50.0, 10.0, 0.0),
            Vector::new(50.0, 50.0, 0.0),
            Vector::new(40.0, 50.0, 0.0),
            Vector::new(29.999, 40.0, 0.0),
            Vector::new(20.0, 40.0, 0.0),
            Vector::new(20.0, 30.0, 0.0),
        ]);

        let tris = Face::from_edge(edge).triangulate().unwrap();
        assert_eq!(tris.len(), 4);
        for tri in &tris {
            assert!(tri.area() > 25.0);
        }
    }

    #[test]
    fn test_triangulate_degenerate() {
        let collinear = Edge::from(vec![
            Vector::ZERO,
            Vector::new(1.0, 0.0, 0.0),
            Vector::new(2.0, 0.0, 0.0),
        ]);
        assert_eq!(
            Face::from_edge(collinear).triangulate(),
            Err(GeoError::DegenerateVector)
        );
    }
}
