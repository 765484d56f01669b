// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! Shared mesh sanity checks for the integration tests.

use keywell::geo::{Segment, Triangle, Vector};
use std::cmp::Ordering;

fn sorted_pair(a: Vector, b: Vector) -> (Vector, Vector) {
    if a.cmp_xyz(&b) == Ordering::Greater {
        (b, a)
    } else {
        (a, b)
    }
}

/// Check that a triangulation makes reasonable sense (inefficient).
///
/// Every triangle must be non-degenerate, every triangle vertex must
/// coincide exactly with a boundary vertex, every boundary segment may
/// be used at most once, and every interior segment must be shared by
/// exactly two triangles. Returns a description of the first problem
/// found, or `None` if the mesh is sound.
pub fn find_triangulation_problems(
    triangles: &[Triangle],
    outer_segments: &[Segment],
) -> Option<String> {
    for triangle in triangles {
        if triangle.is_degenerate() {
            return Some("Triangle is not valid.".to_string());
        }
    }

    // Exact comparison on purpose, rounding errors must not slip through.
    let mut vertexes: Vec<Vector> = Vec::new();
    for segment in outer_segments {
        for vertex in [segment.a, segment.b] {
            if !vertexes.contains(&vertex) {
                vertexes.push(vertex);
            }
        }
    }

    for triangle in triangles {
        if !vertexes.contains(&triangle.a)
            || !vertexes.contains(&triangle.b)
            || !vertexes.contains(&triangle.c)
        {
            return Some("Triangle vertex does not match outer segments.".to_string());
        }
    }

    let outer_sorted: Vec<(Vector, Vector)> = outer_segments
        .iter()
        .map(|s| sorted_pair(s.a, s.b))
        .collect();
    let mut outer_counts = vec![0usize; outer_sorted.len()];
    let mut inner_sorted: Vec<(Vector, Vector)> = Vec::new();
    let mut inner_counts: Vec<usize> = Vec::new();

    for triangle in triangles {
        let sides = [
            (triangle.a, triangle.b),
            (triangle.b, triangle.c),
            (triangle.c, triangle.a),
        ];
        for (a, b) in sides {
            let side = sorted_pair(a, b);
            let mut matched = false;

            for (i, outer) in outer_sorted.iter().enumerate() {
                if side == *outer {
                    outer_counts[i] += 1;
                    matched = true;
                }
            }
            for (i, inner) in inner_sorted.iter().enumerate() {
                if side == *inner {
                    inner_counts[i] += 1;
                    matched = true;
                }
            }
            if !matched {
                inner_sorted.push(side);
                inner_counts.push(1);
            }
        }
    }

    if outer_counts.iter().any(|&count| count > 1) {
        return Some("Outer segment is used more than once.".to_string());
    }
    if inner_counts.iter().any(|&count| count != 2) {
        return Some("Inner segment is not used exactly twice.".to_string());
    }

    None
}

pub fn total_area(triangles: &[Triangle]) -> f64 {
    triangles.iter().map(Triangle::area).sum()
}
