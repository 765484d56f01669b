// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! Keywell geometry kernel
//!
//! Epsilon-robust 3D primitives, polygon triangulation with holes,
//! and mesh stitching for 3D-printable keyboard cases. The kernel
//! works in millimeters with a shared absolute epsilon and writes
//! watertight binary STL.

pub mod geo;
pub mod io;
pub mod model;

pub use geo::{
    Circle, Edge, ExtendMode, Face, GeoError, GeoResult, Line, Matrix, Plane, Segment, Triangle,
    Vector,
};

use anyhow::Result;

/// Triangulate a JSON face document into binary STL bytes.
pub fn render(json: &str) -> Result<Vec<u8>> {
    let solid = model::Solid::from_faces(io::parse_faces(json)?);
    Ok(io::encode_stl(&solid.triangulated()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_quad() {
        let json = r#"{"faces": [{"edge": [
            {"x": 0.0, "y": 0.0, "z": 0.0},
            {"x": 10.0, "y": 0.0, "z": 0.0},
            {"x": 10.0, "y": 10.0, "z": 0.0},
            {"x": 0.0, "y": 10.0, "z": 0.0}
        ]}]}"#;
        let bytes = render(json).unwrap();
        assert_eq!(bytes.len(), 84 + 2 * 50);
    }
}
