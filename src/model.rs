// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! Model assembly - parallel face triangulation and part mirroring

use crate::geo::{Face, GeoResult, Triangle};
use rayon::prelude::*;

/// Triangulate faces across the rayon worker pool.
///
/// Faces are independent, so this is plain data parallelism. Results
/// are recombined by input index, not by completion order.
pub fn triangulate_faces(faces: &[Face]) -> GeoResult<Vec<Vec<Triangle>>> {
    faces.par_iter().map(Face::triangulate).collect()
}

/// Triangulate faces on the calling thread.
pub fn triangulate_faces_serial(faces: &[Face]) -> GeoResult<Vec<Vec<Triangle>>> {
    faces.iter().map(Face::triangulate).collect()
}

/// Mirror triangles across the yz plane, reversing the winding so
/// normals keep pointing outward. Used to derive left-hand parts
/// from right-hand geometry.
pub fn mirrored_x(triangles: &[Triangle]) -> Vec<Triangle> {
    triangles.iter().map(|t| t.mirrored_x().reversed()).collect()
}

/// Part geometry: prebuilt triangles plus faces that still need
/// triangulation. Parts collect geometry incrementally and defer the
/// expensive work to one [`Solid::triangulated`] call.
#[derive(Debug, Clone, Default)]
pub struct Solid {
    pub triangles: Vec<Triangle>,
    pub faces: Vec<Face>,
}

impl Solid {
    pub fn new() -> Solid {
        Solid::default()
    }

    pub fn from_faces(faces: Vec<Face>) -> Solid {
        Solid {
            triangles: Vec::new(),
            faces,
        }
    }

    /// Return the prebuilt triangles followed by the triangulated
    /// faces, in input order.
    pub fn triangulated(&self) -> GeoResult<Vec<Triangle>> {
        let mut triangles = self.triangles.clone();
        for face_triangles in triangulate_faces(&self.faces)? {
            triangles.extend(face_triangles);
        }
        Ok(triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{Edge, Vector};
    use approx::assert_abs_diff_eq;

    fn quad(z: f64) -> Face {
        Face::from_edge(Edge::from(vec![
            Vector::new(0.0, 0.0, z),
            Vector::new(2.0, 0.0, z),
            Vector::new(2.0, 2.0, z),
            Vector::new(0.0, 2.0, z),
        ]))
    }

    #[test]
    fn test_triangulate_faces_order() {
        let faces: Vec<Face> = (0..16).map(|i| quad(i as f64)).collect();
        let parallel = triangulate_faces(&faces).unwrap();
        let serial = triangulate_faces_serial(&faces).unwrap();

        assert_eq!(parallel.len(), 16);
        for (i, tris) in parallel.iter().enumerate() {
            assert_eq!(tris, &serial[i]);
            assert_eq!(tris.len(), 2);
            assert_abs_diff_eq!(tris[0].a.z, i as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_solid_triangulated() {
        let prebuilt = Triangle::new(
            Vector::new(0.0, 0.0, 9.0),
            Vector::new(1.0, 0.0, 9.0),
            Vector::new(0.0, 1.0, 9.0),
        );
        let solid = Solid {
            triangles: vec![prebuilt],
            faces: vec![quad(0.0), quad(1.0)],
        };

        let triangles = solid.triangulated().unwrap();
        assert_eq!(triangles.len(), 5);
        assert_eq!(triangles[0], prebuilt);
        assert_abs_diff_eq!(triangles[1].a.z, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(triangles[3].a.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mirrored_x_keeps_orientation() {
        let tris = quad(0.0).triangulate().unwrap();
        let mirrored = mirrored_x(&tris);
        assert_eq!(mirrored.len(), tris.len());
        for (m, t) in mirrored.iter().zip(&tris) {
            assert_abs_diff_eq!(m.area(), t.area(), epsilon = 1e-9);
            assert!(m.normal().unwrap().is_close(t.normal().unwrap()));
        }
    }
}
