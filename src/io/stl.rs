// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! Binary STL writer
//!
//! 80-byte header, little-endian u32 triangle count, then one 50-byte
//! record per triangle: float32 normal, three float32 vertices, and a
//! 2-byte attribute count of zero.

use crate::geo::{GeoResult, Triangle, Vector};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const HEADER_NOTE: &[u8] = b" Made with keywell. https://github.com/keywell-project/keywell ";

/// Encode triangles as a binary STL byte buffer.
///
/// Vertices are snapped so that almost-zero coordinates do not leak
/// float noise into the file. Degenerate triangles fail with the
/// kernel's degenerate-vector error.
pub fn encode(triangles: &[Triangle]) -> GeoResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(84 + triangles.len() * 50);

    let mut header = [0u8; 80];
    header[80 - HEADER_NOTE.len()..].copy_from_slice(HEADER_NOTE);
    bytes.extend_from_slice(&header);
    bytes.extend_from_slice(&(triangles.len() as u32).to_le_bytes());

    for triangle in triangles {
        let triangle = triangle.snapped();
        for vector in [triangle.normal()?, triangle.a, triangle.b, triangle.c] {
            write_vector(&mut bytes, vector);
        }
        bytes.extend_from_slice(&[0, 0]);
    }

    Ok(bytes)
}

fn write_vector(bytes: &mut Vec<u8>, vector: Vector) {
    bytes.extend_from_slice(&(vector.x as f32).to_le_bytes());
    bytes.extend_from_slice(&(vector.y as f32).to_le_bytes());
    bytes.extend_from_slice(&(vector.z as f32).to_le_bytes());
}

/// Encode triangles and write them to a file.
pub fn write(path: &Path, triangles: &[Triangle]) -> Result<()> {
    let bytes = encode(triangles)?;
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
