// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! JSON face document loader
//!
//! The document mirrors the kernel-facing caller contract: an outer
//! boundary per face plus optional holes, wound opposite to the outer
//! edge, approximately coplanar.

use crate::geo::{Edge, Face, Vector};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level face document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceSet {
    pub faces: Vec<FaceEntry>,
}

/// One polygon with optional holes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceEntry {
    pub edge: Vec<Vector>,
    #[serde(default)]
    pub holes: Vec<Vec<Vector>>,
}

impl FaceEntry {
    pub fn to_face(&self) -> Face {
        Face::new(
            Edge::from(self.edge.clone()),
            self.holes.iter().cloned().map(Edge::from).collect(),
        )
    }
}

/// Parse a face document from a JSON string.
pub fn parse(json: &str) -> Result<Vec<Face>> {
    let set: FaceSet = serde_json::from_str(json).context("Failed to parse face document")?;
    Ok(set.faces.iter().map(FaceEntry::to_face).collect())
}

/// Load a face document from a file.
pub fn load(path: &Path) -> Result<Vec<Face>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse(&json)
}
