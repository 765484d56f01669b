// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! I/O module - face document input and STL output

pub mod faces;
pub mod stl;

pub use faces::{load as load_faces, parse as parse_faces, FaceEntry, FaceSet};
pub use stl::{encode as encode_stl, write as write_stl};
