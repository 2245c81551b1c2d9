/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The error taxonomy surfaced by the stripifier (spec-mapped: `StripError`).
//!
//! The core never logs and never recovers from these internally; every
//! variant carries enough context (offending triangle or edge) for a caller
//! to report it without re-deriving the failure from scratch.

use thiserror::Error;

use crate::edge::CanonicalEdge;

/// Errors produced while building adjacency or walking strips.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StripError {
    /// A canonical edge was referenced by three or more triangles.
    #[error("edge {edge:?} is shared by {triangles:?}, which is non-manifold")]
    NonManifold {
        edge: CanonicalEdge,
        triangles: Vec<u32>,
    },

    /// A triangle has two or more identical vertex indices.
    #[error("triangle {triangle} has repeated vertex indices {vertices:?}")]
    DegenerateTriangle { triangle: u32, vertices: [u16; 3] },

    /// A vertex index exceeds the 16-bit domain the system assumes.
    #[error("vertex index {index} in triangle {triangle} exceeds the maximum of 65535")]
    TooManyVertices { triangle: u32, index: u32 },

    /// The input has zero triangles.
    #[error("input has no triangles")]
    Empty,
}
