/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! A minimal ASCII triangle-list reader, used only to drive the CLI and
//! integration tests. This is deliberately not the production "custom
//! binary mesh file format" described in spec.md §1 — that format, and the
//! scene importer that feeds it, remain out of scope and external to this
//! crate.

use std::io::BufRead;

use anyhow::{bail, Context, Result};

/// Reads one triangle per non-blank, non-`#`-prefixed line, each holding
/// three whitespace-separated vertex indices.
///
/// Indices are parsed as `u32` rather than `u16`: this mirrors the scene
/// importer's collaborator contract (spec.md §6.2), which hands off indices
/// before they have been narrowed to the 16-bit domain the core operates
/// on. Callers narrow with [`crate::narrow_vertex_indices`].
pub fn read_triangle_list(reader: impl BufRead) -> Result<Vec<u32>> {
    let mut indices = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", lineno + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let values: Vec<&str> = line.split_whitespace().collect();
        if values.len() != 3 {
            bail!(
                "line {}: expected 3 vertex indices, found {}",
                lineno + 1,
                values.len()
            );
        }
        for value in values {
            let v: u32 = value
                .parse()
                .with_context(|| format!("line {}: `{value}` is not a valid vertex index", lineno + 1))?;
            indices.push(v);
        }
    }
    Ok(indices)
}
