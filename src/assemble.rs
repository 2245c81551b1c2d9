/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Thin orchestration: validate the incoming triangle list, build adjacency,
//! then walk it into a strip set. Holds no state of its own (spec.md §4.4).

use crate::adjacency::build_adjacency;
use crate::error::StripError;
use crate::observer::{NoopObserver, StripObserver};
use crate::options::StripifyOptions;
use crate::strip::{walk, StripSet};

/// The default entry point: default options, no observer. Mirrors
/// spec.md §6.1's `assemble_strips`.
pub fn assemble_strips(triangle_indices: &[u16]) -> Result<StripSet, StripError> {
    assemble_strips_with_options(triangle_indices, &StripifyOptions::default(), &NoopObserver)
}

/// The fully configurable entry point used by the CLI and the test suite.
///
/// `triangle_indices` must hold a flat sequence of `3N` vertex indices, per
/// spec.md §6.1; a length that isn't a multiple of 3 is a caller contract
/// violation rather than one of the four documented [`StripError`] kinds,
/// and is rejected by a debug assertion in [`build_adjacency`] rather than
/// surfaced through this function's `Result`.
pub fn assemble_strips_with_options(
    triangle_indices: &[u16],
    options: &StripifyOptions,
    observer: &dyn StripObserver,
) -> Result<StripSet, StripError> {
    if triangle_indices.is_empty() {
        return Err(StripError::Empty);
    }

    let adjacency = build_adjacency(triangle_indices)?;
    Ok(walk(&adjacency, options, observer))
}

/// Narrows the upstream scene loader's wider vertex indices (spec.md §6.2's
/// collaborator contract hands off `u16`s, but a loader typically works in
/// `u32` or `usize` before that narrowing happens) down to the `u16` domain
/// this crate's core operates on.
///
/// This is the "upstream bridge" spec.md §7 assigns `TooManyVertices` to:
/// the check happens here, before any triangle reaches the adjacency
/// builder, which only ever sees indices already known to fit.
pub fn narrow_vertex_indices(triangle_indices: &[u32]) -> Result<Vec<u16>, StripError> {
    triangle_indices
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            u16::try_from(v).map_err(|_| StripError::TooManyVertices {
                triangle: (i / 3) as u32,
                index: v,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_input() {
        assert_eq!(assemble_strips(&[]).unwrap_err(), StripError::Empty);
    }

    #[test]
    fn single_triangle_yields_one_strip_of_three() {
        let strips = assemble_strips(&[0, 1, 2]).unwrap();
        assert_eq!(strips, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn minimal_quad_scenario() {
        // S1: (0,1,2), (2,1,3) -> one strip [0,1,2,3]
        let strips = assemble_strips(&[0, 1, 2, 2, 1, 3]).unwrap();
        assert_eq!(strips, vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn triangle_fan_scenario() {
        // S2: (0,1,2), (0,2,3), (0,3,4) -> one strip of length 5
        let strips = assemble_strips(&[0, 1, 2, 0, 2, 3, 0, 3, 4]).unwrap();
        assert_eq!(strips.len(), 1);
        assert_eq!(strips[0].len(), 5);
    }

    #[test]
    fn disjoint_triangles_scenario() {
        // S3
        let strips = assemble_strips(&[0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(strips.len(), 2);
        assert!(strips.iter().all(|s| s.len() == 3));
    }

    #[test]
    fn non_manifold_scenario() {
        // S4: edge {0,1} shared by three triangles
        let err = assemble_strips(&[0, 1, 2, 0, 1, 3, 0, 1, 4]).unwrap_err();
        assert!(matches!(err, StripError::NonManifold { .. }));
    }

    #[test]
    fn degenerate_triangle_scenario() {
        // S6
        let err = assemble_strips(&[0, 1, 1]).unwrap_err();
        assert!(matches!(err, StripError::DegenerateTriangle { .. }));
    }

    #[test]
    fn narrow_vertex_indices_rejects_out_of_range() {
        let err = narrow_vertex_indices(&[0, 1, 65_536]).unwrap_err();
        assert_eq!(
            err,
            StripError::TooManyVertices {
                triangle: 0,
                index: 65_536
            }
        );
    }

    #[test]
    fn narrow_vertex_indices_passes_through_in_range() {
        assert_eq!(narrow_vertex_indices(&[0, 1, 2]).unwrap(), vec![0u16, 1, 2]);
    }
}
