/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Builds, for every triangle, the up-to-three neighbouring triangles that
//! share an edge with it.

use itertools::Itertools;

use crate::edge::CanonicalEdge;
use crate::error::StripError;
use crate::sorter::{self, Index};

/// Sentinel adjacency link meaning "no triangle shares this edge" (a
/// boundary edge).
pub const BOUNDARY: u32 = u32::MAX;

/// One triangle's three canonical edges, three neighbour links, and its
/// original (unordered-lookup) vertex triple.
///
/// Edge/link slot `k` corresponds to the edge opposite-ish convention fixed
/// by spec.md §3: slot 0 = (v0,v1), slot 1 = (v1,v2), slot 2 = (v2,v0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyRecord {
    pub vertices: [u16; 3],
    pub edges: [CanonicalEdge; 3],
    pub links: [u32; 3],
}

impl AdjacencyRecord {
    /// The slot index whose canonical edge equals `edge`, if any.
    pub fn slot_for(&self, edge: CanonicalEdge) -> Option<usize> {
        self.edges.iter().position(|&e| e == edge)
    }
}

/// One `(canonical_edge, triangle, slot)` tuple emitted per triangle edge
/// during edge generation (spec.md §4.2 step 1).
struct EdgeRecord {
    low16: u16,
    high16: u16,
    triangle: u32,
    slot: u8,
}

/// Builds adjacency records for `N = triangle_indices.len() / 3` triangles.
///
/// `triangle_indices` must already be known to hold only in-range vertex
/// indices (the `TooManyVertices` check is the upstream bridge's
/// responsibility, per spec.md §7); this function still rejects degenerate
/// triangles and non-manifold edges, which are its own responsibility.
pub fn build_adjacency(triangle_indices: &[u16]) -> Result<Vec<AdjacencyRecord>, StripError> {
    debug_assert_eq!(triangle_indices.len() % 3, 0);
    let n = triangle_indices.len() / 3;

    let mut records: Vec<AdjacencyRecord> = Vec::with_capacity(n);
    let mut edge_records: Vec<EdgeRecord> = Vec::with_capacity(3 * n);

    for t in 0..n {
        let v = [
            triangle_indices[3 * t],
            triangle_indices[3 * t + 1],
            triangle_indices[3 * t + 2],
        ];
        if v[0] == v[1] || v[1] == v[2] || v[2] == v[0] {
            return Err(StripError::DegenerateTriangle {
                triangle: t as u32,
                vertices: v,
            });
        }

        let edges = [
            CanonicalEdge::new(v[0], v[1]),
            CanonicalEdge::new(v[1], v[2]),
            CanonicalEdge::new(v[2], v[0]),
        ];
        for (slot, edge) in edges.iter().enumerate() {
            edge_records.push(EdgeRecord {
                low16: edge.low(),
                high16: edge.high(),
                triangle: t as u32,
                slot: slot as u8,
            });
        }

        records.push(AdjacencyRecord {
            vertices: v,
            edges,
            links: [BOUNDARY; 3],
        });
    }

    // Two counting-sort passes: minor key (high16) first, then a stable
    // resort by the major key (low16). The result orders edge records
    // lexicographically by (low16, high16), so identical canonical edges
    // land in adjacent runs (spec.md §4.2 steps 2-3).
    let high16_keys: Vec<u16> = edge_records.iter().map(|e| e.high16).collect();
    let low16_keys: Vec<u16> = edge_records.iter().map(|e| e.low16).collect();
    // Edge count is always `3 * triangle_count`, well within the sorter's
    // `u32` permutation domain for any mesh that fits in memory; the
    // sorter's own `InvalidArgument` (spec.md §4.1) is a narrower contract
    // than the closed `StripError` set this function returns, so it is not
    // propagated as one of this function's error variants.
    let by_high = sorter::sort_by(&high16_keys).expect("edge count fits the sorter's u32 domain");
    let order =
        sorter::sort_by_with_prior(&low16_keys, &by_high).expect("edge count fits the sorter's u32 domain");

    let chunks = order
        .iter()
        .chunk_by(|&&i| (edge_records[i as usize].low16, edge_records[i as usize].high16));
    for (key, group) in &chunks {
        let group: Vec<&Index> = group.collect();
        match group.len() {
            0 => unreachable!(),
            1 => {} // boundary edge, links already default to BOUNDARY
            2 => {
                let a = &edge_records[*group[0] as usize];
                let b = &edge_records[*group[1] as usize];
                records[a.triangle as usize].links[a.slot as usize] = b.triangle;
                records[b.triangle as usize].links[b.slot as usize] = a.triangle;
            }
            _ => {
                let edge = CanonicalEdge::new(key.0, key.1);
                let triangles = group.iter().map(|&&idx| edge_records[idx as usize].triangle).collect();
                return Err(StripError::NonManifold { edge, triangles });
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_triangles_sharing_an_edge_link_symmetrically() {
        // (0,1,2) and (2,1,3) share edge {1,2}.
        let tris = [0u16, 1, 2, 2, 1, 3];
        let adj = build_adjacency(&tris).unwrap();
        assert_eq!(adj.len(), 2);
        let shared = CanonicalEdge::new(1, 2);
        let slot0 = adj[0].slot_for(shared).unwrap();
        let slot1 = adj[1].slot_for(shared).unwrap();
        assert_eq!(adj[0].links[slot0], 1);
        assert_eq!(adj[1].links[slot1], 0);
    }

    #[test]
    fn disjoint_triangles_have_only_boundary_links() {
        let tris = [0u16, 1, 2, 3, 4, 5];
        let adj = build_adjacency(&tris).unwrap();
        for rec in &adj {
            assert!(rec.links.iter().all(|&l| l == BOUNDARY));
        }
    }

    #[test]
    fn three_triangles_sharing_an_edge_is_non_manifold() {
        let tris = [0u16, 1, 2, 0, 1, 3, 0, 1, 4];
        let err = build_adjacency(&tris).unwrap_err();
        assert!(matches!(err, StripError::NonManifold { .. }));
    }

    #[test]
    fn repeated_vertex_is_degenerate() {
        let tris = [0u16, 1, 1];
        let err = build_adjacency(&tris).unwrap_err();
        assert_eq!(
            err,
            StripError::DegenerateTriangle {
                triangle: 0,
                vertices: [0, 1, 1]
            }
        );
    }

    #[test]
    fn canonical_edges_satisfy_i3() {
        let tris = [5u16, 2, 8, 8, 2, 1];
        let adj = build_adjacency(&tris).unwrap();
        for rec in &adj {
            for e in rec.edges {
                assert!(e.low() <= e.high());
            }
        }
    }
}
