/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Policy knobs for strip assembly. All default to the behaviour spec.md
//! §9 designates as the default: two-sided, unconnected, natural seed order.

/// Which triangle to pick next when starting a new strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Scan triangle indices in input order (the next-seed cursor of §4.3).
    #[default]
    Natural,
    /// Pre-sort triangle indices by ascending non-boundary adjacency count
    /// (the original's "SGI algorithm"), ties broken by natural order. Picks
    /// the least-connected triangles first, which tends to produce longer
    /// strips by saving well-connected triangles for later extension.
    LeastConnectedFirst,
}

/// Whether emitted strips must preserve consistent winding across their
/// whole sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Winding {
    /// No winding fix-up; the default.
    #[default]
    TwoSided,
    /// Apply the odd-parity reversal/duplication fix-up of spec.md §4.3 so
    /// consecutive triangles in a strip alternate consistently, as required
    /// by back-face culling.
    OneSided,
}

/// Configuration for [`crate::assemble::assemble_strips_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StripifyOptions {
    pub seed_policy: SeedPolicy,
    pub winding: Winding,
    /// When set, all strips are concatenated into one via degenerate bridge
    /// vertices (the original's "connect all strips" mode).
    pub connect_all: bool,
}
