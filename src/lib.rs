/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Converts a triangulated indexed mesh into a compact set of triangle
//! strips.
//!
//! The pipeline is: [`adjacency::build_adjacency`] discovers, for every
//! triangle, the (at most three) neighbours sharing an edge with it, using
//! the stable counting sort in [`sorter`] to do so in linear time; then
//! [`strip::walk`] greedily extends strips across that adjacency graph.
//! [`assemble::assemble_strips`] wires the two together and is the crate's
//! single entry point for most callers.
#![deny(unreachable_pub)]
#![deny(unconditional_recursion)]

pub mod adjacency;
pub mod assemble;
pub mod edge;
pub mod error;
pub mod fixture;
pub mod observer;
pub mod options;
pub mod sorter;
pub mod strip;

pub use assemble::{assemble_strips, assemble_strips_with_options, narrow_vertex_indices};
pub use error::StripError;
pub use observer::{LoggingObserver, NoopObserver, StripObserver};
pub use options::{SeedPolicy, StripifyOptions, Winding};
pub use strip::StripSet;

/// Re-exports everything a typical caller needs.
pub mod prelude {
    pub use crate::assemble::{assemble_strips, assemble_strips_with_options};
    pub use crate::error::StripError;
    pub use crate::observer::{LoggingObserver, NoopObserver, StripObserver};
    pub use crate::options::{SeedPolicy, StripifyOptions, Winding};
    pub use crate::strip::StripSet;
}
