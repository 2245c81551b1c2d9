/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Greedy strip growth over the adjacency graph.
//!
//! Starting from a seed triangle, a strip is extended forward and backward
//! across shared edges until both directions hit a boundary or an
//! already-consumed triangle. Every triangle ends up assigned to exactly one
//! strip (invariant I4). Each seed is actually tried from all three of its
//! edges and the longest result kept (see `grow_strip`), a supplemental
//! refinement recovered from `examples/original_source/` rather than part of
//! spec.md's own text; this trades spec.md §4.3's strict single-pass `O(N)`
//! walk for up to three explorations per seed, matching the trade-off the
//! original stripifier makes for the same reason.

use std::collections::VecDeque;

use crate::adjacency::{AdjacencyRecord, BOUNDARY};
use crate::edge::CanonicalEdge;
use crate::observer::{timed_phase, StripObserver};
use crate::options::{SeedPolicy, StripifyOptions, Winding};
use crate::sorter;

/// The output of the strip walker: one `Vec<u16>` per strip, each of length
/// at least 3.
pub type StripSet = Vec<Vec<u16>>;

/// Walks `adjacency` to a covering set of strips, per `options`.
pub fn walk(adjacency: &[AdjacencyRecord], options: &StripifyOptions, observer: &dyn StripObserver) -> StripSet {
    let n = adjacency.len();
    let mut consumed = vec![false; n];

    let seed_order = timed_phase(observer, "seed_order", || seed_order(adjacency, options.seed_policy));

    let apply_fixup = options.winding == Winding::OneSided;
    let mut strips = timed_phase(observer, "strip_walk", || {
        let mut strips = Vec::new();
        for &seed in &seed_order {
            let seed = seed as usize;
            if consumed[seed] {
                continue;
            }
            let (mut strip, forward_len, back_len) = grow_strip(seed as u32, adjacency, &mut consumed);
            if apply_fixup {
                apply_one_sided_fixup(&mut strip, forward_len, back_len);
            }
            strips.push(strip);
        }
        strips
    });

    if options.connect_all {
        strips = timed_phase(observer, "connect_all", || connect_all(strips));
    }

    strips
}

/// Natural order is just `0..n`; least-connected-first pre-sorts triangle
/// indices by ascending non-boundary adjacency count via the same composite
/// sort the adjacency builder uses, ties broken by natural order.
fn seed_order(adjacency: &[AdjacencyRecord], policy: SeedPolicy) -> Vec<u32> {
    let n = adjacency.len();
    let natural: Vec<u32> = (0..n as u32).collect();
    match policy {
        SeedPolicy::Natural => natural,
        SeedPolicy::LeastConnectedFirst => {
            let counts: Vec<u16> = adjacency
                .iter()
                .map(|rec| rec.links.iter().filter(|&&l| l != BOUNDARY).count() as u16)
                .collect();
            sorter::sort_by_with_prior(&counts, &natural)
                .expect("triangle count already validated to fit the sorter's domain")
        }
    }
}

/// Grows one strip from seed triangle `t0`, marking every triangle it
/// consumes (including `t0` itself) in `consumed`. Returns the strip along
/// with how many vertices were appended during forward extension and
/// prepended during backward extension (used by the one-sided fix-up).
///
/// Tries all three of the seed's edges as the initial forward/backward
/// split and keeps the longest resulting strip, ties broken toward the
/// earliest rotation tried. A seed triangle can have strip-worthy neighbours
/// reachable only through its third edge; growing from a single fixed edge
/// pair (as if the seed's vertex order were the only valid starting split)
/// can strand those neighbours in strips of their own. This mirrors
/// `computeBestStrip`'s three-way trial in the original stripifier (the
/// "Bugfix by Eric Malafeew!" that tries `(v0,v1)`, `(v2,v0)`, and `(v1,v2)`
/// as starting edges and keeps the longest).
fn grow_strip(t0: u32, adjacency: &[AdjacencyRecord], consumed: &mut [bool]) -> (Vec<u16>, usize, usize) {
    let rec0 = &adjacency[t0 as usize];
    let [v0, v1, v2] = rec0.vertices;
    consumed[t0 as usize] = true;

    let rotations = [(v0, v1, v2), (v2, v0, v1), (v1, v2, v0)];

    // Every trial must grow from the same base state (only `t0` consumed),
    // so each trial's own marks are undone immediately after measuring it —
    // otherwise a later trial would see an earlier trial's tentative marks
    // as already-consumed and be unable to grow through them.
    let mut best: Option<(VecDeque<u16>, usize, usize, Vec<u32>)> = None;
    for (a, b, c) in rotations {
        let mut strip: VecDeque<u16> = VecDeque::from([a, b, c]);
        let mut touched: Vec<u32> = Vec::new();

        let mut front_tri = t0;
        let mut front_tail = (b, c);
        let forward_len = extend_forward(adjacency, consumed, &mut strip, &mut front_tri, &mut front_tail, &mut touched);

        let mut back_tri = t0;
        let mut back_tail = (a, b);
        let back_len = extend_backward(adjacency, consumed, &mut strip, &mut back_tri, &mut back_tail, &mut touched);

        for &t in &touched {
            consumed[t as usize] = false;
        }

        let is_better = match &best {
            None => true,
            Some((best_strip, ..)) => strip.len() > best_strip.len(),
        };
        if is_better {
            best = Some((strip, forward_len, back_len, touched));
        }
    }

    let (strip, forward_len, back_len, touched) = best.expect("exactly three rotations are always tried");
    for t in touched {
        consumed[t as usize] = true;
    }
    (strip.into_iter().collect(), forward_len, back_len)
}

fn extend_forward(
    adjacency: &[AdjacencyRecord],
    consumed: &mut [bool],
    strip: &mut VecDeque<u16>,
    front_tri: &mut u32,
    front_tail: &mut (u16, u16),
    touched: &mut Vec<u32>,
) -> usize {
    let mut extended = 0;
    loop {
        let edge = CanonicalEdge::new(front_tail.0, front_tail.1);
        let rec = &adjacency[*front_tri as usize];
        let slot = rec
            .slot_for(edge)
            .expect("front_tail is always an edge of the current front triangle");
        let link = rec.links[slot];
        if link == BOUNDARY || consumed[link as usize] {
            return extended;
        }
        let u_rec = &adjacency[link as usize];
        let [a, b, c] = u_rec.vertices;
        let w = edge
            .opposite_vertex(a, b, c)
            .expect("shared edge must belong to the neighbouring triangle");
        strip.push_back(w);
        consumed[link as usize] = true;
        touched.push(link);
        *front_tri = link;
        *front_tail = (front_tail.1, w);
        extended += 1;
    }
}

fn extend_backward(
    adjacency: &[AdjacencyRecord],
    consumed: &mut [bool],
    strip: &mut VecDeque<u16>,
    back_tri: &mut u32,
    back_tail: &mut (u16, u16),
    touched: &mut Vec<u32>,
) -> usize {
    let mut extended = 0;
    loop {
        let edge = CanonicalEdge::new(back_tail.0, back_tail.1);
        let rec = &adjacency[*back_tri as usize];
        let slot = rec
            .slot_for(edge)
            .expect("back_tail is always an edge of the current back triangle");
        let link = rec.links[slot];
        if link == BOUNDARY || consumed[link as usize] {
            return extended;
        }
        let u_rec = &adjacency[link as usize];
        let [a, b, c] = u_rec.vertices;
        let w = edge
            .opposite_vertex(a, b, c)
            .expect("shared edge must belong to the neighbouring triangle");
        strip.push_front(w);
        consumed[link as usize] = true;
        touched.push(link);
        *back_tri = link;
        *back_tail = (w, back_tail.0);
        extended += 1;
    }
}

/// Applies the odd-parity reversal/duplication fix-up described in spec.md
/// §4.3's "Orientation / one-sided policy" paragraph. `strip` is mutated in
/// place; it may grow by one element.
fn apply_one_sided_fixup(strip: &mut Vec<u16>, forward_len: usize, back_len: usize) {
    if forward_len % 2 == 1 {
        strip.reverse();
        let seed_position = strip.len() - 1 - back_len;
        if seed_position % 2 == 1 {
            let first = strip[0];
            strip.insert(0, first);
        }
    }
}

/// Concatenates all strips into one by bridging consecutive strips with two
/// duplicated vertices (the previous strip's last vertex, the next strip's
/// first vertex), producing degenerate zero-area triangles at the seams.
fn connect_all(strips: StripSet) -> StripSet {
    let mut iter = strips.into_iter();
    let Some(mut joined) = iter.next() else {
        return Vec::new();
    };
    for strip in iter {
        if strip.is_empty() {
            continue;
        }
        let last = *joined.last().unwrap();
        let first = strip[0];
        joined.push(last);
        joined.push(first);
        joined.extend(strip);
    }
    vec![joined]
}
