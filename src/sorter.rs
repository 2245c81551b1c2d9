/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! A stable counting sort over small-domain integer keys, with support for
//! composite (multi-key) sorting via the `sort_by_with_prior` pattern.
//!
//! This is the subroutine that makes adjacency construction run in linear
//! time: two counting-sort passes over 16-bit keys, rather than a single
//! sort on a 32-bit composite key, bound the work at `O(N + K)` where `K` is
//! the key domain (65536), independent of mesh size.

use std::fmt;

/// An index into the original (pre-sort) sequence.
pub type Index = u32;

/// The sorter's own failure mode (spec.md §4.1): a key count the sorter's
/// `u32` permutation can't index, or a `prior` order whose length doesn't
/// match `keys`. This is a narrower, component-level contract than the
/// closed `StripError` taxonomy in `error.rs` (spec.md §6.1) — the sorter is
/// a general-purpose subroutine with its own failure mode, not one of the
/// four kinds the core operation's public `Result` is documented to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidArgument {
    pub count: u64,
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sorter input of {} keys exceeds the 2^32 permutation domain", self.count)
    }
}

impl std::error::Error for InvalidArgument {}

/// Returns a permutation `p` of `[0, n)` such that `keys[p[0]] <= keys[p[1]]
/// <= ...`, with ties broken by original position (stability).
pub fn sort_by(keys: &[u16]) -> Result<Vec<Index>, InvalidArgument> {
    let prior: Vec<Index> = (0..keys.len() as Index).collect();
    sort_by_with_prior(keys, &prior)
}

/// Like [`sort_by`], but ties are broken in the order given by `prior`
/// instead of natural position. Calling `sort_by_with_prior(minor, &sort_by(major)?)`
/// and then comparing is wrong; instead the composite-sort idiom is to sort
/// by the *minor* key first, then stably resort by the *major* key while
/// carrying the permutation forward:
///
/// ```ignore
/// let by_minor = sort_by(&minor_keys)?;
/// let by_major_then_minor = sort_by_with_prior(&major_keys, &by_minor)?;
/// ```
///
/// The result orders pairs `(major_keys[i], minor_keys[i])` lexicographically.
pub fn sort_by_with_prior(keys: &[u16], prior: &[Index]) -> Result<Vec<Index>, InvalidArgument> {
    let n = keys.len();
    if prior.len() != n {
        return Err(InvalidArgument { count: n as u64 });
    }
    if n as u64 > u32::MAX as u64 {
        return Err(InvalidArgument { count: n as u64 });
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    // Counting sort: bucket counts over the full 16-bit key domain, then a
    // prefix sum gives each bucket's starting offset in the output. Walking
    // `prior` in its own (already meaningful) order and placing each index
    // into its bucket in turn preserves stability: two entries with equal
    // keys keep the relative order they had in `prior`.
    let mut counts = vec![0u32; 1 << 16];
    for &k in keys {
        counts[k as usize] += 1;
    }
    let mut offsets = vec![0u32; 1 << 16];
    let mut running = 0u32;
    for (bucket, count) in counts.iter().enumerate() {
        offsets[bucket] = running;
        running += count;
    }

    let mut output = vec![0 as Index; n];
    for &i in prior {
        let key = keys[i as usize] as usize;
        output[offsets[key] as usize] = i;
        offsets[key] += 1;
    }
    Ok(output)
}
