// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix array construction by prefix doubling.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "banana"            offsets 0..6
//!
//! Round 0 (k=1): key = (rank[i], rank[i+1] or ⊥)
//! ┌────────┬───┬───┬───┬───┬───┬───┐
//! │ offset │ 0 │ 1 │ 2 │ 3 │ 4 │ 5 │
//! │ key    │b,a│a,n│n,a│a,n│n,a│a,⊥│   (⊥ = SENTINEL_LOW, below every rank)
//! │ rank'  │ 3 │ 2 │ 4 │ 2 │ 4 │ 1 │
//! └────────┴───┴───┴───┴───┴───┴───┘
//!
//! Round 1 (k=2): key = (rank[i], rank[i+2] or ⊥)
//! ┌────────┬───┬───┬───┬───┬───┬───┐
//! │ key    │3,4│2,2│4,4│2,1│4,⊥│1,⊥│
//! │ rank'  │ 4 │ 3 │ 6 │ 2 │ 5 │ 1 │   all distinct → stop
//! └────────┴───┴───┴───┴───┴───┴───┘
//!
//! Output: [5, 3, 1, 0, 4, 2]
//! ```
//!
//! After the round with step `k`, `rank[i]` orders offsets by their first `2k`
//! code units. A suffix that runs out before `i + k` gets ⊥ as its second key,
//! which puts it ahead of every longer suffix sharing its prefix. That is the
//! whole tie-break rule: no terminator byte is appended to the text.
//!
//! # Complexity
//!
//! - Time: O(n log n). At most ⌈log₂ n⌉ rounds, each a two-pass counting sort
//!   over ranks bounded by n
//! - Space: O(n) (rank, scratch rank, working order, one bucket table)
//!
//! Suffixes are never materialized. Rounds are sequential, but with the
//! `parallel` feature a large round is sorted on the rayon pool instead.

pub mod parallel;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::contracts::check_suffix_array_permutation;
use crate::error::SuffixArrayError;

/// Second-key stand-in for "no code unit at `i + k`". Real ranks start at 1.
const SENTINEL_LOW: usize = 0;

/// Largest initial rank: a byte value plus one.
const MAX_BYTE_RANK: usize = 256;

/// Below this many offsets a round is sorted on the calling thread.
#[cfg(feature = "parallel")]
const PARALLEL_SORT_THRESHOLD: usize = 1 << 14;

/// Cooperative cancellation handle for long constructions.
///
/// Clones share one flag, so a handle can be given to another thread (a UI,
/// a timeout watchdog) and flipped while the build runs. The builder looks at
/// the flag once before every doubling round.
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    flag: Arc<AtomicBool>,
}

impl Cancellation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// `Err(Cancelled)` if cancellation was requested before `round`.
    pub fn check(&self, round: usize) -> Result<(), SuffixArrayError> {
        if self.is_cancelled() {
            Err(SuffixArrayError::Cancelled { round })
        } else {
            Ok(())
        }
    }
}

/// Build the suffix array of `text`.
///
/// `sa[p]` is the start offset of the `p`-th smallest suffix. Total and
/// deterministic: the empty text gives an empty array.
pub fn build_suffix_array(text: &[u8]) -> Vec<usize> {
    let mut state = Doubling::new(text);
    while !state.step() {}
    state.finish()
}

/// Same output as [`build_suffix_array`], but gives up with
/// [`SuffixArrayError::Cancelled`] if `cancel` fires between rounds.
pub fn build_suffix_array_cancellable(
    text: &[u8],
    cancel: &Cancellation,
) -> Result<Vec<usize>, SuffixArrayError> {
    let mut state = Doubling::new(text);
    while !state.done {
        cancel.check(state.round)?;
        state.step();
    }
    Ok(state.finish())
}

/// Working state of one construction.
struct Doubling {
    /// rank[i] orders offset i by its first 2k code units (k of the last round)
    rank: Vec<usize>,
    /// Receives the next round's ranks, then swaps with `rank`
    scratch: Vec<usize>,
    /// Offsets sorted by `rank`
    order: Vec<usize>,
    /// Largest value currently in `rank`
    max_rank: usize,
    k: usize,
    round: usize,
    done: bool,
}

impl Doubling {
    fn new(text: &[u8]) -> Self {
        let n = text.len();
        Self {
            // INVARIANT: SHORTER_SUFFIX_FIRST
            // +1 keeps SENTINEL_LOW strictly below every real code unit
            rank: text.iter().map(|&b| usize::from(b) + 1).collect(),
            scratch: vec![0; n],
            order: (0..n).collect(),
            max_rank: MAX_BYTE_RANK,
            k: 1,
            round: 0,
            // 0 or 1 offsets are already in order
            done: n <= 1,
        }
    }

    /// Run one doubling round. Returns `true` once the order is total.
    fn step(&mut self) -> bool {
        if self.done {
            return true;
        }

        let n = self.order.len();
        let k = self.k;
        let max_rank = self.max_rank;
        let Doubling {
            rank,
            scratch,
            order,
            ..
        } = self;
        let rank: &[usize] = rank;
        let key = |i: usize| {
            let second = if i + k < n { rank[i + k] } else { SENTINEL_LOW };
            (rank[i], second)
        };

        sort_round(order, &key, max_rank);

        // Dense re-rank: equal keys share a rank, each new key bumps it by one
        scratch[order[0]] = 1;
        for p in 1..n {
            let prev = order[p - 1];
            let curr = order[p];
            scratch[curr] = scratch[prev] + usize::from(key(curr) != key(prev));
        }
        let distinct = scratch[order[n - 1]];

        std::mem::swap(&mut self.rank, &mut self.scratch);
        self.max_rank = distinct;
        self.round += 1;
        self.k *= 2;

        // INVARIANT: RANKS_CONVERGE
        // Once 2k >= n every suffix is told apart by its first 2k code units,
        // so the loop can never run past ⌈log₂ n⌉ rounds.
        self.done = distinct == n || self.k >= n;
        debug_assert!(
            !self.done || distinct == n,
            "Contract violation: doubling stopped at k={} with only {} distinct ranks for {} offsets",
            self.k,
            distinct,
            n
        );
        self.done
    }

    fn finish(self) -> Vec<usize> {
        // INVARIANT: SUFFIX_ARRAY_COMPLETE
        check_suffix_array_permutation(&self.order, self.rank.len());
        self.order
    }
}

/// Sort the working order by the round key.
///
/// Both key components are at most `max_rank`, so a stable counting sort on
/// the second component followed by one on the first orders the pairs in
/// linear time. The parallel path trades that for a comparison sort that
/// splits across threads; unstable is fine there because offsets with equal
/// keys get equal ranks and their relative order never reaches the output.
fn sort_round<K>(order: &mut [usize], key: &K, max_rank: usize)
where
    K: Fn(usize) -> (usize, usize) + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if order.len() >= PARALLEL_SORT_THRESHOLD {
            order.par_sort_unstable_by_key(|&i| key(i));
            return;
        }
    }

    let mut by_second = vec![0; order.len()];
    counting_sort(order, &mut by_second, max_rank, |i| key(i).1);
    counting_sort(&by_second, order, max_rank, |i| key(i).0);
}

/// Stable counting sort of `src` into `dst` by `bucket(i) ∈ [0, max_bucket]`.
fn counting_sort<F>(src: &[usize], dst: &mut [usize], max_bucket: usize, bucket: F)
where
    F: Fn(usize) -> usize,
{
    let mut starts = vec![0usize; max_bucket + 2];
    for &i in src {
        starts[bucket(i) + 1] += 1;
    }
    for b in 1..starts.len() {
        starts[b] += starts[b - 1];
    }
    for &i in src {
        let b = bucket(i);
        dst[starts[b]] = i;
        starts[b] += 1;
    }
}
