// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! LCP array construction (Kasai et al., 2001).
//!
//! `lcp[p]` is the length of the longest common prefix of the suffixes at
//! `sa[p - 1]` and `sa[p]`; `lcp[0]` is 0 by convention.
//!
//! # Why text order
//!
//! Comparing neighbours in sorted order from scratch is O(n²) on repetitive
//! input. Walking offsets in *text* order instead, the common prefix found for
//! offset `i` shrinks by at most one for `i + 1`: drop the first code unit of
//! both suffixes and the rest still matches. So the running length `h` only
//! ever drops by one per step and the total extension work is bounded by 2n.
//!
//! ```text
//! text = "banana"   sa = [5, 3, 1, 0, 4, 2]
//!
//! i=0 "banana"  prev "ana"    h=0
//! i=1 "anana"   prev "ana"    h=3   ← extended from 0
//! i=2 "nana"    prev "na"     h=2   ← carried 3-1, no extension needed
//! i=3 "ana"     prev "a"      h=1
//! i=4 "na"      prev "banana" h=0
//! i=5 "a"       rank 0        (no predecessor, h reset)
//!
//! lcp = [0, 1, 3, 0, 0, 2]
//! ```

use crate::contracts::check_lcp_bounds;

/// Build the LCP array for `text` and its suffix array `sa` in O(n).
pub fn build_lcp(text: &[u8], sa: &[usize]) -> Vec<usize> {
    let n = sa.len();
    let mut lcp = vec![0; n];
    if n < 2 {
        return lcp;
    }

    // Inverse permutation: where does offset i sit in sorted order?
    let mut rank = vec![0; n];
    for (p, &offset) in sa.iter().enumerate() {
        rank[offset] = p;
    }

    // INVARIANT: LCP_CORRECT
    // `h` is a lower bound on the common prefix of offset i with its sorted
    // predecessor. Never reset except at rank 0.
    let mut h = 0usize;
    for i in 0..n {
        let p = rank[i];
        if p == 0 {
            h = 0;
            continue;
        }
        let j = sa[p - 1];
        while i + h < n && j + h < n && text[i + h] == text[j + h] {
            h += 1;
        }
        lcp[p] = h;
        h = h.saturating_sub(1);
    }

    check_lcp_bounds(sa, &lcp);
    lcp
}

/// Length of the longest common prefix of two byte strings.
pub fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
