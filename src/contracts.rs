// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the suffix array invariants.
//!
//! This module provides debug-mode assertions that re-check the structural
//! properties every other module relies on. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Treat a violation as a bug, never as a user-facing error
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function                | Property                                   |
//! |----------------------------------|--------------------------------------------|
//! | `check_suffix_array_permutation` | SA is a permutation of `0..n`              |
//! | `check_suffix_array_sorted`      | adjacent suffixes strictly increase        |
//! | `check_lcp_bounds`               | `lcp[p] <= n - max(sa[p-1], sa[p])`        |
//! | `check_lcp_correct`              | `lcp[p]` = literal common prefix length    |
//! | `check_search_bounds`            | `lo <= hi <= n` for a match range          |
//! | `check_index_well_formed`        | all of the above for a built index         |
//!
//! The cheap checks (permutation, LCP bounds, search bounds) run inside the
//! builders. The sortedness and LCP-correctness checks compare suffixes and can
//! cost O(n²) on repetitive text, so only tests call them.
//!
//! # Usage
//!
//! ```ignore
//! use suffixarray::contracts::*;
//!
//! // In debug builds, this panics if an invariant is violated
//! check_index_well_formed(&index);
//!
//! // In release builds, this is a no-op
//! ```

use crate::index::SuffixArray;
use crate::lcp::common_prefix_len;

// ============================================================================
// SUFFIX ARRAY CONTRACTS
// ============================================================================

/// Check that `sa` contains every offset in `0..n` exactly once.
///
/// # Panics (debug builds only)
/// Panics on a wrong length, an out-of-range offset or a duplicate.
#[inline]
pub fn check_suffix_array_permutation(sa: &[usize], n: usize) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert_eq!(
        sa.len(),
        n,
        "Contract violation: SuffixArray.Permutation - sa.len() {} != n {}",
        sa.len(),
        n
    );

    let mut seen = vec![false; n];
    for (p, &offset) in sa.iter().enumerate() {
        debug_assert!(
            offset < n,
            "Contract violation: SuffixArray.Permutation - sa[{}] = {} >= n {}",
            p,
            offset,
            n
        );
        if offset < n {
            debug_assert!(
                !seen[offset],
                "Contract violation: SuffixArray.Permutation - offset {} appears twice",
                offset
            );
            seen[offset] = true;
        }
    }
}

/// Check that the suffixes named by `sa` are in strictly increasing order.
///
/// A suffix that is a proper prefix of another compares smaller, which is
/// exactly how byte slices compare in Rust.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair violates the ordering.
#[inline]
pub fn check_suffix_array_sorted(text: &[u8], sa: &[usize]) {
    for p in 1..sa.len() {
        let prev = text.get(sa[p - 1]..).unwrap_or(&[]);
        let curr = text.get(sa[p]..).unwrap_or(&[]);

        debug_assert!(
            prev < curr,
            "Contract violation: SuffixArray.Sorted - \
             sa[{}] ({:?}) >= sa[{}] ({:?})",
            p - 1,
            String::from_utf8_lossy(&prev[..prev.len().min(20)]),
            p,
            String::from_utf8_lossy(&curr[..curr.len().min(20)])
        );
    }
}

// ============================================================================
// LCP ARRAY CONTRACTS
// ============================================================================

/// Check the LCP length and the upper bound each entry must respect.
///
/// # Panics (debug builds only)
/// Panics if `lcp.len() != sa.len()`, `lcp[0] != 0`, or any `lcp[p]` is longer
/// than the shorter of the two suffixes it describes.
#[inline]
pub fn check_lcp_bounds(sa: &[usize], lcp: &[usize]) {
    debug_assert_eq!(
        lcp.len(),
        sa.len(),
        "Contract violation: LcpBounds - lcp.len() {} != sa.len() {}",
        lcp.len(),
        sa.len()
    );

    if let Some(&first) = lcp.first() {
        debug_assert_eq!(
            first, 0,
            "Contract violation: LcpBounds - lcp[0] = {} (expected 0)",
            first
        );
    }

    let n = sa.len();
    for p in 1..lcp.len().min(n) {
        let bound = n - sa[p - 1].max(sa[p]);
        debug_assert!(
            lcp[p] <= bound,
            "Contract violation: LcpBounds - lcp[{}] = {} > {}",
            p,
            lcp[p],
            bound
        );
    }
}

/// Check that every LCP entry equals the literal common prefix length.
///
/// # Panics (debug builds only)
/// Panics if any LCP value is incorrect.
#[inline]
pub fn check_lcp_correct(text: &[u8], sa: &[usize], lcp: &[usize]) {
    check_lcp_bounds(sa, lcp);

    for p in 1..sa.len() {
        let prev = text.get(sa[p - 1]..).unwrap_or(&[]);
        let curr = text.get(sa[p]..).unwrap_or(&[]);
        let expected = common_prefix_len(prev, curr);

        debug_assert_eq!(
            lcp[p], expected,
            "Contract violation: LcpCorrect - lcp[{}] = {} (expected {})",
            p, lcp[p], expected
        );
    }
}

// ============================================================================
// BINARY SEARCH CONTRACTS
// ============================================================================

/// Check a match range returned by the binary searches.
#[inline]
pub fn check_search_bounds(lo: usize, hi: usize, sa_len: usize) {
    debug_assert!(
        lo <= hi && hi <= sa_len,
        "Contract violation: SearchBounds - range {}..{} outside 0..{}",
        lo,
        hi,
        sa_len
    );
}

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check every structural invariant of a built index.
///
/// Use this sparingly: the sortedness and LCP checks compare whole suffixes.
#[inline]
pub fn check_index_well_formed(index: &SuffixArray) {
    let text = index.text().as_bytes();
    check_suffix_array_permutation(index.index_points(), text.len());
    check_suffix_array_sorted(text, index.index_points());
    check_lcp_correct(text, index.index_points(), index.lcp());
}
