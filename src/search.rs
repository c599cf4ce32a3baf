// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring queries by binary search over the suffix array.
//!
//! Every occurrence of a pattern is the start of a suffix that has the pattern
//! as a prefix, and in sorted order those suffixes sit in one contiguous run.
//! Two binary searches find the run:
//!
//! ```text
//! text = "banana", pattern = "ana"
//!
//!   p  sa[p]  suffix
//!   0    5    a
//!   1    3    ana      ← lower bound: first suffix ≥ "ana" (on |pattern| units)
//!   2    1    anana
//!   3    0    banana   ← upper bound: first suffix without "ana" as prefix
//!   4    4    na
//!   5    2    nana
//!
//! occurrences = sa[1..3] = [3, 1]     count = 2
//! ```
//!
//! # Skipping known prefix
//!
//! While narrowing `[lo, hi)`, the searches remember how many code units of
//! the pattern matched the suffix just left of `lo` and the suffix at `hi`.
//! Everything strictly between two sorted suffixes shares at least the smaller
//! of those two lengths with the pattern, so each comparison starts there
//! instead of at zero.
//!
//! When the LCP array is available, `occurrences` finds the end of the run by
//! walking `lcp` forward from the lower bound instead of a second binary
//! search: the run continues exactly while `lcp[q] >= |pattern|`.
//!
//! # Edge policy
//!
//! - The **empty pattern matches every offset**: it is a prefix of every
//!   suffix, so the range is `0..n`. This is deliberate.
//! - A pattern longer than the text, or absent from it, yields an empty range.
//! - No query ever fails or panics, whatever bytes the pattern holds.

use std::cmp::Ordering;
use std::ops::Range;

use crate::contracts::check_search_bounds;
use crate::lcp::common_prefix_len;

/// Read-only query engine over a text and its suffix array.
///
/// Holds only borrows, so it is `Copy` and any number of threads can query
/// the same index at once.
#[derive(Debug, Clone, Copy)]
pub struct PatternMatcher<'a> {
    text: &'a [u8],
    sa: &'a [usize],
    lcp: Option<&'a [usize]>,
}

impl<'a> PatternMatcher<'a> {
    pub fn new(text: &'a [u8], sa: &'a [usize]) -> Self {
        Self {
            text,
            sa,
            lcp: None,
        }
    }

    /// Attach the LCP array of `sa` to speed up `occurrences`.
    pub fn with_lcp(mut self, lcp: &'a [usize]) -> Self {
        debug_assert_eq!(lcp.len(), self.sa.len());
        self.lcp = Some(lcp);
        self
    }

    /// Does `pattern` occur anywhere in the text?
    pub fn contains(&self, pattern: &[u8]) -> bool {
        !self.range(pattern).is_empty()
    }

    /// Number of occurrences of `pattern` (overlapping ones included).
    pub fn count(&self, pattern: &[u8]) -> usize {
        self.range(pattern).len()
    }

    /// Start offsets of every occurrence, in sorted-suffix order.
    pub fn occurrences(&self, pattern: &[u8]) -> Vec<usize> {
        let lo = self.lower_bound(pattern);
        let hi = match self.lcp {
            Some(lcp) => self.upper_bound_by_lcp(lcp, pattern, lo),
            None => self.upper_bound(pattern, lo),
        };
        check_search_bounds(lo, hi, self.sa.len());
        self.sa[lo..hi].to_vec()
    }

    /// Start offsets of every occurrence, in text order.
    pub fn occurrences_sorted(&self, pattern: &[u8]) -> Vec<usize> {
        let mut offsets = self.occurrences(pattern);
        offsets.sort_unstable();
        offsets
    }

    /// Offset of the first matching suffix in sorted order.
    pub fn search(&self, pattern: &[u8]) -> Option<usize> {
        let lo = self.lower_bound(pattern);
        if lo < self.sa.len() && self.compare(self.sa[lo], pattern, 0).0 == Ordering::Equal {
            Some(self.sa[lo])
        } else {
            None
        }
    }

    /// The run `[lo, hi)` of sorted positions whose suffixes start with `pattern`.
    pub fn range(&self, pattern: &[u8]) -> Range<usize> {
        let lo = self.lower_bound(pattern);
        let hi = self.upper_bound(pattern, lo);
        check_search_bounds(lo, hi, self.sa.len());
        lo..hi
    }

    /// Smallest `p` whose suffix, cut to `|pattern|`, is `>= pattern`.
    fn lower_bound(&self, pattern: &[u8]) -> usize {
        if pattern.is_empty() {
            return 0;
        }

        // INVARIANT: SEARCH_RANGE_CONTIGUOUS
        // Suffixes before lo compare Less; suffixes at or after hi do not.
        let (mut lo, mut hi) = (0, self.sa.len());
        let (mut lcp_lo, mut lcp_hi) = (0, 0);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let (ord, matched) = self.compare(self.sa[mid], pattern, lcp_lo.min(lcp_hi));
            if ord == Ordering::Less {
                lo = mid + 1;
                lcp_lo = matched;
            } else {
                hi = mid;
                lcp_hi = matched;
            }
        }
        lo
    }

    /// Smallest `q >= from` whose suffix does not start with `pattern`.
    ///
    /// `from` must be the lower bound, so every suffix in `from..` compares
    /// Equal or Greater.
    fn upper_bound(&self, pattern: &[u8], from: usize) -> usize {
        let n = self.sa.len();
        if pattern.is_empty() {
            return n;
        }
        if from >= n || self.compare(self.sa[from], pattern, 0).0 != Ordering::Equal {
            return from;
        }

        // Suffixes before lo start with pattern; suffixes at or after hi do not.
        let (mut lo, mut hi) = (from + 1, n);
        let (mut lcp_lo, mut lcp_hi) = (pattern.len(), 0);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let (ord, matched) = self.compare(self.sa[mid], pattern, lcp_lo.min(lcp_hi));
            if ord == Ordering::Greater {
                hi = mid;
                lcp_hi = matched;
            } else {
                lo = mid + 1;
                lcp_lo = matched;
            }
        }
        lo
    }

    /// Like [`Self::upper_bound`], but walks the LCP array from `from`.
    ///
    /// O(occurrences) instead of O(log n) comparisons, which is never worse
    /// when the caller is about to copy every occurrence anyway.
    fn upper_bound_by_lcp(&self, lcp: &[usize], pattern: &[u8], from: usize) -> usize {
        let n = self.sa.len();
        if pattern.is_empty() {
            return n;
        }
        if from >= n || self.compare(self.sa[from], pattern, 0).0 != Ordering::Equal {
            return from;
        }
        let mut q = from + 1;
        while q < n && lcp[q] >= pattern.len() {
            q += 1;
        }
        q
    }

    /// Compare the suffix at `offset`, cut to `|pattern|`, against `pattern`.
    ///
    /// The first `skip` code units are known to match. Returns the ordering and
    /// how many code units matched in total.
    fn compare(&self, offset: usize, pattern: &[u8], skip: usize) -> (Ordering, usize) {
        let suffix = self.text.get(offset..).unwrap_or(&[]);
        let skip = skip.min(suffix.len()).min(pattern.len());
        let matched = skip + common_prefix_len(&suffix[skip..], &pattern[skip..]);

        let ord = if matched == pattern.len() {
            Ordering::Equal
        } else if matched == suffix.len() {
            // The suffix ran out first: shorter sorts first
            Ordering::Less
        } else {
            suffix[matched].cmp(&pattern[matched])
        };
        (ord, matched)
    }
}
