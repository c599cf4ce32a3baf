//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides brute-force oracles to check the real builders against:
//! slow, obviously correct, and never used outside tests and benches.

#![doc(hidden)]

use crate::lcp::common_prefix_len;

/// Suffix array by sorting offsets with full slice comparisons. O(n² log n).
pub fn naive_suffix_array(text: &[u8]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..text.len()).collect();
    sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    sa
}

/// LCP array by comparing every sorted neighbour pair from scratch.
pub fn naive_lcp(text: &[u8], sa: &[usize]) -> Vec<usize> {
    let mut lcp = vec![0; sa.len()];
    for p in 1..sa.len() {
        lcp[p] = common_prefix_len(&text[sa[p - 1]..], &text[sa[p]..]);
    }
    lcp
}

/// Every offset where `pattern` occurs, by scanning each window.
///
/// Follows the same policy as the matcher: the empty pattern matches every
/// offset of the text.
pub fn naive_occurrences(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() {
        return (0..text.len()).collect();
    }
    if pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&offset| &text[offset..offset + pattern.len()] == pattern)
        .collect()
}

/// Deterministic pseudo-random text over `alphabet` (LCG, fixed seed).
pub fn pseudo_random_text(len: usize, alphabet: &[u8], seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            alphabet[(state >> 16) as usize % alphabet.len()]
        })
        .collect()
}
