// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for suffix array construction.
//!
//! Arbitrary bytes go straight into `SuffixArray::try_from`. Anything that
//! isn't UTF-8 must come back as `InvalidInput`, and anything that is must
//! produce a permutation whose suffixes are strictly increasing, with an LCP
//! array that agrees with a direct comparison of neighbours.

#![no_main]

use libfuzzer_sys::fuzz_target;
use suffixarray::{common_prefix_len, SuffixArray, SuffixArrayError};

fuzz_target!(|data: &[u8]| {
    // Long inputs only slow the naive checks below down
    let data = &data[..data.len().min(4096)];

    let sa = match SuffixArray::try_from(data) {
        Ok(sa) => sa,
        Err(SuffixArrayError::InvalidInput { .. }) => {
            assert!(std::str::from_utf8(data).is_err(), "valid UTF-8 was rejected");
            return;
        }
        Err(other) => panic!("unexpected error: {:?}", other),
    };

    let text = sa.text().as_bytes();
    let n = text.len();
    assert_eq!(text, data, "text must round-trip exactly");

    // INVARIANT 1: index points are a permutation of 0..n
    let mut seen = vec![false; n];
    for &offset in sa.index_points() {
        assert!(offset < n, "offset {} out of range for n = {}", offset, n);
        assert!(!seen[offset], "offset {} appears twice", offset);
        seen[offset] = true;
    }
    assert_eq!(sa.len(), n);

    // INVARIANT 2: suffixes strictly increase, LCP matches neighbours
    assert!(sa.lcp().first().map_or(true, |&l| l == 0));
    for p in 1..n {
        let prev = &text[sa.index_points()[p - 1]..];
        let curr = &text[sa.index_points()[p]..];
        assert!(prev < curr, "suffixes out of order at rank {}", p);
        assert_eq!(sa.lcp()[p], common_prefix_len(prev, curr), "lcp wrong at rank {}", p);
    }
});
