// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for pattern queries.
//!
//! Builds an index over a fuzzed text and queries it with a fuzzed pattern.
//! The answers must match a window-by-window scan of the text, whatever the
//! bytes are: empty patterns, patterns longer than the text, and patterns that
//! begin in the middle of a multibyte character included.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use suffixarray::SuffixArray;

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    pattern: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let text = &input.text[..floor_char_boundary(&input.text, 2048)];
    let pattern = &input.pattern[..input.pattern.len().min(64)];
    let sa = SuffixArray::new(text);
    let bytes = text.as_bytes();

    let expected: Vec<usize> = if pattern.is_empty() {
        (0..bytes.len()).collect()
    } else {
        bytes
            .windows(pattern.len())
            .enumerate()
            .filter(|(_, w)| *w == pattern)
            .map(|(o, _)| o)
            .collect()
    };

    // INVARIANT 1: occurrences are exactly the matching windows
    assert_eq!(sa.occurrences_sorted(pattern), expected);
    assert_eq!(sa.count(pattern), expected.len());
    assert_eq!(sa.contains(pattern), !expected.is_empty());

    // INVARIANT 2: the range covers the same suffixes, in suffix order
    let range = sa.range(pattern);
    assert_eq!(range.len(), expected.len());
    assert_eq!(sa.occurrences(pattern), sa.index_points()[range.clone()].to_vec());

    // INVARIANT 3: search returns the first suffix of the range
    assert_eq!(sa.search(pattern), sa.index_points().get(range.start).copied().filter(|_| !range.is_empty()));
});

fn floor_char_boundary(s: &str, max: usize) -> usize {
    let mut end = s.len().min(max);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}
