// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The suffix array index: text, sorted offsets and LCP, owned together.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SUFFIX_ARRAY_COMPLETE**: `index_points` is a permutation of `0..n`
//! 2. **SUFFIX_ARRAY_SORTED**: suffixes at consecutive index points strictly increase
//! 3. **LCP_CORRECT**: `lcp[p]` = common prefix length of the suffixes at `p - 1` and `p`
//! 4. **IMMUTABLE**: nothing changes after construction, so readers never lock
//!
//! All three arrays are built in one call and there is no way to observe a
//! half-built index: construction returns `Err` before anything is exposed.

use std::convert::Infallible;
use std::str::FromStr;

use serde::Serialize;

use crate::build::{build_suffix_array, build_suffix_array_cancellable, Cancellation};
use crate::error::SuffixArrayError;
use crate::lcp::build_lcp;
use crate::search::PatternMatcher;
use crate::text::Text;

/// A suffix array over one text, with its LCP array.
///
/// # Example
///
/// ```
/// use suffixarray::SuffixArray;
///
/// let sa = SuffixArray::new("banana");
/// assert_eq!(sa.index_points(), &[5, 3, 1, 0, 4, 2]);
/// assert_eq!(sa.occurrences_sorted("ana"), vec![1, 3]);
/// assert_eq!(sa.count("ana"), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuffixArray {
    text: Text,
    index_points: Vec<usize>,
    lcp: Vec<usize>,
}

impl SuffixArray {
    /// Validate `input` and build the index.
    ///
    /// Fails with [`SuffixArrayError::InvalidArgument`] for `None` and
    /// [`SuffixArrayError::InvalidInput`] for bytes that are not UTF-8 text.
    pub fn construct<B: AsRef<[u8]>>(input: Option<B>) -> Result<Self, SuffixArrayError> {
        Text::new(input).map(Self::from_text)
    }

    /// Like [`Self::construct`], but aborts with
    /// [`SuffixArrayError::Cancelled`] if `cancel` fires between doubling rounds.
    pub fn construct_cancellable<B: AsRef<[u8]>>(
        input: Option<B>,
        cancel: &Cancellation,
    ) -> Result<Self, SuffixArrayError> {
        let text = Text::new(input)?;
        let index_points = build_suffix_array_cancellable(text.as_bytes(), cancel)?;
        Ok(Self::assemble(text, index_points))
    }

    /// Build from a JSON value: `null` is a missing argument, non-strings are
    /// not textual.
    #[cfg(feature = "serde_json")]
    pub fn from_value(value: &serde_json::Value) -> Result<Self, SuffixArrayError> {
        Text::from_value(value).map(Self::from_text)
    }

    /// Build from text the type system already vouches for.
    pub fn new(text: impl Into<Text>) -> Self {
        Self::from_text(text.into())
    }

    /// Build from an already validated [`Text`].
    pub fn from_text(text: Text) -> Self {
        let index_points = build_suffix_array(text.as_bytes());
        Self::assemble(text, index_points)
    }

    fn assemble(text: Text, index_points: Vec<usize>) -> Self {
        let lcp = build_lcp(text.as_bytes(), &index_points);
        Self {
            text,
            index_points,
            lcp,
        }
    }

    /// The original input, unchanged.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Suffix start offsets in lexicographic order of their suffixes.
    pub fn index_points(&self) -> &[usize] {
        &self.index_points
    }

    /// `lcp[p]` = common prefix length of the suffixes at `p - 1` and `p`; `lcp[0] = 0`.
    pub fn lcp(&self) -> &[usize] {
        &self.lcp
    }

    /// Number of suffixes, which is the text length in bytes.
    pub fn len(&self) -> usize {
        self.index_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_points.is_empty()
    }

    /// The suffix at sorted position `p`.
    pub fn suffix(&self, p: usize) -> Option<&[u8]> {
        self.index_points.get(p).map(|&offset| self.text.suffix(offset))
    }

    /// Query engine borrowing this index.
    pub fn matcher(&self) -> PatternMatcher<'_> {
        PatternMatcher::new(self.text.as_bytes(), &self.index_points).with_lcp(&self.lcp)
    }

    /// Does `pattern` occur in the text?
    pub fn contains<P: AsRef<[u8]>>(&self, pattern: P) -> bool {
        self.matcher().contains(pattern.as_ref())
    }

    /// How many times does `pattern` occur (overlaps included)?
    pub fn count<P: AsRef<[u8]>>(&self, pattern: P) -> usize {
        self.matcher().count(pattern.as_ref())
    }

    /// Occurrence offsets in sorted-suffix order.
    ///
    /// The empty pattern matches every offset.
    pub fn occurrences<P: AsRef<[u8]>>(&self, pattern: P) -> Vec<usize> {
        self.matcher().occurrences(pattern.as_ref())
    }

    /// Occurrence offsets in text order.
    pub fn occurrences_sorted<P: AsRef<[u8]>>(&self, pattern: P) -> Vec<usize> {
        self.matcher().occurrences_sorted(pattern.as_ref())
    }

    /// Offset of the first matching suffix in sorted order, if any.
    pub fn search<P: AsRef<[u8]>>(&self, pattern: P) -> Option<usize> {
        self.matcher().search(pattern.as_ref())
    }

    /// Sorted positions `[lo, hi)` whose suffixes start with `pattern`.
    pub fn range<P: AsRef<[u8]>>(&self, pattern: P) -> std::ops::Range<usize> {
        self.matcher().range(pattern.as_ref())
    }

    /// Give back the text, dropping the arrays.
    pub fn into_text(self) -> String {
        self.text.into_string()
    }
}

impl TryFrom<&[u8]> for SuffixArray {
    type Error = SuffixArrayError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::construct(Some(bytes))
    }
}

impl TryFrom<Vec<u8>> for SuffixArray {
    type Error = SuffixArrayError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        let text = String::from_utf8(bytes).map_err(|e| SuffixArrayError::InvalidInput {
            reason: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
        })?;
        Ok(Self::new(text))
    }
}

impl FromStr for SuffixArray {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
