//! Suffix array property tests.
//!
//! - Completeness: every offset appears exactly once
//! - Sortedness: suffixes strictly increase, shorter prefix first
//! - LCP correctness: each entry equals the literal common prefix length
//! - Unicode: multibyte text orders by its UTF-8 bytes

use super::common::{assert_index_well_formed, naive_lcp, naive_suffix_array};
use proptest::prelude::*;
use suffixarray::{build_suffix_array, SuffixArray};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabets produce long repeats, which is where doubling does real work.
fn repetitive_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{0,64}").unwrap()
}

/// Printable ASCII plus whitespace and NUL.
fn ascii_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~\\t\\n\\x00]{0,80}").unwrap()
}

/// Words with multi-byte characters joined by spaces.
fn unicode_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "café", "naïve", "tōkyō", "harīṣh", "తెలుగు", "日本", "🦀", "a", "ab", "é",
        ]),
        0..12,
    )
    .prop_map(|words| words.join(" "))
}

/// A short seed repeated many times: the worst case for round count.
fn periodic_text_strategy() -> impl Strategy<Value = String> {
    (prop::string::string_regex("[a-c]{1,4}").unwrap(), 1usize..40)
        .prop_map(|(seed, times)| seed.repeat(times))
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_index_well_formed_repetitive(text in repetitive_text_strategy()) {
        assert_index_well_formed(&SuffixArray::new(text.as_str()));
    }

    #[test]
    fn prop_index_well_formed_ascii(text in ascii_text_strategy()) {
        assert_index_well_formed(&SuffixArray::new(text.as_str()));
    }

    #[test]
    fn prop_index_well_formed_unicode(text in unicode_text_strategy()) {
        assert_index_well_formed(&SuffixArray::new(text.as_str()));
    }

    #[test]
    fn prop_matches_naive_sort(text in periodic_text_strategy()) {
        let bytes = text.as_bytes();
        prop_assert_eq!(build_suffix_array(bytes), naive_suffix_array(bytes));
    }

    #[test]
    fn prop_lcp_matches_naive(text in unicode_text_strategy()) {
        let sa = SuffixArray::new(text.as_str());
        let expected = naive_lcp(text.as_bytes(), sa.index_points());
        prop_assert_eq!(sa.lcp(), expected.as_slice());
    }

    #[test]
    fn prop_text_round_trips(text in any::<String>()) {
        let sa = SuffixArray::construct(Some(text.as_str())).unwrap();
        prop_assert_eq!(sa.text(), text.as_str());
        prop_assert_eq!(sa.len(), text.len());
    }

    #[test]
    fn prop_arbitrary_bytes_validate_like_std(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        let result = SuffixArray::construct(Some(bytes.as_slice()));
        prop_assert_eq!(result.is_ok(), std::str::from_utf8(&bytes).is_ok());
    }

    #[test]
    fn prop_construction_is_deterministic(text in ascii_text_strategy()) {
        prop_assert_eq!(SuffixArray::new(text.as_str()), SuffixArray::new(text.as_str()));
    }
}
