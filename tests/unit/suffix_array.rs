//! Construction tests: known vectors, ordering edge cases, LCP values.

use super::common::{
    assert_index_well_formed, checked_index, naive_suffix_array, pseudo_random_text,
    KNOWN_VECTORS, MULTILINGUAL,
};
use suffixarray::{build_lcp, build_suffix_array, Cancellation, SuffixArray, SuffixArrayError};

#[test]
fn test_known_vectors() {
    for (text, expected) in KNOWN_VECTORS {
        let sa = checked_index(text);
        assert_eq!(sa.index_points(), *expected, "index points of {:?}", text);
    }
}

#[test]
fn test_construct_with_string_has_one_point_per_byte() {
    let sa = SuffixArray::construct(Some("hoge")).unwrap();
    assert_eq!(sa.index_points().len(), 4);
    assert_eq!(sa.index_points(), &[3, 2, 1, 0]);
}

#[test]
fn test_text_round_trips_unchanged() {
    for text in ["abracadabra", "", "  leading and trailing  ", "tab\tand\nnewline", MULTILINGUAL] {
        assert_eq!(SuffixArray::new(text).text(), text);
    }
}

#[test]
fn test_shorter_prefix_suffix_sorts_first() {
    // Every suffix of a run is a prefix of the one before it
    let sa = checked_index("zzzzzz");
    assert_eq!(sa.index_points(), &[5, 4, 3, 2, 1, 0]);

    // "ab" < "abab" < "b" < "bab"
    let sa = checked_index("abab");
    assert_eq!(sa.index_points(), &[2, 0, 3, 1]);
}

#[test]
fn test_nul_bytes_sort_above_the_end_of_text() {
    // "\0" must sort after "" (end of suffix), so the suffix "a" < "a\0"
    let sa = checked_index("a\0a");
    assert_eq!(sa.index_points(), &[1, 2, 0]);
}

#[test]
fn test_multibyte_text_orders_by_bytes() {
    let sa = checked_index(MULTILINGUAL);
    assert_eq!(sa.index_points(), naive_suffix_array(MULTILINGUAL.as_bytes()));
    // Index points count bytes, not characters
    assert_eq!(sa.len(), MULTILINGUAL.len());
    assert!(sa.len() > MULTILINGUAL.chars().count());
}

#[test]
fn test_lcp_known_values() {
    assert_eq!(SuffixArray::new("banana").lcp(), &[0, 1, 3, 0, 0, 2]);
    assert_eq!(
        SuffixArray::new("abracadabra").lcp(),
        &[0, 1, 4, 1, 1, 0, 3, 0, 0, 0, 2]
    );
    assert_eq!(SuffixArray::new("aaaa").lcp(), &[0, 1, 2, 3]);
    assert!(SuffixArray::new("").lcp().is_empty());
}

#[test]
fn test_free_functions_agree_with_index() {
    let text = "mississippi";
    let sa = build_suffix_array(text.as_bytes());
    let lcp = build_lcp(text.as_bytes(), &sa);
    let index = SuffixArray::new(text);
    assert_eq!(index.index_points(), sa.as_slice());
    assert_eq!(index.lcp(), lcp.as_slice());
}

#[test]
fn test_large_random_text() {
    let bytes = pseudo_random_text(30_000, b"acgt", 7);
    let text = String::from_utf8(bytes).unwrap();
    let sa = SuffixArray::new(text.as_str());
    assert_index_well_formed(&sa);
}

#[test]
fn test_large_periodic_text() {
    // Worst case for doubling: every round leaves ties until k passes n / 2
    let text = "ab".repeat(5_000);
    let sa = SuffixArray::new(text.as_str());
    assert_eq!(sa.index_points()[0], text.len() - 2);
    assert_eq!(sa.index_points()[sa.len() - 1], 1);
    assert_index_well_formed(&sa);
}

#[test]
fn test_indexes_are_independent() {
    let a = SuffixArray::new("banana");
    let b = a.clone();
    drop(a);
    assert_eq!(b.index_points(), &[5, 3, 1, 0, 4, 2]);
    assert_eq!(b, SuffixArray::new("banana"));
    assert_ne!(b, SuffixArray::new("bandana"));
}

#[test]
fn test_parse_and_try_from() {
    let parsed: SuffixArray = "abracadabra".parse().unwrap();
    let from_bytes = SuffixArray::try_from("abracadabra".as_bytes()).unwrap();
    let from_vec = SuffixArray::try_from(b"abracadabra".to_vec()).unwrap();
    assert_eq!(parsed, from_bytes);
    assert_eq!(from_bytes, from_vec);
}

#[test]
fn test_cancellation_before_first_round() {
    let cancel = Cancellation::new();
    cancel.cancel();
    match SuffixArray::construct_cancellable(Some("mississippi"), &cancel) {
        Err(SuffixArrayError::Cancelled { round }) => assert_eq!(round, 0),
        other => panic!("expected Cancelled, got {:?}", other),
    }
}

#[test]
fn test_cancellation_from_another_thread() {
    let cancel = Cancellation::new();
    let remote = cancel.clone();
    std::thread::spawn(move || remote.cancel()).join().unwrap();

    assert!(cancel.is_cancelled());
    assert!(matches!(
        SuffixArray::construct_cancellable(Some("banana"), &cancel),
        Err(SuffixArrayError::Cancelled { .. })
    ));
}

#[test]
fn test_trivial_texts_never_observe_cancellation() {
    // No doubling round runs for zero or one code unit
    let cancel = Cancellation::new();
    cancel.cancel();
    assert!(SuffixArray::construct_cancellable(Some(""), &cancel).is_ok());
    assert!(SuffixArray::construct_cancellable(Some("x"), &cancel).is_ok());
}
