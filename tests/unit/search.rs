//! Query tests against hand-checked answers.

use super::common::{checked_index, naive_occurrences, MULTILINGUAL};
use suffixarray::{PatternMatcher, SuffixArray};

#[test]
fn test_banana_ana() {
    let sa = checked_index("banana");
    assert!(sa.contains("ana"));
    assert_eq!(sa.count("ana"), 2);
    assert_eq!(sa.occurrences_sorted("ana"), vec![1, 3]);
    // Suffix order: "ana" (3) sorts before "anana" (1)
    assert_eq!(sa.occurrences("ana"), vec![3, 1]);
}

#[test]
fn test_abracadabra_search() {
    let sa = checked_index("abracadabra");
    assert_eq!(sa.search("ca"), Some(4));
    assert_eq!(sa.search("abra"), Some(7));
    assert_eq!(sa.search("a"), Some(10));
    assert_eq!(sa.search("z"), None);
    assert_eq!(sa.search("abracadabrax"), None);
}

#[test]
fn test_absent_patterns() {
    let sa = checked_index("abracadabra");
    for pattern in ["x", "abd", "rab", "aa", "cadabraa"] {
        assert!(!sa.contains(pattern), "{:?} should be absent", pattern);
        assert_eq!(sa.count(pattern), 0);
        assert!(sa.occurrences(pattern).is_empty());
        assert!(sa.range(pattern).is_empty());
    }
}

#[test]
fn test_whole_text_and_longer_patterns() {
    let sa = checked_index("abracadabra");
    assert_eq!(sa.occurrences("abracadabra"), vec![0]);
    assert_eq!(sa.count("abracadabra!"), 0);
}

#[test]
fn test_overlapping_occurrences_are_all_reported() {
    let sa = checked_index("aaaaa");
    assert_eq!(sa.occurrences_sorted("aa"), vec![0, 1, 2, 3]);
    assert_eq!(sa.count("aaa"), 3);
}

#[test]
fn test_empty_pattern_matches_every_offset() {
    let sa = checked_index("banana");
    assert_eq!(sa.count(""), 6);
    assert_eq!(sa.occurrences_sorted(""), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(sa.occurrences(""), sa.index_points().to_vec());
    assert_eq!(sa.range(""), 0..6);
    assert!(sa.contains(""));

    let empty = checked_index("");
    assert_eq!(empty.count(""), 0);
    assert!(!empty.contains(""));
    assert_eq!(empty.search(""), None);
}

#[test]
fn test_queries_on_empty_text() {
    let sa = SuffixArray::new("");
    assert!(!sa.contains("a"));
    assert_eq!(sa.count("a"), 0);
    assert!(sa.occurrences("a").is_empty());
    assert_eq!(sa.search("a"), None);
}

#[test]
fn test_range_matches_index_points() {
    let sa = checked_index("mississippi");
    let range = sa.range("ssi");
    assert_eq!(range, 9..11);
    assert_eq!(&sa.index_points()[range], &[5, 2]);
    assert_eq!(sa.range("i"), 0..4);
    assert_eq!(sa.range("m"), 4..5);
}

#[test]
fn test_multibyte_patterns() {
    let sa = checked_index(MULTILINGUAL);
    let bytes = MULTILINGUAL.as_bytes();

    for pattern in ["café", "é", "తె", "🦀", "語 🦀", "日本語"] {
        assert_eq!(
            sa.occurrences_sorted(pattern),
            naive_occurrences(bytes, pattern.as_bytes()),
            "pattern {:?}",
            pattern
        );
    }
    assert_eq!(sa.count("café"), 2);
    // Offsets are byte offsets
    assert_eq!(sa.occurrences_sorted("naïve"), vec!["café ".len()]);
}

#[test]
fn test_byte_patterns_inside_a_character() {
    // The second byte of "é" on its own still matches at the byte level
    let sa = checked_index("café");
    let tail = &"é".as_bytes()[1..];
    assert_eq!(sa.occurrences_sorted(tail), vec![4]);
}

#[test]
fn test_matcher_without_lcp_agrees() {
    let sa = checked_index("abracadabra abracadabra");
    let bare = PatternMatcher::new(sa.text().as_bytes(), sa.index_points());
    for pattern in ["a", "abra", "bra ", "cad", " ", "q", ""] {
        let p = pattern.as_bytes();
        assert_eq!(bare.occurrences(p), sa.occurrences(p), "pattern {:?}", pattern);
        assert_eq!(bare.range(p), sa.range(p));
        assert_eq!(bare.search(p), sa.search(p));
    }
}

#[test]
fn test_queries_do_not_mutate() {
    let sa = checked_index("banana");
    let before = sa.clone();
    for _ in 0..3 {
        let _ = sa.occurrences("an");
        let _ = sa.search("nan");
        let _ = sa.count("");
    }
    assert_eq!(sa, before);
}
