//! Batch construction across many texts.

use suffixarray::{build_many, build_many_cancellable, Cancellation, SuffixArray, SuffixArrayError};

#[test]
fn test_build_many_matches_single_builds() {
    let texts: Vec<String> = (0..40).map(|i| format!("text number {} {}", i, "ab".repeat(i))).collect();
    let built = build_many(&texts);

    assert_eq!(built.len(), texts.len());
    for (sa, text) in built.iter().zip(&texts) {
        assert_eq!(sa, &SuffixArray::new(text.as_str()));
    }
}

#[test]
fn test_build_many_empty_batch() {
    let texts: [&str; 0] = [];
    assert!(build_many(&texts).is_empty());
}

#[test]
fn test_cancelled_batch_fails_as_a_whole() {
    let cancel = Cancellation::new();
    cancel.cancel();
    let result = build_many_cancellable(&["banana", "mississippi"], &cancel);
    assert!(matches!(result, Err(SuffixArrayError::Cancelled { .. })));
}

#[cfg(feature = "serde_json")]
#[test]
fn test_build_values_reports_per_entry() {
    use serde_json::json;
    use suffixarray::build_values;

    let values = vec![json!("banana"), json!(null), json!(12), json!("aaaa"), json!({"t": "x"})];
    let kinds: Vec<&str> = build_values(&values)
        .iter()
        .map(|r| match r {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        })
        .collect();
    assert_eq!(kinds, ["ok", "InvalidArgument", "InvalidInput", "ok", "InvalidInput"]);
}
