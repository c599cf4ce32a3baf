//! Input validation at the construction boundary.

use std::io::Cursor;
use suffixarray::{SuffixArray, SuffixArrayError, Text};

#[test]
fn test_no_argument_is_invalid_argument() {
    let err = SuffixArray::construct(None::<&str>).unwrap_err();
    assert!(matches!(err, SuffixArrayError::InvalidArgument));
    assert_eq!(err.kind(), "InvalidArgument");

    let err = SuffixArray::construct(None::<Vec<u8>>).unwrap_err();
    assert!(matches!(err, SuffixArrayError::InvalidArgument));
}

#[test]
fn test_non_text_bytes_are_invalid_input() {
    let cases: &[&[u8]] = &[
        &[0xff],
        &[b'o', b'k', 0x80],
        // Overlong encoding of '/'
        &[0xc0, 0xaf],
        // Lone surrogate
        &[0xed, 0xa0, 0x80],
        // Truncated four-byte sequence
        &[0xf0, 0x9f, 0xa6],
    ];
    for bytes in cases {
        let err = SuffixArray::construct(Some(*bytes)).unwrap_err();
        assert!(
            matches!(err, SuffixArrayError::InvalidInput { .. }),
            "{:?} should be rejected, got {:?}",
            bytes,
            err
        );
        assert_eq!(err.kind(), "InvalidInput");
    }
}

#[test]
fn test_invalid_input_reports_the_byte() {
    let err = SuffixArray::construct(Some(&b"abc\xffdef"[..])).unwrap_err();
    assert_eq!(err.to_string(), "input is not text: invalid UTF-8 at byte 3");
}

#[test]
fn test_empty_text_is_not_an_error() {
    let sa = SuffixArray::construct(Some("")).unwrap();
    assert!(sa.is_empty());
    assert_eq!(sa.text(), "");
}

#[test]
fn test_from_reader() {
    let text = Text::from_reader(Cursor::new("mississippi")).unwrap();
    let sa = SuffixArray::from_text(text);
    assert_eq!(sa.index_points(), &[10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);

    let err = Text::from_reader(Cursor::new(vec![b'a', 0xfe])).unwrap_err();
    assert!(matches!(err, SuffixArrayError::InvalidInput { .. }));
}

#[test]
fn test_io_errors_carry_their_source() {
    struct Broken;

    impl std::io::Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"))
        }
    }

    let err = Text::from_reader(Broken).unwrap_err();
    assert_eq!(err.kind(), "Io");
    assert!(err.to_string().contains("disk on fire"));
    assert!(std::error::Error::source(&err).is_some());
}

#[cfg(feature = "serde_json")]
#[test]
fn test_json_values() {
    use serde_json::json;

    let sa = SuffixArray::from_value(&json!("abracadabra")).unwrap();
    assert_eq!(sa.index_points(), &[10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);

    assert!(matches!(
        SuffixArray::from_value(&json!(null)),
        Err(SuffixArrayError::InvalidArgument)
    ));
    for value in [json!(1), json!(1.5), json!(true), json!(["a"]), json!({"a": 1})] {
        assert!(
            matches!(
                SuffixArray::from_value(&value),
                Err(SuffixArrayError::InvalidInput { .. })
            ),
            "{} should be rejected",
            value
        );
    }
}
