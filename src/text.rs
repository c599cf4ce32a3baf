// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The owned, immutable text every suffix points into.
//!
//! A suffix is never copied out. It's `&text[offset..]`, borrowed from the one
//! buffer that lives as long as the index. That makes this type the only
//! source of truth for comparisons, so it is validated exactly once, here.
//!
//! # Code units
//!
//! Offsets are **byte offsets** into the UTF-8 encoding. UTF-8 preserves code
//! point order under bytewise comparison, so sorting bytes sorts characters,
//! and a UTF-8 pattern can only match at character boundaries anyway.

use std::io::Read;

use serde::Serialize;

use crate::error::SuffixArrayError;

/// Validated input text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Text {
    inner: String,
}

impl Text {
    /// Validate raw input.
    ///
    /// `None` is [`SuffixArrayError::InvalidArgument`]; bytes that don't decode
    /// as UTF-8 are [`SuffixArrayError::InvalidInput`]. The empty text is fine.
    pub fn new<B: AsRef<[u8]>>(input: Option<B>) -> Result<Self, SuffixArrayError> {
        let input = input.ok_or(SuffixArrayError::InvalidArgument)?;
        let bytes = input.as_ref();
        match std::str::from_utf8(bytes) {
            Ok(s) => Ok(Self {
                inner: s.to_owned(),
            }),
            Err(e) => Err(SuffixArrayError::InvalidInput {
                reason: format!("invalid UTF-8 at byte {}", e.valid_up_to()),
            }),
        }
    }

    /// Validate a dynamically typed JSON value.
    ///
    /// `null` counts as a missing argument; any other non-string value is
    /// rejected as not textual.
    #[cfg(feature = "serde_json")]
    pub fn from_value(value: &serde_json::Value) -> Result<Self, SuffixArrayError> {
        use serde_json::Value;

        match value {
            Value::Null => Err(SuffixArrayError::InvalidArgument),
            Value::String(s) => Ok(Self { inner: s.clone() }),
            other => Err(SuffixArrayError::InvalidInput {
                reason: format!("expected a string, found {}", json_type_name(other)),
            }),
        }
    }

    /// Read everything from `reader`, then validate it.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, SuffixArrayError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        // from_utf8 on an owned Vec avoids a second copy
        String::from_utf8(bytes)
            .map(|inner| Self { inner })
            .map_err(|e| SuffixArrayError::InvalidInput {
                reason: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
            })
    }

    /// The text exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    /// Length in code units (bytes).
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The suffix starting at byte `offset`, or empty past the end.
    pub fn suffix(&self, offset: usize) -> &[u8] {
        self.as_bytes().get(offset..).unwrap_or(&[])
    }

    pub fn into_string(self) -> String {
        self.inner
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self {
            inner: s.to_owned(),
        }
    }
}

impl From<String> for Text {
    fn from(inner: String) -> Self {
        Self { inner }
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

#[cfg(feature = "serde_json")]
fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
