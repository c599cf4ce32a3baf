// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised at the construction boundary.
//!
//! Everything that can go wrong happens before a suffix array exists: the
//! caller forgot the text, handed us something that isn't text, or pulled the
//! plug on a long build. Queries never fail, so they never return these.

use std::fmt;
use std::io;

/// Failure to construct a suffix array.
#[derive(Debug)]
pub enum SuffixArrayError {
    /// No text was supplied.
    InvalidArgument,
    /// The supplied value is not text.
    InvalidInput { reason: String },
    /// Construction was cancelled before the given doubling round.
    Cancelled { round: usize },
    /// Reading the input failed.
    Io(io::Error),
}

impl SuffixArrayError {
    /// Short machine-friendly name of the variant (used by the CLI's JSON output).
    pub fn kind(&self) -> &'static str {
        match self {
            SuffixArrayError::InvalidArgument => "InvalidArgument",
            SuffixArrayError::InvalidInput { .. } => "InvalidInput",
            SuffixArrayError::Cancelled { .. } => "Cancelled",
            SuffixArrayError::Io(_) => "Io",
        }
    }
}

impl fmt::Display for SuffixArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuffixArrayError::InvalidArgument => {
                write!(f, "no text supplied")
            }
            SuffixArrayError::InvalidInput { reason } => {
                write!(f, "input is not text: {}", reason)
            }
            SuffixArrayError::Cancelled { round } => {
                write!(f, "construction cancelled before doubling round {}", round)
            }
            SuffixArrayError::Io(e) => {
                write!(f, "failed to read input: {}", e)
            }
        }
    }
}

impl std::error::Error for SuffixArrayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SuffixArrayError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SuffixArrayError {
    fn from(e: io::Error) -> Self {
        SuffixArrayError::Io(e)
    }
}
