// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix arrays with LCP arrays and fast substring queries.
//!
//! Give it a text; it sorts every suffix of that text without ever copying
//! one, computes the longest common prefix between sorted neighbours, and
//! answers "does this occur / how often / where" in O(|pattern| · log n).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   text.rs   │────▶│  build/      │────▶│   lcp.rs    │────▶│  search.rs  │
//! │   (Text)    │     │ (prefix      │     │  (Kasai)    │     │ (Pattern-   │
//! │             │     │  doubling)   │     │             │     │  Matcher)   │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!        │                   │                    │                    │
//!        ▼                   ▼                    ▼                    ▼
//! ┌───────────────────────────────────────────────────────────────────────────┐
//! │                               index.rs                                    │
//! │          (SuffixArray: owns text, index points and LCP together)         │
//! └───────────────────────────────────────────────────────────────────────────┘
//!                                    │
//!                                    ▼
//!                      contracts.rs (debug-mode invariant checks)
//! ```
//!
//! # Ordering
//!
//! Suffixes compare bytewise. When one suffix is a proper prefix of another,
//! the shorter one sorts first, as if every suffix ended in a symbol smaller
//! than any real byte. No such symbol is ever stored.
//!
//! # Usage
//!
//! ```
//! use suffixarray::{SuffixArray, SuffixArrayError};
//!
//! let sa = SuffixArray::construct(Some("abracadabra"))?;
//! assert_eq!(sa.index_points(), &[10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
//! assert_eq!(sa.search("ca"), Some(4));
//! assert!(sa.contains("cad"));
//!
//! assert!(matches!(
//!     SuffixArray::construct(None::<&str>),
//!     Err(SuffixArrayError::InvalidArgument)
//! ));
//! # Ok::<(), SuffixArrayError>(())
//! ```

// Module declarations
pub mod build;
pub mod contracts;
mod error;
mod index;
pub mod lcp;
pub mod search;
pub mod testing;
mod text;

// Re-exports for public API
pub use build::parallel::{build_many, build_many_cancellable};
#[cfg(feature = "serde_json")]
pub use build::parallel::build_values;
pub use build::{build_suffix_array, build_suffix_array_cancellable, Cancellation};
pub use error::SuffixArrayError;
pub use index::SuffixArray;
pub use lcp::{build_lcp, common_prefix_len};
pub use search::PatternMatcher;
pub use text::Text;
