// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel construction of many independent suffix arrays.
//!
//! Separate texts share nothing, so a batch is embarrassingly parallel.
//! Rayon makes this trivial: `par_iter()` over the inputs, build each one,
//! collect in input order. Without the `parallel` feature the same functions
//! run sequentially and produce identical output.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::SuffixArrayError;
use crate::index::SuffixArray;

/// Build one index per text, preserving input order.
pub fn build_many<T>(texts: &[T]) -> Vec<SuffixArray>
where
    T: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        texts.par_iter().map(|t| SuffixArray::new(t.as_ref())).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        texts.iter().map(|t| SuffixArray::new(t.as_ref())).collect()
    }
}

/// Build one index per JSON value. Each entry is validated on its own, so a
/// bad entry fails alone without sinking the batch.
#[cfg(feature = "serde_json")]
pub fn build_values(values: &[serde_json::Value]) -> Vec<Result<SuffixArray, SuffixArrayError>> {
    #[cfg(feature = "parallel")]
    {
        values.par_iter().map(SuffixArray::from_value).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        values.iter().map(SuffixArray::from_value).collect()
    }
}

/// [`build_values`] with progress reporting.
#[cfg(all(feature = "parallel", feature = "serde_json"))]
pub fn build_values_with_progress(
    values: &[serde_json::Value],
    progress: &ProgressBar,
) -> Vec<Result<SuffixArray, SuffixArrayError>> {
    let counter = AtomicUsize::new(0);
    let total = values.len();

    let results = values
        .par_iter()
        .map(|value| {
            let result = SuffixArray::from_value(value);

            // Update progress
            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            result
        })
        .collect();

    progress.finish_with_message(format!("built {} indexes", total));
    results
}

/// Create a progress style for the batch progress bar
#[cfg(feature = "parallel")]
pub fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Build a batch of texts, checking `cancel` before every doubling round of
/// every text. Stops at the first cancellation.
pub fn build_many_cancellable<T>(
    texts: &[T],
    cancel: &super::Cancellation,
) -> Result<Vec<SuffixArray>, SuffixArrayError>
where
    T: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        texts
            .par_iter()
            .map(|t| SuffixArray::construct_cancellable(Some(t.as_ref()), cancel))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        texts
            .iter()
            .map(|t| SuffixArray::construct_cancellable(Some(t.as_ref()), cancel))
            .collect()
    }
}
