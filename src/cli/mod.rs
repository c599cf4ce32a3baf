// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the suffixarray command-line interface.
//!
//! Three subcommands: `index` to build and print a suffix array, `search` to
//! query one, and `batch` to build many from a JSON array on stdin. Text comes
//! from a file argument or, when omitted, from stdin.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "suffixarray",
    about = "Suffix array builder and substring search",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a suffix array and print its index points
    Index {
        /// Input file (reads stdin when omitted)
        file: Option<String>,

        /// Also print the LCP array
        #[arg(long)]
        lcp: bool,

        /// Emit the whole index as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find every occurrence of a pattern
    Search {
        /// Substring to look for
        pattern: String,

        /// Input file (reads stdin when omitted)
        file: Option<String>,

        /// List offsets in text order instead of suffix order
        #[arg(long)]
        sorted: bool,

        /// Print only the number of occurrences
        #[arg(short, long)]
        count: bool,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build one index per entry of a JSON array read from stdin
    ///
    /// Each entry must be a string. `null` and non-string entries are reported
    /// individually and do not stop the rest of the batch.
    Batch {
        /// Show a progress bar on stderr
        #[arg(long)]
        progress: bool,
    },
}
