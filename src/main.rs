// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::time::Instant;

use serde_json::{json, Value};
use suffixarray::{build_values, SuffixArray, SuffixArrayError, Text};

mod cli;
use cli::display::{self, format_size, pad_left, suffix_preview, themed, timing_ms};
use cli::{Cli, Commands};

/// Suffix preview width in the `index` table
const PREVIEW_CHARS: usize = 40;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Index { file, lcp, json } => run_index(file.as_deref(), lcp, json),
        Commands::Search {
            pattern,
            file,
            sorted,
            count,
            json,
        } => run_search(&pattern, file.as_deref(), sorted, count, json),
        Commands::Batch { progress } => run_batch(progress),
    };

    if let Err(e) = result {
        display::failure(&e);
        std::process::exit(1);
    }
}

/// Read the whole input from `file`, or stdin when there is none.
fn read_text(file: Option<&str>) -> Result<Text, String> {
    match file {
        Some(path) => {
            let handle = fs::File::open(path).map_err(|e| format!("{}: {}", path, e))?;
            Text::from_reader(handle).map_err(|e| format!("{}: {}", path, e))
        }
        None => Text::from_reader(io::stdin().lock()).map_err(|e| format!("<stdin>: {}", e)),
    }
}

/// Build the index and report how long it took on stderr.
fn build_timed(text: Text) -> SuffixArray {
    let bytes = text.len();
    let start = Instant::now();
    let sa = SuffixArray::from_text(text);
    let elapsed = start.elapsed().as_secs_f64() * 1000.0;
    display::success(&format!(
        "indexed {} ({} suffixes) in {}",
        format_size(bytes),
        sa.len(),
        timing_ms(elapsed)
    ));
    sa
}

fn run_index(file: Option<&str>, with_lcp: bool, as_json: bool) -> Result<(), String> {
    let sa = build_timed(read_text(file)?);

    if as_json {
        let out = serde_json::to_string_pretty(&sa).map_err(|e| e.to_string())?;
        println!("{}", out);
        return Ok(());
    }

    if sa.is_empty() {
        display::warning("empty input, nothing to index");
        return Ok(());
    }

    let width = sa.len().to_string().len().max(4);
    display::section_top("SUFFIX ARRAY");
    let mut header = format!(
        " {}  {}",
        pad_left("rank", width),
        pad_left("offset", width.max(6))
    );
    if with_lcp {
        header.push_str(&format!("  {}", pad_left("lcp", width)));
    }
    header.push_str("  suffix");
    display::row(&themed(display::GRAY, &[display::DIM], &header));

    for (rank, &offset) in sa.index_points().iter().enumerate() {
        let mut line = format!(
            " {}  {}",
            pad_left(&rank.to_string(), width),
            pad_left(&offset.to_string(), width.max(6))
        );
        if with_lcp {
            line.push_str(&format!(
                "  {}",
                pad_left(&sa.lcp()[rank].to_string(), width)
            ));
        }
        let preview = suffix_preview(sa.suffix(rank).unwrap_or_default(), PREVIEW_CHARS);
        line.push_str(&format!("  {}", themed(display::CYAN, &[], &preview)));
        display::row(&line);
    }
    display::section_bot();
    Ok(())
}

fn run_search(
    pattern: &str,
    file: Option<&str>,
    sorted: bool,
    count_only: bool,
    as_json: bool,
) -> Result<(), String> {
    let sa = build_timed(read_text(file)?);

    let occurrences = if sorted {
        sa.occurrences_sorted(pattern)
    } else {
        sa.occurrences(pattern)
    };

    if as_json {
        let out = json!({
            "pattern": pattern,
            "contains": !occurrences.is_empty(),
            "count": occurrences.len(),
            "search": sa.search(pattern),
            "occurrences": occurrences,
        });
        println!("{}", out);
        return Ok(());
    }

    if count_only {
        println!("{}", occurrences.len());
        return Ok(());
    }

    if occurrences.is_empty() {
        display::warning(&format!("no occurrences of {:?}", pattern));
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for offset in &occurrences {
        writeln!(out, "{}", offset).map_err(|e| e.to_string())?;
    }
    out.flush().map_err(|e| e.to_string())
}

fn run_batch(progress: bool) -> Result<(), String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("<stdin>: {}", e))?;

    let values = match serde_json::from_str::<Value>(&input) {
        Ok(Value::Array(values)) => values,
        Ok(_) => return Err("batch input must be a JSON array".to_string()),
        Err(e) => return Err(format!("batch input is not valid JSON: {}", e)),
    };

    let results = build_batch(&values, progress);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut failed = 0;
    for (i, result) in results.iter().enumerate() {
        let line = match result {
            Ok(sa) => json!({ "entry": i, "ok": sa }),
            Err(e) => {
                failed += 1;
                error_json(i, e)
            }
        };
        writeln!(out, "{}", line).map_err(|e| e.to_string())?;
    }
    out.flush().map_err(|e| e.to_string())?;

    if failed > 0 {
        display::warning(&format!(
            "{} of {} entries could not be indexed",
            failed,
            results.len()
        ));
    } else {
        display::success(&format!("indexed {} entries", results.len()));
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn build_batch(values: &[Value], progress: bool) -> Vec<Result<SuffixArray, SuffixArrayError>> {
    use indicatif::ProgressBar;
    use suffixarray::build::parallel::{build_values_with_progress, create_progress_style};

    if !progress {
        return build_values(values);
    }
    let bar = ProgressBar::new(values.len() as u64);
    bar.set_style(create_progress_style());
    bar.set_prefix("building");
    build_values_with_progress(values, &bar)
}

#[cfg(not(feature = "parallel"))]
fn build_batch(values: &[Value], progress: bool) -> Vec<Result<SuffixArray, SuffixArrayError>> {
    if progress {
        display::warning("--progress needs the `parallel` feature; building quietly");
    }
    build_values(values)
}

fn error_json(entry: usize, error: &SuffixArrayError) -> Value {
    json!({
        "entry": entry,
        "error": {
            "kind": error.kind(),
            "message": error.to_string(),
        },
    })
}
