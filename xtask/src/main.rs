//! Custom cargo commands for the suffixarray crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask features  - Test every feature combination
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run each fuzz target briefly (needs cargo-fuzz)

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Feature sets the library must build and pass tests under
const FEATURE_MATRIX: &[&[&str]] = &[
    &["--no-default-features"],
    &["--no-default-features", "--features", "parallel"],
    &["--no-default-features", "--features", "serde_json"],
    &[],
];

const FUZZ_TARGETS: &[&str] = &["construction", "search_queries"];

/// Seconds per fuzz target in `cargo xtask fuzz`
const FUZZ_SECONDS: u32 = 30;

/// Each of these names must be marked with `INVARIANT: <NAME>` somewhere in src/
const REQUIRED_INVARIANTS: &[&str] = &[
    "SHORTER_SUFFIX_FIRST",
    "RANKS_CONVERGE",
    "SUFFIX_ARRAY_COMPLETE",
    "LCP_CORRECT",
    "SEARCH_RANGE_CONTIGUOUS",
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("features") => features()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + tests + features + clippy)
  test      Run all Rust tests
  features  Run tests under every feature combination
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run each fuzz target for {}s (needs cargo-fuzz and nightly)
"#,
        FUZZ_SECONDS
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("suffixarray Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running feature matrix...");
    features()?;
    println!("✓ Every feature combination passes\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--all-targets", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// The library must behave the same with and without rayon and serde_json.
fn features() -> Result<()> {
    for flags in FEATURE_MATRIX {
        let label = if flags.is_empty() {
            "default".to_string()
        } else {
            flags.join(" ")
        };
        println!("  features: {}", label);

        let mut args = vec!["test", "--quiet", "--lib", "--tests"];
        args.extend_from_slice(flags);
        run_cargo(&args)?;
    }
    Ok(())
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn fuzz() -> Result<()> {
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);

    for target in FUZZ_TARGETS {
        println!("  fuzzing {} for {}s...", target, FUZZ_SECONDS);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", &max_time])
            .current_dir(&root)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

        if !status.success() {
            bail!("fuzz target {} found a failure", target);
        }
    }

    println!("\n✓ Fuzz targets clean");
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let mut markers = Vec::new();
    collect_markers(&root.join("src"), &mut markers)?;

    let missing: Vec<_> = REQUIRED_INVARIANTS
        .iter()
        .filter(|name| !markers.iter().any(|m| m == *name))
        .collect();

    if !missing.is_empty() {
        bail!(
            "Missing INVARIANT markers for {:?} (found {:?}). Someone may have removed safety comments!",
            missing,
            markers
        );
    }

    Ok(())
}

/// Every `INVARIANT: NAME` comment under `dir`, recursively.
fn collect_markers(dir: &Path, markers: &mut Vec<String>) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            collect_markers(&path, markers)?;
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }

        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        for line in source.lines() {
            if let Some(rest) = line.split("INVARIANT:").nth(1) {
                if let Some(name) = rest.split_whitespace().next() {
                    markers.push(name.to_string());
                }
            }
        }
    }
    Ok(())
}
