//! Custom cargo commands for seqdex.
//!
//! Usage:
//!   cargo xtask verify           - Run full verification suite
//!   cargo xtask test             - Run all tests
//!   cargo xtask check            - Quick check
//!   cargo xtask bench            - Run benchmarks
//!   cargo xtask fuzz <TARGET>    - Run a fuzz target (needs cargo-fuzz)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets defined in fuzz/Cargo.toml
const FUZZ_TARGETS: &[&str] = &[
    "suffix_array_construction",
    "tree_from_suffix_array",
    "tool_input",
];

/// Seconds per target when `fuzz` runs them all
const FUZZ_SECONDS: &str = "60";

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify          Run full verification suite (markers + tests + clippy + fuzz build)
  test            Run all Rust tests
  check           Quick check (cargo check + test + clippy)
  bench           Run benchmarks
  fuzz [TARGET]   Run one fuzz target, or each for {FUZZ_SECONDS}s
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("seqdex Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    // Contracts only run with debug assertions
    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Building fuzz targets...");
    build_fuzz_targets()?;
    println!("✓ Fuzz targets build\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
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

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run one target until stopped, or every target for a fixed time.
fn fuzz(target: Option<&str>) -> Result<()> {
    let root = project_root()?;

    match target {
        Some(target) => {
            if !FUZZ_TARGETS.contains(&target) {
                bail!("unknown fuzz target {target:?}, expected one of {FUZZ_TARGETS:?}");
            }
            run_fuzz(&root, &["fuzz", "run", target])
        }
        None => {
            let max_time = format!("-max_total_time={FUZZ_SECONDS}");
            for target in FUZZ_TARGETS {
                println!("Fuzzing {target} for {FUZZ_SECONDS}s...");
                run_fuzz(&root, &["fuzz", "run", target, "--", &max_time])?;
            }
            Ok(())
        }
    }
}

fn build_fuzz_targets() -> Result<()> {
    let root = project_root()?;
    let has_cargo_fuzz = Command::new("cargo")
        .args(["fuzz", "--version"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);

    if !has_cargo_fuzz {
        println!("  (cargo-fuzz not installed, skipping)");
        return Ok(());
    }
    run_fuzz(&root, &["fuzz", "build"])
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

fn run_fuzz(root: &std::path::Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .arg("+nightly")
        .args(args)
        .current_dir(root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}
