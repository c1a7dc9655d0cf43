//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim. Contains the execution
//! logic for each subcommand (scan, lazy scan, check, diff, bench) and the
//! rayon pool configuration. Results go to stdout; progress and diagnostics
//! go through `tracing` to stderr.

use std::io::{self, Write};

use anyhow::{bail, Result};
use megaprimes::report::{join_csv, ScanReport};
use megaprimes::{bench, scan, scan_lazy, selftest, Candidate, StrategySelection, WARMUP_BOUND};
use tracing::{info, warn};

// ── Scans ───────────────────────────────────────────────────────

/// Timed eager scan of each bound with the same selection.
pub fn run_scan(
    bounds: &[Candidate],
    selection: &StrategySelection,
    highest: bool,
    json: bool,
) -> Result<()> {
    // Take one-time costs (page faults, pool spin-up) out of the first measurement
    scan(WARMUP_BOUND, selection);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for &bound in bounds {
        info!(
            bound,
            strategy = %selection.strategy,
            prime_test = %selection.prime_test,
            digits = %selection.digit_shape,
            "scan starting"
        );
        let report = ScanReport::run(bound, selection);
        info!(
            bound,
            found = report.count,
            elapsed_ms = format_args!("{:.3}", report.elapsed_ms),
            "scan finished"
        );
        if json {
            writeln!(out, "{}", report.render_json(highest)?)?;
        } else {
            writeln!(out, "{}", selection.mode_line())?;
            writeln!(out, "{}", report.render_text(highest))?;
        }
    }
    Ok(())
}

/// Print matches as they are produced: `<bound> => {a,b,c} <count> <noun>`.
pub fn run_lazy(bound: Candidate, selection: StrategySelection) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Mode lazy {}", selection.prime_test)?;
    write!(out, "{} => {{", bound)?;

    let mut found = 0u64;
    for value in scan_lazy(bound, selection) {
        if found == 0 {
            write!(out, "{}", value)?;
        } else {
            write!(out, ",{}", value)?;
        }
        out.flush()?;
        found += 1;
    }
    writeln!(out, "}} {} {}", found, selection.digit_shape.noun())?;
    Ok(())
}

// ── Verification ────────────────────────────────────────────────

/// Known-answer self-test. Fails if any case does not match.
pub fn run_check(selection: &StrategySelection) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", selection.mode_line())?;

    let outcomes = selftest::run_known_cases(selection);
    let mut failed = 0;
    for outcome in &outcomes {
        let verdict = if outcome.passed { "Pass" } else { "Fail" };
        writeln!(out, "Test {}: {} ({})", outcome.index, verdict, outcome.bound)?;
        if !outcome.passed {
            failed += 1;
            writeln!(
                out,
                "{} => {{{}}} {} expected {{{}}} {}",
                outcome.bound,
                join_csv(&outcome.actual),
                outcome.actual.len(),
                join_csv(&outcome.expected),
                outcome.expected.len()
            )?;
        }
    }

    if failed > 0 {
        bail!("{} of {} self-test cases failed", failed, outcomes.len());
    }
    info!(cases = outcomes.len(), "self-test passed");
    Ok(())
}

/// Wheel scan vs sieve. Fails if either finds something the other does not.
pub fn run_diff(bound: Candidate) -> Result<()> {
    let diff = selftest::diff_scan_against_sieve(bound);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "Diff wheel vs sieve to {}: found {} vs {}",
        diff.bound, diff.scan_count, diff.sieve_count
    )?;
    if !diff.scan_only.is_empty() {
        writeln!(out, "Wheel extras: {}", join_csv(&diff.scan_only))?;
    }
    if !diff.sieve_only.is_empty() {
        writeln!(out, "Sieve extras: {}", join_csv(&diff.sieve_only))?;
    }

    if !diff.is_clean() {
        bail!(
            "wheel and sieve disagree on {} values",
            diff.scan_only.len() + diff.sieve_only.len()
        );
    }
    Ok(())
}

// ── Benchmarks ──────────────────────────────────────────────────

pub fn run_bench(runs: u32, flip: bool) -> Result<()> {
    info!(runs, flip, "benchmark starting");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for comparison in bench::run_standard(runs, flip) {
        writeln!(out, "{}\n", comparison)?;
    }
    Ok(())
}

// ── Rayon Configuration ─────────────────────────────────────────

/// Size the global rayon pool. `None` or 0 keeps rayon's default (all cores).
pub fn configure_rayon(threads: Option<usize>) {
    let num_threads = threads.unwrap_or(0);
    if num_threads == 0 {
        return;
    }
    match rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        Ok(()) => info!(threads = num_threads, "rayon pool configured"),
        Err(e) => warn!(error = %e, "Could not configure rayon thread pool"),
    }
}
