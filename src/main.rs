//! # Main — CLI Entry Point
//!
//! Parses global options into one [`StrategySelection`], configures the rayon
//! pool, and routes to the subcommand runners in `cli.rs`.
//!
//! ## Subcommands
//!
//! - `scan`: timed megaprime (or prime) scans for one or more bounds.
//! - `check`: known-answer self-test of the selected strategy.
//! - `diff`: wheel scan vs sieve, reporting values found by only one.
//! - `bench`: head-to-head timing of competing predicates.
//!
//! ## Global Options
//!
//! - `--prime-test`: simple | optimized | wheel (default wheel).
//! - `--digits`: numerical | textual | any (default numerical; `any` finds
//!   plain primes).
//! - `--threads` / `MEGAPRIMES_THREADS`: rayon pool size (0 = all cores).
//!
//! Logging goes to stderr; `LOG_FORMAT=json` switches to JSON lines and
//! `RUST_LOG` sets the filter.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use megaprimes::bench::{BENCH_LONG_RUNS, BENCH_RUNS};
use megaprimes::{Candidate, DigitShape, PrimeTest, ScanStrategy, StrategySelection};

#[derive(Parser)]
#[command(
    name = "megaprimes",
    about = "Find megaprimes: primes whose every decimal digit is also prime"
)]
struct Cli {
    /// Primality test used by the sequential and parallel scans
    #[arg(long, value_enum, default_value_t = PrimeTest::WheelFactorization, global = true)]
    prime_test: PrimeTest,

    /// Digit filter: numerical or textual megaprime check, or "any" to find plain primes
    #[arg(long, value_enum, default_value_t = DigitShape::Numerical, global = true)]
    digits: DigitShape,

    /// Number of rayon worker threads (defaults to all logical cores)
    #[arg(long, env = "MEGAPRIMES_THREADS", global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan [2, BOUND] for each bound and print the matches
    Scan {
        /// Upper bounds (inclusive); "max" means 4294967295
        #[arg(required = true, value_parser = parse_bound)]
        bounds: Vec<Candidate>,
        /// Scan strategy
        #[arg(long, value_enum, default_value_t = ScanStrategy::Parallel)]
        strategy: ScanStrategy,
        /// Print results as they are found (always sequential)
        #[arg(long)]
        lazy: bool,
        /// Print only the highest result
        #[arg(long)]
        highest: bool,
        /// Output format for eager scans
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Run the known-answer self-test against a strategy
    Check {
        /// Scan strategy under test
        #[arg(long, value_enum, default_value_t = ScanStrategy::Parallel)]
        strategy: ScanStrategy,
    },
    /// Compare the wheel scan against the sieve and list any differences
    Diff {
        /// Upper bound (inclusive); "max" means 4294967295
        #[arg(long, value_parser = parse_bound, default_value_t = 1_000_000)]
        bound: Candidate,
    },
    /// Time competing classifier and primality implementations head to head
    Bench {
        /// Iterations per competitor
        #[arg(long, default_value_t = BENCH_RUNS)]
        runs: u32,
        /// Use the long iteration count instead of --runs
        #[arg(long)]
        long: bool,
        /// Swap the order of each pair
        #[arg(long)]
        flip: bool,
    },
}

/// Accept a decimal `u32` or the keyword `max`.
fn parse_bound(s: &str) -> std::result::Result<Candidate, String> {
    if s.eq_ignore_ascii_case("max") {
        return Ok(Candidate::MAX);
    }
    s.parse::<Candidate>()
        .map_err(|e| format!("'{}' is not a bound in 0..={}: {}", s, Candidate::MAX, e))
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize structured logging: LOG_FORMAT=json for log shippers, human-readable otherwise
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    cli::configure_rayon(cli.threads);

    let base = StrategySelection::new(cli.prime_test, cli.digits, ScanStrategy::default());

    match &cli.command {
        Commands::Scan {
            bounds,
            strategy,
            lazy,
            highest,
            format,
        } => {
            let selection = base.with_strategy(*strategy);
            if *lazy {
                bounds
                    .iter()
                    .try_for_each(|&bound| cli::run_lazy(bound, selection))
            } else {
                cli::run_scan(bounds, &selection, *highest, *format == OutputFormat::Json)
            }
        }
        Commands::Check { strategy } => cli::run_check(&base.with_strategy(*strategy)),
        Commands::Diff { bound } => cli::run_diff(*bound),
        Commands::Bench { runs, long, flip } => {
            let runs = if *long { BENCH_LONG_RUNS } else { *runs };
            cli::run_bench(runs, *flip)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bound_accepts_numbers_and_max() {
        assert_eq!(parse_bound("0"), Ok(0));
        assert_eq!(parse_bound("3000"), Ok(3000));
        assert_eq!(parse_bound("max"), Ok(u32::MAX));
        assert_eq!(parse_bound("MAX"), Ok(u32::MAX));
        assert_eq!(parse_bound("4294967295"), Ok(u32::MAX));
    }

    #[test]
    fn parse_bound_rejects_garbage() {
        assert!(parse_bound("4294967296").is_err());
        assert!(parse_bound("-1").is_err());
        assert!(parse_bound("ten").is_err());
        assert!(parse_bound("").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "megaprimes",
            "scan",
            "100",
            "--prime-test",
            "simple",
            "--digits",
            "any",
        ])
        .unwrap();
        assert_eq!(cli.prime_test, PrimeTest::TrialDivisionSimple);
        assert_eq!(cli.digits, DigitShape::AnyPrime);
    }

    #[test]
    fn strategy_aliases_parse() {
        for (alias, expected) in [
            ("scan", ScanStrategy::Sequential),
            ("par", ScanStrategy::Parallel),
            ("sieve", ScanStrategy::Sieve),
        ] {
            let cli =
                Cli::try_parse_from(["megaprimes", "check", "--strategy", alias]).unwrap();
            match cli.command {
                Commands::Check { strategy } => assert_eq!(strategy, expected),
                _ => panic!("expected check"),
            }
        }
    }
}
