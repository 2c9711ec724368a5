//! Bench command implementation.
//!
//! The bench command:
//! 1. Runs the cold script N times
//! 2. Merges the cold timing trees
//! 3. Runs the warm script once
//! 4. Prints `{"cold": ..., "warm": ...}` on stdout

use super::models::BenchArgs;
use crate::output::{report_to_line, write_report};
use crate::runner::{collect_runs, ProcessRunner, RunnerConfig};
use crate::timing::{combine_runs, flatten_stats, render_stats_table, BenchReport, TimingNode};
use crate::utils::config::MAX_COLD_RUNS;
use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::Value;
use std::time::Instant;

/// Execute the bench command
///
/// **Public** - main entry point called from main.rs
///
/// Prints exactly one JSON line to stdout, and only once everything
/// has succeeded.
pub fn execute_bench(args: BenchArgs) -> Result<()> {
    let start_time = Instant::now();

    let report = run_bench(&args)?;

    // Write report file (if requested)
    if let Some(path) = &args.output {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    // Print statistics (if requested); stderr keeps stdout pure JSON
    if args.print_summary {
        eprintln!("\n{}", "=".repeat(80));
        eprintln!("COLD START SUMMARY ({} runs)", args.runs);
        eprintln!("Generated: {}", chrono::Utc::now().to_rfc3339());
        eprintln!("{}", "=".repeat(80));
        eprint!("{}", render_stats_table(&flatten_stats(&report.cold)));
        eprintln!("{}", "=".repeat(80));
    }

    println!(
        "{}",
        report_to_line(&report).context("Failed to serialize report")?
    );

    info!(
        "Benchmark completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Run the cold and warm measurements and build the report
///
/// **Public** - everything `execute_bench` does except output
///
/// # Errors
/// * Invalid arguments
/// * Any cold or warm process failure (no partial results)
/// * Cold runs that do not share one shape
pub fn run_bench(args: &BenchArgs) -> Result<BenchReport> {
    validate_bench_args(args)?;

    // Step 1: Cold runs
    info!("Step 1/3: Running {} cold starts...", args.runs);
    let cold_runner = ProcessRunner::new(
        RunnerConfig::new(&args.program)
            .with_arg(&args.cold_script)
            .with_working_dir(args.working_dir.clone()),
    );
    let outcomes = cold_runner.run_repeated::<TimingNode>(args.runs);
    let cold_runs = collect_runs(outcomes)
        .with_context(|| format!("Cold run of `{}` failed", cold_runner.config().describe()))?;

    // Step 2: Aggregate
    info!("Step 2/3: Combining cold timing trees...");
    let cold = combine_runs(&cold_runs).context("Failed to combine cold runs")?;
    debug!("Summary has {} top-level timers", cold.children.len());

    // Step 3: Warm run
    let warm = if args.skip_warm {
        info!("Step 3/3: Skipping warm run (not requested)");
        Value::Null
    } else {
        info!("Step 3/3: Running warm measurement...");
        let warm_runner = ProcessRunner::new(
            RunnerConfig::new(&args.program)
                .with_arg(&args.warm_script)
                .with_working_dir(args.working_dir.clone()),
        );
        warm_runner
            .run_once::<Value>()
            .with_context(|| format!("Warm run of `{}` failed", warm_runner.config().describe()))?
    };

    Ok(BenchReport { cold, warm })
}

/// Validate bench arguments
///
/// **Public** - can be called before execute_bench for early validation
pub fn validate_bench_args(args: &BenchArgs) -> Result<()> {
    if args.program.trim().is_empty() {
        anyhow::bail!("Program cannot be empty");
    }

    if args.runs == 0 {
        anyhow::bail!("runs must be greater than 0");
    }

    if args.runs > MAX_COLD_RUNS {
        anyhow::bail!("runs is too large (max {})", MAX_COLD_RUNS);
    }

    Ok(())
}
