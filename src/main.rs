//! Layouter Tools CLI
//!
//! Benchmark aggregation and wasm glue patching for the graph layouter.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use layouter_tools::commands::{
    display_version, execute_bench, execute_patch, BenchArgs, PatchArgs,
};
use layouter_tools::utils::config::{
    DEFAULT_COLD_SCRIPT, DEFAULT_PATCH_INPUT, DEFAULT_PATCH_OUTPUT, DEFAULT_PROGRAM,
    DEFAULT_WARM_SCRIPT,
};

/// Layouter Tools - benchmark and build helpers for the graph layouter
#[derive(Parser, Debug)]
#[command(name = "layouter-tools")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Measure cold and warm layout runtimes and print combined JSON
    Bench {
        /// Runtime used to execute the scripts
        #[arg(long, default_value = DEFAULT_PROGRAM, env = "LAYOUTER_BENCH_PROGRAM")]
        program: String,

        /// Script printing one cold-start timing tree
        #[arg(long, default_value = DEFAULT_COLD_SCRIPT)]
        cold_script: String,

        /// Script printing the warm timing result
        #[arg(long, default_value = DEFAULT_WARM_SCRIPT)]
        warm_script: String,

        /// Number of cold runs
        #[arg(short, long, default_value = "10")]
        runs: usize,

        /// Directory to run the scripts in
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Also write a pretty-printed report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a per-timer statistics table to stderr
        #[arg(long)]
        summary: bool,

        /// Skip the warm run and report null
        #[arg(long)]
        skip_warm: bool,
    },

    /// Patch the Emscripten glue into an importable module
    PatchWasm {
        /// Glue file emitted by Emscripten
        #[arg(short, long, default_value = DEFAULT_PATCH_INPUT)]
        input: PathBuf,

        /// Patched module to write
        #[arg(short, long, default_value = DEFAULT_PATCH_OUTPUT)]
        output: PathBuf,

        /// TOML file with replacement rules (built-in rules if omitted)
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Bench {
            program,
            cold_script,
            warm_script,
            runs,
            dir,
            output,
            summary,
            skip_warm,
        } => {
            let args = BenchArgs {
                program,
                cold_script,
                warm_script,
                runs,
                working_dir: dir,
                output,
                print_summary: summary,
                skip_warm,
            };

            execute_bench(args)?;
        }

        Commands::PatchWasm {
            input,
            output,
            rules,
        } => {
            execute_patch(PatchArgs {
                input,
                output,
                rules,
            })?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
