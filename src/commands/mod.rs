//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod bench;
pub mod models;
pub mod patch;
pub mod utils;

// Re-export main command functions
pub use bench::{execute_bench, run_bench, validate_bench_args};
pub use models::{BenchArgs, PatchArgs};
pub use patch::execute_patch;
pub use utils::display_version;
