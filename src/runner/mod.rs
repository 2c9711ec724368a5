//! Sequential execution of external benchmark processes.

pub mod process;

pub use process::{collect_runs, ProcessRunner, RunnerConfig};
