//! Blocking runner for benchmark scripts.
//!
//! Each invocation spawns the configured command, waits for it to exit and
//! parses its stdout as one JSON document. Invocations never overlap.

use crate::utils::error::RunError;
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::process::Command;
use std::time::Instant;

/// Command line of one benchmark process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Executable to launch (looked up on PATH)
    pub program: String,

    /// Arguments passed verbatim
    pub args: Vec<String>,

    /// Working directory (inherits ours when None)
    pub working_dir: Option<PathBuf>,
}

impl RunnerConfig {
    /// Create a config with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    /// Append one argument
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_working_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.working_dir = dir;
        self
    }

    /// Command line as a single string, for messages
    pub fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runs a benchmark command and decodes its JSON output
pub struct ProcessRunner {
    config: RunnerConfig,
}

impl ProcessRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run the command once and parse stdout as `T`
    ///
    /// **Public** - single invocation
    ///
    /// # Errors
    /// * `RunError::Spawn` - the program could not be started
    /// * `RunError::Utf8` - stdout is not UTF-8
    /// * `RunError::ExitStatus` - non-zero exit and stdout did not parse
    /// * `RunError::Parse` - clean exit but stdout did not parse
    pub fn run_once<T: DeserializeOwned>(&self) -> Result<T, RunError> {
        let mut command = Command::new(&self.config.program);
        command.args(&self.config.args);
        if let Some(dir) = &self.config.working_dir {
            command.current_dir(dir);
        }

        let start = Instant::now();
        let output = command.output().map_err(|source| RunError::Spawn {
            command: self.config.describe(),
            source,
        })?;
        debug!(
            "`{}` finished in {:.2}s ({})",
            self.config.describe(),
            start.elapsed().as_secs_f64(),
            output.status
        );

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !stderr.is_empty() {
            debug!("stderr: {}", stderr);
        }

        let stdout = String::from_utf8(output.stdout)?;

        match serde_json::from_str::<T>(&stdout) {
            Ok(value) => {
                if !output.status.success() {
                    warn!(
                        "`{}` exited with {} but printed valid JSON; keeping it",
                        self.config.describe(),
                        output.status
                    );
                }
                Ok(value)
            }
            Err(_) if !output.status.success() => Err(RunError::ExitStatus {
                status: output.status,
                stderr,
            }),
            Err(e) => Err(RunError::Parse(e)),
        }
    }

    /// Run the command `count` times, one after another
    ///
    /// **Public** - returns one outcome per invocation, in order; never retries
    pub fn run_repeated<T: DeserializeOwned>(&self, count: usize) -> Vec<Result<T, RunError>> {
        (0..count)
            .map(|run| {
                debug!("Run {}/{}: {}", run + 1, count, self.config.describe());
                self.run_once()
            })
            .collect()
    }
}

/// Unwrap collected outcomes, failing on the first error
///
/// **Public** - every failure is logged; the first one is returned
pub fn collect_runs<T>(outcomes: Vec<Result<T, RunError>>) -> Result<Vec<T>, RunError> {
    let total = outcomes.len();
    let mut values = Vec::with_capacity(total);
    let mut first_error = None;

    for (run, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(value) => values.push(value),
            Err(e) => {
                error!("Run {}/{} failed: {}", run + 1, total, e);
                if first_error.is_none() {
                    first_error = Some(RunError::Failed {
                        run: run + 1,
                        total,
                        source: Box::new(e),
                    });
                }
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_joins_program_and_args() {
        let config = RunnerConfig::new("node").with_arg("runtime_cold.js");
        assert_eq!(config.describe(), "node runtime_cold.js");
    }

    #[test]
    fn test_collect_runs_all_ok() {
        let outcomes: Vec<Result<u32, RunError>> = vec![Ok(1), Ok(2), Ok(3)];
        assert_eq!(collect_runs(outcomes).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_collect_runs_reports_first_failure() {
        let bad = serde_json::from_str::<u32>("oops").unwrap_err();
        let outcomes: Vec<Result<u32, RunError>> = vec![Ok(1), Err(RunError::Parse(bad)), Ok(3)];

        let err = collect_runs(outcomes).unwrap_err();
        assert_eq!(err.to_string(), "Run 2/3 failed");

        match err {
            RunError::Failed { run, total, source } => {
                assert_eq!(run, 2);
                assert_eq!(total, 3);
                assert!(matches!(*source, RunError::Parse(_)));
            }
            other => panic!("expected run failure, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let runner = ProcessRunner::new(RunnerConfig::new("definitely-not-a-real-binary-xyz"));
        let result: Result<serde_json::Value, RunError> = runner.run_once();
        assert!(matches!(result, Err(RunError::Spawn { .. })));
    }
}
