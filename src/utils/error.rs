//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors from a single benchmark process invocation
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Process output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to parse process output as JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Process exited with {status}: {stderr}")]
    ExitStatus { status: ExitStatus, stderr: String },

    #[error("Run {run}/{total} failed")]
    Failed {
        run: usize,
        total: usize,
        #[source]
        source: Box<RunError>,
    },
}

/// Errors that can occur while merging cold-run timing trees
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AggregateError {
    #[error("No runs to aggregate")]
    EmptyRuns,

    #[error("Shape mismatch at '{path}': run {run} does not match the first run's children")]
    ShapeMismatch { path: String, run: usize },

    #[error("Missing 'sum' at '{path}' in run {run}")]
    MissingSum { path: String, run: usize },
}

/// Errors that can occur while patching the wasm glue file
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid patch rules: {0}")]
    InvalidRules(String),

    #[error("Patch rules TOML parse error: {0}")]
    Rules(#[from] toml::de::Error),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
