//! Output writers for benchmark reports.
//!
//! This module handles writing data to disk and stdout:
//! - Compact single-line JSON for stdout
//! - Pretty JSON report files

pub mod json;

// Re-export main functions
pub use json::{read_report, report_to_line, write_report};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
