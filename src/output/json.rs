//! JSON benchmark report output.
//!
//! Writes BenchReport structs to stdout (compact) or files (pretty).

use crate::timing::schema::BenchReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Serialize a report as one compact JSON line
///
/// **Public** - this is what the bench command prints to stdout
pub fn report_to_line(report: &BenchReport) -> Result<String, OutputError> {
    serde_json::to_string(report).map_err(OutputError::SerializationFailed)
}

/// Write a pretty-printed report for later comparison
///
/// Missing parent directories are created.
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, a directory, or an uncreatable parent
/// * `OutputError::WriteFailed` - the file cannot be created
/// * `OutputError::SerializationFailed` - the report cannot be encoded
pub fn write_report(report: &BenchReport, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let path = path.as_ref();
    super::validate_path(path)?;

    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
            debug!("Creating results directory {}", dir.display());
            std::fs::create_dir_all(dir).map_err(|e| {
                OutputError::InvalidPath(format!("{}: {}", dir.display(), e))
            })?;
        }
        _ => {}
    }

    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, report)?;

    info!(
        "Saved report for {} cold timers to {}",
        report.cold.children.len(),
        path.display()
    );
    Ok(())
}

/// Read a report from a JSON file
///
/// **Public** - useful for comparing runs and for tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<BenchReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let report: BenchReport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: {} top-level cold timers",
        report.cold.children.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::schema::SummaryNode;
    use serde_json::json;

    #[test]
    fn test_report_to_line_is_single_line() {
        let report = BenchReport {
            cold: SummaryNode::default(),
            warm: json!({"children": {}}),
        };

        let line = report_to_line(&report).unwrap();

        assert_eq!(line, r#"{"cold":{"children":{}},"warm":{"children":{}}}"#);
    }
}
