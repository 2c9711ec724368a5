//! Apply patch rules to text and files.

use super::rules::PatchRules;
use crate::output::validate_path;
use crate::utils::error::PatchError;
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

/// Result of patching a piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// Patched text, suffix included
    pub content: String,

    /// Occurrences replaced, one entry per rule in rule order
    pub counts: Vec<usize>,
}

impl PatchOutcome {
    /// Total number of substitutions made
    pub fn total_replacements(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Apply every replacement in order, then append the suffix
///
/// **Public** - pure text transformation
///
/// Each replacement is global over the current content. A pattern that is
/// not found leaves the content unchanged and counts zero.
pub fn apply_patch(content: &str, rules: &PatchRules) -> PatchOutcome {
    let mut content = content.to_string();
    let mut counts = Vec::with_capacity(rules.replacements.len());

    for rule in &rules.replacements {
        let count = content.matches(rule.pattern.as_str()).count();
        if count > 0 {
            content = content.replace(rule.pattern.as_str(), &rule.replacement);
        }
        counts.push(count);
    }

    content.push_str(&rules.suffix);

    PatchOutcome { content, counts }
}

/// Read `input`, patch it and write the result to `output`
///
/// **Public** - main entry point for file patching
///
/// # Errors
/// * `PatchError::Read` - input missing or unreadable
/// * `PatchError::Output` - output path is empty or a directory
/// * `PatchError::Write` - output cannot be written (missing directories
///   are not created)
pub fn patch_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    rules: &PatchRules,
) -> Result<PatchOutcome, PatchError> {
    let input = input.as_ref();
    let output = output.as_ref();

    debug!("Reading {}", input.display());
    let content = fs::read_to_string(input).map_err(|source| PatchError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let outcome = apply_patch(&content, rules);

    for (rule, count) in rules.replacements.iter().zip(&outcome.counts) {
        if *count == 0 {
            warn!("Pattern not found: {}", rule.pattern);
        } else {
            debug!("Replaced {} x {}", count, rule.pattern);
        }
    }

    validate_path(output)?;
    fs::write(output, &outcome.content).map_err(|source| PatchError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        "Patched {} -> {} ({} replacements)",
        input.display(),
        output.display(),
        outcome.total_replacements()
    );

    Ok(outcome)
}
