//! Patch-wasm command implementation.
//!
//! Rewrites the Emscripten glue for `countCrossings.wasm` so the layouter can
//! import it as an ES module from the browser build.

use super::models::PatchArgs;
use crate::patcher::{load_rules, patch_file, PatchOutcome, PatchRules};
use anyhow::{Context, Result};
use log::info;

/// Execute the patch-wasm command
///
/// **Public** - main entry point called from main.rs
pub fn execute_patch(args: PatchArgs) -> Result<PatchOutcome> {
    let rules = match &args.rules {
        Some(path) => {
            info!("Loading patch rules from: {}", path.display());
            load_rules(path).context("Failed to load patch rules")?
        }
        None => PatchRules::default(),
    };

    let outcome = patch_file(&args.input, &args.output, &rules).with_context(|| {
        format!(
            "Failed to patch {} into {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    info!(
        "✓ {} written ({} of {} patterns matched)",
        args.output.display(),
        outcome.counts.iter().filter(|c| **c > 0).count(),
        outcome.counts.len()
    );

    Ok(outcome)
}
