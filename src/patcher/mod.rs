//! Patching of the Emscripten glue emitted for the crossing counter.
//!
//! The glue is treated as plain text: an ordered list of literal
//! substitutions, then a suffix. Nothing is parsed.

pub mod apply;
pub mod rules;

pub use apply::{apply_patch, patch_file, PatchOutcome};
pub use rules::{load_rules, PatchRules, Replacement};
