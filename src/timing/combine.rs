//! Merge repeated cold-run timing trees into one summary tree.
//!
//! Every run must have the same shape. The first run decides which children
//! exist at each level, and in which order; any other run that disagrees is
//! a shape mismatch.
//!
//! Example:
//! ```text
//! run 0: {"sum":1,"children":{"a":{"sum":2,"children":{}}}}
//! run 1: {"sum":3,"children":{"a":{"sum":4,"children":{}}}}
//! =>     {"children":{"a":{"children":{},"times":[2,4]}}}
//! ```

use super::schema::{SummaryNode, TimingNode};
use crate::utils::error::AggregateError;
use indexmap::IndexMap;
use log::debug;

/// Combine N same-shaped run trees into one summary tree
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `runs` - One timing tree per cold run, in run order
///
/// # Returns
/// Summary tree whose non-root nodes carry `times[i]` = run i's `sum`
///
/// # Errors
/// * `AggregateError::EmptyRuns` - `runs` is empty
/// * `AggregateError::ShapeMismatch` - a run's children differ from the first run's
/// * `AggregateError::MissingSum` - a non-root node has no `sum`
pub fn combine_runs(runs: &[TimingNode]) -> Result<SummaryNode, AggregateError> {
    if runs.is_empty() {
        return Err(AggregateError::EmptyRuns);
    }

    debug!("Combining {} timing trees", runs.len());

    let slots: Vec<&TimingNode> = runs.iter().collect();
    let mut path = Vec::new();
    combine_slot(&slots, &mut path)
}

/// Build the summary node for one position in the tree
///
/// **Private** - recursive worker; `slots[i]` is run i's node at `path`
fn combine_slot(
    slots: &[&TimingNode],
    path: &mut Vec<String>,
) -> Result<SummaryNode, AggregateError> {
    let times = if path.is_empty() {
        None
    } else {
        Some(collect_sums(slots, path)?)
    };

    let first = slots[0];
    check_shape(slots, path)?;

    let mut children = IndexMap::new();
    for name in first.children.keys() {
        let child_slots = slots
            .iter()
            .enumerate()
            .map(|(run, slot)| {
                slot.children
                    .get(name)
                    .ok_or_else(|| AggregateError::ShapeMismatch {
                        path: format_path(path.as_slice()),
                        run,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        path.push(name.clone());

        let child = combine_slot(&child_slots, path)?;
        path.pop();

        children.insert(name.clone(), child);
    }

    Ok(SummaryNode { children, times })
}

/// Take each run's `sum` at the current position
fn collect_sums(
    slots: &[&TimingNode],
    path: &[String],
) -> Result<Vec<serde_json::Number>, AggregateError> {
    slots
        .iter()
        .enumerate()
        .map(|(run, slot)| {
            slot.sum.clone().ok_or_else(|| AggregateError::MissingSum {
                path: format_path(path),
                run,
            })
        })
        .collect()
}

/// Every run must have exactly the first run's child names
fn check_shape(slots: &[&TimingNode], path: &[String]) -> Result<(), AggregateError> {
    let first = slots[0];

    for (run, slot) in slots.iter().enumerate().skip(1) {
        let same_names = slot.children.len() == first.children.len()
            && first
                .children
                .keys()
                .all(|name| slot.children.contains_key(name));

        if !same_names {
            return Err(AggregateError::ShapeMismatch {
                path: format_path(path),
                run,
            });
        }
    }

    Ok(())
}

fn format_path(path: &[String]) -> String {
    format!("/{}", path.join("/"))
}
