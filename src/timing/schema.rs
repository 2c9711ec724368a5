//! Timing tree definitions.
//!
//! `TimingNode` is what one benchmark process prints: a tree where each node
//! carries the accumulated duration (`sum`) of a named timer and its nested
//! timers. `SummaryNode` is the merged form written by the aggregator, where
//! each duration becomes one value per cold run.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// One node of a timing tree printed by a single run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingNode {
    /// Accumulated duration of this timer (absent on the root)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sum: Option<Number>,

    /// Nested timers by name, in recording order
    #[serde(default)]
    pub children: IndexMap<String, TimingNode>,
}

impl TimingNode {
    /// Create a leaf node with the given duration
    pub fn leaf(sum: impl Into<Number>) -> Self {
        Self {
            sum: Some(sum.into()),
            children: IndexMap::new(),
        }
    }

    /// Attach a named child (builder style, mostly for tests)
    pub fn with_child(mut self, name: impl Into<String>, child: TimingNode) -> Self {
        self.children.insert(name.into(), child);
        self
    }
}

/// One node of the aggregated cold-run tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryNode {
    /// Nested timers, in the first run's order
    pub children: IndexMap<String, SummaryNode>,

    /// One duration per run; never present on the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times: Option<Vec<Number>>,
}

impl SummaryNode {
    /// Durations as floats, for statistics
    pub fn times_f64(&self) -> Vec<f64> {
        self.times
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(Number::as_f64)
            .collect()
    }
}

/// Combined benchmark result printed to stdout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    /// Aggregated cold-start runs
    pub cold: SummaryNode,

    /// Warm result, passed through untouched
    pub warm: Value,
}
