//! Timing trees and their aggregation.
//!
//! This module turns repeated benchmark output into:
//! - A summary tree with one duration per cold run at every timer
//! - Per-timer statistics for the text summary

pub mod combine;
pub mod schema;
pub mod stats;

// Re-export main types and functions
pub use combine::combine_runs;
pub use schema::{BenchReport, SummaryNode, TimingNode};
pub use stats::{calculate_stats, flatten_stats, render_stats_table, TimeStats};
