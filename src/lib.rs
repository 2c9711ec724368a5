//! Layouter Tools
//!
//! Developer utilities for the graph layouter:
//!
//! - `bench`: runs the Node cold-start benchmark repeatedly, merges the
//!   nested timing trees and prints `{"cold": ..., "warm": ...}` as JSON.
//! - `patch-wasm`: rewrites the Emscripten glue of the crossing counter so
//!   it can be imported as an ES module.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install --path .
//! layouter-tools --help
//! ```

pub mod commands;
pub mod output;
pub mod patcher;
pub mod runner;
pub mod timing;
pub mod utils;
