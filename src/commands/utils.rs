use crate::utils::config::{DEFAULT_COLD_RUNS, DEFAULT_PATCH_INPUT, DEFAULT_PATCH_OUTPUT};

/// Display version information
pub fn display_version() {
    println!("Layouter Tools v{}", env!("CARGO_PKG_VERSION"));
    println!("Cold runs per benchmark: {}", DEFAULT_COLD_RUNS);
    println!(
        "Wasm glue: {} -> {}",
        DEFAULT_PATCH_INPUT, DEFAULT_PATCH_OUTPUT
    );
    println!();
    println!("Benchmark aggregation and wasm glue patching for the graph layouter.");
}
