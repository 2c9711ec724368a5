//! Configuration and constants for the CLI.

/// Number of cold-start measurements taken per benchmark
pub const DEFAULT_COLD_RUNS: usize = 10;

/// Upper bound accepted for `--runs`
pub const MAX_COLD_RUNS: usize = 1000;

/// JavaScript runtime used to execute the benchmark scripts
pub const DEFAULT_PROGRAM: &str = "node";

/// Script that prints one cold-start timing tree
pub const DEFAULT_COLD_SCRIPT: &str = "runtime_cold.js";

/// Script that prints the warm timing result
pub const DEFAULT_WARM_SCRIPT: &str = "runtime_warm.js";

// Emscripten glue emitted next to countCrossings.wasm, and the module
// the layouter imports after patching
pub const DEFAULT_PATCH_INPUT: &str = "countCrossings.js";
pub const DEFAULT_PATCH_OUTPUT: &str = "reorder.js";

/// Appended to the patched glue so it can be imported as an ES module
pub const EXPORT_SUFFIX: &str = "export {Module};";

/// Fixed substitutions applied to the Emscripten glue, in order
pub const WASM_GLUE_REPLACEMENTS: &[(&str, &str)] = &[
    ("if(ENVIRONMENT_IS_NODE)", "if(false)"),
    ("if (ENVIRONMENT_IS_NODE)", "if (false)"),
    (
        "var wasmBinaryFile=\"countCrossings.wasm\";",
        "var wasmBinaryFile=\"../wasm/countCrossings.wasm\";",
    ),
    (
        "var wasmBinaryFile = 'countCrossings.wasm';",
        "var wasmBinaryFile = '../wasm/countCrossings.wasm';",
    ),
];
