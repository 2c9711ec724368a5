use crate::utils::config::{
    DEFAULT_COLD_RUNS, DEFAULT_COLD_SCRIPT, DEFAULT_PATCH_INPUT, DEFAULT_PATCH_OUTPUT,
    DEFAULT_PROGRAM, DEFAULT_WARM_SCRIPT,
};
use std::path::PathBuf;

/// Arguments for the bench command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct BenchArgs {
    /// Runtime that executes the scripts
    pub program: String,

    /// Script printing one cold-start timing tree
    pub cold_script: String,

    /// Script printing the warm result
    pub warm_script: String,

    /// Number of cold runs
    pub runs: usize,

    /// Directory the scripts run in (current directory if None)
    pub working_dir: Option<PathBuf>,

    /// Also write a pretty report file here
    pub output: Option<PathBuf>,

    /// Print a statistics table to stderr
    pub print_summary: bool,

    /// Do not run the warm script; report `"warm": null`
    pub skip_warm: bool,
}

impl Default for BenchArgs {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            cold_script: DEFAULT_COLD_SCRIPT.to_string(),
            warm_script: DEFAULT_WARM_SCRIPT.to_string(),
            runs: DEFAULT_COLD_RUNS,
            working_dir: None,
            output: None,
            print_summary: false,
            skip_warm: false,
        }
    }
}

/// Arguments for the patch-wasm command
#[derive(Debug, Clone)]
pub struct PatchArgs {
    /// Emscripten glue to read
    pub input: PathBuf,

    /// Patched module to write
    pub output: PathBuf,

    /// TOML rules replacing the built-in ones
    pub rules: Option<PathBuf>,
}

impl Default for PatchArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_PATCH_INPUT),
            output: PathBuf::from(DEFAULT_PATCH_OUTPUT),
            rules: None,
        }
    }
}
