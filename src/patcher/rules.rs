//! Substitution rules for the Emscripten glue file.
//!
//! The built-in rules stop the glue from taking its Node code paths and point
//! it at `../wasm/countCrossings.wasm`. Alternative rules can be loaded from
//! TOML:
//!
//! ```toml
//! suffix = "export {Module};"
//!
//! [[replacements]]
//! pattern = "if(ENVIRONMENT_IS_NODE)"
//! replacement = "if(false)"
//! ```

use crate::utils::config::{EXPORT_SUFFIX, WASM_GLUE_REPLACEMENTS};
use crate::utils::error::PatchError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One literal substitution
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Replacement {
    /// Exact text to look for
    pub pattern: String,

    /// Text written in its place
    pub replacement: String,
}

impl Replacement {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Ordered substitutions followed by a suffix
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PatchRules {
    /// Applied in order; later entries see earlier results
    #[serde(default)]
    pub replacements: Vec<Replacement>,

    /// Appended after all substitutions
    #[serde(default)]
    pub suffix: String,
}

impl Default for PatchRules {
    fn default() -> Self {
        Self {
            replacements: WASM_GLUE_REPLACEMENTS
                .iter()
                .map(|(pattern, replacement)| Replacement::new(*pattern, *replacement))
                .collect(),
            suffix: EXPORT_SUFFIX.to_string(),
        }
    }
}

impl PatchRules {
    /// Reject rules that cannot be applied
    ///
    /// An empty pattern would match between every character.
    pub fn validate(&self) -> Result<(), PatchError> {
        if let Some(index) = self
            .replacements
            .iter()
            .position(|r| r.pattern.is_empty())
        {
            return Err(PatchError::InvalidRules(format!(
                "replacement #{} has an empty pattern",
                index + 1
            )));
        }
        Ok(())
    }
}

/// Load patch rules from a TOML file
///
/// # Errors
/// * `PatchError::Read` - If file cannot be read
/// * `PatchError::Rules` - If TOML is invalid
/// * `PatchError::InvalidRules` - If a pattern is empty
pub fn load_rules(path: impl AsRef<Path>) -> Result<PatchRules, PatchError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let rules: PatchRules = toml::from_str(&contents)?;
    rules.validate()?;
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_rules() {
        let rules = PatchRules::default();

        assert_eq!(rules.replacements.len(), 4);
        assert_eq!(rules.replacements[0].pattern, "if(ENVIRONMENT_IS_NODE)");
        assert_eq!(rules.replacements[0].replacement, "if(false)");
        assert_eq!(
            rules.replacements[3].replacement,
            "var wasmBinaryFile = '../wasm/countCrossings.wasm';"
        );
        assert_eq!(rules.suffix, "export {Module};");
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_load_rules_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
suffix = "export default Module;"

[[replacements]]
pattern = "foo"
replacement = "bar"
"#
        )
        .unwrap();

        let rules = load_rules(file.path()).unwrap();

        assert_eq!(rules.replacements, vec![Replacement::new("foo", "bar")]);
        assert_eq!(rules.suffix, "export default Module;");
    }

    #[test]
    fn test_load_rules_rejects_empty_pattern() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[replacements]]\npattern = \"\"\nreplacement = \"x\"").unwrap();

        assert!(matches!(
            load_rules(file.path()),
            Err(PatchError::InvalidRules(_))
        ));
    }

    #[test]
    fn test_load_rules_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "replacements = 5").unwrap();

        assert!(matches!(load_rules(file.path()), Err(PatchError::Rules(_))));
    }
}
