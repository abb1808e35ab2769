//! Generator configuration.
//!
//! Handles loading and validating `quizbook.toml`. All settings have stock
//! defaults, so the file is optional; CLI flags override whatever it says.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! workbook = "page_config.xlsx"      # Input workbook path
//! out = "src/utils/pageConfig.ts"    # Emitted configuration module
//! total_pages = 100                  # Book size (pageExists bound, placeholders)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::book::DEFAULT_TOTAL_PAGES;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator settings loaded from `quizbook.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Path to the input workbook.
    pub workbook: String,
    /// Path the configuration module is written to.
    pub out: String,
    /// Total page count of the book.
    pub total_pages: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            workbook: "page_config.xlsx".to_string(),
            out: "src/utils/pageConfig.ts".to_string(),
            total_pages: DEFAULT_TOTAL_PAGES,
        }
    }
}

impl GeneratorConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_pages == 0 {
            return Err(ConfigError::Validation(
                "total_pages must be at least 1".into(),
            ));
        }
        if self.workbook.trim().is_empty() {
            return Err(ConfigError::Validation("workbook must not be empty".into()));
        }
        if self.out.trim().is_empty() {
            return Err(ConfigError::Validation("out must not be empty".into()));
        }
        Ok(())
    }
}

/// Load config from `path`, falling back to stock defaults when the file
/// doesn't exist.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    if !path.exists() {
        return Ok(GeneratorConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: GeneratorConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A documented stock `quizbook.toml`, printed by `quizbook gen-config`.
pub fn stock_config_toml() -> String {
    format!(
        r#"# quizbook generator configuration
# All options are optional - defaults shown below.

# Input workbook. Must contain the "Pages" and "Matchup Items" sheets.
workbook = "page_config.xlsx"

# Where the generated configuration module is written.
out = "src/utils/pageConfig.ts"

# Total page count of the book. Pages without a workbook row render as
# placeholders; pageExists() is bounded by this value.
total_pages = {DEFAULT_TOTAL_PAGES}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_stock_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&dir.path().join("quizbook.toml")).unwrap();
        assert_eq!(config.workbook, "page_config.xlsx");
        assert_eq!(config.out, "src/utils/pageConfig.ts");
        assert_eq!(config.total_pages, 100);
    }

    #[test]
    fn partial_file_overrides_only_named_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quizbook.toml");
        fs::write(&path, "total_pages = 64\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.total_pages, 64);
        assert_eq!(config.workbook, "page_config.xlsx");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quizbook.toml");
        fs::write(&path, "totel_pages = 64\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn zero_total_pages_fails_validation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quizbook.toml");
        fs::write(&path, "total_pages = 0\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn stock_config_parses_back_to_defaults() {
        let parsed: GeneratorConfig = toml::from_str(&stock_config_toml()).unwrap();
        assert_eq!(parsed.total_pages, GeneratorConfig::default().total_pages);
        assert_eq!(parsed.workbook, GeneratorConfig::default().workbook);
    }
}
