//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::BracketTable;

use super::types::{BracketTablesConfig, PayrollConfig, PayrollRules};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates them, and exposes the resulting [`PayrollConfig`].
///
/// # Directory Structure
///
/// ```text
/// config/ca_2025/
/// ├── payroll.yaml   # Thresholds, multipliers, wage floor, flat rates
/// └── brackets.yaml  # Federal and state bracket tables
/// ```
///
/// # Example
///
/// ```no_run
/// use ca_paycheck::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ca_2025").unwrap();
/// println!("Loaded rules for {}", loader.config().jurisdiction().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or missing fields (`ConfigParseError`)
    /// - A bracket table is malformed (`MalformedBracketTable`)
    /// - A threshold or rate is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rules = Self::load_yaml::<PayrollRules>(&path.join("payroll.yaml"))?;
        let tables = Self::load_yaml::<BracketTablesConfig>(&path.join("brackets.yaml"))?;

        let federal = BracketTable::new("federal", tables.federal)?;
        let state = BracketTable::new(rules.jurisdiction.name.to_lowercase(), tables.state)?;

        let config = PayrollConfig::new(rules, federal, state)?;

        info!(
            path = %path.display(),
            jurisdiction = %config.jurisdiction().code,
            tax_year = config.jurisdiction().tax_year,
            "Loaded payroll configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration, such as a built-in preset.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/ca_2025"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Creates a scratch config directory holding the shipped payroll.yaml and
    /// the given brackets.yaml contents.
    fn scratch_dir(name: &str, brackets: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "ca_paycheck_{}_{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::copy(
            Path::new(config_path()).join("payroll.yaml"),
            dir.join("payroll.yaml"),
        )
        .unwrap();
        fs::write(dir.join("brackets.yaml"), brackets).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().jurisdiction().code, "CA");
        assert_eq!(loader.config().jurisdiction().tax_year, 2025);
    }

    #[test]
    fn test_loaded_configuration_matches_builtin_preset() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let loaded = loader.config();
        let preset = PayrollConfig::california_2025();

        assert_eq!(loaded.minimum_wage(), preset.minimum_wage());
        assert_eq!(loaded.weeks_per_year(), preset.weeks_per_year());
        assert_eq!(loaded.hours(), preset.hours());
        assert_eq!(loaded.multipliers(), preset.multipliers());
        assert_eq!(loaded.withholding(), preset.withholding());
        assert_eq!(loaded.federal(), preset.federal());
        assert_eq!(loaded.state(), preset.state());
    }

    #[test]
    fn test_minimum_wage_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config().minimum_wage(), dec("16.50"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_bracket_table_rejected_at_load() {
        let dir = scratch_dir(
            "bounded_top",
            r#"
federal:
  - { rate: "0.10", threshold: "11925" }
  - { rate: "0.12", threshold: "48475" }
state:
  - { rate: "0.01", threshold: null }
"#,
        );

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).ok();

        match result {
            Err(EngineError::MalformedBracketTable { table, .. }) => {
                assert_eq!(table, "federal");
            }
            other => panic!("Expected MalformedBracketTable, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("bad_yaml", "federal: [ this is not: valid");

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).ok();

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("brackets.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_wraps_preset() {
        let loader = ConfigLoader::from_config(PayrollConfig::california_2025());
        assert_eq!(loader.config().federal().name(), "federal");
    }
}
