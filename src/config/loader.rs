//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rate tables
//! from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::builtin::builtin_rate_table;
use super::types::{CalculatorMetadata, RateTable, RatesConfig, SectorsConfig};

/// Loads and provides access to the calculator's rate table.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/es2026/
/// ├── calculator.yaml  # Table metadata
/// ├── sectors.yaml     # Sector accident-insurance rates
/// └── rates.yaml       # Social security, hidden costs, net estimate
/// ```
///
/// # Example
///
/// ```no_run
/// use employer_cost_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/es2026").unwrap();
/// println!("Loaded rate table: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    table: RateTable,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or unknown sectors (`ConfigParseError`)
    /// - The loaded values fail validation (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CalculatorMetadata>(&path.join("calculator.yaml"))?;
        let sectors = Self::load_yaml::<SectorsConfig>(&path.join("sectors.yaml"))?;
        let rates = Self::load_yaml::<RatesConfig>(&path.join("rates.yaml"))?;

        let table = RateTable::new(metadata, sectors.sectors, rates);
        table.validate()?;

        info!(
            code = %table.metadata().code,
            version = %table.metadata().version,
            sectors = table.sectors().len(),
            "Loaded rate table from {}",
            path.display()
        );

        Ok(Self { table })
    }

    /// Returns a loader over the compiled-in 2026 rate table.
    pub fn builtin() -> Self {
        Self {
            table: builtin_rate_table().clone(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading configuration file");

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rate table.
    pub fn rate_table(&self) -> &RateTable {
        &self.table
    }

    /// Returns the table metadata.
    pub fn metadata(&self) -> &CalculatorMetadata {
        self.table.metadata()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/es2026"
    }

    /// Copies the shipped configuration into a scratch directory so a test
    /// can break one file.
    fn scratch_copy(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "employer-cost-config-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        for file in ["calculator.yaml", "sectors.yaml", "rates.yaml"] {
            fs::copy(Path::new(config_path()).join(file), dir.join(file)).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().code, "es2026");
        assert_eq!(loader.metadata().locale, "es-ES");
        assert_eq!(loader.metadata().currency, "EUR");
    }

    #[test]
    fn test_shipped_yaml_matches_builtin_table() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.rate_table(), builtin_rate_table());
    }

    #[test]
    fn test_default_is_builtin() {
        assert_eq!(ConfigLoader::default().rate_table(), builtin_rate_table());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("calculator.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let dir = scratch_copy("malformed");
        fs::write(dir.join("rates.yaml"), "social_security: [unterminated").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("rates.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_unknown_sector_returns_parse_error() {
        let dir = scratch_copy("unknown-sector");
        fs::write(
            dir.join("sectors.yaml"),
            "sectors:\n  - id: mining\n    label: Minería\n    rate: \"0.09\"\n",
        )
        .unwrap();

        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::ConfigParseError { .. })
        ));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_invalid_values_returns_invalid_config() {
        let dir = scratch_copy("invalid-values");
        fs::write(
            dir.join("sectors.yaml"),
            "sectors:\n  - id: transport\n    label: Transporte\n    rate: \"0.037\"\n",
        )
        .unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "sectors"),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }
}
