//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the allowance
//! rates and the destination catalog from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{DestinationCatalog, EmployeeRegistry};

use super::types::{AllowanceRates, DestinationsConfig, EmployeesConfig, RatesConfig};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides the allowance rates and destination catalog to the calculation
/// and API layers.
///
/// # Directory Structure
///
/// ```text
/// config/perdiem/
/// ├── rates.yaml         # Component percentages and tourist surcharge
/// ├── destinations.yaml  # Destination reference data
/// └── employees.yaml     # Employee reference data
/// ```
///
/// # Example
///
/// ```no_run
/// use perdiem_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/perdiem").unwrap();
/// let destination = loader.catalog().lookup(1).unwrap();
/// println!("Fare to {}: ${}", destination.name, destination.transport_cost);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    regulation: String,
    rates: AllowanceRates,
    catalog: DestinationCatalog,
    employees: EmployeeRegistry,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if a required file is missing.
    /// - [`EngineError::ConfigParseError`] if a file contains invalid YAML
    ///   or the rate percentages do not partition the base exactly.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rates_path = path.join("rates.yaml");
        let rates_config = Self::load_yaml::<RatesConfig>(&rates_path)?;

        if !rates_config.rates.percentages_partition_base() {
            return Err(EngineError::ConfigParseError {
                path: rates_path.display().to_string(),
                message: "component percentages must sum to exactly 1".to_string(),
            });
        }

        let destinations_path = path.join("destinations.yaml");
        let destinations_config = Self::load_yaml::<DestinationsConfig>(&destinations_path)?;

        let employees_path = path.join("employees.yaml");
        let employees_config = Self::load_yaml::<EmployeesConfig>(&employees_path)?;

        Ok(Self {
            regulation: rates_config.regulation,
            rates: rates_config.rates,
            catalog: DestinationCatalog::new(destinations_config.destinations),
            employees: EmployeeRegistry::new(employees_config.employees),
        })
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

    /// Returns the reference to the governing regulation.
    pub fn regulation(&self) -> &str {
        &self.regulation
    }

    /// Returns the allowance rates.
    pub fn rates(&self) -> &AllowanceRates {
        &self.rates
    }

    /// Returns the destination catalog.
    pub fn catalog(&self) -> &DestinationCatalog {
        &self.catalog
    }

    /// Returns the employee registry.
    pub fn employees(&self) -> &EmployeeRegistry {
        &self.employees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_rates(dir: &TempDir, content: &str) {
        fs::write(dir.path().join("rates.yaml"), content).unwrap();
    }

    #[test]
    fn test_load_shipped_config() {
        let loader = ConfigLoader::load("./config/perdiem").unwrap();
        assert_eq!(*loader.rates(), AllowanceRates::default());
        assert!(loader.regulation().contains("Viáticos"));
        assert!(!loader.catalog().is_empty());
        assert!(loader.catalog().lookup(1).is_ok());
        assert!(!loader.employees().is_empty());
    }

    #[test]
    fn test_missing_directory_reports_rates_path() {
        let error = ConfigLoader::load("/nonexistent/config").unwrap_err();
        match error {
            EngineError::ConfigNotFound { path } => assert!(path.ends_with("rates.yaml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unbalanced_percentages_rejected_at_load() {
        let dir = TempDir::new().unwrap();
        write_rates(
            &dir,
            r#"
regulation: "Reglamento de prueba"
rates:
  breakfast_pct: "0.10"
  lunch_pct: "0.25"
  dinner_pct: "0.20"
  lodging_pct: "0.40"
  tourist_surcharge: "1.05"
"#,
        );

        let error = ConfigLoader::load(dir.path()).unwrap_err();
        match error {
            EngineError::ConfigParseError { path, message } => {
                assert!(path.ends_with("rates.yaml"));
                assert!(message.contains("must sum to exactly 1"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_yaml_rejected_at_load() {
        let dir = TempDir::new().unwrap();
        write_rates(&dir, "regulation: [unclosed");

        let error = ConfigLoader::load(dir.path()).unwrap_err();
        assert!(matches!(error, EngineError::ConfigParseError { .. }));
    }
}
