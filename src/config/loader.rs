//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the company
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{EducationLevel, Role};

use super::types::{CompanyConfig, CompanyPolicy, SalaryGrid};

/// Loads and provides access to the company configuration.
///
/// # Directory Structure
///
/// ```text
/// config/company/
/// ├── policy.yaml       # Company-wide constants
/// └── salary_grid.yaml  # Role × education salary multipliers
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/company").unwrap();
/// println!("Base salary: {}", loader.policy().base_salary);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: CompanyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<CompanyPolicy>(&path.join("policy.yaml"))?;
        let salary_grid = Self::load_yaml::<SalaryGrid>(&path.join("salary_grid.yaml"))?;

        tracing::debug!(path = %path.display(), "Loaded company configuration");

        Ok(Self {
            config: CompanyConfig::new(policy, salary_grid),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: CompanyConfig) -> Self {
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

    /// Returns the underlying company configuration.
    pub fn config(&self) -> &CompanyConfig {
        &self.config
    }

    /// Returns the company policy.
    pub fn policy(&self) -> &CompanyPolicy {
        self.config.policy()
    }

    /// Returns the salary grid.
    pub fn salary_grid(&self) -> &SalaryGrid {
        self.config.salary_grid()
    }

    /// Computes the hiring salary for a role, education level and contract
    /// fraction: base salary × grid multiplier × fraction.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_engine::config::ConfigLoader;
    /// use hr_engine::models::{EducationLevel, Role};
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let loader = ConfigLoader::default();
    /// let salary = loader
    ///     .hiring_salary(Role::Manager, EducationLevel::Master, Decimal::from_str("0.5").unwrap())
    ///     .unwrap();
    /// assert_eq!(salary, Decimal::from_str("1064.854").unwrap());
    /// ```
    pub fn hiring_salary(
        &self,
        role: Role,
        education: EducationLevel,
        contract_fraction: Decimal,
    ) -> EngineResult<Decimal> {
        let multiplier = self.salary_grid().multiplier(role, education)?;
        Ok((self.policy().base_salary * multiplier * contract_fraction).normalize())
    }
}
