//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::PayrollConfig;

/// Where the binary looks for configuration when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/payroll.yaml";

/// Loads and provides access to the payroll configuration.
///
/// # Example
///
/// ```
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::from_yaml_str(
///     "data:\n  employees: /srv/payroll/employees.csv\n",
///     "inline",
/// )
/// .unwrap();
///
/// let config = loader.config();
/// assert_eq!(config.data.employees.to_str(), Some("/srv/payroll/employees.csv"));
/// assert_eq!(config.data.attendance.to_str(), Some("data/attendance.csv"));
/// assert_eq!(config.server.bind_address, "127.0.0.1:3000");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid YAML for [`PayrollConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let config = Self::load_yaml::<PayrollConfig>(path.as_ref())?;
        Ok(Self { config })
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "No configuration file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parses configuration from a YAML string.
    ///
    /// `origin` names the source in error messages.
    pub fn from_yaml_str(content: &str, origin: &str) -> PayrollResult<Self> {
        let config = Self::parse_yaml(content, origin)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned + Default>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned + Default>(
        content: &str,
        origin: &str,
    ) -> PayrollResult<T> {
        // serde_yaml rejects an empty document; treat it as all defaults.
        if content.trim().is_empty() {
            return Ok(T::default());
        }

        serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Replaces the data file locations where an override is given.
    pub fn with_data_overrides(
        mut self,
        employees: Option<PathBuf>,
        attendance: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = employees {
            self.config.data.employees = path;
        }
        if let Some(path) = attendance {
            self.config.data.attendance = path;
        }
        self
    }

    /// Replaces the bind address if an override is given.
    pub fn with_bind_override(mut self, bind_address: Option<String>) -> Self {
        if let Some(address) = bind_address {
            self.config.server.bind_address = address;
        }
        self
    }
}
