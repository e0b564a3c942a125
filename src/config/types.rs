//! Configuration types.
//!
//! Strongly-typed structures deserialized from the YAML configuration file.

use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Locations of the input data files.
    pub data: DataConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Output formatting settings.
    pub display: DisplayConfig,
}

/// Input data file locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the employee CSV file.
    pub employees: PathBuf,
    /// Path to the attendance CSV file.
    pub attendance: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            employees: PathBuf::from("data/employees.csv"),
            attendance: PathBuf::from("data/attendance.csv"),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. "127.0.0.1:3000".
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Output formatting settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Currency label printed before amounts.
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "PHP".to_string(),
        }
    }
}
