//! Configuration loading for the payroll engine.
//!
//! The configuration is a single YAML file naming the employee and attendance
//! data sources, the HTTP bind address, and the currency label used when
//! printing amounts. Every section has defaults, so an empty file (or none at
//! all, via [`ConfigLoader::load_or_default`]) is valid.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Employees: {}", loader.config().data.employees.display());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{DataConfig, DisplayConfig, PayrollConfig, ServerConfig};
