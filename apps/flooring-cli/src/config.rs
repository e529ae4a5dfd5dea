//! CLI configuration module.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then `FLOORING_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use flooring_store::StoreConfig;

/// Prefix for environment overrides (`FLOORING_DATA_DIR`, ...).
const ENV_PREFIX: &str = "FLOORING";

/// Flooring CLI configuration.
///
/// Every path other than `data_dir` is resolved against `data_dir` unless it
/// is absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlooringConfig {
    /// Base directory for the data files
    pub data_dir: PathBuf,

    /// Directory of per-date order files
    pub orders_dir: PathBuf,

    /// Product catalog
    pub products_file: PathBuf,

    /// State tax table
    pub taxes_file: PathBuf,

    /// Audit trail
    pub audit_file: PathBuf,

    /// Single-file export of all orders
    pub backup_file: PathBuf,
}

impl FlooringConfig {
    /// Loads configuration, reading `file` if it exists.
    pub fn load(file: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("data_dir", "data")?
            .set_default("orders_dir", "Orders")?
            .set_default("products_file", "Products.txt")?
            .set_default("taxes_file", "Taxes.txt")?
            .set_default("audit_file", "audit.txt")?
            .set_default("backup_file", "Backup/DataExport.txt")?
            .add_source(File::from(file).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: FlooringConfig = settings.try_deserialize()?;

        if config.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingRequired("data_dir".to_string()));
        }

        Ok(config)
    }

    /// Paths for the data store.
    pub fn to_store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.data_dir)
            .orders_dir(&self.orders_dir)
            .products_file(&self.products_file)
            .taxes_file(&self.taxes_file)
            .audit_file(&self.audit_file)
            .backup_file(&self.backup_file)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
