//! # Store Configuration
//!
//! Where the store finds its reference files and writes its output.
//!
//! ## Default Layout
//! ```text
//! <data_dir>/
//! ├── Products.txt            ProductType,CostPerSquareFoot,LaborCostPerSquareFoot
//! ├── Taxes.txt               State,StateName,TaxRate
//! ├── Orders/
//! │   ├── Orders_06012030.txt one file per order date
//! │   └── Orders_12312099.txt
//! ├── Backup/
//! │   └── DataExport.txt      every order, with an OrderDate column
//! └── audit.txt               timestamped audit trail
//! ```

use std::path::{Path, PathBuf};

/// Store configuration.
///
/// Relative paths given to the builder methods are resolved against
/// `data_dir`; absolute paths are used as-is.
///
/// ## Example
/// ```rust
/// use flooring_store::StoreConfig;
///
/// let config = StoreConfig::new("/srv/flooring")
///     .orders_dir("Orders2030")
///     .backup_file("/mnt/backup/DataExport.txt");
///
/// assert!(config.orders_dir.ends_with("Orders2030"));
/// assert!(config.backup_file.starts_with("/mnt/backup"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base directory for every other path.
    pub data_dir: PathBuf,

    /// Directory holding one `Orders_MMDDYYYY.txt` file per date.
    pub orders_dir: PathBuf,

    /// Product catalog file.
    pub products_file: PathBuf,

    /// Tax table file.
    pub taxes_file: PathBuf,

    /// Single-file export of every order.
    pub backup_file: PathBuf,

    /// Audit trail file.
    pub audit_file: PathBuf,
}

impl StoreConfig {
    /// Creates a configuration with the default layout under `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        StoreConfig {
            orders_dir: data_dir.join("Orders"),
            products_file: data_dir.join("Products.txt"),
            taxes_file: data_dir.join("Taxes.txt"),
            backup_file: data_dir.join("Backup").join("DataExport.txt"),
            audit_file: data_dir.join("audit.txt"),
            data_dir,
        }
    }

    /// Sets the orders directory.
    pub fn orders_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.orders_dir = self.resolve(path);
        self
    }

    /// Sets the products file.
    pub fn products_file(mut self, path: impl AsRef<Path>) -> Self {
        self.products_file = self.resolve(path);
        self
    }

    /// Sets the taxes file.
    pub fn taxes_file(mut self, path: impl AsRef<Path>) -> Self {
        self.taxes_file = self.resolve(path);
        self
    }

    /// Sets the backup file.
    pub fn backup_file(mut self, path: impl AsRef<Path>) -> Self {
        self.backup_file = self.resolve(path);
        self
    }

    /// Sets the audit file.
    pub fn audit_file(mut self, path: impl AsRef<Path>) -> Self {
        self.audit_file = self.resolve(path);
        self
    }

    fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        // join() keeps absolute paths untouched
        self.data_dir.join(path)
    }
}
