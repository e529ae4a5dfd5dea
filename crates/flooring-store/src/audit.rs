//! # Audit Log
//!
//! Append-only record of every operation the service attempts.
//!
//! ```text
//! 2026-10-18T09:14:03 : ORDERS DISPLAYED FOR DATE 12-31-2099
//! 2026-10-18T09:14:20 : ORDER INPUT VALIDATED, CREATING ORDER OBJECT FOR VERIFICATION.
//! 2026-10-18T09:14:22 : ORDER VERIFIED AND SUBMITTED
//! ```

use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{StoreError, StoreResult};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Something that accepts audit entries.
pub trait AuditLog {
    /// Appends one entry. Returns only after the entry is durable.
    fn write_entry(&mut self, entry: &str) -> StoreResult<()>;
}

// =============================================================================
// File Audit Log
// =============================================================================

/// Appends `<timestamp> : <entry>` lines to a file.
#[derive(Debug, Clone)]
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    /// Creates an audit log writing to `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileAuditLog { path: path.into() }
    }

    /// Path of the audit file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditLog for FileAuditLog {
    fn write_entry(&mut self, entry: &str) -> StoreResult<()> {
        info!(target: "audit", "{entry}");

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?;

        writeln!(file, "{} : {}", Local::now().format(TIMESTAMP_FORMAT), entry)
            .and_then(|()| file.flush())
            .map_err(|e| StoreError::io(&self.path, e))
    }
}

// =============================================================================
// Memory Audit Log
// =============================================================================

/// Keeps entries in memory. Used by tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryAuditLog {
    entries: Vec<String>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in the order they were written.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether any entry contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|entry| entry.contains(needle))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl AuditLog for MemoryAuditLog {
    fn write_entry(&mut self, entry: &str) -> StoreResult<()> {
        info!(target: "audit", "{entry}");
        self.entries.push(entry.to_string());
        Ok(())
    }
}
