//! # Repository Module
//!
//! File formats for each collection the store owns.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One module per file format                           │
//! │                                                                         │
//! │  FlatFileStore                                                          │
//! │       │                                                                 │
//! │       ├── product::load(Products.txt)  → BTreeMap<type, Product>       │
//! │       ├── tax::load(Taxes.txt)         → BTreeMap<state, StateTax>     │
//! │       ├── order::load_dir(Orders/)     → OrderBook                     │
//! │       ├── order::save_dir(Orders/, ..)                                 │
//! │       └── order::save_backup(DataExport.txt, ..)                       │
//! │                                                                         │
//! │  Every format is comma-delimited text with one header line.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`order`] - Per-date order files and the backup export
//! - [`product`] - Product catalog
//! - [`tax`] - State tax table

pub mod order;
pub mod product;
pub mod tax;

use std::fs;
use std::path::Path;

use crate::error::{StoreError, StoreResult};

/// Reads a whole data file.
pub(crate) fn read_file(path: &Path) -> StoreResult<String> {
    fs::read_to_string(path).map_err(|e| StoreError::io(path, e))
}

/// Writes a whole data file, creating its parent directory if needed.
pub(crate) fn write_file(path: &Path, content: &str) -> StoreResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| StoreError::io(path, e))
}

/// Yields `(line_number, line)` for every record line.
///
/// Line numbers are 1-based. Blank lines and a header line (first field equal
/// to `header_key`) are skipped; trailing `\r` is stripped.
pub(crate) fn records<'a>(
    content: &'a str,
    header_key: &'a str,
) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty())
        .filter(move |(_, line)| line.split(',').next().map(str::trim) != Some(header_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_skip_header_and_blanks() {
        let content = "State,StateName,TaxRate\r\nTX,Texas,4.45\r\n\r\nWA,Washington,9.25\n";
        let lines: Vec<_> = records(content, "State").collect();
        assert_eq!(lines, vec![(2, "TX,Texas,4.45"), (4, "WA,Washington,9.25")]);
    }

    #[test]
    fn test_write_file_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.txt");
        write_file(&path, "hello\n").unwrap();
        assert_eq!(read_file(&path).unwrap(), "hello\n");
    }
}
