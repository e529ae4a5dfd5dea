//! # State Tax File
//!
//! `State,StateName,TaxRate`, e.g. `TX,Texas,4.45`.

use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use flooring_core::{StateTax, TaxRate};

use super::{read_file, records};
use crate::error::{StoreError, StoreResult};

/// Header line of the taxes file.
pub const HEADER: &str = "State,StateName,TaxRate";

/// Parses one tax line.
pub fn parse_line(line: &str) -> Result<StateTax, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [state, state_name, rate] = fields.as_slice() else {
        return Err(format!("expected 3 fields, found {}", fields.len()));
    };

    if state.is_empty() {
        return Err("state code is empty".to_string());
    }

    Ok(StateTax {
        state: state.to_string(),
        state_name: state_name.to_string(),
        rate: TaxRate::parse("tax rate", rate).map_err(|e| e.to_string())?,
    })
}

/// Loads the tax table keyed by state code.
pub fn load(path: &Path) -> StoreResult<BTreeMap<String, StateTax>> {
    let content = read_file(path)?;
    let mut taxes = BTreeMap::new();

    for (line_number, line) in records(&content, "State") {
        let tax = parse_line(line).map_err(|reason| StoreError::parse(path, line_number, reason))?;
        if taxes.contains_key(&tax.state) {
            return Err(StoreError::parse(
                path,
                line_number,
                format!("duplicate state {}", tax.state),
            ));
        }
        taxes.insert(tax.state.clone(), tax);
    }

    debug!(path = %path.display(), count = taxes.len(), "Loaded tax rates");
    Ok(taxes)
}
