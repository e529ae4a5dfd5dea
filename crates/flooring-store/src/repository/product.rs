//! # Product Catalog File
//!
//! `ProductType,CostPerSquareFoot,LaborCostPerSquareFoot`, e.g.
//! `Carpet,2.25,2.10`.

use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use flooring_core::{Money, Product};

use super::{read_file, records};
use crate::error::{StoreError, StoreResult};

/// Header line of the products file.
pub const HEADER: &str = "ProductType,CostPerSquareFoot,LaborCostPerSquareFoot";

/// Parses one product line.
pub fn parse_line(line: &str) -> Result<Product, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [product_type, cost, labor] = fields.as_slice() else {
        return Err(format!("expected 3 fields, found {}", fields.len()));
    };

    if product_type.is_empty() {
        return Err("product type is empty".to_string());
    }

    Ok(Product {
        product_type: product_type.to_string(),
        cost_per_sqft: Money::parse("cost per square foot", cost).map_err(|e| e.to_string())?,
        labor_cost_per_sqft: Money::parse("labor cost per square foot", labor)
            .map_err(|e| e.to_string())?,
    })
}

/// Loads the catalog keyed by product type.
///
/// A repeated product type is a parse error rather than a silent overwrite.
pub fn load(path: &Path) -> StoreResult<BTreeMap<String, Product>> {
    let content = read_file(path)?;
    let mut products = BTreeMap::new();

    for (line_number, line) in records(&content, "ProductType") {
        let product = parse_line(line).map_err(|reason| StoreError::parse(path, line_number, reason))?;
        if products.contains_key(&product.product_type) {
            return Err(StoreError::parse(
                path,
                line_number,
                format!("duplicate product type {}", product.product_type),
            ));
        }
        products.insert(product.product_type.clone(), product);
    }

    debug!(path = %path.display(), count = products.len(), "Loaded products");
    Ok(products)
}
