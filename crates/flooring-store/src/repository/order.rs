//! # Order Files
//!
//! Orders are stored one file per date, and exported together into a single
//! backup file.
//!
//! ## File Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Orders/Orders_12312099.txt                                             │
//! │                                                                         │
//! │  OrderNumber,CustomerName,State,TaxRate,ProductType,Area,               │
//! │      CostPerSquareFoot,LaborCostPerSquareFoot,MaterialCost,LaborCost,   │
//! │      Tax,Total                                                          │
//! │  1,Jane Doe,TX,8.25,Carpet,249.0,2.25,2.10,560.25,522.90,89.36,1172.51  │
//! │  2,Acme, Inc.,TX,8.25,Tile,100,3.50,4.15,350.00,415.00,63.11,828.11     │
//! │     └─────────┘                                                         │
//! │  Names may contain commas: the name is everything between the first     │
//! │  field and the last ten.                                                │
//! │                                                                         │
//! │  Backup/DataExport.txt: same columns plus a trailing OrderDate.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use flooring_core::{Area, Money, Order, TaxRate, DATE_FORMAT};

use super::{read_file, records, write_file};
use crate::error::{StoreError, StoreResult};

/// Orders grouped by date, then keyed by order number.
pub type OrderBook = BTreeMap<NaiveDate, BTreeMap<u32, Order>>;

/// Header line of a per-date orders file.
pub const HEADER: &str = "OrderNumber,CustomerName,State,TaxRate,ProductType,Area,\
CostPerSquareFoot,LaborCostPerSquareFoot,MaterialCost,LaborCost,Tax,Total";

/// Header line of the backup file.
pub const BACKUP_HEADER: &str = "OrderNumber,CustomerName,State,TaxRate,ProductType,Area,\
CostPerSquareFoot,LaborCostPerSquareFoot,MaterialCost,LaborCost,Tax,Total,OrderDate";

/// Fields after the customer name.
const TRAILING_FIELDS: usize = 10;

const FILE_PREFIX: &str = "Orders_";
const FILE_SUFFIX: &str = ".txt";
const FILE_DATE_FORMAT: &str = "%m%d%Y";

// =============================================================================
// File Names
// =============================================================================

/// `Orders_MMDDYYYY.txt` for a date.
pub fn file_name(date: NaiveDate) -> String {
    format!("{FILE_PREFIX}{}{FILE_SUFFIX}", date.format(FILE_DATE_FORMAT))
}

/// Recovers the date from an orders file name; `None` for any other file.
pub fn date_from_file_name(name: &str) -> Option<NaiveDate> {
    let digits = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)?;
    if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(digits, FILE_DATE_FORMAT).ok()
}

// =============================================================================
// Lines
// =============================================================================

/// Formats an order as one line of its date file.
pub fn format_line(order: &Order) -> String {
    // A line break inside the name would split the record in two
    let customer_name = order.customer_name.replace(['\r', '\n'], " ");

    format!(
        "{},{},{},{},{},{},{},{},{},{},{},{}",
        order.order_number,
        customer_name,
        order.state,
        order.tax_rate.percentage(),
        order.product_type,
        order.area,
        order.cost_per_sqft.to_decimal(),
        order.labor_cost_per_sqft.to_decimal(),
        order.material_cost.to_decimal(),
        order.labor_cost.to_decimal(),
        order.tax.to_decimal(),
        order.total.to_decimal(),
    )
}

/// Formats an order as one line of the backup file.
pub fn format_backup_line(order: &Order) -> String {
    format!("{},{}", format_line(order), order.date.format(DATE_FORMAT))
}

/// Parses one line of a date file. The date comes from the file name.
pub fn parse_line(line: &str, date: NaiveDate) -> Result<Order, String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < TRAILING_FIELDS + 2 {
        return Err(format!(
            "expected at least {} fields, found {}",
            TRAILING_FIELDS + 2,
            fields.len()
        ));
    }

    let name_end = fields.len() - TRAILING_FIELDS;
    let customer_name = fields[1..name_end].join(",");
    let tail: Vec<&str> = fields[name_end..].iter().map(|f| f.trim()).collect();

    let order_number = fields[0]
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid order number {:?}", fields[0]))?;
    let money = |field: &str, text: &str| Money::parse(field, text).map_err(|e| e.to_string());

    Ok(Order {
        order_number,
        date,
        customer_name,
        state: tail[0].to_string(),
        tax_rate: TaxRate::parse("tax rate", tail[1]).map_err(|e| e.to_string())?,
        product_type: tail[2].to_string(),
        area: Area::parse(tail[3]).map_err(|e| e.to_string())?,
        cost_per_sqft: money("cost per square foot", tail[4])?,
        labor_cost_per_sqft: money("labor cost per square foot", tail[5])?,
        material_cost: money("material cost", tail[6])?,
        labor_cost: money("labor cost", tail[7])?,
        tax: money("tax", tail[8])?,
        total: money("total", tail[9])?,
    })
}

// =============================================================================
// Directory Import / Export
// =============================================================================

/// Loads every `Orders_MMDDYYYY.txt` file in `dir`.
///
/// A missing directory is created and treated as empty. Files with other
/// names are ignored.
pub fn load_dir(dir: &Path) -> StoreResult<OrderBook> {
    let mut book = OrderBook::new();

    if !dir.exists() {
        info!(dir = %dir.display(), "Orders directory missing, creating it");
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        return Ok(book);
    }

    let entries = fs::read_dir(dir).map_err(|e| StoreError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| StoreError::io(dir, e))?;
        let path = entry.path();
        let Some(date) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(date_from_file_name)
        else {
            debug!(path = %path.display(), "Skipping non-order file");
            continue;
        };

        let content = read_file(&path)?;
        let mut orders = BTreeMap::new();
        for (line_number, line) in records(&content, "OrderNumber") {
            let order = parse_line(line, date)
                .map_err(|reason| StoreError::parse(&path, line_number, reason))?;
            if orders.contains_key(&order.order_number) {
                return Err(StoreError::parse(
                    &path,
                    line_number,
                    format!("duplicate order number {}", order.order_number),
                ));
            }
            orders.insert(order.order_number, order);
        }

        if !orders.is_empty() {
            book.insert(date, orders);
        }
    }

    debug!(dir = %dir.display(), dates = book.len(), "Loaded order files");
    Ok(book)
}

/// Writes one file per date and deletes files for dates with no orders left.
pub fn save_dir(dir: &Path, book: &OrderBook) -> StoreResult<()> {
    fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

    for (date, orders) in book.iter().filter(|(_, orders)| !orders.is_empty()) {
        let mut content = String::from(HEADER);
        content.push('\n');
        for order in orders.values() {
            content.push_str(&format_line(order));
            content.push('\n');
        }
        write_file(&dir.join(file_name(*date)), &content)?;
    }

    let entries = fs::read_dir(dir).map_err(|e| StoreError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| StoreError::io(dir, e))?;
        let path = entry.path();
        let stale = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(date_from_file_name)
            .is_some_and(|date| book.get(&date).map_or(true, BTreeMap::is_empty));

        if stale {
            debug!(path = %path.display(), "Removing order file with no orders");
            fs::remove_file(&path).map_err(|e| StoreError::io(&path, e))?;
        }
    }

    Ok(())
}

/// Writes every order, oldest date first, into a single file.
pub fn save_backup(path: &Path, book: &OrderBook) -> StoreResult<()> {
    let mut content = String::from(BACKUP_HEADER);
    content.push('\n');
    for order in book.values().flat_map(BTreeMap::values) {
        content.push_str(&format_backup_line(order));
        content.push('\n');
    }
    write_file(path, &content)
}

// =============================================================================
// Unit Tests
// =============================================================================
