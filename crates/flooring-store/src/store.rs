//! # Flat-File Store
//!
//! In-memory collections backed by text files.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FlatFileStore                                    │
//! │                                                                         │
//! │  import_all()                                  export_*()               │
//! │  Products.txt ──┐                        ┌──► Orders/Orders_*.txt       │
//! │  Taxes.txt ─────┼──► ┌────────────────┐ ─┤                              │
//! │  Orders/*.txt ──┘    │ products (map) │  └──► Backup/DataExport.txt     │
//! │                      │ taxes    (map) │                                 │
//! │                      │ orders   (book)│ ◄── insert / update / remove    │
//! │                      └────────────────┘                                 │
//! │                                                                         │
//! │  Nothing touches disk between import and export.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, info};

use flooring_core::{CoreError, CoreResult, Order, Product, StateTax, DATE_FORMAT};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::repository::order::{self, OrderBook};
use crate::repository::{product, tax};

// =============================================================================
// Store Trait
// =============================================================================

/// The data-access surface the order service depends on.
///
/// Lookups hand out copies; the store keeps sole ownership of its collections.
pub trait OrderStore {
    /// Replaces orders, products and tax rates with the contents of their files.
    ///
    /// On error nothing is replaced.
    fn import_all(&mut self) -> StoreResult<()>;

    /// Writes one file per order date.
    fn export_orders(&self) -> StoreResult<()>;

    /// Writes every order into the backup file.
    fn export_backup(&self) -> StoreResult<()>;

    /// Orders placed for `date`, by order number. Empty if none.
    fn orders_by_date(&self, date: NaiveDate) -> Vec<Order>;

    /// Every order, by date then order number.
    fn all_orders(&self) -> Vec<Order>;

    /// The catalog, by product type.
    fn products(&self) -> Vec<Product>;

    /// The tax table, by state code.
    fn tax_rates(&self) -> Vec<StateTax>;

    fn product(&self, product_type: &str) -> Option<&Product>;

    fn tax_rate(&self, state: &str) -> Option<&StateTax>;

    fn has_product(&self, product_type: &str) -> bool {
        self.product(product_type).is_some()
    }

    fn has_tax_code(&self, state: &str) -> bool {
        self.tax_rate(state).is_some()
    }

    /// First order on `date` (lowest number) placed under `customer_name`.
    fn order_by_name(&self, date: NaiveDate, customer_name: &str) -> Option<Order>;

    fn order_by_number(&self, date: NaiveDate, order_number: u32) -> Option<Order>;

    /// Stores the order under a newly assigned number, which is also written
    /// back into `order` and returned.
    fn insert_order(&mut self, order: &mut Order) -> u32;

    /// Replaces the stored order with the same date and number.
    fn update_order(&mut self, order: &Order) -> StoreResult<()>;

    /// Deletes the stored order with the same date and number.
    fn remove_order(&mut self, order: &Order) -> StoreResult<Order>;

    /// Re-prices `order` from the current product and tax rows.
    ///
    /// `order` is untouched on error.
    fn recalculate_order(&self, order: &mut Order) -> CoreResult<()> {
        let product = self
            .product(&order.product_type)
            .ok_or_else(|| CoreError::UnknownProduct {
                product_type: order.product_type.clone(),
            })?;
        let tax = self
            .tax_rate(&order.state)
            .ok_or_else(|| CoreError::TaxCodeViolation {
                state: order.state.clone(),
            })?;
        order.recalculate(product, tax)?;
        Ok(())
    }
}

// =============================================================================
// Flat-File Store
// =============================================================================

/// [`OrderStore`] over the text files described by a [`StoreConfig`].
///
/// ## Usage
/// ```rust,no_run
/// use flooring_store::{FlatFileStore, OrderStore, StoreConfig};
///
/// let mut store = FlatFileStore::new(StoreConfig::new("data"));
/// store.import_all()?;
///
/// println!("{} products", store.products().len());
/// # Ok::<(), flooring_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    config: StoreConfig,
    orders: OrderBook,
    products: BTreeMap<String, Product>,
    taxes: BTreeMap<String, StateTax>,
}

impl FlatFileStore {
    /// Creates an empty store. Nothing is read until an import is called.
    pub fn new(config: StoreConfig) -> Self {
        FlatFileStore {
            config,
            orders: OrderBook::new(),
            products: BTreeMap::new(),
            taxes: BTreeMap::new(),
        }
    }

    fn next_order_number(&self) -> u32 {
        self.orders
            .values()
            .flat_map(BTreeMap::keys)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    fn order_id(order: &Order) -> String {
        format!("{} #{}", order.date.format(DATE_FORMAT), order.order_number)
    }
}

impl OrderStore for FlatFileStore {
    fn import_all(&mut self) -> StoreResult<()> {
        let orders = order::load_dir(&self.config.orders_dir)?;
        let products = product::load(&self.config.products_file)?;
        let taxes = tax::load(&self.config.taxes_file)?;

        self.orders = orders;
        self.products = products;
        self.taxes = taxes;

        info!(
            dates = self.orders.len(),
            orders = self.orders.values().map(BTreeMap::len).sum::<usize>(),
            products = self.products.len(),
            tax_rates = self.taxes.len(),
            "Data imported"
        );
        Ok(())
    }

    fn export_orders(&self) -> StoreResult<()> {
        order::save_dir(&self.config.orders_dir, &self.orders)?;
        info!(dir = %self.config.orders_dir.display(), "Orders exported");
        Ok(())
    }

    fn export_backup(&self) -> StoreResult<()> {
        order::save_backup(&self.config.backup_file, &self.orders)?;
        info!(path = %self.config.backup_file.display(), "Backup exported");
        Ok(())
    }

    fn orders_by_date(&self, date: NaiveDate) -> Vec<Order> {
        self.orders
            .get(&date)
            .map(|orders| orders.values().cloned().collect())
            .unwrap_or_default()
    }

    fn all_orders(&self) -> Vec<Order> {
        self.orders
            .values()
            .flat_map(BTreeMap::values)
            .cloned()
            .collect()
    }

    fn products(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    fn tax_rates(&self) -> Vec<StateTax> {
        self.taxes.values().cloned().collect()
    }

    fn product(&self, product_type: &str) -> Option<&Product> {
        self.products.get(product_type)
    }

    fn tax_rate(&self, state: &str) -> Option<&StateTax> {
        self.taxes.get(state)
    }

    fn order_by_name(&self, date: NaiveDate, customer_name: &str) -> Option<Order> {
        self.orders
            .get(&date)?
            .values()
            .find(|order| order.customer_name == customer_name)
            .cloned()
    }

    fn order_by_number(&self, date: NaiveDate, order_number: u32) -> Option<Order> {
        self.orders.get(&date)?.get(&order_number).cloned()
    }

    fn insert_order(&mut self, order: &mut Order) -> u32 {
        let number = self.next_order_number();
        order.order_number = number;
        self.orders
            .entry(order.date)
            .or_default()
            .insert(number, order.clone());

        debug!(order = %Self::order_id(order), "Order inserted");
        number
    }

    fn update_order(&mut self, order: &Order) -> StoreResult<()> {
        let stored = self
            .orders
            .get_mut(&order.date)
            .and_then(|orders| orders.get_mut(&order.order_number))
            .ok_or_else(|| StoreError::not_found("Order", Self::order_id(order)))?;

        *stored = order.clone();
        debug!(order = %Self::order_id(order), "Order updated");
        Ok(())
    }

    fn remove_order(&mut self, order: &Order) -> StoreResult<Order> {
        let orders = self
            .orders
            .get_mut(&order.date)
            .ok_or_else(|| StoreError::not_found("Order", Self::order_id(order)))?;
        let removed = orders
            .remove(&order.order_number)
            .ok_or_else(|| StoreError::not_found("Order", Self::order_id(order)))?;

        if orders.is_empty() {
            self.orders.remove(&order.date);
        }

        debug!(order = %Self::order_id(order), "Order removed");
        Ok(removed)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
