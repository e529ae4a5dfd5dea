//! # Order Service
//!
//! Validation and orchestration for the order lifecycle.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  raw strings from the CLI                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validation chain (first failure wins, nothing applied)                 │
//! │       │                                                                 │
//! │       ├── Err ──► audit "... REJECTED: <reason>" ──► ServiceError       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderStore call (lookup / insert / update / remove / export)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  audit "<what happened>" ──► result back to the CLI                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use flooring_core::validation::{
    ensure_future_date, parse_order_date, parse_order_number, validate_customer_name,
    validate_state_code,
};
use flooring_core::{Area, CoreError, Order, Product, StateTax};
use flooring_store::{AuditLog, OrderStore, StoreResult};

use crate::error::{ServiceError, ServiceResult};

// =============================================================================
// Order Edit
// =============================================================================

/// Replacement values for an existing order.
///
/// `None` (or a blank string) leaves the field unchanged.
///
/// ## Example
/// ```rust
/// use flooring_service::OrderEdit;
///
/// let edit = OrderEdit::new().state("WA").area("120.5");
/// assert_eq!(edit.customer_name, None);
/// assert_eq!(edit.state.as_deref(), Some("WA"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderEdit {
    pub customer_name: Option<String>,
    pub state: Option<String>,
    pub product_type: Option<String>,
    pub area: Option<String>,
}

impl OrderEdit {
    /// An edit that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn product_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = Some(product_type.into());
        self
    }

    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }
}

/// The field's value if it was actually supplied.
fn supplied(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.trim().is_empty())
}

/// Validated replacement values, ready to apply.
struct ValidatedEdit {
    customer_name: Option<String>,
    state: Option<String>,
    product_type: Option<String>,
    area: Option<Area>,
}

// =============================================================================
// Order Service
// =============================================================================

/// Business rules in front of an [`OrderStore`], with an [`AuditLog`] beside it.
///
/// ## Usage
/// ```rust,no_run
/// use flooring_service::OrderService;
/// use flooring_store::{FileAuditLog, FlatFileStore, StoreConfig};
///
/// let config = StoreConfig::new("data");
/// let audit = FileAuditLog::new(&config.audit_file);
/// let mut service = OrderService::new(FlatFileStore::new(config), audit);
///
/// service.import_all_data()?;
/// let mut order = service.create_order("12-31-2099", "Jane Doe", "TX", "Carpet", "249.0")?;
/// let number = service.submit_order(&mut order)?;
/// service.export_all_data()?;
/// # let _ = number;
/// # Ok::<(), flooring_service::ServiceError>(())
/// ```
pub struct OrderService<S, A> {
    store: S,
    audit: A,
    today: fn() -> NaiveDate,
}

impl<S: OrderStore, A: AuditLog> OrderService<S, A> {
    /// Creates a service that takes "today" from the local clock.
    pub fn new(store: S, audit: A) -> Self {
        OrderService {
            store,
            audit,
            today: || Local::now().date_naive(),
        }
    }

    /// Replaces the source of "today" used by the future-date rule.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audit(&self) -> &A {
        &self.audit
    }

    // -------------------------------------------------------------------------
    // Audit helpers
    // -------------------------------------------------------------------------

    fn record(&mut self, entry: &str) -> ServiceResult<()> {
        self.audit.write_entry(entry)?;
        Ok(())
    }

    /// Audits a failure, then hands back the failure.
    ///
    /// If the audit write itself fails, the original error still wins.
    fn reject<T>(&mut self, entry: &str, err: ServiceError) -> ServiceResult<T> {
        debug!(error = %err, "{entry}");
        if let Err(audit_err) = self.audit.write_entry(entry) {
            warn!(error = %audit_err, "Could not write audit entry for failed operation");
        }
        Err(err)
    }

    /// Audits the outcome of a store call and converts its error.
    fn persist<T>(&mut self, result: StoreResult<T>, success: &str, failure: &str) -> ServiceResult<T> {
        match result {
            Ok(value) => {
                self.record(success)?;
                Ok(value)
            }
            Err(err) => self.reject(&format!("{failure}: {err}"), err.into()),
        }
    }

    // -------------------------------------------------------------------------
    // Reference lookups
    // -------------------------------------------------------------------------

    /// State format, then existence in the tax table.
    fn lookup_tax(&self, state: &str) -> ServiceResult<StateTax> {
        validate_state_code(state)?;
        self.store.tax_rate(state).cloned().ok_or_else(|| {
            CoreError::TaxCodeViolation {
                state: state.to_string(),
            }
            .into()
        })
    }

    fn lookup_product(&self, product_type: &str) -> ServiceResult<Product> {
        self.store.product(product_type).cloned().ok_or_else(|| {
            CoreError::UnknownProduct {
                product_type: product_type.to_string(),
            }
            .into()
        })
    }

    // -------------------------------------------------------------------------
    // Bulk data
    // -------------------------------------------------------------------------

    /// Loads orders, products and taxes from disk.
    ///
    /// On failure the returned error is the store's own, kind and message
    /// intact, and the previously loaded data stays in place.
    pub fn import_all_data(&mut self) -> ServiceResult<()> {
        let result = self.store.import_all();

        self.persist(
            result,
            "ALL ORDER, PRODUCT AND TAX DATA IMPORTED INTO COLLECTIONS.",
            "ORDER, PRODUCT, AND TAX DATA IMPORTS FAILED",
        )
    }

    /// Writes one orders file per date.
    pub fn export_all_data(&mut self) -> ServiceResult<()> {
        let result = self.store.export_orders();
        self.persist(
            result,
            "ORDER DATA EXPORTED TO ORDER TEXT FILES BY DATE.",
            "ORDER DATA EXPORT FAILED",
        )
    }

    /// Writes every order into the backup file.
    pub fn export_backup_data(&mut self) -> ServiceResult<()> {
        let result = self.store.export_backup();
        self.persist(
            result,
            "ORDER DATA EXPORTED TO BACKUP DATA FILE.",
            "BACKUP EXPORT FAILED",
        )
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Every order placed for the date (`MM-DD-YYYY`), possibly none.
    pub fn orders_by_date(&mut self, date: &str) -> ServiceResult<Vec<Order>> {
        let parsed = match parse_order_date(date) {
            Ok(parsed) => parsed,
            Err(err) => {
                return self.reject(
                    "ATTEMPTED TO DISPLAY ORDERS WITH AN INVALID DATE.",
                    err.into(),
                )
            }
        };

        self.record(&format!("ORDERS DISPLAYED FOR DATE {date}"))?;
        Ok(self.store.orders_by_date(parsed))
    }

    /// Every stored order, by date then number.
    pub fn all_orders(&mut self) -> ServiceResult<Vec<Order>> {
        self.record("LIST OF ALL ORDERS RETRIEVED")?;
        Ok(self.store.all_orders())
    }

    /// The product catalog, by product type.
    pub fn products(&mut self) -> ServiceResult<Vec<Product>> {
        self.record("LIST OF ALL PRODUCTS RETRIEVED")?;
        Ok(self.store.products())
    }

    /// The tax table, by state code.
    pub fn tax_rates(&mut self) -> ServiceResult<Vec<StateTax>> {
        self.record("LIST OF ALL TAX RATES RETRIEVED")?;
        Ok(self.store.tax_rates())
    }

    // -------------------------------------------------------------------------
    // Create
    // -------------------------------------------------------------------------

    /// Validates a new order and prices it. The order is not stored yet.
    ///
    /// ## Validation Order
    /// ```text
    /// area → date format → date in future → name → state format
    ///      → state in tax table → product in catalog
    /// ```
    pub fn create_order(
        &mut self,
        date: &str,
        customer_name: &str,
        state: &str,
        product_type: &str,
        area: &str,
    ) -> ServiceResult<Order> {
        match self.build_new_order(date, customer_name, state, product_type, area) {
            Ok(order) => {
                self.record("ORDER INPUT VALIDATED, CREATING ORDER OBJECT FOR VERIFICATION.")?;
                Ok(order)
            }
            Err(err) => self.reject(&format!("ORDER CREATION REJECTED: {err}"), err),
        }
    }

    fn build_new_order(
        &self,
        date: &str,
        customer_name: &str,
        state: &str,
        product_type: &str,
        area: &str,
    ) -> ServiceResult<Order> {
        let area = Area::parse(area)?;
        let date = parse_order_date(date)?;
        ensure_future_date(date, (self.today)())?;
        validate_customer_name(customer_name)?;
        let tax = self.lookup_tax(state)?;
        let product = self.lookup_product(product_type)?;
        Ok(Order::new(date, customer_name, area, &product, &tax)?)
    }

    /// Stores a validated order and returns its new order number.
    ///
    /// The number is also written into `order`.
    pub fn submit_order(&mut self, order: &mut Order) -> ServiceResult<u32> {
        self.record("ORDER VERIFIED AND SUBMITTED")?;
        Ok(self.store.insert_order(order))
    }

    // -------------------------------------------------------------------------
    // Edit
    // -------------------------------------------------------------------------

    /// Finds the order placed on `date` under `customer_name`.
    pub fn order_to_edit(&mut self, date: &str, customer_name: &str) -> ServiceResult<Order> {
        let parsed = match parse_order_date(date)
            .and_then(|parsed| validate_customer_name(customer_name).map(|()| parsed))
        {
            Ok(parsed) => parsed,
            Err(err) => {
                let err = ServiceError::from(err);
                return self.reject(&format!("EDIT RETRIEVAL REJECTED: {err}"), err);
            }
        };

        match self.store.order_by_name(parsed, customer_name) {
            Some(order) => {
                self.record("ORDER OBJECT FOR EDIT EXISTS AND RETRIEVED.")?;
                Ok(order)
            }
            None => self.reject(
                "NO ORDER FOUND FOR EDIT.",
                ServiceError::NoSuchItem(format!(
                    "There is not an order on {date} under the name {customer_name}."
                )),
            ),
        }
    }

    /// Applies the supplied fields of `edit` to `order` and re-prices it.
    ///
    /// Nothing is changed unless every supplied field is valid and the order
    /// can be re-priced from the current product and tax rows. Costs are
    /// recalculated even when the edit supplies no fields. The order is not
    /// stored; pass it to [`change_order`](Self::change_order) for that.
    pub fn edit_order(&mut self, order: &mut Order, edit: &OrderEdit) -> ServiceResult<()> {
        match self.apply_edit(order, edit) {
            Ok(edited) => {
                *order = edited;
                self.record("FIELDS SET, COST VALUES RECALCULATED.")
            }
            Err(err) => self.reject(&format!("ORDER EDIT REJECTED: {err}"), err),
        }
    }

    /// The edited and re-priced copy of `order`.
    fn apply_edit(&self, order: &Order, edit: &OrderEdit) -> ServiceResult<Order> {
        let validated = self.validate_edit(edit)?;

        let mut edited = order.clone();
        if let Some(area) = validated.area {
            edited.area = area;
        }
        if let Some(state) = validated.state {
            edited.state = state;
        }
        if let Some(product_type) = validated.product_type {
            edited.product_type = product_type;
        }
        if let Some(customer_name) = validated.customer_name {
            edited.customer_name = customer_name;
        }

        self.store.recalculate_order(&mut edited)?;
        Ok(edited)
    }

    fn validate_edit(&self, edit: &OrderEdit) -> ServiceResult<ValidatedEdit> {
        let area = supplied(&edit.area).map(Area::parse).transpose()?;

        let customer_name = supplied(&edit.customer_name)
            .map(|name| validate_customer_name(name).map(|()| name.to_string()))
            .transpose()?;

        let state = supplied(&edit.state)
            .map(|state| self.lookup_tax(state).map(|tax| tax.state))
            .transpose()?;

        let product_type = supplied(&edit.product_type)
            .map(|product_type| self.lookup_product(product_type).map(|p| p.product_type))
            .transpose()?;

        Ok(ValidatedEdit {
            customer_name,
            state,
            product_type,
            area,
        })
    }

    /// Replaces the stored order that has the same date and number.
    pub fn change_order(&mut self, order: &Order) -> ServiceResult<()> {
        let result = self.store.update_order(order);
        self.persist(
            result,
            "EDITED ORDER ADDED BACK TO COLLECTION IN PLACE OF OLD ORDER.",
            "EDITED ORDER COULD NOT REPLACE OLD ORDER",
        )
    }

    // -------------------------------------------------------------------------
    // Remove
    // -------------------------------------------------------------------------

    /// Finds the order with `order_number` placed on `date`.
    pub fn order_to_remove(&mut self, date: &str, order_number: &str) -> ServiceResult<Order> {
        let (parsed, number) = match parse_order_date(date)
            .and_then(|parsed| parse_order_number(order_number).map(|number| (parsed, number)))
        {
            Ok(found) => found,
            Err(err) => {
                let err = ServiceError::from(err);
                return self.reject(&format!("REMOVAL RETRIEVAL REJECTED: {err}"), err);
            }
        };

        match self.store.order_by_number(parsed, number) {
            Some(order) => {
                self.record("ORDER OBJECT FOR REMOVAL EXISTS AND RETRIEVED.")?;
                Ok(order)
            }
            None => self.reject(
                "NO ORDER FOUND FOR REMOVAL.",
                ServiceError::NoSuchItem(format!(
                    "There is not an order on {date} with the order number {order_number}."
                )),
            ),
        }
    }

    /// Deletes exactly this order (same date and number) from the store.
    pub fn remove_order(&mut self, order: &Order) -> ServiceResult<()> {
        let result = self.store.remove_order(order).map(|_| ());
        self.persist(
            result,
            "ORDER OBJECT REMOVED FROM COLLECTION.",
            "ORDER REMOVAL FAILED",
        )
    }
}
