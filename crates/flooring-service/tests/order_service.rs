//! End-to-end tests for the order service against a scratch data directory.

use chrono::NaiveDate;
use std::cell::Cell;
use std::fs;
use tempfile::TempDir;

use flooring_core::{CoreResult, Order, Product, StateTax};
use flooring_service::{OrderEdit, OrderService, ServiceError};
use flooring_store::{
    FlatFileStore, MemoryAuditLog, OrderStore, StoreConfig, StoreError, StoreResult,
};

// =============================================================================
// Fixtures
// =============================================================================

const PRODUCTS: &str = "ProductType,CostPerSquareFoot,LaborCostPerSquareFoot
Carpet,2.25,2.10
Laminate,1.75,2.10
Tile,3.50,4.15
Wood,5.15,4.75
";

const TAXES: &str = "State,StateName,TaxRate
CA,California,25.00
KY,Kentucky,6.00
TX,Texas,8.25
WA,Washington,9.25
";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// [`FlatFileStore`] that counts how often it is called.
struct CountingStore {
    inner: FlatFileStore,
    calls: Cell<usize>,
    recalculations: Cell<usize>,
}

impl CountingStore {
    fn touch(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl OrderStore for CountingStore {
    fn import_all(&mut self) -> StoreResult<()> {
        self.touch();
        self.inner.import_all()
    }

    fn export_orders(&self) -> StoreResult<()> {
        self.touch();
        self.inner.export_orders()
    }

    fn export_backup(&self) -> StoreResult<()> {
        self.touch();
        self.inner.export_backup()
    }

    fn orders_by_date(&self, date: NaiveDate) -> Vec<Order> {
        self.touch();
        self.inner.orders_by_date(date)
    }

    fn all_orders(&self) -> Vec<Order> {
        self.touch();
        self.inner.all_orders()
    }

    fn products(&self) -> Vec<Product> {
        self.touch();
        self.inner.products()
    }

    fn tax_rates(&self) -> Vec<StateTax> {
        self.touch();
        self.inner.tax_rates()
    }

    fn product(&self, product_type: &str) -> Option<&Product> {
        self.touch();
        self.inner.product(product_type)
    }

    fn tax_rate(&self, state: &str) -> Option<&StateTax> {
        self.touch();
        self.inner.tax_rate(state)
    }

    fn order_by_name(&self, date: NaiveDate, customer_name: &str) -> Option<Order> {
        self.touch();
        self.inner.order_by_name(date, customer_name)
    }

    fn order_by_number(&self, date: NaiveDate, order_number: u32) -> Option<Order> {
        self.touch();
        self.inner.order_by_number(date, order_number)
    }

    fn insert_order(&mut self, order: &mut Order) -> u32 {
        self.touch();
        self.inner.insert_order(order)
    }

    fn update_order(&mut self, order: &Order) -> StoreResult<()> {
        self.touch();
        self.inner.update_order(order)
    }

    fn remove_order(&mut self, order: &Order) -> StoreResult<Order> {
        self.touch();
        self.inner.remove_order(order)
    }

    fn recalculate_order(&self, order: &mut Order) -> CoreResult<()> {
        self.touch();
        self.recalculations.set(self.recalculations.get() + 1);
        self.inner.recalculate_order(order)
    }
}

type TestService = OrderService<CountingStore, MemoryAuditLog>;

fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Products.txt"), PRODUCTS).unwrap();
    fs::write(dir.path().join("Taxes.txt"), TAXES).unwrap();
    dir
}

fn service_for(dir: &TempDir) -> TestService {
    let store = CountingStore {
        inner: FlatFileStore::new(StoreConfig::new(dir.path())),
        calls: Cell::new(0),
        recalculations: Cell::new(0),
    };
    let mut service = OrderService::new(store, MemoryAuditLog::new()).with_today(today);
    service.import_all_data().unwrap();
    service
}

fn store_calls(service: &TestService) -> usize {
    service.store().calls.get()
}

/// Runs a step that must fail and returns the one audit entry it wrote.
fn only_new_entry(service: &mut TestService, step: impl FnOnce(&mut TestService) -> bool) -> String {
    let before = service.audit().entries().len();
    assert!(step(service), "step should fail");
    let entries = &service.audit().entries()[before..];
    assert_eq!(entries.len(), 1, "{entries:?}");
    entries[0].clone()
}

/// Creates and submits an order, returning the stored copy.
fn place(service: &mut TestService, date: &str, name: &str, product: &str) -> Order {
    let mut order = service
        .create_order(date, name, "TX", product, "100")
        .unwrap();
    service.submit_order(&mut order).unwrap();
    order
}

// =============================================================================
// Date Rules
// =============================================================================

#[test]
fn malformed_dates_are_invalid_input_and_never_reach_the_store() {
    let dir = data_dir();
    let mut service = service_for(&dir);
    let before = store_calls(&service);

    for date in ["2099-12-31", "12/31/2099", "13-01-2099", "12-32-2099", "1-1-2099", "", "02-30-2099"] {
        let err = service
            .create_order(date, "Jane Doe", "TX", "Carpet", "249.0")
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)), "{date}: {err:?}");

        let err = service.orders_by_date(date).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)), "{date}: {err:?}");
    }

    assert_eq!(store_calls(&service), before);
    assert!(service
        .audit()
        .contains("ATTEMPTED TO DISPLAY ORDERS WITH AN INVALID DATE."));
}

#[test]
fn dates_not_strictly_in_the_future_have_already_passed() {
    let dir = data_dir();
    let mut service = service_for(&dir);

    for date in ["10-18-2026", "10-17-2026", "01-01-2020"] {
        let err = service
            .create_order(date, "Jane Doe", "TX", "Carpet", "249.0")
            .unwrap_err();
        assert!(matches!(err, ServiceError::DateAlreadyPassed(_)), "{date}: {err:?}");
    }

    assert!(service
        .create_order("10-19-2026", "Jane Doe", "TX", "Carpet", "249.0")
        .is_ok());
}

// =============================================================================
// Validation Order
// =============================================================================

#[test]
fn area_is_checked_before_date() {
    let dir = data_dir();
    let mut service = service_for(&dir);

    let err = service
        .create_order("01-01-2020", "Jane Doe", "TX", "Carpet", "-5")
        .unwrap_err();
    match err {
        ServiceError::InvalidInput(message) => assert!(message.contains("area"), "{message}"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn past_date_is_reported_before_a_bad_name() {
    let dir = data_dir();
    let mut service = service_for(&dir);

    let err = service
        .create_order("01-01-2020", "R2-D2", "TX", "Carpet", "100")
        .unwrap_err();
    assert!(matches!(err, ServiceError::DateAlreadyPassed(_)));
}

#[test]
fn unknown_state_is_a_tax_code_violation_not_invalid_input() {
    let dir = data_dir();
    let mut service = service_for(&dir);

    let err = service
        .create_order("12-31-2099", "Jane Doe", "ZZ", "Carpet", "100")
        .unwrap_err();
    assert!(matches!(err, ServiceError::TaxCodeViolation(_)));

    let mut order = place(&mut service, "12-31-2099", "Jane Doe", "Carpet");
    let err = service
        .edit_order(&mut order, &OrderEdit::new().state("ZZ"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::TaxCodeViolation(_)));
}

#[test]
fn malformed_fields_are_invalid_input() {
    let dir = data_dir();
    let mut service = service_for(&dir);

    let cases = [
        ("", "TX", "Carpet", "100"),
        ("Jane 2", "TX", "Carpet", "100"),
        ("Jane Doe", "tx", "Carpet", "100"),
        ("Jane Doe", "T", "Carpet", "100"),
        ("Jane Doe", "TX", "Marble", "100"),
        ("Jane Doe", "TX", "Carpet", "0"),
        ("Jane Doe", "TX", "Carpet", "ten"),
    ];

    for (name, state, product, area) in cases {
        let err = service
            .create_order("12-31-2099", name, state, product, area)
            .unwrap_err();
        assert!(
            matches!(err, ServiceError::InvalidInput(_)),
            "{name}/{state}/{product}/{area}: {err:?}"
        );
    }
}

#[test]
fn every_rejection_is_audited_once() {
    let dir = data_dir();
    let mut service = service_for(&dir);
    let before = service.audit().entries().len();

    let _ = service.create_order("12-31-2099", "Jane Doe", "ZZ", "Carpet", "100");

    let entries = &service.audit().entries()[before..];
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("ORDER CREATION REJECTED"));
}

#[test]
fn each_failed_workflow_step_writes_one_audit_entry() {
    let dir = data_dir();
    let mut service = service_for(&dir);
    let mut order = place(&mut service, "12-31-2099", "Jane Doe", "Carpet");
    let unstored = service
        .create_order("12-31-2099", "John Roe", "TX", "Carpet", "100")
        .unwrap();

    let mut copy = order.clone();
    let entry = only_new_entry(&mut service, |s| {
        s.edit_order(&mut copy, &OrderEdit::new().state("ZZ")).is_err()
    });
    assert!(entry.starts_with("ORDER EDIT REJECTED"), "{entry}");

    let entry = only_new_entry(&mut service, |s| s.order_to_remove("12-31-2099", "x1").is_err());
    assert!(entry.starts_with("REMOVAL RETRIEVAL REJECTED"), "{entry}");

    let entry = only_new_entry(&mut service, |s| s.order_to_remove("12-31-2099", "99").is_err());
    assert_eq!(entry, "NO ORDER FOUND FOR REMOVAL.");

    let entry = only_new_entry(&mut service, |s| s.order_to_edit("12-31-2099", "Nobody").is_err());
    assert_eq!(entry, "NO ORDER FOUND FOR EDIT.");

    let entry = only_new_entry(&mut service, |s| s.change_order(&unstored).is_err());
    assert!(entry.starts_with("EDITED ORDER COULD NOT REPLACE OLD ORDER"), "{entry}");

    service
        .edit_order(&mut order, &OrderEdit::new().customer_name("Jane Smith"))
        .unwrap();
    assert_eq!(order.customer_name, "Jane Smith");
}

#[test]
fn successful_retrievals_are_audited() {
    let dir = data_dir();
    let mut service = service_for(&dir);
    let order = place(&mut service, "12-31-2099", "Jane Doe", "Carpet");

    service.order_to_edit("12-31-2099", "Jane Doe").unwrap();
    service
        .order_to_remove("12-31-2099", &order.order_number.to_string())
        .unwrap();

    assert!(service.audit().contains("ORDER OBJECT FOR EDIT EXISTS AND RETRIEVED."));
    assert!(service.audit().contains("ORDER OBJECT FOR REMOVAL EXISTS AND RETRIEVED."));
}

// =============================================================================
// Create / Submit
// =============================================================================

#[test]
fn jane_doe_carpet_in_texas() {
    let dir = data_dir();
    let mut service = service_for(&dir);

    let order = service
        .create_order("12-31-2099", "Jane Doe", "TX", "Carpet", "249.0")
        .unwrap();

    assert_eq!(order.area.to_string(), "249.0");
    assert_eq!(order.order_number, Order::UNASSIGNED);
    assert_eq!(order.material_cost.cents(), 56_025);
    assert_eq!(order.labor_cost.cents(), 52_290);
    assert_eq!(order.tax.cents(), 8_936);
    // 249.0 × (2.25 + 2.10) × 1.0825 = 1172.509875
    assert_eq!(order.total.cents(), 117_251);
    assert!(service.store().all_orders().is_empty());
}

#[test]
fn oversized_area_is_rejected_instead_of_capped() {
    let dir = data_dir();
    let mut service = service_for(&dir);

    let err = service
        .create_order("12-31-2099", "Jane Doe", "TX", "Carpet", "100000000000000000000")
        .unwrap_err();

    match err {
        ServiceError::InvalidInput(message) => assert!(message.contains("too large"), "{message}"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    assert!(service.audit().contains("ORDER CREATION REJECTED"));
}

#[test]
fn submitted_order_round_trips_through_edit_lookup() {
    let dir = data_dir();
    let mut service = service_for(&dir);

    let mut order = service
        .create_order("12-31-2099", "Jane Doe", "TX", "Carpet", "249.0")
        .unwrap();
    let number = service.submit_order(&mut order).unwrap();

    assert_eq!(number, 1);
    assert_eq!(order.order_number, number);
    assert_eq!(service.order_to_edit("12-31-2099", "Jane Doe").unwrap(), order);
    assert!(service.audit().contains("ORDER VERIFIED AND SUBMITTED"));
}

// =============================================================================
// Edit
// =============================================================================

#[test]
fn missing_order_for_edit_is_no_such_item() {
    let dir = data_dir();
    let mut service = service_for(&dir);

    let err = service.order_to_edit("01-01-2020", "Nobody").unwrap_err();
    assert!(matches!(err, ServiceError::NoSuchItem(_)));
    assert_eq!(
        err.to_string(),
        "There is not an order on 01-01-2020 under the name Nobody."
    );
    assert!(service.audit().contains("NO ORDER FOUND FOR EDIT."));
}

#[test]
fn empty_edit_changes_nothing_but_still_recalculates() {
    let dir = data_dir();
    let mut service = service_for(&dir);
    let mut order = place(&mut service, "12-31-2099", "Jane Doe", "Carpet");
    let original = order.clone();
    let before = service.store().recalculations.get();

    service.edit_order(&mut order, &OrderEdit::new()).unwrap();
    service
        .edit_order(
            &mut order,
            &OrderEdit::new().customer_name("").state("  ").product_type("").area(""),
        )
        .unwrap();

    assert_eq!(order, original);
    assert_eq!(service.store().recalculations.get(), before + 2);
}

#[test]
fn edit_overwrites_only_supplied_fields_and_reprices() {
    let dir = data_dir();
    let mut service = service_for(&dir);
    let mut order = place(&mut service, "12-31-2099", "Jane Doe", "Carpet");

    service
        .edit_order(&mut order, &OrderEdit::new().state("WA").area("200"))
        .unwrap();

    assert_eq!(order.customer_name, "Jane Doe");
    assert_eq!(order.product_type, "Carpet");
    assert_eq!(order.state, "WA");
    assert_eq!(order.tax_rate.bps(), 925);
    // 200 × 4.35 = 870.00; × 9.25% = 80.475 → 80.48
    assert_eq!(order.tax.cents(), 8_048);
    assert_eq!(order.total.cents(), 95_048);

    // Not stored until change_order
    let stored = service.order_to_edit("12-31-2099", "Jane Doe").unwrap();
    assert_eq!(stored.state, "TX");

    service.change_order(&order).unwrap();
    let stored = service.order_to_edit("12-31-2099", "Jane Doe").unwrap();
    assert_eq!(stored, order);
}

#[test]
fn failed_edit_applies_nothing() {
    let dir = data_dir();
    let mut service = service_for(&dir);
    let mut order = place(&mut service, "12-31-2099", "Jane Doe", "Carpet");
    let original = order.clone();

    let err = service
        .edit_order(
            &mut order,
            &OrderEdit::new().customer_name("Jane Smith").state("WA").product_type("Marble"),
        )
        .unwrap_err();

    assert!(matches!(err, ServiceError::InvalidInput(_)));
    assert_eq!(order, original);
}

#[test]
fn product_change_reprices_at_the_new_rates() {
    let dir = data_dir();
    let mut service = service_for(&dir);
    let mut order = place(&mut service, "12-31-2099", "Jane Doe", "Carpet");

    service
        .edit_order(&mut order, &OrderEdit::new().product_type("Tile"))
        .unwrap();

    assert_eq!(order.product_type, "Tile");
    assert_eq!(order.cost_per_sqft.cents(), 350);
    assert_eq!(order.labor_cost_per_sqft.cents(), 415);
    // 100 × (3.50 + 4.15) = 765.00; × 8.25% = 63.1125 → 63.11
    assert_eq!(order.total.cents(), 82_811);
}

#[test]
fn edit_of_an_order_whose_product_was_dropped_applies_nothing() {
    let dir = data_dir();
    let mut service = service_for(&dir);
    place(&mut service, "12-31-2099", "Jane Doe", "Wood");
    service.export_all_data().unwrap();

    fs::write(
        dir.path().join("Products.txt"),
        "ProductType,CostPerSquareFoot,LaborCostPerSquareFoot\nCarpet,2.25,2.10\n",
    )
    .unwrap();
    let mut service = service_for(&dir);
    let mut order = service.order_to_edit("12-31-2099", "Jane Doe").unwrap();
    let original = order.clone();

    let err = service
        .edit_order(&mut order, &OrderEdit::new().customer_name("Bob").area("1"))
        .unwrap_err();

    assert!(matches!(err, ServiceError::InvalidInput(_)), "{err:?}");
    assert_eq!(order, original);
    assert!(service.audit().contains("ORDER EDIT REJECTED"));
    assert!(!service.audit().contains("FIELDS SET"));
}

#[test]
fn changing_an_unstored_order_is_a_persistence_failure() {
    let dir = data_dir();
    let mut service = service_for(&dir);
    let order = service
        .create_order("12-31-2099", "Jane Doe", "TX", "Carpet", "100")
        .unwrap();

    let err = service.change_order(&order).unwrap_err();
    assert!(matches!(err, ServiceError::Persistence(StoreError::NotFound { .. })));
}

// =============================================================================
// Remove
// =============================================================================

#[test]
fn remove_deletes_exactly_the_retrieved_order() {
    let dir = data_dir();
    let mut service = service_for(&dir);
    let first = place(&mut service, "12-31-2099", "Jane Doe", "Carpet");
    let second = place(&mut service, "12-31-2099", "John Roe", "Tile");

    let target = service
        .order_to_remove("12-31-2099", &second.order_number.to_string())
        .unwrap();
    service.remove_order(&target).unwrap();

    assert_eq!(service.orders_by_date("12-31-2099").unwrap(), vec![first]);
    let err = service
        .order_to_remove("12-31-2099", &second.order_number.to_string())
        .unwrap_err();
    assert!(matches!(err, ServiceError::NoSuchItem(_)));
}

#[test]
fn order_number_must_be_digits() {
    let dir = data_dir();
    let mut service = service_for(&dir);

    for number in ["", "one", "-1", "1.0"] {
        let err = service.order_to_remove("12-31-2099", number).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)), "{number}: {err:?}");
    }
}

// =============================================================================
// Import / Export
// =============================================================================

#[test]
fn import_failure_is_audited_and_keeps_the_store_error() {
    let dir = data_dir();
    fs::remove_file(dir.path().join("Taxes.txt")).unwrap();

    let store = FlatFileStore::new(StoreConfig::new(dir.path()));
    let mut service = OrderService::new(store, MemoryAuditLog::new()).with_today(today);

    let err = service.import_all_data().unwrap_err();
    assert!(matches!(err, ServiceError::Persistence(StoreError::Io { .. })));
    assert!(err.to_string().contains("Taxes.txt"));
    assert!(service
        .audit()
        .contains("ORDER, PRODUCT, AND TAX DATA IMPORTS FAILED"));
}

#[test]
fn exported_orders_are_read_back_on_next_import() {
    let dir = data_dir();
    let mut service = service_for(&dir);
    place(&mut service, "12-31-2099", "Acme, Inc.", "Wood");
    place(&mut service, "06-01-2030", "Jane Doe", "Laminate");

    service.export_all_data().unwrap();
    service.export_backup_data().unwrap();
    let exported = service.all_orders().unwrap();

    let mut reloaded = service_for(&dir);
    assert_eq!(reloaded.all_orders().unwrap(), exported);
    assert_eq!(reloaded.products().unwrap().len(), 4);
    assert_eq!(reloaded.tax_rates().unwrap()[0].state, "CA");

    let backup = fs::read_to_string(dir.path().join("Backup").join("DataExport.txt")).unwrap();
    assert_eq!(backup.lines().count(), 3);
    assert!(backup.contains("Acme, Inc."));
}
