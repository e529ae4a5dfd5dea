//! Plain-text rendering of orders and reference data.

use flooring_core::{Order, Product, StateTax};

/// Multi-line summary of one order.
pub fn order_summary(order: &Order) -> String {
    let number = if order.is_submitted() {
        order.order_number.to_string()
    } else {
        "(unsubmitted)".to_string()
    };

    format!(
        "Order {number} for {date}\n\
         \x20 Customer:       {customer}\n\
         \x20 State:          {state} ({rate})\n\
         \x20 Product:        {product}\n\
         \x20 Area:           {area} sq ft\n\
         \x20 Rates:          {material_rate} material / {labor_rate} labor per sq ft\n\
         \x20 Material cost:  {material}\n\
         \x20 Labor cost:     {labor}\n\
         \x20 Tax:            {tax}\n\
         \x20 Total:          {total}",
        date = order.date_string(),
        customer = order.customer_name,
        state = order.state,
        rate = order.tax_rate,
        product = order.product_type,
        area = order.area,
        material_rate = order.cost_per_sqft,
        labor_rate = order.labor_cost_per_sqft,
        material = order.material_cost,
        labor = order.labor_cost,
        tax = order.tax,
        total = order.total,
    )
}

/// One line per product.
pub fn product_table(products: &[Product]) -> String {
    let header = format!("{:<12} {:>10} {:>10}", "Product", "Material", "Labor");
    let rows = products.iter().map(|product| {
        format!(
            "{:<12} {:>10} {:>10}",
            product.product_type,
            product.cost_per_sqft.to_string(),
            product.labor_cost_per_sqft.to_string()
        )
    });
    std::iter::once(header).chain(rows).collect::<Vec<_>>().join("\n")
}

/// One line per state.
pub fn tax_table(taxes: &[StateTax]) -> String {
    let header = format!("{:<6} {:<16} {:>8}", "State", "Name", "Rate");
    let rows = taxes.iter().map(|tax| {
        format!(
            "{:<6} {:<16} {:>8}",
            tax.state,
            tax.state_name,
            tax.rate.to_string()
        )
    });
    std::iter::once(header).chain(rows).collect::<Vec<_>>().join("\n")
}
