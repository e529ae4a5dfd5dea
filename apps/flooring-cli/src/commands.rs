//! # Subcommands
//!
//! Each subcommand is one order-service workflow. Commands that change
//! orders end by exporting, so the order files on disk always match what
//! the command reported.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  list     orders_by_date                                                │
//! │  add      create_order ─► submit_order ─► export_all_data               │
//! │  edit     order_to_edit ─► edit_order ─► change_order ─► export         │
//! │  remove   order_to_remove ─► remove_order ─► export_all_data            │
//! │  products products, tax_rates                                           │
//! │  backup   export_backup_data                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::Subcommand;
use tracing::info;

use flooring_service::{OrderEdit, OrderService, ServiceResult};
use flooring_store::{AuditLog, OrderStore};

use crate::display;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every order for a date (MM-DD-YYYY)
    List { date: String },

    /// Place a new order
    Add {
        /// Order date, MM-DD-YYYY, after today
        date: String,
        name: String,
        /// Two-letter state code
        state: String,
        product: String,
        /// Area in square feet
        area: String,

        /// Validate and price the order without saving it
        #[arg(long)]
        dry_run: bool,
    },

    /// Change an existing order, found by date and customer name
    Edit {
        date: String,
        name: String,

        #[arg(long, value_name = "NAME")]
        new_name: Option<String>,

        #[arg(long)]
        state: Option<String>,

        #[arg(long)]
        product: Option<String>,

        #[arg(long)]
        area: Option<String>,
    },

    /// Delete an order, found by date and order number
    Remove { date: String, order_number: String },

    /// Show the product catalog and tax table
    Products,

    /// Write every order into the backup file
    Backup,
}

/// Runs `command` and returns what to print.
pub fn run<S: OrderStore, A: AuditLog>(
    service: &mut OrderService<S, A>,
    command: Command,
) -> ServiceResult<String> {
    match command {
        Command::List { date } => {
            let orders = service.orders_by_date(&date)?;
            if orders.is_empty() {
                return Ok(format!("No orders for {date}."));
            }
            Ok(orders
                .iter()
                .map(display::order_summary)
                .collect::<Vec<_>>()
                .join("\n\n"))
        }

        Command::Add {
            date,
            name,
            state,
            product,
            area,
            dry_run,
        } => {
            let mut order = service.create_order(&date, &name, &state, &product, &area)?;
            if dry_run {
                return Ok(display::order_summary(&order));
            }

            let number = service.submit_order(&mut order)?;
            service.export_all_data()?;
            info!(order_number = number, date = %date, "Order placed");
            Ok(display::order_summary(&order))
        }

        Command::Edit {
            date,
            name,
            new_name,
            state,
            product,
            area,
        } => {
            let mut order = service.order_to_edit(&date, &name)?;
            let edit = OrderEdit {
                customer_name: new_name,
                state,
                product_type: product,
                area,
            };

            service.edit_order(&mut order, &edit)?;
            service.change_order(&order)?;
            service.export_all_data()?;
            info!(order_number = order.order_number, date = %date, "Order edited");
            Ok(display::order_summary(&order))
        }

        Command::Remove { date, order_number } => {
            let order = service.order_to_remove(&date, &order_number)?;
            service.remove_order(&order)?;
            service.export_all_data()?;
            info!(order_number = order.order_number, date = %date, "Order removed");
            Ok(format!(
                "Removed order {} for {}.",
                order.order_number, order.customer_name
            ))
        }

        Command::Products => {
            let products = service.products()?;
            let taxes = service.tax_rates()?;
            Ok(format!(
                "{}\n\n{}",
                display::product_table(&products),
                display::tax_table(&taxes)
            ))
        }

        Command::Backup => {
            service.export_backup_data()?;
            Ok("Backup written.".to_string())
        }
    }
}
