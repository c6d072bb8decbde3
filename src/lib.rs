//! Per-department order summary built from order line items and a product
//! to department mapping.
//!
//! The pipeline loads both tables, joins order lines to departments through
//! `product_id`, counts orders and first orders per department and writes the
//! report sorted by department id.

pub mod error;
pub mod join;
pub mod loader;
pub mod logging;
pub mod output;
pub mod reports;
pub mod types;
pub mod util;

use std::path::PathBuf;
use tracing::info;

pub use error::{PipelineError, Result};
pub use types::{DepartmentAggregate, RunSummary};

use types::{ORDER_PRODUCT_COLUMNS, PRODUCT_COLUMNS};

/// Input and output locations for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub order_products_path: PathBuf,
    pub products_path: PathBuf,
    pub output_path: PathBuf,
}

/// Run the whole pipeline once and return the sorted report.
///
/// The output file is only created when every stage succeeds.
pub fn run(config: &PipelineConfig) -> Result<(Vec<DepartmentAggregate>, RunSummary)> {
    info!(path = %config.order_products_path.display(), "loading order lines");
    let orders = loader::load_table(&config.order_products_path, &ORDER_PRODUCT_COLUMNS)?;
    info!(path = %config.products_path.display(), "loading products");
    let products = loader::load_table(&config.products_path, &PRODUCT_COLUMNS)?;

    let index = join::build_index(&products)?;
    let joined = join::join(&orders, &index)?;
    info!(rows = joined.len(), "joined order lines to departments");

    let counts = reports::create_report(&joined)?;
    let report = reports::sort_by_department(counts.departments);
    output::write_report(&config.output_path, &report)?;
    info!(path = %config.output_path.display(), departments = report.len(), "report written");

    let summary = RunSummary {
        order_rows: orders.row_count(),
        product_rows: products.row_count(),
        indexed_products: index.len(),
        departments: report.len(),
        skipped_rows: counts.skipped_rows,
    };
    Ok((report, summary))
}
