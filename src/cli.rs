use std::path::PathBuf;

use clap::Parser;
use purchase_analytics::PipelineConfig;

#[derive(Parser)]
#[command(
    name = "purchase_analytics",
    version,
    about = "Summarize orders and first orders per department"
)]
pub struct Cli {
    /// Order line items CSV (order_id, product_id, reordered).
    #[arg(value_name = "ORDER_PRODUCTS")]
    pub order_products: PathBuf,

    /// Products CSV (product_id, department_id).
    #[arg(value_name = "PRODUCTS")]
    pub products: PathBuf,

    /// Where to write the department report.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

impl From<Cli> for PipelineConfig {
    fn from(cli: Cli) -> Self {
        Self {
            order_products_path: cli.order_products,
            products_path: cli.products,
            output_path: cli.output,
        }
    }
}
