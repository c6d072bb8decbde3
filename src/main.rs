// Entry point: parse the three paths, run the pipeline once, then print a
// short summary and a preview of the report.
mod cli;

use clap::Parser;
use cli::Cli;
use purchase_analytics::logging::init_logging;
use purchase_analytics::output::preview_table_rows;
use purchase_analytics::util::format_int;
use purchase_analytics::{run, PipelineConfig};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_logging() {
        eprintln!("error: failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let config = PipelineConfig::from(cli);
    let (report, summary) = match run(&config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "Processing dataset... ({} order lines, {} products of which {} distinct, {} departments)",
        format_int(summary.order_rows),
        format_int(summary.product_rows),
        format_int(summary.indexed_products),
        format_int(summary.departments)
    );
    if summary.skipped_rows > 0 {
        println!(
            "Note: {} order lines skipped due to an unrecognized reordered flag.",
            format_int(summary.skipped_rows)
        );
    }
    println!();
    preview_table_rows(&report, 5);
    println!("(Full table exported to {})", config.output_path.display());
}
