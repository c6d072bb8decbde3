//! Diagnostics go to stderr through `tracing`, leaving stdout for the console
//! summary. `RUST_LOG` overrides the default `warn` level.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
