//! Logging setup for the RANDAO accessor.
//!
//! Logs are written to stderr so that stdout only carries the command output.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::ObservabilityConfig;

/// Initialize the global tracing subscriber.
#[allow(clippy::missing_errors_doc)]
pub fn init_observability(config: &ObservabilityConfig) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true);

    Registry::default()
        .with(EnvFilter::new(config.level().as_str().to_lowercase()))
        .with(fmt_layer)
        .try_init()
        .context("Failed to set global default subscriber")
}
