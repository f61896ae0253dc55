//! `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::{Error, Result};

/// Builds the filter: `RUST_LOG` when set, otherwise the configured directive.
fn build_env_filter(configured: &str) -> Result<EnvFilter> {
    build_env_filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok(), configured)
}

/// An unset or unparsable environment directive falls back to `configured`.
fn build_env_filter_from(from_env: Option<String>, configured: &str) -> Result<EnvFilter> {
    if let Some(filter) = from_env.and_then(|raw| EnvFilter::try_new(raw).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(configured)
        .map_err(|e| Error::Logging(format!("filter \"{configured}\": {e}")))
}

/// Installs a global fmt subscriber writing to stderr.
///
/// Stdout stays free for machine-readable CLI output.
///
/// # Errors
///
/// Returns [`Error::Logging`] if the filter is malformed or a global
/// subscriber is already installed.
pub fn init_tracing(configured_filter: &str) -> Result<()> {
    let env_filter = build_env_filter(configured_filter)?;
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
