use tracing_subscriber::{EnvFilter, fmt};

use crate::shell::config::DEFAULT_LOG_FILTER;

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
