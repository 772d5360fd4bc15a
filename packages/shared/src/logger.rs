//! Tracing subscriber bootstrap.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the given binary name
/// (with `-` mapped to `_` so it matches the crate target) is filtered at
/// `default_level`, with `tower_http` kept at `debug` for request traces.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let target = bin_name.replace('-', "_");
    let directives = format!("{target}={default_level},tower_http=debug");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directives));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::debug!("tracing initialized (default filter: {})", directives);
}
