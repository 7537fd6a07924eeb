//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for listings and JSON.
///
/// `RUST_LOG` wins over the config file; `--verbose` raises the fallback
/// level to `debug`.
pub fn init(config: &LogConfig, verbose: bool) {
    let fallback = if verbose {
        "debug"
    } else {
        config.filter.as_deref().unwrap_or("info")
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
