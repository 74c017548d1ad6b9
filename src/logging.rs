// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Install the stderr `tracing` subscriber; `RUST_LOG` takes precedence over `default_level`.
///
/// Calling it twice is harmless: the second installation is ignored.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
