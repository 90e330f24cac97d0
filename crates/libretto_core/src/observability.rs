//! Tracing subscriber initialization.

use libretto_error::{ConfigError, ConfigErrorKind};
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a human-readable `fmt` subscriber filtered by `RUST_LOG`
/// (default `info`).
///
/// Returns an error instead of panicking when a global subscriber is
/// already installed.
pub fn init_tracing() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .try_init()
        .map_err(|e| ConfigError::new(ConfigErrorKind::Subscriber(e.to_string())))
}

/// Install a JSON-lines subscriber filtered by `RUST_LOG` (default `info`).
///
/// Step telemetry fields (pipeline, step, approximate tokens, params) come
/// out as structured keys.
pub fn init_json_tracing() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter())
        .try_init()
        .map_err(|e| ConfigError::new(ConfigErrorKind::Subscriber(e.to_string())))
}
