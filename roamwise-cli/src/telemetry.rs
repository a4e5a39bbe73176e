//! Log output for the `roamwise` binary.
//!
//! Library crates log through the `log` facade; the subscriber installed
//! here forwards those records to stderr, filtered by `RUST_LOG`.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

const DEFAULT_FILTER: &str = "warn";

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The fallback filter directive could not be parsed.
    #[error("invalid log filter {value:?}: {source}")]
    Filter {
        /// The rejected directive.
        value: &'static str,
        /// Parser error from `tracing-subscriber`.
        #[source]
        source: ParseError,
    },
    /// A global subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Install a stderr subscriber honouring `RUST_LOG`, defaulting to `warn`.
///
/// # Errors
/// Returns [`TelemetryError`] when the subscriber cannot be installed.
pub fn init_logging() -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .map_err(|source| TelemetryError::Filter {
            value: DEFAULT_FILTER,
            source,
        })?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
