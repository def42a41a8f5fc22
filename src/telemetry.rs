//! Tracing subscriber setup for the server binary.

use tracing_subscriber::{EnvFilter, prelude::*};

/// Filter used when `RUST_LOG` is unset: dependencies at `warn`, Workboard at `info`.
pub const DEFAULT_DIRECTIVE: &str = "warn,workboard=info";

/// Errors raised while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    /// A global subscriber was already installed.
    #[error("tracing subscriber already installed: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the subscriber filter from a `RUST_LOG`-style directive.
///
/// # Errors
///
/// Returns the parse failure when `directive` is not valid `EnvFilter` syntax.
pub fn env_filter(
    directive: Option<&str>,
) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    EnvFilter::try_new(directive.unwrap_or(DEFAULT_DIRECTIVE))
}

/// Installs a formatted subscriber filtered by [`env_filter`].
///
/// # Errors
///
/// Returns [`TelemetryError`] when `directive` does not parse or a
/// subscriber is already installed.
pub fn init(directive: Option<&str>) -> Result<(), TelemetryError> {
    let filter = env_filter(directive)?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(filter))
        .try_init()?;
    Ok(())
}
