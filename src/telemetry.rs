//! Structured logging setup.
//!
//! The library only emits `tracing` spans and events; nothing is printed unless the embedding
//! application installs a subscriber. [`init`] installs the default `fmt` subscriber for callers that
//! have none of their own.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a global `fmt` subscriber filtered by `RUST_LOG`, defaulting to [`DEFAULT_FILTER`].
///
/// Returns `false` if a global subscriber was already installed; calling this more than once is
/// harmless.
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with_target(false)
        .try_init()
        .is_ok()
}
