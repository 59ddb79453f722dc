//! Tracing setup for applications and tests.
//!
//! Shadow composition logs at `trace` level and metric changes at `debug`,
//! so `RUST_LOG=umbra_components=trace` shows every band that is built.

use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVES: &str = "warn,umbra_ui=info,umbra_components=info";

/// The filter [`init_tracing`] installs: `RUST_LOG` when it parses, otherwise
/// [`DEFAULT_DIRECTIVES`].
pub fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Installs a global compact `tracing` subscriber using [`default_filter`].
///
/// Calling this more than once, or after the host installed its own
/// subscriber, does nothing.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_target(true)
        .with_env_filter(default_filter())
        .try_init();
}
