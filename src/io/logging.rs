//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";
/// Default filter when quiet output is requested
pub const QUIET_FILTER: &str = "warn";

/// Filter used for the given verbosity, honoring `RUST_LOG` when set
pub fn env_filter(quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if quiet { QUIET_FILTER } else { DEFAULT_FILTER })
    })
}

/// Install the global fmt subscriber writing compact lines to stderr
///
/// Calling this more than once keeps the first subscriber.
pub fn init_tracing(quiet: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(quiet))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
