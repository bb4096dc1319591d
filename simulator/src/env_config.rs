//! Process environment setup shared by the binaries.
//!
//! The only environment variable read is `RUST_LOG`, which controls
//! diagnostics. Simulation parameters come from [`crate::constants`].

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset: only warnings and errors.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global tracing subscriber, writing to stderr.
///
/// stdout is reserved for the report. Tolerates an already-installed
/// subscriber.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok(); // May fail if already initialized
}
