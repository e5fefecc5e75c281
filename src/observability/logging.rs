//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem for binaries
//! - Configure log level from the environment

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber. The level comes from `RUST_LOG`,
/// defaulting to info for this crate.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "route_rules=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
