//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (registration, rebuild, sync, codegen)
//!
//! Consumers:
//!     → stdout via the fmt layer, filtered by RUST_LOG
//! ```
//!
//! # Design Decisions
//! - Structured fields (pattern, counts, layer names) over message text
//! - The library only emits; subscriber setup is owned by binaries

pub mod logging;

pub use logging::init_logging;
