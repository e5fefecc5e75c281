//! Route pattern subsystem.
//!
//! # Data Flow
//! ```text
//! Pattern string ("/admin/:id/**")
//!     → compiler.rs (split on '/', classify segments)
//!     → CompiledPattern (immutable once built)
//!     → specificity.rs (total order for match precedence)
//! ```
//!
//! # Design Decisions
//! - Patterns compiled once at registration, immutable afterwards
//! - No regex; every segment check is an exact comparison
//! - Malformed patterns fail at compile time, never at match time
//! - Specificity is pattern-intrinsic, so a single global sort of the
//!   rule set is consistent with any per-path ordering

pub mod compiler;
pub mod specificity;

pub use compiler::CompiledPattern;
pub use compiler::PatternError;
pub use compiler::Segment;
pub use specificity::{MatchKind, Specificity};
