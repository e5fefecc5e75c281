//! Matcher compilation subsystem.
//!
//! # Data Flow
//! ```text
//! RouteTable snapshot
//!     → ir.rs (MatcherProgram: match arms + serialized literal section)
//!     → emit.rs (single textual emission step → standalone JS function)
//!
//! Equivalence checks interpret the IR directly (MatcherProgram::evaluate)
//! instead of round-tripping through a JS engine.
//! ```
//!
//! # Design Decisions
//! - The caller's `serialize` callback runs once per entry at compile time;
//!   its failures propagate untouched
//! - Arms are pre-sorted most-specific-first; specificity is
//!   pattern-intrinsic, so the global order is valid for every path
//! - The emitted function carries no reference to live registry state

pub mod emit;
pub mod ir;

pub use ir::{CodegenError, CompileOptions, MatchArm, MatcherProgram};

use crate::matching::to_manifest;
use crate::registry::{RouteTable, RuleObject};

/// Compile a snapshot and emit the standalone matcher source in one step.
pub fn compile_to_string(
    table: &RouteTable,
    options: &CompileOptions<'_>,
) -> Result<String, CodegenError> {
    Ok(MatcherProgram::compile(table, options)?.emit())
}

/// The stock client-manifest serializer: compact-normalizes the rule
/// object and renders it as a JSON literal.
pub fn manifest_serialize(data: &RuleObject) -> Result<String, String> {
    serde_json::to_string(&to_manifest(data)).map_err(|error| error.to_string())
}

/// Identity serializer: the full rule object as a JSON literal, no
/// filtering. Useful for server-side artifacts and equivalence tests.
pub fn identity_serialize(data: &RuleObject) -> Result<String, String> {
    serde_json::to_string(data).map_err(|error| error.to_string())
}
