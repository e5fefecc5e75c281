//! Rule entries and rule objects.

use serde_json::{Map, Value};

use crate::pattern::CompiledPattern;

/// Partial configuration attached to a route pattern.
///
/// The engine is key-agnostic: values are arbitrary JSON-like data, and
/// only the handful of fields the client manifest normalizes are ever
/// interpreted. The sorted-key map keeps merge and codegen output
/// deterministic.
pub type RuleObject = Map<String, Value>;

/// Where a rule entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Registered by the caller.
    Explicit,
    /// Derived by sync (payload sibling routes); replaced wholesale on
    /// every sync pass.
    Derived,
}

/// A registered rule: pattern, data and registration sequence number.
#[derive(Debug, Clone)]
pub struct RuleEntry {
    /// The compiled route pattern.
    pub pattern: CompiledPattern,

    /// The rule data, merged into match results.
    pub data: RuleObject,

    /// Registration sequence number. The deterministic tie-break among
    /// equally specific patterns: later registration wins.
    pub order: u64,

    /// Explicit or sync-derived.
    pub provenance: Provenance,
}
