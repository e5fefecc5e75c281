//! Rule registration and snapshot publication.
//!
//! # Responsibilities
//! - Append explicit rules with an incrementing order
//! - Hold the sync-derived entry set (replaced wholesale)
//! - Rebuild the route table and publish it atomically
//!
//! # Design Decisions
//! - `add` compiles the pattern first; a parse error rejects the call and
//!   leaves the registry untouched
//! - Readers take `Arc` snapshots; a rebuild swaps the pointer and never
//!   disturbs a snapshot already handed out

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::matching::Matcher;
use crate::pattern::{CompiledPattern, PatternError};
use crate::registry::entry::{Provenance, RuleEntry, RuleObject};
use crate::registry::trie::RouteTable;

/// Ordered rule registry.
///
/// Created empty, populated additively during a build, discarded at the
/// end of it; no state persists across builds. Mutations only become
/// observable to matching and codegen after [`rebuild`](Self::rebuild)
/// (normally via [`sync`](crate::sync::sync)).
pub struct Registry {
    explicit: Vec<RuleEntry>,
    derived: Vec<RuleEntry>,
    next_order: u64,
    table: ArcSwap<RouteTable>,
}

impl Registry {
    /// Create an empty registry with an empty published table.
    pub fn new() -> Self {
        Self {
            explicit: Vec::new(),
            derived: Vec::new(),
            next_order: 0,
            table: ArcSwap::from_pointee(RouteTable::build(Vec::new())),
        }
    }

    /// Register a rule. Pattern parse failure rejects the registration
    /// without mutating any state.
    pub fn add(&mut self, pattern: &str, data: RuleObject) -> Result<(), PatternError> {
        let compiled = CompiledPattern::compile(pattern)?;
        tracing::debug!(pattern, order = self.next_order, "rule registered");
        self.explicit.push(RuleEntry {
            pattern: compiled,
            data,
            order: self.next_order,
            provenance: Provenance::Explicit,
        });
        self.next_order += 1;
        Ok(())
    }

    /// Replace the derived entry set wholesale.
    ///
    /// Orders are assigned deterministically above the current explicit
    /// maximum, so repeated syncs over an unchanged registry produce
    /// identical tables.
    pub(crate) fn set_derived(&mut self, rules: Vec<(CompiledPattern, RuleObject)>) {
        let base = self.next_order;
        self.derived = rules
            .into_iter()
            .enumerate()
            .map(|(index, (pattern, data))| RuleEntry {
                pattern,
                data,
                order: base + index as u64,
                provenance: Provenance::Derived,
            })
            .collect();
    }

    /// Explicit entries in registration order (sync scans these).
    pub(crate) fn explicit_entries(&self) -> &[RuleEntry] {
        &self.explicit
    }

    /// Recompile every entry into a fresh route table and publish it with
    /// a single atomic pointer swap. Idempotent and safe to call
    /// repeatedly; readers see the old complete table or the new one.
    pub fn rebuild(&self) {
        let mut entries = self.explicit.clone();
        entries.extend(self.derived.iter().cloned());
        let table = RouteTable::build(entries);
        tracing::debug!(entries = table.len(), "route table rebuilt");
        self.table.store(Arc::new(table));
    }

    /// The currently published snapshot.
    pub fn snapshot(&self) -> Arc<RouteTable> {
        self.table.load_full()
    }

    /// A matcher over the currently published snapshot.
    pub fn matcher(&self) -> Matcher {
        Matcher::new(self.snapshot())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
