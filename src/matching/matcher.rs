//! Path matching against a route table snapshot.
//!
//! # Responsibilities
//! - Collect every rule entry matching a concrete path
//! - Order matches by specificity, registration order breaking ties
//! - Fold matches into the single effective configuration
//!
//! # Design Decisions
//! - A matcher wraps an immutable snapshot: rebuilds published after
//!   construction are deliberately not visible through it
//! - No match is not an error; resolution yields an empty object

use std::sync::Arc;

use crate::matching::merge::merge_rules;
use crate::registry::{RouteTable, RuleEntry, RuleObject};

/// Read-side matcher over an immutable [`RouteTable`] snapshot.
///
/// Cheap to clone and safe to share across concurrent readers.
#[derive(Clone)]
pub struct Matcher {
    table: Arc<RouteTable>,
}

impl Matcher {
    pub(crate) fn new(table: Arc<RouteTable>) -> Self {
        Self { table }
    }

    /// The snapshot this matcher reads from.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Every entry matching `path`, most specific first; registration
    /// order (descending) breaks specificity ties, so a later-registered
    /// rule wins over an equally specific earlier one.
    ///
    /// `method` is reserved for per-verb rule scoping and currently
    /// ignored; callers pass `None`.
    pub fn match_all(&self, path: &str, method: Option<&str>) -> Vec<&RuleEntry> {
        let _ = method;
        let mut hits: Vec<&RuleEntry> = self
            .table
            .collect(path)
            .into_iter()
            .map(|index| &self.table.entries()[index])
            .collect();
        hits.sort_by(|a, b| {
            b.pattern
                .specificity()
                .cmp(&a.pattern.specificity())
                .then(b.order.cmp(&a.order))
        });
        tracing::trace!(path, matches = hits.len(), "matched rule entries");
        hits
    }

    /// The single effective configuration for `path`: every matching rule
    /// deep-merged, specific overriding general. All keys are retained;
    /// this is the server-facing result.
    pub fn resolve(&self, path: &str, method: Option<&str>) -> RuleObject {
        let matched = self.match_all(path, method);
        merge_rules(matched.iter().map(|entry| &entry.data))
    }
}
