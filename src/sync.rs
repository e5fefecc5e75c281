//! Payload sibling-route derivation.
//!
//! # Responsibilities
//! - Scan concrete routes for incremental/cache rules
//! - Re-derive their data-subresource sibling entries
//! - Trigger a registry rebuild so the effect becomes observable
//!
//! # Design Decisions
//! - Each pass replaces the previous derived set wholesale; two syncs with
//!   no registration in between leave the registry byte-identical
//! - Only the triggering fields are copied onto the sibling, nothing else
//! - Siblings are keyed and ordered by route for deterministic output

use std::collections::BTreeMap;

use crate::matching::{deep_merge, is_truthy};
use crate::pattern::CompiledPattern;
use crate::registry::{Registry, RuleObject};

/// Suffix appended to a route to address its data subresource.
pub const PAYLOAD_SUFFIX: &str = "/_payload.json";

/// Build mode for sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Production build: `isr` or `cache` trigger derivation.
    Build,
    /// Dev-like mode: a truthy `prerender` also triggers, and is carried
    /// onto the sibling.
    Dev,
}

/// Re-derive payload sibling entries and rebuild the route table.
///
/// For every concrete (fully literal) route whose rule data has truthy
/// `isr` or `cache` (or truthy `prerender` in [`SyncMode::Dev`]), a
/// sibling entry is registered at the route's payload path, carrying only
/// the triggering fields. Safe to invoke repeatedly.
pub fn sync(registry: &mut Registry, mode: SyncMode) {
    let mut siblings: BTreeMap<String, (CompiledPattern, RuleObject)> = BTreeMap::new();

    for entry in registry.explicit_entries() {
        if !entry.pattern.is_concrete() {
            continue;
        }
        let data = &entry.data;
        let triggered = data.get("isr").is_some_and(is_truthy)
            || data.get("cache").is_some_and(is_truthy)
            || (mode == SyncMode::Dev && data.get("prerender").is_some_and(is_truthy));
        if !triggered {
            continue;
        }

        let mut carried = RuleObject::new();
        for key in ["isr", "cache"] {
            if let Some(value) = data.get(key) {
                carried.insert(key.to_string(), value.clone());
            }
        }
        if mode == SyncMode::Dev {
            if let Some(value) = data.get("prerender") {
                carried.insert("prerender".to_string(), value.clone());
            }
        }

        let sibling = entry.pattern.join_literal(PAYLOAD_SUFFIX.trim_start_matches('/'));
        let slot = siblings
            .entry(sibling.raw().to_string())
            .or_insert_with(|| (sibling, RuleObject::new()));
        // Later entries for the same route override, matching tie-break order.
        deep_merge(&mut slot.1, &carried);
    }

    tracing::info!(derived = siblings.len(), ?mode, "payload routes synced");
    registry.set_derived(siblings.into_values().collect());
    registry.rebuild();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn registry(rules: &[(&str, Value)]) -> Registry {
        let mut registry = Registry::new();
        for (pattern, value) in rules {
            let data = match value.clone() {
                Value::Object(map) => map,
                other => panic!("expected an object, got {other}"),
            };
            registry.add(pattern, data).expect("pattern should compile");
        }
        registry
    }

    #[test]
    fn test_derives_sibling_for_isr_route() {
        let mut registry = registry(&[
            ("/blog/post", json!({ "isr": 60, "headers": { "a": 1 } })),
            ("/plain", json!({ "ssr": true })),
        ]);
        sync(&mut registry, SyncMode::Build);

        let matcher = registry.matcher();
        assert_eq!(
            Value::Object(matcher.resolve("/blog/post/_payload.json", None)),
            json!({ "isr": 60 })
        );
        assert!(matcher.resolve("/plain/_payload.json", None).is_empty());
    }

    #[test]
    fn test_wildcard_routes_are_not_scanned() {
        let mut registry = registry(&[("/blog/**", json!({ "isr": 60 }))]);
        sync(&mut registry, SyncMode::Build);

        // The catch-all itself still matches the payload path, but no
        // sibling entry was derived for it.
        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_prerender_triggers_only_in_dev() {
        let mut registry = registry(&[("/about", json!({ "prerender": true }))]);
        sync(&mut registry, SyncMode::Build);
        assert_eq!(registry.snapshot().len(), 1);

        sync(&mut registry, SyncMode::Dev);
        assert_eq!(registry.snapshot().len(), 2);
        assert_eq!(
            Value::Object(registry.matcher().resolve("/about/_payload.json", None)),
            json!({ "prerender": true })
        );
    }

    #[test]
    fn test_sync_replaces_previous_derived_entries() {
        let mut registry = registry(&[("/a", json!({ "cache": true }))]);
        sync(&mut registry, SyncMode::Build);
        sync(&mut registry, SyncMode::Build);
        assert_eq!(registry.snapshot().len(), 2);

        registry
            .add("/b", json!({ "cache": true }).as_object().cloned().expect("object"))
            .expect("pattern should compile");
        sync(&mut registry, SyncMode::Build);
        assert_eq!(registry.snapshot().len(), 4);
    }

    #[test]
    fn test_duplicate_routes_merge_into_one_sibling() {
        let mut registry = registry(&[
            ("/a", json!({ "isr": 30 })),
            ("/a", json!({ "isr": 60 })),
        ]);
        sync(&mut registry, SyncMode::Build);

        assert_eq!(registry.snapshot().len(), 3);
        assert_eq!(
            Value::Object(registry.matcher().resolve("/a/_payload.json", None)),
            json!({ "isr": 60 })
        );
    }
}
