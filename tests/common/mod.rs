//! Shared utilities for integration tests.

use route_rules::registry::{Registry, RuleObject};
use serde_json::Value;

/// Convert a `json!` object literal into a rule object.
pub fn rule(value: Value) -> RuleObject {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

/// Build a rebuilt registry from `(pattern, data)` pairs.
pub fn registry_from(rules: &[(&str, Value)]) -> Registry {
    let mut registry = Registry::new();
    for (pattern, value) in rules {
        registry
            .add(pattern, rule(value.clone()))
            .expect("pattern should compile");
    }
    registry.rebuild();
    registry
}
