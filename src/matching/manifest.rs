//! Compact client manifest derivation.
//!
//! # Responsibilities
//! - Reduce a merged rule object to the allow-listed client subset
//! - Normalize `redirect` and `appMiddleware` to their client shapes
//! - Coalesce `cache`/`isr` presence into the derived `payload` flag
//!
//! # Design Decisions
//! - Server-facing results are never filtered; only this client manifest is
//! - Truthiness follows the consuming runtime: false, 0, "" and null drop

use serde_json::Value;

use crate::registry::RuleObject;

/// Keys that survive into the client manifest.
const MANIFEST_KEYS: [&str; 4] = ["prerender", "redirect", "appMiddleware", "appLayout"];

/// Truthiness as the client runtime sees it.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|float| float != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Reduce a merged rule object to the compact client manifest.
///
/// `cache` and `isr` never reach the client; their presence collapses into
/// a single derived `payload: true`. Falsy allow-listed values are dropped
/// rather than shipped. Everything else is filtered out silently.
pub fn to_manifest(merged: &RuleObject) -> RuleObject {
    let mut manifest = RuleObject::new();

    let payload = merged.get("cache").is_some_and(is_truthy)
        || merged.get("isr").is_some_and(is_truthy);
    if payload {
        manifest.insert("payload".to_string(), Value::Bool(true));
    }

    for key in MANIFEST_KEYS {
        let Some(value) = merged.get(key) else {
            continue;
        };
        if !is_truthy(value) {
            continue;
        }
        let normalized = match key {
            "redirect" => normalize_redirect(value),
            "appMiddleware" => normalize_middleware(value),
            _ => value.clone(),
        };
        if normalized.is_null() {
            continue;
        }
        manifest.insert(key.to_string(), normalized);
    }

    manifest
}

/// A redirect rule may carry `{to, statusCode}`; the client only needs the
/// target.
fn normalize_redirect(value: &Value) -> Value {
    match value {
        Value::Object(rule) => rule.get("to").cloned().unwrap_or(Value::Null),
        other => other.clone(),
    }
}

/// Middleware rules accept a single name, a list of names, or an explicit
/// name → enabled map; the client always receives the map form.
fn normalize_middleware(value: &Value) -> Value {
    match value {
        Value::String(name) => {
            let mut map = RuleObject::new();
            map.insert(name.clone(), Value::Bool(true));
            Value::Object(map)
        }
        Value::Array(names) => {
            let mut map = RuleObject::new();
            for name in names {
                if let Value::String(name) = name {
                    map.insert(name.clone(), Value::Bool(true));
                }
            }
            Value::Object(map)
        }
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest(value: Value) -> Value {
        let merged = match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        };
        Value::Object(to_manifest(&merged))
    }

    #[test]
    fn test_allow_list_drops_unknown_keys() {
        let result = manifest(json!({
            "prerender": true,
            "ssr": false,
            "cors": true,
            "appLayout": "docs"
        }));
        assert_eq!(result, json!({ "prerender": true, "appLayout": "docs" }));
    }

    #[test]
    fn test_middleware_string_normalizes_to_map() {
        let result = manifest(json!({ "appMiddleware": "auth" }));
        assert_eq!(result, json!({ "appMiddleware": { "auth": true } }));
    }

    #[test]
    fn test_middleware_array_normalizes_to_map() {
        let result = manifest(json!({ "appMiddleware": ["a", "b"] }));
        assert_eq!(result, json!({ "appMiddleware": { "a": true, "b": true } }));
    }

    #[test]
    fn test_middleware_map_passes_through() {
        let result = manifest(json!({ "appMiddleware": { "auth": false } }));
        assert_eq!(result, json!({ "appMiddleware": { "auth": false } }));
    }

    #[test]
    fn test_redirect_object_collapses_to_target() {
        let result = manifest(json!({ "redirect": { "to": "/new", "statusCode": 301 } }));
        assert_eq!(result, json!({ "redirect": "/new" }));

        let result = manifest(json!({ "redirect": "/plain" }));
        assert_eq!(result, json!({ "redirect": "/plain" }));
    }

    #[test]
    fn test_payload_coalesces_cache_and_isr() {
        let result = manifest(json!({ "isr": 60 }));
        assert_eq!(result, json!({ "payload": true }));

        let result = manifest(json!({ "cache": { "maxAge": 60 } }));
        assert_eq!(result, json!({ "payload": true }));

        // Falsy cache does not trigger the flag.
        let result = manifest(json!({ "cache": false, "isr": 0 }));
        assert_eq!(result, json!({}));
    }

    #[test]
    fn test_falsy_allow_listed_values_drop() {
        let result = manifest(json!({ "prerender": false, "redirect": "" }));
        assert_eq!(result, json!({}));
    }
}
