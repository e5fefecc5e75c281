//! Deep-merge semantics for rule objects.
//!
//! # Responsibilities
//! - Merge nested objects key-by-key; replace scalars and arrays wholesale
//! - Provide the named precedence fold used by resolution and codegen
//!
//! # Design Decisions
//! - "Specific overrides general" is the documented contract of
//!   `merge_rules`, not a side effect of list ordering at call sites

use serde_json::Value;

use crate::registry::RuleObject;

/// Deep-merge `overlay` into `base`.
///
/// Nested object values merge key-by-key recursively; scalar and array
/// values from `overlay` replace the base value wholesale.
pub fn deep_merge(base: &mut RuleObject, overlay: &RuleObject) {
    for (key, incoming) in overlay {
        match (base.get_mut(key), incoming) {
            (Some(Value::Object(existing)), Value::Object(next)) => deep_merge(existing, next),
            _ => {
                base.insert(key.clone(), incoming.clone());
            }
        }
    }
}

/// Fold a most-specific-first match list into one effective object.
///
/// Precedence contract: the list is reversed to least-specific-first and
/// deep-merged left to right, so every more specific object overrides the
/// accumulator per key. The net effect is "specific overrides general"
/// even though the physical fold direction is reversed from the ordering
/// produced by matching.
pub fn merge_rules<'a, I>(most_specific_first: I) -> RuleObject
where
    I: IntoIterator<Item = &'a RuleObject>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut merged = RuleObject::new();
    for rules in most_specific_first.into_iter().rev() {
        deep_merge(&mut merged, rules);
    }
    merged
}
