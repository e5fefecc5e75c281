//! Matcher program IR.
//!
//! # Responsibilities
//! - Snapshot a route table into match arms plus a literal data section
//! - Interpret the IR directly for equivalence testing
//!
//! # Design Decisions
//! - Literals are caller-serialized text, embedded verbatim by emission;
//!   the IR never re-encodes them
//! - `evaluate` parses literals as JSON, which holds for any serializer
//!   that emits JSON-compatible expressions (both stock serializers do)

use serde_json::Value;
use thiserror::Error;

use crate::matching::merge_rules;
use crate::pattern::CompiledPattern;
use crate::registry::{RouteTable, RuleEntry, RuleObject};

/// Errors from compiling or evaluating a matcher program.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The caller-supplied serialize callback failed. Codegen performs no
    /// recovery; this is a build-time configuration error for the caller.
    #[error("serialize callback failed for pattern '{pattern}': {message}")]
    Serialize { pattern: String, message: String },

    /// An embedded literal was not valid JSON. Only `evaluate` can raise
    /// this; emission embeds literals verbatim.
    #[error("embedded literal for pattern '{pattern}' is not valid JSON")]
    InvalidLiteral {
        pattern: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Compilation options.
pub struct CompileOptions<'a> {
    /// Preserve every matching entry instead of folding to the single
    /// most-specific merged result.
    pub match_all: bool,

    /// Invoked once per entry; must return a literal expression for the
    /// entry's data in the target language. Failures propagate to the
    /// caller of compilation.
    pub serialize: &'a dyn Fn(&RuleObject) -> Result<String, String>,
}

/// One arm of the generated matcher: a pattern plus the serialized
/// literal text of its rule data.
#[derive(Debug, Clone)]
pub struct MatchArm {
    pub(crate) pattern: CompiledPattern,
    pub(crate) literal: String,
}

/// A standalone matcher program: match arms pre-sorted most-specific-first
/// plus their literal data section, emitted as text in a single step.
#[derive(Debug, Clone)]
pub struct MatcherProgram {
    pub(crate) arms: Vec<MatchArm>,
    pub(crate) match_all: bool,
}

impl MatcherProgram {
    /// Compile a route-table snapshot into a program.
    pub fn compile(
        table: &RouteTable,
        options: &CompileOptions<'_>,
    ) -> Result<Self, CodegenError> {
        let mut entries: Vec<&RuleEntry> = table.entries().iter().collect();
        entries.sort_by(|a, b| {
            b.pattern
                .specificity()
                .cmp(&a.pattern.specificity())
                .then(b.order.cmp(&a.order))
        });

        let mut arms = Vec::with_capacity(entries.len());
        for entry in entries {
            let literal =
                (options.serialize)(&entry.data).map_err(|message| CodegenError::Serialize {
                    pattern: entry.pattern.raw().to_string(),
                    message,
                })?;
            arms.push(MatchArm {
                pattern: entry.pattern.clone(),
                literal,
            });
        }

        tracing::debug!(
            arms = arms.len(),
            match_all = options.match_all,
            "matcher program compiled"
        );
        Ok(Self {
            arms,
            match_all: options.match_all,
        })
    }

    /// Number of match arms.
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    /// Whether the program has no arms.
    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Interpret the program directly, with the same matching and fold
    /// semantics the emitted function carries.
    ///
    /// With `match_all` the result is the array of matching literals,
    /// most specific first; otherwise the single folded object.
    pub fn evaluate(&self, path: &str) -> Result<Value, CodegenError> {
        let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();

        let mut matched = Vec::new();
        for arm in &self.arms {
            if arm.pattern.matches(&parts) {
                let value: Value = serde_json::from_str(&arm.literal).map_err(|source| {
                    CodegenError::InvalidLiteral {
                        pattern: arm.pattern.raw().to_string(),
                        source,
                    }
                })?;
                matched.push(value);
            }
        }

        if self.match_all {
            return Ok(Value::Array(matched));
        }

        let objects: Vec<RuleObject> = matched
            .into_iter()
            .filter_map(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect();
        Ok(Value::Object(merge_rules(objects.iter())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::identity_serialize;
    use crate::registry::Registry;
    use serde_json::json;

    fn registry(rules: &[(&str, Value)]) -> Registry {
        let mut registry = Registry::new();
        for (pattern, value) in rules {
            let data = match value.clone() {
                Value::Object(map) => map,
                other => panic!("expected an object, got {other}"),
            };
            registry.add(pattern, data).expect("pattern should compile");
        }
        registry.rebuild();
        registry
    }

    #[test]
    fn test_evaluate_matches_direct_resolution() {
        let registry = registry(&[
            ("/**", json!({ "ssr": true, "headers": { "a": 1 } })),
            ("/admin/**", json!({ "ssr": false })),
            ("/admin/x", json!({ "headers": { "b": 2 } })),
        ]);
        let snapshot = registry.snapshot();
        let program = MatcherProgram::compile(
            &snapshot,
            &CompileOptions {
                match_all: false,
                serialize: &identity_serialize,
            },
        )
        .expect("compile should succeed");

        for path in ["/admin/x", "/admin/y", "/other", "/"] {
            let direct = registry.matcher().resolve(path, None);
            let evaluated = program.evaluate(path).expect("evaluate should succeed");
            assert_eq!(evaluated, Value::Object(direct), "path {path}");
        }
    }

    #[test]
    fn test_match_all_preserves_every_entry() {
        let registry = registry(&[
            ("/**", json!({ "a": 1 })),
            ("/x", json!({ "b": 2 })),
        ]);
        let snapshot = registry.snapshot();
        let program = MatcherProgram::compile(
            &snapshot,
            &CompileOptions {
                match_all: true,
                serialize: &identity_serialize,
            },
        )
        .expect("compile should succeed");

        let evaluated = program.evaluate("/x").expect("evaluate should succeed");
        assert_eq!(evaluated, json!([{ "b": 2 }, { "a": 1 }]));
    }

    #[test]
    fn test_empty_table_evaluates_to_empty_object() {
        let registry = Registry::new();
        let snapshot = registry.snapshot();
        let program = MatcherProgram::compile(
            &snapshot,
            &CompileOptions {
                match_all: false,
                serialize: &identity_serialize,
            },
        )
        .expect("compile should succeed");

        assert!(program.is_empty());
        assert_eq!(
            program.evaluate("/anything").expect("evaluate should succeed"),
            json!({})
        );
    }

    #[test]
    fn test_serialize_failure_propagates() {
        let registry = registry(&[("/x", json!({ "a": 1 }))]);
        let snapshot = registry.snapshot();
        let failing: &dyn Fn(&RuleObject) -> Result<String, String> =
            &|_| Err("boom".to_string());

        let err = MatcherProgram::compile(
            &snapshot,
            &CompileOptions {
                match_all: false,
                serialize: failing,
            },
        )
        .expect_err("compile should fail");

        match err {
            CodegenError::Serialize { pattern, message } => {
                assert_eq!(pattern, "/x");
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
