//! Textual emission of matcher programs.
//!
//! # Responsibilities
//! - Render a [`MatcherProgram`] as a standalone JavaScript function
//!
//! # Design Decisions
//! - Segments are encoded as JSON: a string is a literal, `0` a param,
//!   `1` a catch-all, and a `null` arm table is the root pattern
//! - Data literals are spliced in verbatim; the serialize callback owns
//!   their syntax
//! - The function is an IIFE with no free references, embeddable as-is in
//!   a generated module

use crate::codegen::ir::{MatchArm, MatcherProgram};
use crate::pattern::Segment;

impl MatcherProgram {
    /// Emit the standalone matcher source.
    ///
    /// The result evaluates to a function `path => rules` (or
    /// `path => rules[]` when the program preserves all matches) that
    /// reproduces live resolution over the embedded data.
    pub fn emit(&self) -> String {
        let mut source = String::new();
        source.push_str("(() => {\n");
        source.push_str("  const arms = [\n");
        for arm in &self.arms {
            source.push_str("    [");
            source.push_str(&encode_segments(arm));
            source.push_str(", ");
            source.push_str(&arm.literal);
            source.push_str("],\n");
        }
        source.push_str("  ];\n");
        source.push_str(MATCH_HELPERS);
        if self.match_all {
            source.push_str(RETURN_MATCH_ALL);
        } else {
            source.push_str(RETURN_RESOLVED);
        }
        source.push_str("})()\n");
        source
    }
}

/// Encode an arm's segment table. `null` marks the root pattern.
fn encode_segments(arm: &MatchArm) -> String {
    if arm.pattern.is_root() {
        return "null".to_string();
    }
    let parts: Vec<String> = arm
        .pattern
        .segments()
        .iter()
        .map(|segment| match segment {
            Segment::Literal(text) => {
                serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string())
            }
            Segment::Param(_) => "0".to_string(),
            Segment::CatchAll => "1".to_string(),
        })
        .collect();
    format!("[{}]", parts.join(", "))
}

const MATCH_HELPERS: &str = r#"  const matches = (segs, parts) => {
    if (segs === null) { return true; }
    for (let i = 0; i < segs.length; i++) {
      const seg = segs[i];
      if (seg === 1) { return true; }
      if (i >= parts.length) { return false; }
      if (seg !== 0 && seg !== parts[i]) { return false; }
    }
    return parts.length === segs.length;
  };
  const isObj = (v) => v !== null && typeof v === "object" && !Array.isArray(v);
  const merge = (base, overlay) => {
    const out = { ...base };
    for (const key of Object.keys(overlay)) {
      out[key] = isObj(out[key]) && isObj(overlay[key])
        ? merge(out[key], overlay[key])
        : overlay[key];
    }
    return out;
  };
  const collect = (path) => {
    const parts = path.split("/").filter(Boolean);
    const matched = [];
    for (const [segs, data] of arms) {
      if (matches(segs, parts)) { matched.push(data); }
    }
    return matched;
  };
"#;

const RETURN_MATCH_ALL: &str = r#"  return (path) => collect(path);
"#;

// Arms are ordered most specific first; folding back-to-front lets the
// specific entries override the general ones.
const RETURN_RESOLVED: &str = r#"  return (path) => {
    const matched = collect(path);
    let resolved = {};
    for (let i = matched.length - 1; i >= 0; i--) {
      resolved = merge(resolved, matched[i]);
    }
    return resolved;
  };
"#;

#[cfg(test)]
mod tests {
    use crate::codegen::{compile_to_string, identity_serialize, CompileOptions};
    use crate::registry::Registry;
    use serde_json::json;

    fn registry(rules: &[(&str, serde_json::Value)]) -> Registry {
        let mut registry = Registry::new();
        for (pattern, value) in rules {
            let data = match value.clone() {
                serde_json::Value::Object(map) => map,
                other => panic!("expected an object, got {other}"),
            };
            registry.add(pattern, data).expect("pattern should compile");
        }
        registry.rebuild();
        registry
    }

    #[test]
    fn test_emit_embeds_segment_tables_and_literals() {
        let registry = registry(&[
            ("", json!({ "global": true })),
            ("/admin/:id/**", json!({ "ssr": false })),
        ]);
        let source = compile_to_string(
            &registry.snapshot(),
            &CompileOptions {
                match_all: false,
                serialize: &identity_serialize,
            },
        )
        .expect("compile should succeed");

        assert!(source.contains(r#"[["admin", 0, 1], {"ssr":false}]"#));
        assert!(source.contains(r#"[null, {"global":true}]"#));
        assert!(source.contains("return parts.length === segs.length;"));
    }

    #[test]
    fn test_emit_is_deterministic() {
        let build = || {
            let registry = registry(&[
                ("/**", json!({ "a": 1 })),
                ("/x", json!({ "b": 2 })),
            ]);
            compile_to_string(
                &registry.snapshot(),
                &CompileOptions {
                    match_all: false,
                    serialize: &identity_serialize,
                },
            )
            .expect("compile should succeed")
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_empty_registry_emits_constant_empty_result() {
        let registry = Registry::new();
        let source = compile_to_string(
            &registry.snapshot(),
            &CompileOptions {
                match_all: false,
                serialize: &identity_serialize,
            },
        )
        .expect("compile should succeed");

        assert!(source.contains("const arms = [\n  ];"));
        assert!(source.contains("let resolved = {};"));
    }

    #[test]
    fn test_escapes_segment_text() {
        let registry = registry(&[("/a\"b", json!({ "x": 1 }))]);
        let source = compile_to_string(
            &registry.snapshot(),
            &CompileOptions {
                match_all: false,
                serialize: &identity_serialize,
            },
        )
        .expect("compile should succeed");
        assert!(source.contains(r#"[["a\"b"], {"x":1}]"#));
    }
}
