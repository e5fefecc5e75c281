//! Rules file schema definitions.
//!
//! This module defines the layered rules file structure. All types derive
//! Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root of a layered rules file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    /// Configuration layers, applied in file order. Later layers register
    /// later, so their rules win specificity ties against earlier layers.
    pub layers: Vec<LayerConfig>,
}

/// One configuration layer: a named group of route rules.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LayerConfig {
    /// Layer identifier for logging and diagnostics.
    pub name: String,

    /// Route pattern → rule table. Rule values are free-form; the engine
    /// is key-agnostic.
    pub rules: BTreeMap<String, toml::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_layered_file() {
        let config: RulesConfig = toml::from_str(
            r#"
            [[layers]]
            name = "base"
            [layers.rules."/**"]
            ssr = true

            [[layers]]
            name = "app"
            [layers.rules."/admin/**"]
            ssr = false
            appMiddleware = ["auth"]
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.layers.len(), 2);
        assert_eq!(config.layers[0].name, "base");
        assert!(config.layers[1].rules.contains_key("/admin/**"));
    }

    #[test]
    fn test_defaults_allow_empty_file() {
        let config: RulesConfig = toml::from_str("").expect("empty config should parse");
        assert!(config.layers.is_empty());
    }
}
