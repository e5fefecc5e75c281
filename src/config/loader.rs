//! Rules file loading and registration.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::config::schema::RulesConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::pattern::PatternError;
use crate::registry::Registry;

/// Error type for rules-file loading and registration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for the schema.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Semantic validation failed.
    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),

    /// A pattern was rejected at registration.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] PatternError),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate a layered rules file.
pub fn load_rules(path: &Path) -> Result<RulesConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: RulesConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Register every layer into the registry, in file order.
///
/// Rule values convert from TOML to JSON at this boundary; the registry
/// and everything downstream only ever see JSON-like rule objects.
pub fn register_layers(config: &RulesConfig, registry: &mut Registry) -> Result<(), ConfigError> {
    for layer in &config.layers {
        tracing::info!(layer = %layer.name, rules = layer.rules.len(), "applying rule layer");
        for (pattern, value) in &layer.rules {
            let Value::Object(data) = toml_to_json(value) else {
                return Err(ConfigError::Validation(vec![ValidationError::RuleNotTable {
                    layer: layer.name.clone(),
                    pattern: pattern.clone(),
                }]));
            };
            registry.add(pattern, data)?;
        }
    }
    Ok(())
}

fn toml_to_json(value: &toml::Value) -> Value {
    match value {
        toml::Value::String(text) => Value::String(text.clone()),
        toml::Value::Integer(number) => Value::from(*number),
        toml::Value::Float(number) => serde_json::Number::from_f64(*number)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(flag) => Value::Bool(*flag),
        toml::Value::Datetime(datetime) => Value::String(datetime.to_string()),
        toml::Value::Array(items) => Value::Array(items.iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .iter()
                .map(|(key, value)| (key.clone(), toml_to_json(value)))
                .collect(),
        ),
    }
}
