//! Rules configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every pattern compiles before anything is registered
//! - Validate layer identity (non-empty, unique names)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RulesConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the registry

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RulesConfig;
use crate::pattern::CompiledPattern;

/// A single semantic validation failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A layer without a name cannot be referenced in diagnostics.
    #[error("layer {index} has an empty name")]
    EmptyLayerName { index: usize },

    /// Two layers share a name.
    #[error("duplicate layer name '{name}'")]
    DuplicateLayerName { name: String },

    /// A route pattern failed to compile.
    #[error("layer '{layer}': pattern '{pattern}' is invalid: {message}")]
    InvalidPattern {
        layer: String,
        pattern: String,
        message: String,
    },

    /// Rule values must be tables (objects), not scalars or arrays.
    #[error("layer '{layer}': rule for '{pattern}' must be a table")]
    RuleNotTable { layer: String, pattern: String },
}

/// Validate a rules config. Returns every error found.
pub fn validate_config(config: &RulesConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, layer) in config.layers.iter().enumerate() {
        if layer.name.is_empty() {
            errors.push(ValidationError::EmptyLayerName { index });
        } else if !seen.insert(layer.name.clone()) {
            errors.push(ValidationError::DuplicateLayerName {
                name: layer.name.clone(),
            });
        }

        for (pattern, value) in &layer.rules {
            if let Err(error) = CompiledPattern::compile(pattern) {
                errors.push(ValidationError::InvalidPattern {
                    layer: layer.name.clone(),
                    pattern: pattern.clone(),
                    message: error.to_string(),
                });
            }
            if !value.is_table() {
                errors.push(ValidationError::RuleNotTable {
                    layer: layer.name.clone(),
                    pattern: pattern.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
