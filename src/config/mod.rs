//! Rules configuration subsystem.
//!
//! # Data Flow
//! ```text
//! rules file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, all errors reported)
//!     → RulesConfig (validated, immutable)
//!     → loader.rs register_layers → Registry.add, layer by layer
//! ```
//!
//! # Design Decisions
//! - Layers apply in file order; later layers register later and so win
//!   specificity ties
//! - Validation separates syntactic (serde) from semantic checks
//! - Rule values stay TOML until registration, then convert to JSON

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_rules, register_layers, ConfigError};
pub use schema::{LayerConfig, RulesConfig};
pub use validation::{validate_config, ValidationError};
