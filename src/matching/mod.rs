//! Matching and merge subsystem.
//!
//! # Data Flow
//! ```text
//! Request path
//!     → matcher.rs (trie descent, specificity sort)
//!     → merge.rs (reverse fold: specific overrides general)
//!     → full RuleObject (server-facing, all keys)
//!         → manifest.rs (allow-list + normalization, client-facing)
//! ```
//!
//! # Design Decisions
//! - `match_all` orders most-specific-first; registration order breaks ties
//! - The precedence fold is a named, documented operation, not an
//!   array-ordering side effect
//! - The full result keeps unknown keys; only the compact manifest filters

pub mod manifest;
pub mod matcher;
pub mod merge;

pub use manifest::to_manifest;
pub use matcher::Matcher;
pub use merge::{deep_merge, merge_rules};

pub(crate) use manifest::is_truthy;
