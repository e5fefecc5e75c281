//! Route Rule Resolution Engine
//!
//! A registry of URL path patterns, each bound to a partial configuration
//! object, that resolves the single effective deep-merged configuration
//! for any concrete request path, and can compile itself into a small,
//! self-contained matching function that reproduces identical results
//! without access to the live registry.
//!
//! # Architecture Overview
//!
//! ```text
//!   Build layers                 ┌────────────────────────────────────────┐
//!   ─ add(pattern, data) ───────▶│ registry   (entries, order, trie)      │
//!   ─ sync() ───────────────────▶│   ├─ pattern   (compile, specificity)  │
//!                                │   └─ atomic Arc<RouteTable> swap       │
//!                                └──────────────┬─────────────────────────┘
//!                                               │ snapshot
//!                      ┌────────────────────────┼───────────────────────┐
//!                      ▼                        ▼                       ▼
//!              ┌──────────────┐        ┌─────────────────┐      ┌──────────────┐
//!   request ──▶│  matching    │        │    codegen      │      │  config      │
//!   path       │ match_all /  │        │ IR → standalone │      │ layered TOML │
//!              │ resolve+merge│        │   JS matcher    │      │ → add()      │
//!              └──────┬───────┘        └────────┬────────┘      └──────────────┘
//!                     ▼                         ▼
//!              full RuleObject           build artifact for the
//!              (server-facing)           client runtime (manifest)
//! ```

// Core subsystems
pub mod codegen;
pub mod matching;
pub mod pattern;
pub mod registry;
pub mod sync;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use matching::Matcher;
pub use pattern::{CompiledPattern, PatternError};
pub use registry::{Registry, RuleEntry, RuleObject};
