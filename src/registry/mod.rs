//! Rule registry subsystem.
//!
//! # Data Flow
//! ```text
//! Registry.add(pattern, data)        (build layers, in application order)
//!     → entry.rs (RuleEntry with registration order)
//!     → Registry.rebuild()
//!     → trie.rs (RouteTable: literal-segment trie + param/catch-all branches)
//!     → atomic swap of Arc<RouteTable>
//!     → readers (Matcher, Compiler) hold immutable snapshots
//! ```
//!
//! # Design Decisions
//! - Writers are serialized by the calling build pipeline; there is no lock
//! - `rebuild()` publishes a complete table or nothing; readers never see
//!   a partially built trie
//! - Lookup cost is bounded by path depth, not by rule count
//! - Derived (sync-generated) entries are tracked separately and replaced
//!   wholesale, never accumulated

pub mod entry;
pub mod store;
pub mod trie;

pub use entry::{Provenance, RuleEntry, RuleObject};
pub use store::Registry;
pub use trie::RouteTable;
