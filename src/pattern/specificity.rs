//! Pattern specificity ordering.
//!
//! # Responsibilities
//! - Rank patterns that match the same path
//! - Guarantee a deterministic, total order (registration order breaks
//!   the remaining ties elsewhere)
//!
//! # Design Decisions
//! - The key is pattern-intrinsic: kind, literal count, depth. Every
//!   non-catch-all pattern matching a given path spans the same number of
//!   segments, so "more literals" is equivalent to "fewer wildcards"
//! - Derived `Ord` compares fields lexicographically, which is exactly
//!   the precedence contract

/// How a pattern can match a path, ranked least to most specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchKind {
    /// The empty pattern: matches every path.
    Root,
    /// Ends in `**`.
    CatchAll,
    /// Contains `:param` segments but no catch-all.
    Dynamic,
    /// Literal segments only.
    Static,
}

/// Total specificity order for compiled patterns.
///
/// For patterns matching the same path this realises: a full literal match
/// beats a match with fewer wildcard segments, which beats a param match,
/// which beats a catch-all, which beats the root pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity {
    kind: MatchKind,
    literals: u32,
    depth: u32,
}

impl Specificity {
    pub(crate) fn new(kind: MatchKind, literals: u32, depth: u32) -> Self {
        Self {
            kind,
            literals,
            depth,
        }
    }

    /// The match kind component of the key.
    pub fn kind(&self) -> MatchKind {
        self.kind
    }
}
