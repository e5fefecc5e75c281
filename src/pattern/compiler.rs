//! Route pattern parsing.
//!
//! # Responsibilities
//! - Split pattern strings on `/` and classify each segment
//! - Reject malformed patterns with the offending segment index
//! - Expose segment-level matching for the codegen interpreter
//!
//! # Design Decisions
//! - The empty pattern compiles to a root pattern matching every path
//!   (global/middleware-style rules)
//! - `"/"` is distinct from `""`: a zero-segment static pattern matching
//!   only the root path
//! - A catch-all matches zero or more trailing segments, so `/docs/**`
//!   also matches `/docs` itself

use thiserror::Error;

use crate::pattern::specificity::{MatchKind, Specificity};

/// A single parsed segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Exact text, e.g. `admin` in `/admin/users`.
    Literal(String),
    /// Named parameter (`:id`), matching exactly one path segment.
    /// The captured value is not used by this engine, but the position
    /// must parse correctly.
    Param(String),
    /// Catch-all (`**`), matching zero or more trailing segments.
    CatchAll,
}

/// Errors raised while parsing a route pattern.
///
/// These are fatal at registration time: the registering caller gets the
/// offending pattern and segment index, and registry state is untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// `**` is only valid as the final segment.
    #[error("catch-all must be the final segment in pattern '{pattern}' (segment {index})")]
    CatchAllNotLast { pattern: String, index: usize },

    /// A `:` segment with no parameter name after it.
    #[error("empty parameter name in pattern '{pattern}' (segment {index})")]
    EmptyParamName { pattern: String, index: usize },
}

/// An immutable, parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    raw: String,
    segments: Vec<Segment>,
    root: bool,
}

impl CompiledPattern {
    /// Parse a pattern string. Empty segments (`//`) are ignored.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Ok(Self {
                raw: String::new(),
                segments: Vec::new(),
                root: true,
            });
        }

        let parts: Vec<&str> = pattern.split('/').filter(|part| !part.is_empty()).collect();
        let mut segments = Vec::with_capacity(parts.len());

        for (index, part) in parts.iter().enumerate() {
            let segment = if *part == "**" {
                if index + 1 != parts.len() {
                    return Err(PatternError::CatchAllNotLast {
                        pattern: pattern.to_string(),
                        index,
                    });
                }
                Segment::CatchAll
            } else if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::EmptyParamName {
                        pattern: pattern.to_string(),
                        index,
                    });
                }
                Segment::Param(name.to_string())
            } else {
                Segment::Literal((*part).to_string())
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
            root: false,
        })
    }

    /// The original pattern text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The parsed segments. Empty for the root pattern and for `"/"`.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether this is the empty/root pattern that matches every path.
    pub fn is_root(&self) -> bool {
        self.root
    }

    /// Whether the final segment is a catch-all.
    pub fn has_catch_all(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::CatchAll))
    }

    /// Concrete patterns name exactly one path: literal segments only.
    pub fn is_concrete(&self) -> bool {
        !self.root
            && self
                .segments
                .iter()
                .all(|segment| matches!(segment, Segment::Literal(_)))
    }

    /// Specificity key for match precedence.
    pub fn specificity(&self) -> Specificity {
        let kind = if self.root {
            MatchKind::Root
        } else if self.has_catch_all() {
            MatchKind::CatchAll
        } else if self
            .segments
            .iter()
            .any(|segment| matches!(segment, Segment::Param(_)))
        {
            MatchKind::Dynamic
        } else {
            MatchKind::Static
        };

        let literals = self
            .segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Literal(_)))
            .count() as u32;

        Specificity::new(kind, literals, self.segments.len() as u32)
    }

    /// Whether this pattern matches the given path segments.
    ///
    /// Live matching goes through the registry trie; this segment walk is
    /// used by the codegen interpreter and by derived-route scanning.
    pub fn matches(&self, parts: &[&str]) -> bool {
        if self.root {
            return true;
        }
        for (index, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::CatchAll => return true,
                Segment::Literal(text) => {
                    if parts.get(index).copied() != Some(text.as_str()) {
                        return false;
                    }
                }
                Segment::Param(_) => {
                    if index >= parts.len() {
                        return false;
                    }
                }
            }
        }
        parts.len() == self.segments.len()
    }

    /// Extend a pattern with one more literal segment. Used when deriving
    /// sibling data-subresource routes for concrete patterns.
    pub(crate) fn join_literal(&self, segment: &str) -> CompiledPattern {
        let mut segments = self.segments.clone();
        segments.push(Segment::Literal(segment.to_string()));
        let raw = format!("{}/{}", self.raw.trim_end_matches('/'), segment);
        CompiledPattern {
            raw,
            segments,
            root: false,
        }
    }
}
