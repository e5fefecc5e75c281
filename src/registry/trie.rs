//! Prefix trie over literal path segments.
//!
//! # Responsibilities
//! - Index compiled patterns for `O(|path segments|)` average lookup
//! - Collect every entry matching a concrete path
//!
//! # Design Decisions
//! - Literal children are keyed by segment text; all `:name` patterns at a
//!   position share one merged param branch (names do not affect matching)
//! - Catch-all entries anchor at the node where their literal prefix ends
//!   and match any path at or below it
//! - Root-pattern entries live in a flat global bucket

use std::collections::HashMap;

use crate::pattern::Segment;
use crate::registry::entry::RuleEntry;

/// One trie node.
#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<String, TrieNode>,
    param: Option<Box<TrieNode>>,
    /// Entries whose pattern terminates exactly at this node.
    terminal: Vec<usize>,
    /// Entries whose catch-all is anchored at this node.
    catch_all: Vec<usize>,
}

/// An immutable snapshot of the compiled rule set.
///
/// Built in one pass by [`Registry::rebuild`](crate::registry::Registry::rebuild)
/// and shared with readers as an `Arc`; never mutated afterwards.
#[derive(Debug)]
pub struct RouteTable {
    root: TrieNode,
    global: Vec<usize>,
    entries: Vec<RuleEntry>,
}

impl RouteTable {
    pub(crate) fn build(entries: Vec<RuleEntry>) -> Self {
        let mut root = TrieNode::default();
        let mut global = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            if entry.pattern.is_root() {
                global.push(index);
                continue;
            }
            let mut node = &mut root;
            let mut anchored = false;
            for segment in entry.pattern.segments() {
                match segment {
                    Segment::Literal(text) => {
                        node = node.children.entry(text.clone()).or_default();
                    }
                    Segment::Param(_) => {
                        node = node.param.get_or_insert_with(Default::default).as_mut();
                    }
                    Segment::CatchAll => {
                        node.catch_all.push(index);
                        anchored = true;
                        break;
                    }
                }
            }
            if !anchored {
                node.terminal.push(index);
            }
        }

        Self {
            root,
            global,
            entries,
        }
    }

    /// All entries in the snapshot, in registration order.
    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    /// Number of entries in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indices of every entry matching `path`, in trie-visit order.
    /// Callers sort by specificity.
    pub(crate) fn collect(&self, path: &str) -> Vec<usize> {
        let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
        let mut hits = self.global.clone();
        Self::descend(&self.root, &parts, 0, &mut hits);
        hits
    }

    fn descend(node: &TrieNode, parts: &[&str], depth: usize, hits: &mut Vec<usize>) {
        // Catch-alls anchored here match the rest of the path, including
        // the zero-segment remainder.
        hits.extend_from_slice(&node.catch_all);

        if depth == parts.len() {
            hits.extend_from_slice(&node.terminal);
            return;
        }
        if let Some(child) = node.children.get(parts[depth]) {
            Self::descend(child, parts, depth + 1, hits);
        }
        if let Some(param) = &node.param {
            Self::descend(param, parts, depth + 1, hits);
        }
    }
}
