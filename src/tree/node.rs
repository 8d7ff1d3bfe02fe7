//! Reference tree nodes

use crate::engine::types::{RawMatch, Relation};
use crate::engine::{TextRange, STALE_INDEX_WARNING};
use serde::Serialize;
use tracing::warn;

/// Kind given to the placeholder root of a symbol with no definition
pub const PLACEHOLDER_KIND: &str = "macro";

/// A correlated match as shown in the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceNode {
    /// Display label, also the symbol queried when this node expands
    pub label: String,
    pub filename: String,
    /// 1-indexed; 0 for a placeholder
    pub line: u32,
    pub relation: Relation,
    pub tag: String,
    pub content: String,
    pub is_root: bool,
    pub initially_expanded: bool,
    pub kind: String,
}

/// Identity of a node within the root list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub filename: String,
    pub line: u32,
    /// Placeholders have no location; their label tells them apart
    pub placeholder: Option<String>,
}

impl ReferenceNode {
    /// Wrap a correlated match under `label`
    pub fn from_match(m: &RawMatch, label: String, is_root: bool, initially_expanded: bool) -> Self {
        Self {
            label,
            filename: m.filename.clone(),
            line: m.line,
            relation: m.relation,
            tag: m.tag.clone(),
            content: m.content.clone(),
            is_root,
            initially_expanded,
            kind: m.kind.clone(),
        }
    }

    /// Stand-in root for a symbol the indexer knows no definition of
    pub fn placeholder(symbol: &str) -> Self {
        Self {
            label: symbol.to_string(),
            filename: String::new(),
            line: 0,
            relation: Relation::Symbol,
            tag: symbol.to_string(),
            content: String::new(),
            is_root: true,
            initially_expanded: true,
            kind: PLACEHOLDER_KIND.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.line == 0 && self.relation == Relation::Symbol
    }

    /// Whether this node sits at `(filename, line)`
    pub fn is_at(&self, filename: &str, line: u32) -> bool {
        self.filename == filename && self.line == line
    }

    pub fn key(&self) -> NodeKey {
        NodeKey {
            filename: self.filename.clone(),
            line: self.line,
            placeholder: self.is_placeholder().then(|| self.label.clone()),
        }
    }

    /// Whether the node can be opened in an editor
    pub fn has_location(&self) -> bool {
        self.line != 0 && !self.content.is_empty()
    }

    /// Range of the tag on its line
    ///
    /// A tag missing from its own line means the index is stale; the range
    /// then starts at column 0 and a warning is logged.
    pub fn range(&self) -> TextRange {
        let (range, found) = TextRange::locate(&self.content, &self.tag, self.line);
        if !found {
            warn!(tag = %self.tag, file = %self.filename, line = self.line, "{}", STALE_INDEX_WARNING);
        }
        range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_at(filename: &str, line: u32, content: &str) -> ReferenceNode {
        let m = RawMatch::new("foo", line, filename, content, Relation::ReferencedBy);
        ReferenceNode::from_match(&m, "main".into(), false, false)
    }

    #[test]
    fn test_placeholder_shape() {
        let p = ReferenceNode::placeholder("MAX");
        assert_eq!(p.relation, Relation::Symbol);
        assert_eq!(p.kind, "macro");
        assert_eq!(p.line, 0);
        assert!(p.is_root && p.initially_expanded);
        assert!(p.is_placeholder());
        assert!(!p.has_location());
    }

    #[test]
    fn test_range_found() {
        let n = node_at("a.c", 40, "  return foo();");
        let r = n.range();
        assert_eq!((r.start.line, r.start.character, r.end.character), (39, 9, 12));
    }

    #[test]
    fn test_range_stale_index() {
        let n = node_at("a.c", 40, "  return bar();");
        let r = n.range();
        assert_eq!((r.start.character, r.end.character), (0, 3));
    }

    #[test]
    fn test_keys() {
        let a = node_at("a.c", 5, "x");
        let b = node_at("a.c", 5, "y");
        assert_eq!(a.key(), b.key());
        assert_ne!(
            ReferenceNode::placeholder("A").key(),
            ReferenceNode::placeholder("B").key()
        );
    }
}
