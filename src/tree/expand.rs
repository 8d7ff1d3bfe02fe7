//! Node expansion
//!
//! The underlying data is a graph: a function's references can lead back
//! to the function. Expansion therefore never lists the expanded node as
//! its own child, and roots only show definitions (references appear one
//! level down, when a definition is expanded).
//!
//! @module tree/expand

use super::node::ReferenceNode;
use crate::core::error::Result;
use crate::engine::types::{RawMatch, Relation};
use crate::engine::Engine;

/// What to expand
#[derive(Debug, Clone, Copy)]
pub enum ExpandTarget<'a> {
    /// A literal symbol (fresh root request, may contain `*` / `?`)
    Symbol(&'a str),
    /// An existing node; its label is the queried symbol
    Node(&'a ReferenceNode),
}

impl<'a> ExpandTarget<'a> {
    fn symbol(&self) -> &'a str {
        match *self {
            ExpandTarget::Symbol(s) => s,
            ExpandTarget::Node(n) => &n.label,
        }
    }

    fn is_self(&self, m: &RawMatch) -> bool {
        match self {
            ExpandTarget::Symbol(_) => false,
            ExpandTarget::Node(n) => n.is_at(&m.filename, m.line),
        }
    }
}

/// Whether `symbol` is a wildcard pattern rather than an exact name
pub fn has_wildcard(symbol: &str) -> bool {
    symbol.contains('*') || symbol.contains('?')
}

/// Label for a correlated match
///
/// Usually the enclosing function ("used in main"); members of an enum or
/// struct keep their own tag, which says more than the aggregate's name.
pub fn determine_label(m: &RawMatch) -> String {
    match &m.enclosing_symbol {
        None => m.tag.clone(),
        Some(_) if m.kind == "enum" || m.kind == "struct" => m.tag.clone(),
        Some(enclosing) => enclosing.clone(),
    }
}

/// Expand `target` into child nodes (or root nodes when `is_root`)
pub fn expand(engine: &Engine, target: ExpandTarget<'_>, is_root: bool) -> Result<Vec<ReferenceNode>> {
    let symbol = target.symbol();
    let matches = engine.references(symbol)?;
    Ok(build_nodes(symbol, target, &matches, is_root))
}

/// Filter and label correlated matches; separated from the query for testing
pub fn build_nodes(
    symbol: &str,
    target: ExpandTarget<'_>,
    matches: &[RawMatch],
    is_root: bool,
) -> Vec<ReferenceNode> {
    if is_root && !matches.iter().any(|m| m.relation == Relation::Definition) {
        return vec![ReferenceNode::placeholder(symbol)];
    }

    let kept: Vec<&RawMatch> = matches
        .iter()
        .filter(|m| !(is_root && m.relation != Relation::Definition))
        .filter(|m| !target.is_self(m))
        .collect();

    let expanded = is_root && !has_wildcard(symbol) && kept.len() == 1;

    kept.into_iter()
        .map(|m| ReferenceNode::from_match(m, determine_label(m), is_root, expanded))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(tag: &str, line: u32, relation: Relation, enclosing: Option<&str>, kind: &str) -> RawMatch {
        let mut m = RawMatch::new(tag, line, "a.c", tag, relation);
        m.enclosing_symbol = enclosing.map(String::from);
        m.kind = kind.to_string();
        m
    }

    fn scenario() -> Vec<RawMatch> {
        vec![
            m("foo", 12, Relation::Definition, Some("foo"), "function"),
            m("foo", 40, Relation::ReferencedBy, Some("main"), "function"),
        ]
    }

    #[test]
    fn test_root_keeps_definitions_only() {
        let nodes = build_nodes("foo", ExpandTarget::Symbol("foo"), &scenario(), true);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].line, 12);
        assert_eq!(nodes[0].label, "foo");
        assert!(nodes[0].is_root);
        assert!(nodes[0].initially_expanded, "exact symbol with one definition");
    }

    #[test]
    fn test_placeholder_when_no_definition() {
        let matches = vec![
            m("MAX", 8, Relation::ReferencedBy, Some("main"), "function"),
            m("MAX", 9, Relation::Other, None, ""),
        ];
        let nodes = build_nodes("MAX", ExpandTarget::Symbol("MAX"), &matches, true);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].relation, Relation::Symbol);
        assert_eq!(nodes[0].kind, "macro");
        assert_eq!(nodes[0].line, 0);
    }

    #[test]
    fn test_child_expansion_excludes_self() {
        let roots = build_nodes("foo", ExpandTarget::Symbol("foo"), &scenario(), true);
        let children = build_nodes("foo", ExpandTarget::Node(&roots[0]), &scenario(), false);

        assert!(children.iter().all(|c| !c.is_at("a.c", 12)));
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].label, "main");
        assert_eq!(children[0].relation, Relation::ReferencedBy);
        assert!(!children[0].is_root);
        assert!(!children[0].initially_expanded);
    }

    #[test]
    fn test_children_include_every_relation() {
        let matches = vec![
            m("foo", 12, Relation::Definition, Some("foo"), "function"),
            m("foo", 3, Relation::Other, None, ""),
        ];
        let parent = ReferenceNode::placeholder("foo");
        let children = build_nodes("foo", ExpandTarget::Node(&parent), &matches, false);
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_multiple_definitions_start_collapsed() {
        let matches = vec![
            m("foo", 12, Relation::Definition, Some("foo"), "function"),
            m("foo", 80, Relation::Definition, Some("foo"), "function"),
        ];
        let nodes = build_nodes("foo", ExpandTarget::Symbol("foo"), &matches, true);
        assert_eq!(nodes.len(), 2);
        assert!(nodes.iter().all(|n| !n.initially_expanded));
    }

    #[test]
    fn test_wildcard_root_starts_collapsed() {
        let matches = vec![m("foo_init", 12, Relation::Definition, Some("foo_init"), "function")];
        let nodes = build_nodes("foo*", ExpandTarget::Symbol("foo*"), &matches, true);
        assert_eq!(nodes.len(), 1);
        assert!(!nodes[0].initially_expanded);
    }

    #[test]
    fn test_labels() {
        assert_eq!(determine_label(&m("x", 1, Relation::Other, None, "")), "x");
        assert_eq!(
            determine_label(&m("RED", 2, Relation::ReferencedBy, Some("color"), "enum")),
            "RED"
        );
        assert_eq!(
            determine_label(&m("x", 3, Relation::ReferencedBy, Some("point"), "struct")),
            "x"
        );
        assert_eq!(
            determine_label(&m("foo", 40, Relation::ReferencedBy, Some("main"), "function")),
            "main"
        );
    }

    #[test]
    fn test_has_wildcard() {
        assert!(has_wildcard("foo*"));
        assert!(has_wildcard("f?o"));
        assert!(!has_wildcard("foo"));
    }
}
