//! Tree item projection
//!
//! What a tree view needs to draw one [`ReferenceNode`]. Nothing here is
//! stored on the node; a front-end asks for an item whenever it paints.

use crate::engine::range::TextRange;
use crate::engine::types::Relation;
use crate::tree::ReferenceNode;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Whether a tree row can be expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CollapsibleState {
    None,
    Collapsed,
    Expanded,
}

/// Target of the "open" action on a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenCommand {
    pub path: PathBuf,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeItem {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub collapsible: CollapsibleState,
    /// Roots can be dismissed by the user
    pub removable: bool,
    pub icon: &'static str,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<OpenCommand>,
}

impl TreeItem {
    /// Project `node`; relative filenames resolve against `root`
    pub fn from_node(node: &ReferenceNode, root: &Path) -> Self {
        let (description, tooltip) = if node.line != 0 {
            (Some(description(node)), Some(tooltip(node)))
        } else {
            (None, None)
        };

        let command = node.has_location().then(|| OpenCommand {
            path: root.join(&node.filename),
            range: node.range(),
        });

        Self {
            label: node.label.clone(),
            description,
            tooltip,
            collapsible: collapsible_state(node),
            removable: node.is_root,
            icon: icon_for_kind(&node.kind),
            color: color_for_relation(node.relation),
            command,
        }
    }
}

fn description(node: &ReferenceNode) -> String {
    let basename = Path::new(&node.filename)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| node.filename.clone());
    format!("{}:{}", basename, node.line)
}

fn tooltip(node: &ReferenceNode) -> String {
    format!(
        "{} [{}]\n\n{}\n{}:{}\n",
        node.label,
        node.relation,
        node.filename,
        node.line,
        node.content.trim()
    )
}

pub fn collapsible_state(node: &ReferenceNode) -> CollapsibleState {
    match node.relation {
        Relation::Other => CollapsibleState::None,
        _ if node.initially_expanded => CollapsibleState::Expanded,
        _ => CollapsibleState::Collapsed,
    }
}

pub fn icon_for_kind(kind: &str) -> &'static str {
    match kind {
        "variable" => "symbol-variable",
        "enum" => "symbol-enum",
        "member" => "symbol-enum-member",
        "struct" => "symbol-struct",
        "typedef" => "symbol-interface",
        "macro" => "symbol-constant",
        _ => "symbol-method",
    }
}

pub fn color_for_relation(relation: Relation) -> &'static str {
    match relation {
        Relation::Definition => "symbolIcon.methodForeground",
        Relation::ReferencedBy => "symbolIcon.fieldForeground",
        _ => "titleBar.inactiveForeground",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::RawMatch;

    fn reference() -> ReferenceNode {
        let mut m = RawMatch::new("foo", 40, "src/a.c", "    return foo();  ", Relation::ReferencedBy);
        m.enclosing_symbol = Some("main".into());
        m.kind = "function".into();
        ReferenceNode::from_match(&m, "main".into(), false, false)
    }

    #[test]
    fn test_reference_item() {
        let item = TreeItem::from_node(&reference(), Path::new("/ws"));
        assert_eq!(item.label, "main");
        assert_eq!(item.description.as_deref(), Some("a.c:40"));
        assert_eq!(
            item.tooltip.as_deref(),
            Some("main [referencedBy]\n\nsrc/a.c\n40:return foo();\n")
        );
        assert_eq!(item.collapsible, CollapsibleState::Collapsed);
        assert!(!item.removable);
        assert_eq!(item.icon, "symbol-method");
        assert_eq!(item.color, "symbolIcon.fieldForeground");

        let command = item.command.unwrap();
        assert_eq!(command.path, PathBuf::from("/ws/src/a.c"));
        assert_eq!(command.range.start.line, 39);
        assert_eq!(command.range.start.character, 11);
    }

    #[test]
    fn test_placeholder_item() {
        let item = TreeItem::from_node(&ReferenceNode::placeholder("MAX"), Path::new("/ws"));
        assert!(item.description.is_none());
        assert!(item.tooltip.is_none());
        assert!(item.command.is_none());
        assert!(item.removable);
        assert_eq!(item.collapsible, CollapsibleState::Expanded);
        assert_eq!(item.icon, "symbol-constant");
        assert_eq!(item.color, "titleBar.inactiveForeground");
    }

    #[test]
    fn test_other_relation_is_leaf() {
        let m = RawMatch::new("x", 3, "a.c", "x = 1;", Relation::Other);
        let node = ReferenceNode::from_match(&m, "x".into(), false, false);
        assert_eq!(collapsible_state(&node), CollapsibleState::None);
    }

    #[test]
    fn test_icons() {
        assert_eq!(icon_for_kind("member"), "symbol-enum-member");
        assert_eq!(icon_for_kind("typedef"), "symbol-interface");
        assert_eq!(icon_for_kind(""), "symbol-method");
        assert_eq!(color_for_relation(Relation::Definition), "symbolIcon.methodForeground");
    }
}
