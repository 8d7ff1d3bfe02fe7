//! Core records shared by the parsers, the correlator and the tree
//!
//! @module engine/types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// RELATION
// =============================================================================

/// How a match relates to the queried symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Relation {
    /// The line declares the symbol
    Definition,
    /// The line uses the symbol
    ReferencedBy,
    /// A use with no attributable enclosing symbol (file or global scope)
    Other,
    /// Placeholder for a root symbol with no discoverable definition
    Symbol,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Definition => "definition",
            Relation::ReferencedBy => "referencedBy",
            Relation::Other => "other",
            Relation::Symbol => "symbol",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RAW MATCH
// =============================================================================

/// One line of cross-reference output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatch {
    /// The tag the indexer matched
    pub tag: String,
    /// 1-indexed line number
    pub line: u32,
    /// Path relative to the workspace root
    pub filename: String,
    /// Source text of the line
    pub content: String,
    pub relation: Relation,
    /// Name of the declared symbol whose span contains `line`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enclosing_symbol: Option<String>,
    /// Kind of the enclosing symbol (empty until correlated)
    pub kind: String,
}

impl RawMatch {
    pub fn new(
        tag: impl Into<String>,
        line: u32,
        filename: impl Into<String>,
        content: impl Into<String>,
        relation: Relation,
    ) -> Self {
        Self {
            tag: tag.into(),
            line,
            filename: filename.into(),
            content: content.into(),
            relation,
            enclosing_symbol: None,
            kind: String::new(),
        }
    }

    /// Whether correlation attached an enclosing symbol
    pub fn is_enriched(&self) -> bool {
        self.enclosing_symbol.is_some()
    }
}

// =============================================================================
// DECLARED SYMBOL
// =============================================================================

/// One declaration reported by the tagging tool for a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclaredSymbol {
    pub name: String,
    /// Path as the tagging tool printed it
    pub path: String,
    /// Kind code, e.g. `function`, `struct`, `member`
    pub kind: String,
    pub start_line: u32,
    /// Equals `start_line` when the tool reported no end
    pub end_line: u32,
    /// Line excerpt between `/^` and `$/`
    pub declaration_text: String,
    /// Remaining `key:value` fields (scope, typeref, signature, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

impl DeclaredSymbol {
    /// Inclusive span containment
    #[inline]
    pub fn contains(&self, line: u32) -> bool {
        self.start_line <= line && line <= self.end_line
    }

    /// Whether the declaration is scoped inside a struct (a member)
    pub fn is_struct_member(&self) -> bool {
        self.fields.contains_key("struct")
    }
}
