//! Presentation projections
//!
//! The domain records carry no UI state. Everything a front-end shows
//! (locations, symbol categories, tree item icons and collapse state) is
//! computed here on demand from a record.
//!
//! @module present

pub mod item;

pub use item::{CollapsibleState, OpenCommand, TreeItem};

use crate::engine::range::{Position, TextRange};
use serde::Serialize;
use std::path::PathBuf;

// =============================================================================
// SYMBOL CATEGORIES
// =============================================================================

/// Editor-facing symbol category for outline and workspace results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SymbolCategory {
    Function,
    Variable,
    Enum,
    EnumMember,
    Struct,
    Constant,
    String,
}

impl SymbolCategory {
    /// Map a tagging-tool kind; unknown kinds have no category
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "function" => Some(Self::Function),
            "variable" => Some(Self::Variable),
            "enum" => Some(Self::Enum),
            "member" => Some(Self::EnumMember),
            "struct" => Some(Self::Struct),
            "typedef" | "macro" => Some(Self::Constant),
            "" => Some(Self::String),
            _ => None,
        }
    }
}

// =============================================================================
// LOCATIONS
// =============================================================================

/// Absolute file location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: PathBuf,
    pub range: TextRange,
}

/// One workspace search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolInformation {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<SymbolCategory>,
    /// `line N`
    pub container: String,
    pub path: PathBuf,
    pub position: Position,
}

/// One outline entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSymbol {
    pub name: String,
    /// The declaring line's text
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<SymbolCategory>,
    pub kind: String,
    pub range: TextRange,
}
