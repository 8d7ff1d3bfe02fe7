//! Reference correlation engine
//!
//! Turns raw cross-reference matches into records that know which declared
//! symbol they sit in and whether they declare or use the tag:
//! - per-file declared-symbol tables (pass scoped)
//! - interval containment against those tables
//! - relation reclassification
//! - the exact, file-scoped and fuzzy query front-ends
//!
//! @module engine

pub mod correlate;
pub mod fuzzy;
pub mod query;
pub mod range;
pub mod symbols;
pub mod types;

pub use correlate::{correlate, correlate_match, find_enclosing, reclassify};
pub use fuzzy::fuzzy_pattern;
pub use query::{Engine, STALE_INDEX_WARNING};
pub use range::{Position, TextRange};
pub use symbols::{build_symbol_table, FileSymbolCache, SymbolTables};
pub use types::{DeclaredSymbol, RawMatch, Relation};
