//! Correlation and classification
//!
//! Attributes each cross-reference match to the declared symbol whose span
//! contains it, then reclassifies the match:
//! - a use on the declaring line of the same name becomes a definition
//!   (the indexer cannot always tell those apart)
//! - a use inside no declared symbol becomes `other`
//!
//! @module engine/correlate

use super::symbols::SymbolTables;
use super::types::{DeclaredSymbol, RawMatch, Relation};

/// First span in emission order containing `line`
///
/// Tables are never re-sorted: for nested or overlapping spans the tool's
/// emission order decides.
pub fn find_enclosing(symbols: &[DeclaredSymbol], line: u32) -> Option<&DeclaredSymbol> {
    symbols.iter().find(|s| s.contains(line))
}

/// Upgrade or downgrade a match's relation after enrichment
pub fn reclassify(m: &mut RawMatch, found_enclosing: bool) {
    if m.relation == Relation::Definition {
        return;
    }
    if m.enclosing_symbol.as_deref() == Some(m.tag.as_str()) {
        m.relation = Relation::Definition;
    } else if !found_enclosing {
        m.relation = Relation::Other;
    }
}

/// Enrich one match against its file's table
pub fn correlate_match(m: &mut RawMatch, symbols: &[DeclaredSymbol]) {
    let enclosing = find_enclosing(symbols, m.line);
    if let Some(symbol) = enclosing {
        m.enclosing_symbol = Some(symbol.name.clone());
        m.kind = symbol.kind.clone();
    }
    reclassify(m, enclosing.is_some());
}

/// Enrich matches in place; files without a table are left untouched
pub fn correlate(matches: &mut [RawMatch], tables: &SymbolTables) {
    for m in matches.iter_mut() {
        if let Some(symbols) = tables.get(&m.filename) {
            correlate_match(m, symbols);
        }
    }
}
