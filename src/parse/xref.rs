//! Cross-reference grammar (GNU Global `-x` style output)
//!
//! Each useful line reads `TAG<ws>LINE<ws>FILENAME<space>CONTENT`. Anything
//! else is dropped without complaint; the column layout drifts between
//! Global versions and a stray line is never worth failing a query over.
//!
//! @module parse/xref

use crate::engine::types::{RawMatch, Relation};
use once_cell::sync::Lazy;
use regex::Regex;

/// tag, line number, filename, content (rest of line after one space)
static XREF_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\S+)\s+(\d+)\s+(\S+) (.*)$").unwrap());

/// Parse one line, `None` if it does not fit the grammar
pub fn parse_line(line: &str, relation: Relation) -> Option<RawMatch> {
    let caps = XREF_LINE.captures(line)?;
    let line_no: u32 = caps.get(2)?.as_str().parse().ok()?;

    Some(RawMatch::new(
        caps.get(1)?.as_str(),
        line_no,
        caps.get(3)?.as_str(),
        caps.get(4)?.as_str(),
        relation,
    ))
}

/// Lazily parse indexer output, preserving line order
pub fn iter_matches(output: &str, relation: Relation) -> impl Iterator<Item = RawMatch> + '_ {
    output
        .lines()
        .filter_map(move |line| parse_line(line, relation))
}

/// Parse indexer output into owned records
pub fn parse_xref(output: &str, relation: Relation) -> Vec<RawMatch> {
    iter_matches(output, relation).collect()
}
