//! Human-readable output formatting

use crate::check::CheckReport;
use crate::engine::RawMatch;
use crate::present::{DocumentSymbol, Location, SymbolInformation, TreeItem};

const PREVIEW_WIDTH: usize = 80;

fn preview(content: &str) -> String {
    let line = content.trim();
    if line.chars().count() > PREVIEW_WIDTH {
        let cut: String = line.chars().take(PREVIEW_WIDTH - 3).collect();
        format!("{}...", cut)
    } else {
        line.to_string()
    }
}

/// Correlated matches, one header plus preview per match
pub fn format_matches(symbol: &str, matches: &[RawMatch]) -> String {
    let mut output = String::new();

    if matches.is_empty() {
        output.push_str(&format!("No references found for '{}'\n", symbol));
        return output;
    }

    output.push_str(&format!("Found {} matches for '{}'\n\n", matches.len(), symbol));

    for m in matches {
        output.push_str(&format!("{}:{} [{}]", m.filename, m.line, m.relation));
        if let Some(enclosing) = &m.enclosing_symbol {
            output.push_str(&format!(" in {} ({})", enclosing, m.kind));
        }
        output.push('\n');
        output.push_str(&format!("   {}\n", preview(&m.content)));
    }

    output
}

pub fn format_locations(symbol: &str, locations: &[Location]) -> String {
    if locations.is_empty() {
        return format!("No definition found for '{}'\n", symbol);
    }
    locations
        .iter()
        .map(|l| {
            format!(
                "{}:{}:{}\n",
                l.path.display(),
                l.range.start.line + 1,
                l.range.start.character + 1
            )
        })
        .collect()
}

pub fn format_outline(symbols: &[DocumentSymbol]) -> String {
    let mut output = String::new();
    for s in symbols {
        output.push_str(&format!(
            "{:>6}  {:<10} {}\n",
            s.range.start.line + 1,
            s.kind,
            s.name
        ));
    }
    output
}

pub fn format_symbols(query: &str, symbols: &[SymbolInformation]) -> String {
    let mut output = String::new();

    if symbols.is_empty() {
        output.push_str(&format!("No symbols found for '{}'\n", query));
        return output;
    }

    for s in symbols {
        output.push_str(&format!(
            "{}  {}:{}\n",
            s.name,
            s.path.display(),
            s.position.line + 1
        ));
    }
    output
}

/// Pre-order tree rows as `(depth, item)`
pub fn format_tree(rows: &[(usize, TreeItem)]) -> String {
    let mut output = String::new();
    for (depth, item) in rows {
        output.push_str(&"  ".repeat(*depth));
        output.push_str(&item.label);
        if let Some(description) = &item.description {
            output.push_str(&format!("  {}", description));
        }
        output.push('\n');
    }
    output
}

pub fn format_checks(reports: &[CheckReport]) -> String {
    reports
        .iter()
        .map(|r| {
            let mark = if r.ok { "ok" } else { "FAIL" };
            format!("{:<8} {:<5} {}\n", r.name, mark, r.detail)
        })
        .collect()
}
