//! Tagging grammar (Universal Ctags `--fields=+neK -o - --sort=no`)
//!
//! `NAME\tPATH\t/^EXCERPT$/;"\tKIND\tKEY:VAL\tKEY:VAL...`
//!
//! @module parse/tags

use crate::engine::types::DeclaredSymbol;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// name, path, excerpt, kind, tail of extension fields
static TAG_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(\S+)\t([^\t]+)\t/\^(.*?)\$?/;"\t(\S+)\t?(.*)$"#).unwrap()
});

const FIELD_SEPARATOR: char = '\t';

/// Parse one line, `None` if it does not fit the grammar or lacks a line number
pub fn parse_line(line: &str) -> Option<DeclaredSymbol> {
    let caps = TAG_LINE.captures(line)?;

    let mut start_line = None;
    let mut end_line = None;
    let mut fields = BTreeMap::new();

    for pair in caps.get(5)?.as_str().split(FIELD_SEPARATOR) {
        let Some((key, value)) = pair.split_once(':') else {
            continue;
        };
        if key.is_empty() || value.is_empty() {
            continue;
        }
        match key {
            "line" => start_line = value.parse::<u32>().ok(),
            "end" => end_line = value.parse::<u32>().ok(),
            _ => {
                fields.insert(key.to_string(), value.to_string());
            }
        }
    }

    let start_line = start_line?;
    Some(DeclaredSymbol {
        name: caps.get(1)?.as_str().to_string(),
        path: caps.get(2)?.as_str().to_string(),
        declaration_text: caps.get(3)?.as_str().to_string(),
        kind: caps.get(4)?.as_str().to_string(),
        start_line,
        end_line: end_line.unwrap_or(start_line),
        fields,
    })
}

/// Parse tagging-tool output, preserving emission order
pub fn parse_tags(output: &str) -> Vec<DeclaredSymbol> {
    output.lines().filter_map(parse_line).collect()
}
