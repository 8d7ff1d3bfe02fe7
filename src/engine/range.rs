//! Text ranges derived from a match's line text

use serde::Serialize;

/// Zero-based line/character position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

/// Single-line range covering a symbol name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    /// Locate `needle` in `content` on 1-indexed `line`
    ///
    /// The flag is `false` when `needle` does not occur verbatim; the range
    /// then starts at column 0. Columns count characters.
    pub fn locate(content: &str, needle: &str, line: u32) -> (Self, bool) {
        let (start, found) = match content.find(needle) {
            Some(byte_idx) => (content[..byte_idx].chars().count() as u32, true),
            None => (0, false),
        };
        let end = start + needle.chars().count() as u32;
        let line = line.saturating_sub(1);

        (
            Self {
                start: Position {
                    line,
                    character: start,
                },
                end: Position {
                    line,
                    character: end,
                },
            },
            found,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_found() {
        let (range, found) = TextRange::locate("  return foo();", "foo", 40);
        assert!(found);
        assert_eq!(range.start, Position { line: 39, character: 9 });
        assert_eq!(range.end, Position { line: 39, character: 12 });
    }

    #[test]
    fn test_locate_missing_falls_back_to_zero() {
        let (range, found) = TextRange::locate("int bar;", "foo", 1);
        assert!(!found);
        assert_eq!(range.start.character, 0);
        assert_eq!(range.end.character, 3);
        assert_eq!(range.start.line, 0);
    }

    #[test]
    fn test_columns_are_characters() {
        let (range, _) = TextRange::locate("/* é */ foo", "foo", 2);
        assert_eq!(range.start.character, 8);
    }
}
