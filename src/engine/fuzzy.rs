//! Fuzzy workspace query patterns

/// Build the loose indexer pattern for `query`
///
/// Every non-alphanumeric character is dropped and `.*` is inserted between
/// the remaining ones, so `"gtv"` matches `get_tag_value`. Returns `None`
/// for queries shorter than `min_len` characters, or with nothing left after
/// stripping.
pub fn fuzzy_pattern(query: &str, min_len: usize) -> Option<String> {
    if query.chars().count() < min_len {
        return None;
    }

    let kept: Vec<String> = query
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(String::from)
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some(kept.join(".*"))
    }
}
