/// Word limit for any length class other than `medium` or `long`.
///
/// Unset and unrecognized classes share the `short` limit.
pub const DEFAULT_WORD_LIMIT: usize = 50;

/// Maximum word count for a length class (exact, case-sensitive match).
pub fn word_limit_for(length_class: &str) -> usize {
    match length_class {
        "short" => 50,
        "medium" => 150,
        "long" => 300,
        _ => DEFAULT_WORD_LIMIT,
    }
}

/// Keep the first `limit` whitespace-delimited words, joined by single spaces.
pub fn truncate(text: &str, limit: usize) -> String {
    text.split_whitespace()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}
