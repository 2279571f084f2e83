/// Truncate a string to at most `max_bytes` bytes at a character boundary.
pub fn truncate_to_char_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) && end > 0 {
        end -= 1;
    }
    &s[..end]
}

/// Collapse an error body onto one line and cap its length, so provider
/// errors render as a single readable message.
pub fn one_line(body: &str, max_bytes: usize) -> String {
    let joined = body.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_to_char_boundary(&joined, max_bytes).to_string()
}
