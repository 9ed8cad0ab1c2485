//! Line tokenizer.

/// Split one source line into tokens.
///
/// The line is trimmed first. Returns `None` for lines that are blank or
/// whose first character is `#`; such lines never become program lines.
/// Otherwise tokens are separated by a single ASCII space, so a run of
/// spaces yields empty tokens (which the parser rejects).
pub fn tokenize_line(line: &str) -> Option<Vec<&str>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(line.split(' ').collect())
}
