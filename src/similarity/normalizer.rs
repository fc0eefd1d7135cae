/// Lines of `text` that survive normalization: trimmed, non-empty, in order.
///
/// Trimming uses Unicode whitespace, so a trailing `\r` from CRLF input is
/// removed along with any other padding.
pub fn normalized_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Canonical form of `text` used for comparison: every line trimmed, blank
/// lines dropped, survivors joined with a single `\n`.
pub fn normalize(text: &str) -> String {
    normalized_lines(text).collect::<Vec<_>>().join("\n")
}
