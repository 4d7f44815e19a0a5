//! Bracketed section markers: locates `[MARKER] ... [MARKER]` spans.

/// Returns the text strictly between the first `[marker]` and the nearest
/// following `[marker]`, trimmed of surrounding whitespace. Matching is
/// ASCII-case-insensitive on the marker name.
///
/// Returns `None` when the opener is absent or never closed: an unterminated
/// section must not consume the rest of the document.
pub fn section_body(raw: &str, marker: &str) -> Option<String> {
    let token = format!("[{marker}]");
    let open = find_ignore_ascii_case(raw, &token, 0)?;
    let body_start = open + token.len();
    let close = find_ignore_ascii_case(raw, &token, body_start)?;
    Some(raw[body_start..close].trim().to_string())
}

/// Byte-wise substring search with ASCII case folding, starting at `from`.
/// Marker tokens are pure ASCII, so the match boundaries always fall on
/// character boundaries of the haystack.
pub(crate) fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || from > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
        .map(|i| from + i)
}
