//! Parsing for inline code spans (`code`).

/// Try to parse a code span starting at the current position.
///
/// Only single-backtick spans are supported and the content must be
/// non-empty, so `` `` `` is not a span and falls back to literal text.
/// Returns `Some((length, content))` on a match.
pub(crate) fn try_parse_code_span(text: &str) -> Option<(usize, &str)> {
    if !text.starts_with('`') {
        return None;
    }

    let close = text[1..].find('`')? + 1;
    let content = &text[1..close];
    if content.is_empty() {
        return None;
    }

    Some((close + 1, content))
}
