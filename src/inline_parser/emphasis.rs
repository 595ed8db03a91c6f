//! Parsing for bold (`**text**`) and italic (`*text*`) spans.
//!
//! Both are first-close-wins: the content runs to the nearest closing
//! delimiter, so nested emphasis stays literal inside the outer span.
//! Content may be empty but may not span a newline; a delimiter whose
//! closer sits on a later line does not match and degrades to literal
//! text at the call site.

/// Try to parse a bold span starting at the current position.
/// Returns `Some((length, content))` on a match.
pub(crate) fn try_parse_bold(text: &str) -> Option<(usize, &str)> {
    if !text.starts_with("**") {
        return None;
    }

    let close = text[2..].find("**")? + 2;
    let content = &text[2..close];
    if content.contains('\n') {
        return None;
    }

    Some((close + 2, content))
}

/// Try to parse an italic span starting at the current position.
/// Returns `Some((length, content))` on a match.
///
/// Callers must attempt [`try_parse_bold`] first; on its own this accepts
/// `**` as an empty italic span, which is exactly how an unpaired double
/// asterisk degrades.
pub(crate) fn try_parse_italic(text: &str) -> Option<(usize, &str)> {
    if !text.starts_with('*') {
        return None;
    }

    let close = text[1..].find('*')? + 1;
    let content = &text[1..close];
    if content.contains('\n') {
        return None;
    }

    Some((close + 1, content))
}
