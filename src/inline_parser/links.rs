//! Parsing for inline links and images.
//!
//! Implements:
//! - Inline links: `[label](href)`
//! - Inline images: `![alt](src)`
//!
//! Both are matched only at the current cursor position. Labels may not
//! contain `]`, destinations may not contain `)`; there is no support for
//! titles, reference links, or nested brackets.

/// Try to parse an inline image starting at the current position.
///
/// Inline images have the form `![alt](src)`. The alt text may be empty,
/// the destination may not. Returns `Some((length, alt, src))` on a match.
pub(crate) fn try_parse_inline_image(text: &str) -> Option<(usize, &str, &str)> {
    if !text.starts_with("![") {
        return None;
    }

    let close_bracket = text[2..].find(']')? + 2;
    let alt = &text[2..close_bracket];

    let (consumed, dest) = parse_destination(&text[close_bracket + 1..])?;
    Some((close_bracket + 1 + consumed, alt, dest))
}

/// Try to parse an inline link starting at the current position.
///
/// Inline links have the form `[label](href)` with a non-empty label.
/// Returns `Some((length, label, href))` on a match.
pub(crate) fn try_parse_inline_link(text: &str) -> Option<(usize, &str, &str)> {
    if !text.starts_with('[') {
        return None;
    }

    let close_bracket = text[1..].find(']')? + 1;
    let label = &text[1..close_bracket];
    if label.is_empty() {
        return None;
    }

    let (consumed, dest) = parse_destination(&text[close_bracket + 1..])?;
    Some((close_bracket + 1 + consumed, label, dest))
}

/// Parse the `(dest)` part immediately following a closing bracket.
/// Returns the number of bytes consumed and the destination text.
fn parse_destination(text: &str) -> Option<(usize, &str)> {
    if !text.starts_with('(') {
        return None;
    }

    let close_paren = text[1..].find(')')? + 1;
    let dest = &text[1..close_paren];
    if dest.is_empty() {
        return None;
    }

    Some((close_paren + 1, dest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_link() {
        let result = try_parse_inline_link("[here](https://example.com) rest");
        assert_eq!(result, Some((27, "here", "https://example.com")));
    }

    #[test]
    fn test_link_requires_label() {
        assert_eq!(try_parse_inline_link("[](url)"), None);
    }

    #[test]
    fn test_link_requires_destination() {
        assert_eq!(try_parse_inline_link("[label]()"), None);
        assert_eq!(try_parse_inline_link("[label] (url)"), None);
    }

    #[test]
    fn test_unclosed_link() {
        assert_eq!(try_parse_inline_link("[label](url"), None);
        assert_eq!(try_parse_inline_link("[label"), None);
    }

    #[test]
    fn test_parse_simple_image() {
        let result = try_parse_inline_image("![alt text](image.jpg)");
        assert_eq!(result, Some((22, "alt text", "image.jpg")));
    }

    #[test]
    fn test_image_alt_may_be_empty() {
        let result = try_parse_inline_image("![](pic.png)");
        assert_eq!(result, Some((12, "", "pic.png")));
    }

    #[test]
    fn test_image_requires_destination() {
        assert_eq!(try_parse_inline_image("![alt]()"), None);
    }

    #[test]
    fn test_not_an_image() {
        assert_eq!(try_parse_inline_image("!bang"), None);
        assert_eq!(try_parse_inline_image("[link](url)"), None);
    }
}
