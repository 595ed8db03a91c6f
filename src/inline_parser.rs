//! Inline scanner: turns a block's raw text into a flat `Vec<Inline>`.
//!
//! The scanner walks the text left to right with an explicit cursor. At
//! each position it attempts pattern matches in a fixed priority order
//! (image, link, code span, bold, italic); the first pattern that matches
//! at the cursor, not merely later in the text, is consumed. When
//! nothing matches, text up to the next special character becomes a plain
//! text node, and a special character that completes no pattern is emitted
//! as a single literal character so the cursor always advances.

use crate::ast::Inline;

mod code_spans;
mod emphasis;
mod links;

use code_spans::try_parse_code_span;
use emphasis::{try_parse_bold, try_parse_italic};
use links::{try_parse_inline_image, try_parse_inline_link};

/// Parse inline elements from a block's text content.
///
/// Total over all inputs: unmatched delimiters degrade to literal text,
/// never an error. Whitespace-only stretches between matches are dropped,
/// and adjacent text nodes are not coalesced.
pub fn parse_inline_text(text: &str) -> Vec<Inline> {
    log::trace!(
        "Parsing inline text ({} bytes): {:?}",
        text.len(),
        // Truncate by characters, not bytes: a byte slice could land
        // inside a multibyte character and panic.
        text.chars().take(40).collect::<String>()
    );

    let mut nodes = Vec::new();
    let mut pos = 0;
    let bytes = text.as_bytes();

    while pos < text.len() {
        // Try to parse an inline image (before links, since it starts with ![)
        if bytes[pos] == b'!'
            && pos + 1 < text.len()
            && bytes[pos + 1] == b'['
            && let Some((len, alt, src)) = try_parse_inline_image(&text[pos..])
        {
            log::debug!("Matched inline image at pos {}: src={}", pos, src);
            nodes.push(Inline::Image {
                alt: alt.to_string(),
                src: src.to_string(),
            });
            pos += len;
            continue;
        }

        // Try to parse an inline link
        if bytes[pos] == b'['
            && let Some((len, label, href)) = try_parse_inline_link(&text[pos..])
        {
            log::debug!("Matched inline link at pos {}: href={}", pos, href);
            nodes.push(Inline::Link {
                label: label.to_string(),
                href: href.to_string(),
            });
            pos += len;
            continue;
        }

        // Try to parse a code span
        if bytes[pos] == b'`'
            && let Some((len, content)) = try_parse_code_span(&text[pos..])
        {
            log::debug!("Matched code span at pos {}", pos);
            nodes.push(Inline::Code(content.to_string()));
            pos += len;
            continue;
        }

        // Try to parse bold, then italic. Bold must come first so that a
        // double asterisk is never read as two italics.
        if bytes[pos] == b'*' {
            if let Some((len, content)) = try_parse_bold(&text[pos..]) {
                log::debug!("Matched bold at pos {}", pos);
                nodes.push(Inline::Bold(content.to_string()));
                pos += len;
                continue;
            }

            if let Some((len, content)) = try_parse_italic(&text[pos..]) {
                log::debug!("Matched italic at pos {}", pos);
                nodes.push(Inline::Italic(content.to_string()));
                pos += len;
                continue;
            }
        }

        // No inline element matched; emit plain text up to the next
        // position where one might start.
        match find_next_inline_start(&text[pos..]) {
            None => {
                let rest = &text[pos..];
                if !rest.trim().is_empty() {
                    nodes.push(Inline::Text(rest.to_string()));
                }
                break;
            }
            Some(0) => {
                // Special character at the cursor that completed no
                // pattern: emit it literally and advance past it.
                let ch_len = text[pos..].chars().next().map_or(1, char::len_utf8);
                nodes.push(Inline::Text(text[pos..pos + ch_len].to_string()));
                pos += ch_len;
            }
            Some(next) => {
                let chunk = &text[pos..pos + next];
                if !chunk.trim().is_empty() {
                    nodes.push(Inline::Text(chunk.to_string()));
                }
                pos += next;
            }
        }
    }

    nodes
}

/// Find the offset of the next character that could start an inline
/// element, or `None` if there is none before the end of the text.
fn find_next_inline_start(text: &str) -> Option<usize> {
    text.find(['`', '*', '!', '['])
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_multibyte_text_with_trace_logging() {
        // Force trace-level argument evaluation so the log preview runs
        // even without an installed logger; the truncation must land on
        // a character boundary, not byte 40.
        log::set_max_level(log::LevelFilter::Trace);

        let input = format!("a{}", "é".repeat(25));
        let nodes = parse_inline_text(&input);
        assert_eq!(nodes, vec![Inline::text(input.clone())]);
    }

    #[test]
    fn test_plain_text_passes_through() {
        let nodes = parse_inline_text("just some words");
        assert_eq!(nodes, vec![Inline::text("just some words")]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_inline_text(""), vec![]);
    }

    #[test]
    fn test_mixed_inline_sequence() {
        let nodes = parse_inline_text("see [docs](https://example.com) and `x`");
        assert_eq!(
            nodes,
            vec![
                Inline::text("see "),
                Inline::Link {
                    label: "docs".to_string(),
                    href: "https://example.com".to_string(),
                },
                Inline::text(" and "),
                Inline::Code("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_image_before_link_priority() {
        let nodes = parse_inline_text("![alt](a.jpg)");
        assert_eq!(
            nodes,
            vec![Inline::Image {
                alt: "alt".to_string(),
                src: "a.jpg".to_string(),
            }]
        );
    }

    #[test]
    fn test_bold_wins_over_italic() {
        let nodes = parse_inline_text("**bold *and* text**");
        assert_eq!(nodes, vec![Inline::Bold("bold *and* text".to_string())]);
    }

    #[test]
    fn test_lone_asterisk_stays_literal() {
        let nodes = parse_inline_text("3 * 4 = 12");
        assert_eq!(
            nodes,
            vec![
                Inline::text("3 "),
                Inline::text("*"),
                Inline::text(" 4 = 12"),
            ]
        );
    }

    #[test]
    fn test_bang_without_bracket_stays_literal() {
        let nodes = parse_inline_text("wow!");
        assert_eq!(nodes, vec![Inline::text("wow"), Inline::text("!")]);
    }

    #[test]
    fn test_unmatched_backtick_stays_literal() {
        let nodes = parse_inline_text("`oops");
        assert_eq!(nodes, vec![Inline::text("`"), Inline::text("oops")]);
    }

    #[test]
    fn test_unclosed_bracket_stays_literal() {
        let nodes = parse_inline_text("[broken](");
        assert_eq!(
            nodes,
            vec![Inline::text("["), Inline::text("broken]("),]
        );
    }

    #[test]
    fn test_only_special_characters() {
        // Every character falls back to a single literal node; progress is
        // guaranteed on arbitrary delimiter soup.
        let nodes = parse_inline_text("*`![");
        assert_eq!(
            nodes,
            vec![
                Inline::text("*"),
                Inline::text("`"),
                Inline::text("!"),
                Inline::text("["),
            ]
        );
    }

    #[test]
    fn test_double_asterisk_without_close_degrades() {
        // `**bold` has no bold close; italic then reads the two asterisks
        // as an empty span and the word stays plain.
        let nodes = parse_inline_text("**bold");
        assert_eq!(
            nodes,
            vec![Inline::Italic(String::new()), Inline::text("bold")]
        );
    }
}
