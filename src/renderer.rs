//! Renderers over the parsed node tree.
//!
//! Each target is a total, exhaustive match over the closed `Block` and
//! `Inline` variants, so a new variant fails to compile until every
//! renderer handles it.

use crate::ast::{Block, Inline};

pub struct Renderer;

impl Renderer {
    /// Renders the node sequence to semantic HTML.
    ///
    /// Text and attribute values are escaped; code block contents keep a
    /// `language-*` class on the `<code>` element when a language tag was
    /// present.
    pub fn to_html(blocks: &[Block]) -> String {
        let mut out = String::new();
        for block in blocks {
            match block {
                Block::Heading { level, content } => {
                    let tag = match level {
                        1 => "h1",
                        2 => "h2",
                        _ => "h3",
                    };
                    out.push('<');
                    out.push_str(tag);
                    out.push('>');
                    out.push_str(&Self::inline_html(content));
                    out.push_str("</");
                    out.push_str(tag);
                    out.push_str(">\n");
                }
                Block::Paragraph(content) => {
                    out.push_str("<p>");
                    out.push_str(&Self::inline_html(content));
                    out.push_str("</p>\n");
                }
                Block::BlockQuote(content) => {
                    out.push_str("<blockquote>");
                    out.push_str(&Self::inline_html(content));
                    out.push_str("</blockquote>\n");
                }
                Block::UnorderedList(items) => {
                    out.push_str("<ul>\n");
                    for item in items {
                        out.push_str("<li>");
                        out.push_str(&Self::inline_html(item));
                        out.push_str("</li>\n");
                    }
                    out.push_str("</ul>\n");
                }
                Block::CodeBlock { language, text } => {
                    match language {
                        Some(lang) => {
                            out.push_str("<pre><code class=\"language-");
                            out.push_str(&escape_attr(lang));
                            out.push_str("\">");
                        }
                        None => out.push_str("<pre><code>"),
                    }
                    out.push_str(&escape_html(text));
                    out.push_str("</code></pre>\n");
                }
            }
        }
        out
    }

    fn inline_html(nodes: &[Inline]) -> String {
        let mut out = String::new();
        for node in nodes {
            match node {
                Inline::Text(text) => out.push_str(&escape_html(text)),
                Inline::Bold(text) => {
                    out.push_str("<strong>");
                    out.push_str(&escape_html(text));
                    out.push_str("</strong>");
                }
                Inline::Italic(text) => {
                    out.push_str("<em>");
                    out.push_str(&escape_html(text));
                    out.push_str("</em>");
                }
                Inline::Code(text) => {
                    out.push_str("<code>");
                    out.push_str(&escape_html(text));
                    out.push_str("</code>");
                }
                Inline::Link { label, href } => {
                    out.push_str("<a href=\"");
                    out.push_str(&escape_attr(href));
                    out.push_str("\">");
                    out.push_str(&escape_html(label));
                    out.push_str("</a>");
                }
                Inline::Image { alt, src } => {
                    out.push_str("<img src=\"");
                    out.push_str(&escape_attr(src));
                    out.push_str("\" alt=\"");
                    out.push_str(&escape_attr(alt));
                    out.push_str("\">");
                }
            }
        }
        out
    }

    /// Renders the node sequence to plain text, stripping all formatting.
    /// Useful for previews and excerpts.
    pub fn to_plain_text(blocks: &[Block]) -> String {
        let mut out = String::new();
        for block in blocks {
            match block {
                Block::Heading { content, .. }
                | Block::Paragraph(content)
                | Block::BlockQuote(content) => {
                    out.push_str(&Self::inline_plain(content));
                    out.push('\n');
                }
                Block::UnorderedList(items) => {
                    for item in items {
                        out.push_str(&Self::inline_plain(item));
                        out.push('\n');
                    }
                }
                Block::CodeBlock { text, .. } => {
                    out.push_str(text);
                    out.push('\n');
                }
            }
        }
        out
    }

    fn inline_plain(nodes: &[Inline]) -> String {
        let mut out = String::new();
        for node in nodes {
            match node {
                Inline::Text(text)
                | Inline::Bold(text)
                | Inline::Italic(text)
                | Inline::Code(text) => out.push_str(text),
                Inline::Link { label, .. } => out.push_str(label),
                Inline::Image { alt, .. } => out.push_str(alt),
            }
        }
        out
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
