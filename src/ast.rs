//! Typed node tree produced by the parser.
//!
//! Both enums are closed: the rendering layer matches exhaustively over
//! them, so adding a variant is a compile-time event for every renderer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A block-level node, one or more full lines of the source document.
///
/// Blocks are produced in document order and the order is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Block {
    /// ATX heading, levels 1 through 3 only.
    Heading { level: u8, content: Vec<Inline> },
    Paragraph(Vec<Inline>),
    /// Single-line quote; consecutive `> ` lines produce separate quotes.
    BlockQuote(Vec<Inline>),
    /// Flat bullet list, one inline sequence per item. No nesting.
    UnorderedList(Vec<Vec<Inline>>),
    /// Fenced code, captured verbatim. `language` is `None` when the info
    /// string after the opening fence was empty.
    CodeBlock {
        language: Option<String>,
        text: String,
    },
}

/// An inline node within a block's text span.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Inline {
    Text(String),
    /// `**text**`. Interior markup stays literal: emphasis is not nested.
    Bold(String),
    /// `*text*`.
    Italic(String),
    /// `` `code` ``.
    Code(String),
    /// `[label](href)`.
    Link { label: String, href: String },
    /// `![alt](src)`.
    Image { alt: String, src: String },
}

impl Inline {
    /// Convenience constructor for plain text.
    pub fn text(s: impl Into<String>) -> Self {
        Inline::Text(s.into())
    }
}
