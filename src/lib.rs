//! A permissive parser for the Markdown subset used by blog-style content,
//! plus renderers over the resulting node tree.
//!
//! The parser is total: it never fails on any string input. Constructs it
//! does not recognize degrade to plain text, which is the right trade-off
//! for user-authored content where rendering something readable beats
//! rejecting the document.
//!
//! Supported blocks: ATX headings (levels 1-3), paragraphs, single-line
//! blockquotes, flat unordered lists, and fenced code blocks captured
//! verbatim. Supported inlines: images, links, code spans, bold, and
//! italic, with a fixed priority between them.

pub mod ast;
pub mod block_parser;
pub mod inline_parser;
pub mod renderer;

pub use ast::{Block, Inline};
pub use inline_parser::parse_inline_text;
pub use renderer::Renderer;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a document into an ordered sequence of block nodes.
///
/// Line endings are normalized before scanning, so `\r\n` input parses
/// identically to `\n` input. The returned sequence is in document order
/// and may be empty for blank input. Pure and side-effect free; safe to
/// call concurrently on independent inputs.
pub fn parse(input: &str) -> Vec<Block> {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let normalized_input = input.replace("\r\n", "\n");
    block_parser::BlockParser::new(&normalized_input).parse()
}
