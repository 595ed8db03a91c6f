use crate::ast::{Block, Inline};
use crate::block_parser::BlockParser;

pub fn parse_blocks(input: &str) -> Vec<Block> {
    BlockParser::new(input).parse()
}

/// One-word tag per block variant, for order assertions.
pub fn block_kinds(blocks: &[Block]) -> Vec<&'static str> {
    blocks
        .iter()
        .map(|b| match b {
            Block::Heading { .. } => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::BlockQuote(_) => "blockquote",
            Block::UnorderedList(_) => "list",
            Block::CodeBlock { .. } => "code",
        })
        .collect()
}

pub fn assert_block_kinds(input: &str, expected: &[&str]) {
    let blocks = parse_blocks(input);
    assert_eq!(
        block_kinds(&blocks),
        expected,
        "Block kinds did not match for input:\n{}",
        input
    );
}

pub fn text(s: &str) -> Inline {
    Inline::Text(s.to_string())
}
