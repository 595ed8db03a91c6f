//! Block scanner: turns a document into an ordered `Vec<Block>`.
//!
//! The parser walks the document one physical line at a time, keeping two
//! mutually exclusive pending accumulators: a paragraph buffer and a
//! list-item buffer. Block markers are recognized only at the start
//! of a line, in a fixed priority order: fence, heading, blockquote, list
//! item, blank line, then paragraph text. Whenever a block boundary is
//! seen, open accumulators are flushed into finished nodes; flushing an
//! empty accumulator produces nothing.

use crate::ast::Block;
use crate::inline_parser::parse_inline_text;

mod code_blocks;
mod headings;

use code_blocks::{FENCE, try_parse_fenced_code_block};
use headings::try_parse_atx_heading;

pub struct BlockParser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    blocks: Vec<Block>,
    paragraph: Vec<&'a str>,
    list_items: Vec<&'a str>,
}

impl<'a> BlockParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().collect(),
            pos: 0,
            blocks: Vec::new(),
            paragraph: Vec::new(),
            list_items: Vec::new(),
        }
    }

    /// Run the scan to completion and return the nodes in document order.
    pub fn parse(mut self) -> Vec<Block> {
        log::debug!("Starting block parse: {} lines", self.lines.len());

        while self.pos < self.lines.len() {
            if self.try_parse_fenced_code_block() {
                continue;
            }

            if self.try_parse_atx_heading() {
                continue;
            }

            if self.try_parse_blockquote() {
                continue;
            }

            if self.try_parse_list_item() {
                continue;
            }

            if self.try_parse_blank_line() {
                continue;
            }

            self.parse_paragraph_line();
        }

        // End of input closes whatever is still open.
        self.flush_paragraph();
        self.flush_list();

        self.blocks
    }

    fn try_parse_fenced_code_block(&mut self) -> bool {
        // Peek before flushing so a non-fence line leaves buffers alone.
        if !self.lines[self.pos].starts_with(FENCE) {
            return false;
        }

        self.flush_paragraph();
        self.flush_list();

        if let Some((new_pos, block)) = try_parse_fenced_code_block(&self.lines, self.pos) {
            self.pos = new_pos;
            self.blocks.push(block);
            true
        } else {
            false
        }
    }

    fn try_parse_atx_heading(&mut self) -> bool {
        if let Some((level, rest)) = try_parse_atx_heading(self.lines[self.pos]) {
            log::debug!("Heading level {} at line {}", level, self.pos + 1);
            self.flush_paragraph();
            self.flush_list();
            self.blocks.push(Block::Heading {
                level,
                content: parse_inline_text(rest),
            });
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn try_parse_blockquote(&mut self) -> bool {
        let line = self.lines[self.pos];
        if let Some(rest) = line.strip_prefix("> ") {
            log::debug!("Blockquote at line {}", self.pos + 1);
            self.flush_paragraph();
            self.flush_list();
            self.blocks.push(Block::BlockQuote(parse_inline_text(rest)));
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn try_parse_list_item(&mut self) -> bool {
        let line = self.lines[self.pos];
        let rest = line
            .strip_prefix("* ")
            .or_else(|| line.strip_prefix("- "));

        if let Some(rest) = rest {
            // A list interrupts a paragraph but keeps its own buffer open.
            self.flush_paragraph();
            self.list_items.push(rest);
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn try_parse_blank_line(&mut self) -> bool {
        if self.lines[self.pos].trim().is_empty() {
            self.flush_paragraph();
            self.flush_list();
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_paragraph_line(&mut self) {
        // A non-blank, non-marker line ends list accumulation.
        self.flush_list();
        self.paragraph.push(self.lines[self.pos]);
        self.pos += 1;
    }

    /// Convert the pending paragraph buffer into a node. Empty (or
    /// whitespace-only) buffers flush to nothing.
    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }

        let text = self.paragraph.join("\n");
        let text = text.trim();
        if !text.is_empty() {
            self.blocks.push(Block::Paragraph(parse_inline_text(text)));
        }
        self.paragraph.clear();
    }

    /// Convert the pending list buffer into a node; items are
    /// inline-parsed only now, at flush time.
    fn flush_list(&mut self) {
        if self.list_items.is_empty() {
            return;
        }

        let items = self
            .list_items
            .iter()
            .map(|item| parse_inline_text(item))
            .collect();
        self.blocks.push(Block::UnorderedList(items));
        self.list_items.clear();
    }
}
