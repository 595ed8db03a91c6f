//! Fenced code block capture.

use crate::ast::Block;

/// The fence marker. Only backtick fences are recognized, and only at the
/// start of a line.
pub(crate) const FENCE: &str = "```";

/// Try to parse a fenced code block opening at `pos`, consuming lines
/// through the closing fence.
///
/// Everything between the fences is captured verbatim, including lines
/// that would otherwise read as headings, quotes, or list items. Any later
/// line starting with the fence marker closes the block; trailing text on
/// the closing line is discarded. A fence left unterminated at end of
/// input is flushed with whatever accumulated, without error.
///
/// Returns the position after the block and the finished node.
pub(crate) fn try_parse_fenced_code_block(
    lines: &[&str],
    pos: usize,
) -> Option<(usize, Block)> {
    let line = *lines.get(pos)?;
    if !line.starts_with(FENCE) {
        return None;
    }

    log::debug!("Opening code fence at line {}", pos + 1);

    let info = line[FENCE.len()..].trim();
    let language = if info.is_empty() {
        None
    } else {
        Some(info.to_string())
    };

    let mut current = pos + 1;
    let mut content_lines: Vec<&str> = Vec::new();
    let mut found_closing = false;

    while current < lines.len() {
        let line = lines[current];
        if line.starts_with(FENCE) {
            found_closing = true;
            current += 1;
            break;
        }
        content_lines.push(line);
        current += 1;
    }

    log::debug!(
        "Code fence closed: {} ({} content lines)",
        found_closing,
        content_lines.len()
    );

    Some((
        current,
        Block::CodeBlock {
            language,
            text: content_lines.join("\n"),
        },
    ))
}
