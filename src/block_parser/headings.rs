//! ATX heading recognition.

/// Try to parse an ATX heading from a line, returning the level (1-3) and
/// the remainder after the marker.
///
/// The marker must sit at the start of the line (indented headings are
/// not recognized) and must be followed by a space. Four or more hashes
/// are not a heading and fall through to paragraph text. The remainder is
/// returned verbatim, extra spaces included.
pub(crate) fn try_parse_atx_heading(line: &str) -> Option<(u8, &str)> {
    let hash_count = line.bytes().take_while(|&b| b == b'#').count();
    if hash_count == 0 || hash_count > 3 {
        return None;
    }

    let after_hashes = &line[hash_count..];
    if !after_hashes.starts_with(' ') {
        return None;
    }

    Some((hash_count as u8, &after_hashes[1..]))
}
