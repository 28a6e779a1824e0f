//! Word wrapping for the message log.

/// Column width log entries are wrapped at.
pub const LOG_WRAP_WIDTH: usize = 80;

/// Wrap `text` into lines of at most `width` characters.
///
/// Breaks at the last space at or before column `width`; when there is none
/// (or it is the first character) the line is cut hard at `width`. The
/// remainder is trimmed before it is wrapped further, so the space a line was
/// broken at is dropped. A `width` of zero is treated as one.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut rest = text;

    while rest.chars().count() > width {
        // Window covers columns 0..=width so a space right at the boundary
        // still counts as a break point.
        let window = &rest[..byte_offset(rest, width + 1)];
        let split = match window.rfind(' ') {
            Some(idx) if idx > 0 => idx,
            _ => byte_offset(rest, width),
        };

        lines.push(rest[..split].to_owned());
        rest = rest[split..].trim();
    }

    lines.push(rest.to_owned());
    lines
}

fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices().nth(char_idx).map_or(text.len(), |(i, _)| i)
}
