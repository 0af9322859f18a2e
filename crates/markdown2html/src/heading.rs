pub const MAX_HEADING_LEVEL: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: usize,
    pub content: &'a str,
}

/// Detects an ATX-style heading on an already trimmed line.
///
/// The line must start with one to six `#` characters followed by exactly one
/// ASCII space. The returned content is the rest of the line, trimmed.
pub fn detect_heading(line: &str) -> Option<Heading<'_>> {
    let pound_count = line.bytes().take_while(|&byte| byte == b'#').count();

    if pound_count == 0 || pound_count > MAX_HEADING_LEVEL {
        return None;
    }

    let after_hashes = line[pound_count..].strip_prefix(' ')?;

    Some(Heading {
        level: pound_count,
        content: after_hashes.trim(),
    })
}
