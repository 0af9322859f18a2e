use crate::heading::detect_heading;
use std::io::{self, BufRead};

/// Block-level role of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Heading { level: usize, content: &'a str },
    UnorderedItem(&'a str),
    OrderedItem(&'a str),
    Text(&'a str),
}

const UNORDERED_MARKER: &str = "- ";
const ORDERED_MARKER: &str = "* ";

/// Classifies a line after trimming surrounding whitespace.
///
/// Rules are checked in order: blank, heading, `- ` item, `* ` item. Anything
/// else is paragraph text, so no line is ever rejected.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    if let Some(heading) = detect_heading(trimmed) {
        return LineKind::Heading {
            level: heading.level,
            content: heading.content,
        };
    }

    if let Some(rest) = trimmed.strip_prefix(UNORDERED_MARKER) {
        return LineKind::UnorderedItem(rest.trim());
    }

    if let Some(rest) = trimmed.strip_prefix(ORDERED_MARKER) {
        return LineKind::OrderedItem(rest.trim());
    }

    LineKind::Text(trimmed)
}

/// Reads every line from `reader`, dropping `\n` and `\r\n` terminators.
pub fn read_lines<R: BufRead>(reader: &mut R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buffer = String::new();

    while reader.read_line(&mut buffer)? > 0 {
        if buffer.ends_with('\n') {
            buffer.pop();

            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }

        lines.push(std::mem::take(&mut buffer));
    }

    Ok(lines)
}
