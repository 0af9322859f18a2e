use std::fmt;

const PARAGRAPH_INDENT: &str = "    ";
const LINE_BREAK: &str = "<br/>";

/// A rendered unit of output. Content is already inline formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: usize, content: String },
    UnorderedList(Vec<String>),
    OrderedList(Vec<String>),
    Paragraph(Vec<String>),
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading { level, content } => write!(f, "<h{level}>{content}</h{level}>"),
            Self::UnorderedList(items) => write_list(f, "ul", items),
            Self::OrderedList(items) => write_list(f, "ol", items),
            Self::Paragraph(lines) => {
                let separator = format!("{LINE_BREAK}\n{PARAGRAPH_INDENT}");
                write!(
                    f,
                    "<p>\n{PARAGRAPH_INDENT}{}\n</p>",
                    lines.join(separator.as_str())
                )
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, tag: &str, items: &[String]) -> fmt::Result {
    writeln!(f, "<{tag}>")?;
    for item in items {
        writeln!(f, "<li>{item}</li>")?;
    }
    write!(f, "</{tag}>")
}

/// Joins blocks with newlines and terminates the document with a single
/// newline.
pub fn render_document(blocks: &[Block]) -> String {
    let mut html = blocks
        .iter()
        .map(Block::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    html.push('\n');
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn renders_heading() {
        let block = Block::Heading {
            level: 2,
            content: "Title".to_string(),
        };
        assert_eq!(block.to_string(), "<h2>Title</h2>");
    }

    #[test]
    fn renders_lists() {
        let unordered = Block::UnorderedList(strings(&["one", "two"]));
        assert_eq!(
            unordered.to_string(),
            "<ul>\n<li>one</li>\n<li>two</li>\n</ul>"
        );

        let ordered = Block::OrderedList(strings(&["first"]));
        assert_eq!(ordered.to_string(), "<ol>\n<li>first</li>\n</ol>");
    }

    #[test]
    fn renders_paragraph_with_line_breaks() {
        let block = Block::Paragraph(strings(&["Hello", "World"]));
        assert_eq!(block.to_string(), "<p>\n    Hello<br/>\n    World\n</p>");
    }

    #[test]
    fn renders_single_line_paragraph() {
        let block = Block::Paragraph(strings(&["Alone"]));
        assert_eq!(block.to_string(), "<p>\n    Alone\n</p>");
    }

    #[test]
    fn document_ends_with_single_newline() {
        let blocks = vec![
            Block::Heading {
                level: 1,
                content: "Doc".to_string(),
            },
            Block::Paragraph(strings(&["Body"])),
        ];
        assert_eq!(
            render_document(&blocks),
            "<h1>Doc</h1>\n<p>\n    Body\n</p>\n"
        );
        assert_eq!(render_document(&[]), "\n");
    }
}
