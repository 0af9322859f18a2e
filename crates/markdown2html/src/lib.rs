mod block;
mod error;
mod fs;
mod heading;
mod inline;
mod line;
mod state;

pub use block::{render_document, Block};
pub use error::{ConvertError, ConvertResult, ExitCode};
pub use fs::write_atomic;
pub use heading::{detect_heading, Heading, MAX_HEADING_LEVEL};
pub use inline::{bold, emphasis, format_inline, hash_substitution, md5_hex, strip_c};
pub use line::{classify_line, read_lines, LineKind};

use state::State;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Groups lines into blocks without rendering them.
pub fn convert_to_blocks<I, S>(lines: I) -> Vec<Block>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = State::new();

    for line in lines {
        match classify_line(line.as_ref()) {
            LineKind::Blank => state.close_open_block(),
            LineKind::Heading { level, content } => state.push_heading(level, content),
            LineKind::UnorderedItem(content) => state.push_unordered_item(content),
            LineKind::OrderedItem(content) => state.push_ordered_item(content),
            LineKind::Text(text) => state.push_paragraph_line(text),
        }
    }

    state.finalize()
}

/// Converts markdown lines into a complete HTML document.
pub fn convert<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let blocks = convert_to_blocks(lines);
    log::debug!("rendering {} blocks", blocks.len());
    render_document(&blocks)
}

pub fn convert_from_reader<R: Read>(reader: &mut BufReader<R>) -> ConvertResult<String> {
    let lines = read_lines(reader)?;
    log::debug!("read {} lines", lines.len());
    Ok(convert(&lines))
}

pub fn convert_from_path(path: &Path) -> ConvertResult<String> {
    if !path.exists() {
        return Err(ConvertError::MissingInput(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    convert_from_reader(&mut reader)
}

/// Reads `input`, converts it, and writes the whole document to `output`.
///
/// Nothing is written unless the conversion succeeds.
pub fn convert_file(input: &Path, output: &Path) -> ConvertResult<()> {
    let html = convert_from_path(input)?;
    write_atomic(output, &html)?;
    log::debug!("converted {} into {}", input.display(), output.display());
    Ok(())
}
