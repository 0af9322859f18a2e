use crate::block::Block;
use crate::inline::format_inline;

/// The block currently accepting lines. Only one kind can be open at a time.
#[derive(Debug)]
enum OpenBlock {
    UnorderedList(Vec<String>),
    OrderedList(Vec<String>),
    Paragraph(Vec<String>),
}

/// Parser state for a single conversion: the open block plus every block
/// completed so far.
#[derive(Debug, Default)]
pub struct State {
    blocks: Vec<Block>,
    open: Option<OpenBlock>,
}

impl State {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            open: None,
        }
    }

    #[cfg(test)]
    pub fn in_unordered_list(&self) -> bool {
        matches!(self.open, Some(OpenBlock::UnorderedList(_)))
    }

    #[cfg(test)]
    pub fn in_ordered_list(&self) -> bool {
        matches!(self.open, Some(OpenBlock::OrderedList(_)))
    }

    #[cfg(test)]
    pub fn pending_paragraph(&self) -> &[String] {
        match &self.open {
            Some(OpenBlock::Paragraph(lines)) => lines,
            _ => &[],
        }
    }

    pub fn push_heading(&mut self, level: usize, content: &str) {
        self.close_open_block();
        self.blocks.push(Block::Heading {
            level,
            content: format_inline(content),
        });
    }

    pub fn push_unordered_item(&mut self, content: &str) {
        let item = format_inline(content);
        if let Some(OpenBlock::UnorderedList(items)) = &mut self.open {
            items.push(item);
            return;
        }

        self.close_open_block();
        log::trace!("opening unordered list");
        self.open = Some(OpenBlock::UnorderedList(vec![item]));
    }

    pub fn push_ordered_item(&mut self, content: &str) {
        let item = format_inline(content);
        if let Some(OpenBlock::OrderedList(items)) = &mut self.open {
            items.push(item);
            return;
        }

        self.close_open_block();
        log::trace!("opening ordered list");
        self.open = Some(OpenBlock::OrderedList(vec![item]));
    }

    /// Buffers a raw paragraph line. Formatting happens when the paragraph is
    /// flushed.
    pub fn push_paragraph_line(&mut self, line: &str) {
        if let Some(OpenBlock::Paragraph(lines)) = &mut self.open {
            lines.push(line.to_string());
            return;
        }

        self.close_open_block();
        self.open = Some(OpenBlock::Paragraph(vec![line.to_string()]));
    }

    /// Closes an open list or flushes a pending paragraph into the completed
    /// blocks.
    pub fn close_open_block(&mut self) {
        let Some(open) = self.open.take() else {
            return;
        };

        let block = match open {
            OpenBlock::UnorderedList(items) => Block::UnorderedList(items),
            OpenBlock::OrderedList(items) => Block::OrderedList(items),
            OpenBlock::Paragraph(lines) => {
                Block::Paragraph(lines.iter().map(|line| format_inline(line)).collect())
            }
        };
        log::trace!("closing block {block:?}");
        self.blocks.push(block);
    }

    pub fn finalize(mut self) -> Vec<Block> {
        self.close_open_block();
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exclusive(state: &State) -> bool {
        let open = [
            state.in_unordered_list(),
            state.in_ordered_list(),
            !state.pending_paragraph().is_empty(),
        ];
        open.iter().filter(|flag| **flag).count() <= 1
    }

    #[test]
    fn consecutive_items_share_a_list() {
        let mut state = State::new();
        state.push_unordered_item("one");
        state.push_unordered_item("two");
        assert!(state.in_unordered_list());

        let blocks = state.finalize();
        assert_eq!(
            blocks,
            vec![Block::UnorderedList(vec!["one".into(), "two".into()])]
        );
    }

    #[test]
    fn switching_list_kind_closes_previous_list() {
        let mut state = State::new();
        state.push_unordered_item("a");
        state.push_ordered_item("b");
        assert!(state.in_ordered_list());
        assert!(!state.in_unordered_list());

        let blocks = state.finalize();
        assert_eq!(
            blocks,
            vec![
                Block::UnorderedList(vec!["a".into()]),
                Block::OrderedList(vec!["b".into()]),
            ]
        );
    }

    #[test]
    fn paragraph_lines_are_formatted_on_flush() {
        let mut state = State::new();
        state.push_paragraph_line("**Hello**");
        assert_eq!(state.pending_paragraph(), ["**Hello**".to_string()]);

        state.close_open_block();
        assert!(state.pending_paragraph().is_empty());

        let blocks = state.finalize();
        assert_eq!(blocks, vec![Block::Paragraph(vec!["<b>Hello</b>".into()])]);
    }

    #[test]
    fn block_kinds_stay_mutually_exclusive() {
        let mut state = State::new();
        state.push_paragraph_line("text");
        assert!(exclusive(&state));
        state.push_unordered_item("item");
        assert!(exclusive(&state));
        state.push_ordered_item("item");
        assert!(exclusive(&state));
        state.push_paragraph_line("more");
        assert!(exclusive(&state));
        state.push_heading(1, "Title");
        assert!(exclusive(&state));

        let blocks = state.finalize();
        assert_eq!(blocks.len(), 5);
    }

    #[test]
    fn closing_with_nothing_open_is_a_no_op() {
        let mut state = State::new();
        state.close_open_block();
        state.close_open_block();
        assert!(state.finalize().is_empty());
    }
}
