//! Block segmentation and classification
//!
//! A block is a maximal run of markdown text between blank-line boundaries.
//! [`segment`] cuts a document into blocks, [`classify`] decides each
//! block's type from its lines, and [`strip_syntax`] removes the
//! block-level markers that [`classify`] keyed on.
//!
//! Classification is first-match-wins in a fixed order: code fence,
//! heading, quote, unordered list, ordered list, paragraph. The order
//! matters (a fence line also "starts with" non-heading characters) and is
//! covered by tests.

use std::fmt;

/// The type of a block, computed on demand from the block's lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    /// Level is the count of leading `#` characters, deliberately uncapped:
    /// `#######` classifies as a level-7 heading and renders `<h7>`.
    Heading(usize),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockType::Paragraph => write!(f, "paragraph"),
            BlockType::Heading(level) => write!(f, "heading({})", level),
            BlockType::Code => write!(f, "code"),
            BlockType::Quote => write!(f, "quote"),
            BlockType::UnorderedList => write!(f, "unordered list"),
            BlockType::OrderedList => write!(f, "ordered list"),
        }
    }
}

/// Split a document into blocks on blank-line boundaries.
///
/// Each block is trimmed; empty pieces are dropped; document order is
/// preserved. Internal single newlines stay inside their block.
pub fn segment(document: &str) -> Vec<String> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classify a block by inspecting its lines, first match wins.
pub fn classify(block: &str) -> BlockType {
    let block = block.trim();
    let lines: Vec<&str> = block.split('\n').collect();
    let first_line = lines[0];
    let last_line = lines[lines.len() - 1];

    if first_line.starts_with("```") && last_line.starts_with("```") {
        return BlockType::Code;
    }

    if first_line.starts_with('#') {
        let level = first_line.chars().take_while(|c| *c == '#').count();
        return BlockType::Heading(level);
    }

    if first_line.starts_with('>') {
        // Only the first line is checked; later lines need not carry '>'.
        return BlockType::Quote;
    }

    if is_unordered_list(&lines) {
        return BlockType::UnorderedList;
    }

    if is_ordered_list(&lines) {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

fn is_unordered_list(lines: &[&str]) -> bool {
    lines.iter().all(|line| line.starts_with("- "))
}

/// Numbering must start at 1 and increment by exactly 1; any gap or wrong
/// start disqualifies the whole block.
fn is_ordered_list(lines: &[&str]) -> bool {
    lines
        .iter()
        .enumerate()
        .all(|(index, line)| line.starts_with(&format!("{}. ", index + 1)))
}

/// Remove the block-level markdown syntax for the given block type.
///
/// Quote and list blocks pass through unchanged here: their markers are
/// stripped per line during document assembly.
pub fn strip_syntax(block_type: BlockType, block: &str) -> String {
    match block_type {
        BlockType::Heading(_) => block.trim_start_matches('#').trim().to_string(),
        BlockType::Code => {
            // Only the fence markers and the newline directly after the
            // opening fence come off; interior whitespace stays literal.
            let trimmed = block.trim();
            let inner = trimmed.strip_prefix("```").unwrap_or(trimmed);
            let inner = inner.strip_prefix('\n').unwrap_or(inner);
            let inner = inner.strip_suffix("```").unwrap_or(inner);
            if inner.ends_with('\n') {
                inner.to_string()
            } else {
                format!("{}\n", inner)
            }
        }
        BlockType::Paragraph => block.replace('\n', " "),
        BlockType::Quote | BlockType::UnorderedList | BlockType::OrderedList => block.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_basic_document() {
        let md = "\nThis is **bolded** paragraph\n\nThis is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line\n\n- This is a list\n- with items\n        ";
        let blocks = segment(md);
        assert_eq!(
            blocks,
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn test_segment_drops_whitespace_only_pieces() {
        let blocks = segment("first\n\n   \n\nsecond");
        assert_eq!(blocks, vec!["first", "second"]);
    }

    #[test]
    fn test_segment_empty_document() {
        assert!(segment("").is_empty());
        assert!(segment("\n\n\n\n").is_empty());
    }

    #[test]
    fn test_classify_code_block() {
        assert_eq!(classify("```\nprint('hi')\n```"), BlockType::Code);
    }

    #[test]
    fn test_classify_single_fence_line_is_code() {
        // A lone fence line satisfies both the first-line and last-line
        // checks trivially.
        assert_eq!(classify("```"), BlockType::Code);
    }

    #[test]
    fn test_classify_fence_wins_over_heading() {
        assert_eq!(classify("```\n# not a heading\n```"), BlockType::Code);
        assert_eq!(classify("# ```"), BlockType::Heading(1));
    }

    #[test]
    fn test_classify_headings() {
        assert_eq!(classify("# Heading 1"), BlockType::Heading(1));
        assert_eq!(classify("### Heading 3"), BlockType::Heading(3));
        assert_eq!(classify("Heading 1"), BlockType::Paragraph);
    }

    #[test]
    fn test_classify_heading_level_is_uncapped() {
        assert_eq!(classify("####### Too deep"), BlockType::Heading(7));
    }

    #[test]
    fn test_classify_quote_checks_first_line_only() {
        assert_eq!(classify("> This is a quote"), BlockType::Quote);
        assert_eq!(classify("> first line\nsecond line"), BlockType::Quote);
        assert_eq!(classify("This is a quote"), BlockType::Paragraph);
    }

    #[test]
    fn test_classify_unordered_list() {
        assert_eq!(classify("- one\n- two\n- three"), BlockType::UnorderedList);
        // A line without the marker breaks the whole block.
        assert_eq!(classify("- one\ntwo\n- three"), BlockType::Paragraph);
    }

    #[test]
    fn test_classify_ordered_list() {
        assert_eq!(classify("1. first\n2. second\n3. third"), BlockType::OrderedList);
    }

    #[test]
    fn test_classify_ordered_list_gap_falls_back_to_paragraph() {
        assert_eq!(classify("1. first\n3. third"), BlockType::Paragraph);
    }

    #[test]
    fn test_classify_ordered_list_must_start_at_one() {
        assert_eq!(classify("2. second\n3. third"), BlockType::Paragraph);
    }

    #[test]
    fn test_strip_heading_syntax() {
        assert_eq!(strip_syntax(BlockType::Heading(2), "## Title"), "Title");
    }

    #[test]
    fn test_strip_code_syntax_keeps_literal_body() {
        let block = "```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```";
        assert_eq!(
            strip_syntax(BlockType::Code, block),
            "This is text that _should_ remain\nthe **same** even with inline stuff\n"
        );
    }

    #[test]
    fn test_strip_code_syntax_preserves_indentation() {
        let block = "```\n    indented first line\nsecond line\n```";
        assert_eq!(
            strip_syntax(BlockType::Code, block),
            "    indented first line\nsecond line\n"
        );
    }

    #[test]
    fn test_strip_code_syntax_lone_fence() {
        assert_eq!(strip_syntax(BlockType::Code, "```"), "\n");
    }

    #[test]
    fn test_strip_paragraph_collapses_newlines() {
        assert_eq!(
            strip_syntax(BlockType::Paragraph, "one\ntwo\nthree"),
            "one two three"
        );
    }

    #[test]
    fn test_strip_list_blocks_pass_through() {
        assert_eq!(
            strip_syntax(BlockType::UnorderedList, "- a\n- b"),
            "- a\n- b"
        );
    }
}
