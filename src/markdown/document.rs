//! Document assembly
//!
//! Drives block classification and inline tokenization together and builds
//! the final HTML node tree. [`markdown_to_html`] is the single public
//! entry point of the conversion core; the root of the returned tree is
//! always a `div` branch with one child branch per block.

use crate::markdown::blocks::{classify, segment, strip_syntax, BlockType};
use crate::markdown::error::MarkdownError;
use crate::markdown::html::HtmlNode;
use crate::markdown::inline::{tokenize, Span, SpanKind};

/// Convert a whole markdown document into an HTML node tree.
///
/// Fails when the document contains an unbalanced inline delimiter, or when
/// it yields no blocks at all (the root branch cannot be childless).
pub fn markdown_to_html(document: &str) -> Result<HtmlNode, MarkdownError> {
    let mut block_nodes = Vec::new();
    for block in segment(document) {
        block_nodes.push(block_to_node(&block)?);
    }
    HtmlNode::branch("div", block_nodes)
}

/// Build the top-level branch node for one block.
fn block_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let block_type = classify(block);
    match block_type {
        BlockType::Paragraph => {
            inline_branch("p", &strip_syntax(block_type, block))
        }
        BlockType::Heading(level) => {
            inline_branch(&format!("h{}", level), &strip_syntax(block_type, block))
        }
        BlockType::Code => code_block_to_node(&strip_syntax(block_type, block)),
        BlockType::Quote => {
            // Per-line marker strip: a leading '>' is removed where present,
            // lines without one pass through untouched.
            let content = block
                .split('\n')
                .map(|line| {
                    let line = line.trim();
                    line.strip_prefix('>').unwrap_or(line).trim()
                })
                .collect::<Vec<&str>>()
                .join(" ");
            inline_branch("blockquote", &content)
        }
        BlockType::UnorderedList => list_block_to_node("ul", block),
        BlockType::OrderedList => list_block_to_node("ol", block),
    }
}

/// Tokenize `content` and wrap the resulting nodes in a `tag` branch.
fn inline_branch(tag: &str, content: &str) -> Result<HtmlNode, MarkdownError> {
    let children = spans_to_nodes(tokenize(content)?);
    HtmlNode::branch(tag, children)
}

/// Code fences keep their content literal: the body becomes one plain span,
/// wrapped `<pre><code>...</code></pre>`, with no inline parsing.
fn code_block_to_node(content: &str) -> Result<HtmlNode, MarkdownError> {
    let text = span_to_node(Span::plain(content));
    let code = HtmlNode::branch("code", vec![text])?;
    HtmlNode::branch("pre", vec![code])
}

/// One `<li>` branch per line, markers stripped, inline markdown parsed.
fn list_block_to_node(tag: &str, block: &str) -> Result<HtmlNode, MarkdownError> {
    let mut items = Vec::new();
    for line in block.split('\n') {
        let children = spans_to_nodes(tokenize(strip_list_marker(line))?);
        items.push(HtmlNode::branch("li", children)?);
    }
    HtmlNode::branch(tag, items)
}

/// Strip a leading `- `, `* `, or numeric `N. ` list marker; no-op when the
/// line carries none.
fn strip_list_marker(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix("- ") {
        return rest;
    }
    if let Some(rest) = line.strip_prefix("* ") {
        return rest;
    }
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(rest) = line[digits..].strip_prefix(". ") {
            return rest;
        }
    }
    line
}

fn spans_to_nodes(spans: Vec<Span>) -> Vec<HtmlNode> {
    spans.into_iter().map(span_to_node).collect()
}

/// Convert one inline span to its HTML leaf node.
fn span_to_node(span: Span) -> HtmlNode {
    let url = span.url.unwrap_or_default();
    match span.kind {
        SpanKind::Plain => HtmlNode::text(span.text),
        SpanKind::Bold => HtmlNode::leaf("b", span.text),
        SpanKind::Italic => HtmlNode::leaf("i", span.text),
        SpanKind::Code => HtmlNode::leaf("code", span.text),
        SpanKind::Link => {
            HtmlNode::leaf_with_attrs("a", span.text, vec![("href".to_string(), url)])
        }
        SpanKind::Image => HtmlNode::leaf_with_attrs(
            "img",
            "",
            vec![
                ("src".to_string(), url),
                ("alt".to_string(), span.text),
            ],
        ),
    }
}
