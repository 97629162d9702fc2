//! HTML node tree and serialization
//!
//! This module defines the generic tree structure used to represent output
//! HTML. There are exactly two node shapes:
//!
//! - [`LeafNode`]: a tag plus text, no children. A leaf with no tag is plain
//!   text and serializes unwrapped.
//! - [`BranchNode`]: a tag plus an ordered list of child nodes, no text of
//!   its own.
//!
//! Nodes are built bottom-up during document assembly, serialized once with
//! [`HtmlNode::to_html`], and never mutated. Branch invariants (non-empty
//! tag, at least one child) are enforced at construction time so that
//! serialization itself cannot fail.

use crate::markdown::error::MarkdownError;
use serde::Serialize;
use std::fmt;

/// An HTML attribute list, serialized in insertion order.
pub type Attrs = Vec<(String, String)>;

/// A node in the output HTML tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum HtmlNode {
    Leaf(LeafNode),
    Branch(BranchNode),
}

/// HTML node with text content and no children
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafNode {
    /// `None` means plain text with no wrapping element.
    pub tag: Option<String>,
    /// Empty only for image nodes, which carry their content in `attrs`.
    pub text: String,
    pub attrs: Attrs,
}

/// HTML node with child nodes and no text of its own
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchNode {
    pub tag: String,
    pub children: Vec<HtmlNode>,
    pub attrs: Attrs,
}

impl HtmlNode {
    /// Plain text leaf: serializes to the raw text, no wrapping element.
    pub fn text(text: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: None,
            text: text.into(),
            attrs: Vec::new(),
        })
    }

    /// Leaf wrapped in `tag`, no attributes.
    pub fn leaf(tag: impl Into<String>, text: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: Some(tag.into()),
            text: text.into(),
            attrs: Vec::new(),
        })
    }

    /// Leaf wrapped in `tag` with attributes.
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        text: impl Into<String>,
        attrs: Attrs,
    ) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: Some(tag.into()),
            text: text.into(),
            attrs,
        })
    }

    /// Branch node over `children`.
    ///
    /// Fails with [`MarkdownError::MalformedNode`] when `tag` is empty or
    /// `children` is empty.
    pub fn branch(tag: impl Into<String>, children: Vec<HtmlNode>) -> Result<Self, MarkdownError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(MarkdownError::MalformedNode(
                "branch node requires a tag".to_string(),
            ));
        }
        if children.is_empty() {
            return Err(MarkdownError::MalformedNode(format!(
                "branch node <{}> requires at least one child",
                tag
            )));
        }
        Ok(HtmlNode::Branch(BranchNode {
            tag,
            children,
            attrs: Vec::new(),
        }))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf(_))
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, HtmlNode::Branch(_))
    }

    pub fn as_leaf(&self) -> Option<&LeafNode> {
        if let HtmlNode::Leaf(leaf) = self {
            Some(leaf)
        } else {
            None
        }
    }

    pub fn as_branch(&self) -> Option<&BranchNode> {
        if let HtmlNode::Branch(branch) = self {
            Some(branch)
        } else {
            None
        }
    }

    /// Serialize this node and all descendants to an HTML string.
    ///
    /// Pure and idempotent: repeated calls on the same tree yield identical
    /// output.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_html(out),
            HtmlNode::Branch(branch) => branch.write_html(out),
        }
    }
}

/// HTML void elements take no closing tag. Only `img` is ever produced by
/// the converter.
fn is_void_element(tag: &str) -> bool {
    tag == "img"
}

impl LeafNode {
    fn write_html(&self, out: &mut String) {
        match &self.tag {
            None => out.push_str(&self.text),
            Some(tag) => {
                out.push('<');
                out.push_str(tag);
                write_attrs(&self.attrs, out);
                out.push('>');
                if is_void_element(tag) {
                    return;
                }
                out.push_str(&self.text);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

impl BranchNode {
    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        write_attrs(&self.attrs, out);
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Emit ` key="value"` for each pair in insertion order.
fn write_attrs(attrs: &Attrs, out: &mut String) {
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlNode::Leaf(leaf) => match &leaf.tag {
                Some(tag) => write!(f, "Leaf(<{}>, {} chars)", tag, leaf.text.len()),
                None => write!(f, "Leaf(text, {} chars)", leaf.text.len()),
            },
            HtmlNode::Branch(branch) => {
                write!(f, "Branch(<{}>, {} children)", branch.tag, branch.children.len())
            }
        }
    }
}
