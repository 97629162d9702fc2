//! Markdown conversion core
//!
//! This module contains the full markdown-to-HTML pipeline as a set of pure
//! functions over strings: no I/O, no shared state, deterministic output.
//!
//! Pipeline stages:
//!
//! 1. [`blocks::segment`] splits a document into block strings on blank-line
//!    boundaries.
//! 2. [`blocks::classify`] decides each block's type (paragraph, heading,
//!    code fence, quote, list) and [`blocks::strip_syntax`] removes the
//!    block-level markers.
//! 3. [`inline::tokenize`] turns a text span into a flat sequence of typed
//!    spans (plain, bold, italic, code, link, image).
//! 4. [`document::markdown_to_html`] drives the stages together and builds
//!    the final [`html::HtmlNode`] tree, rooted at a `div`.
//!
//! The single public entry point for callers is [`markdown_to_html`];
//! serialize the returned tree with [`HtmlNode::to_html`].

pub mod blocks;
pub mod document;
pub mod error;
pub mod html;
pub mod inline;

pub use blocks::{classify, segment, strip_syntax, BlockType};
pub use document::markdown_to_html;
pub use error::MarkdownError;
pub use html::HtmlNode;
pub use inline::{tokenize, Span, SpanKind};
