//! # mdsite
//!
//! A markdown-to-HTML converter at the core of a static site generator.
//!
//! The [`markdown`] module is the pure conversion core: it parses a markdown
//! document into a tree of HTML nodes that serializes to an HTML fragment.
//! The [`site`] module is the I/O layer on top: title extraction, template
//! substitution, and recursive page generation.

pub mod markdown;
pub mod site;
