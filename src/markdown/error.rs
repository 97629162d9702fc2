//! Errors for the markdown conversion core
//!
//! All errors are fatal to the single call that triggers them: conversion
//! either succeeds completely or fails completely, and the caller decides
//! whether to skip, log, or abort on a given document.

use std::fmt;

/// Errors that can occur during markdown-to-HTML conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownError {
    /// An inline delimiter (`**`, `_`, `` ` ``) appears an odd number of
    /// times within one span, so the style it opens is never closed.
    UnbalancedDelimiter(String),
    /// An HTML node was constructed with invariants broken (a branch
    /// without a tag, or without at least one child).
    MalformedNode(String),
}

impl fmt::Display for MarkdownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkdownError::UnbalancedDelimiter(delimiter) => {
                write!(f, "Unbalanced '{}' delimiter in markdown text", delimiter)
            }
            MarkdownError::MalformedNode(msg) => write!(f, "Malformed HTML node: {}", msg),
        }
    }
}

impl std::error::Error for MarkdownError {}
