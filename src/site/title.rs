//! Page title extraction
//!
//! A page's title is the text of the first H1 line in its markdown source.
//! The scan is independent of block parsing: it looks at raw lines, so an
//! H1 buried mid-document still counts.

use crate::site::SiteError;
use once_cell::sync::Lazy;
use regex::Regex;

/// An H1 line: optional leading whitespace, a single `#`, one space, text.
static H1_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*# (.+)$").expect("h1 pattern is valid"));

/// Extract the first H1 title from a markdown document.
///
/// Returns the heading text with surrounding whitespace removed, or
/// [`SiteError::NoTitleFound`] when no line qualifies.
pub fn extract_title(markdown: &str) -> Result<String, SiteError> {
    for line in markdown.split('\n') {
        if let Some(caps) = H1_PATTERN.captures(line) {
            return Ok(caps[1].trim().to_string());
        }
    }
    Err(SiteError::NoTitleFound)
}
