//! Static site generation layer
//!
//! Everything above the pure markdown core that touches the filesystem:
//! title extraction, template substitution, per-page generation, recursive
//! content-directory walking, and static asset copying.
//!
//! The expected flow for one page: read markdown from disk, convert with
//! [`crate::markdown::markdown_to_html`], serialize, substitute the result
//! into a template at the `{{ Title }}` and `{{ Content }}` placeholders,
//! and write the page out.

pub mod generator;
pub mod title;

pub use generator::{copy_dir_recursive, generate_page, generate_pages_recursive, render_page};
pub use title::extract_title;

use crate::markdown::MarkdownError;
use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while generating a site
#[derive(Debug)]
pub enum SiteError {
    /// The markdown document has no H1 line to take a page title from.
    NoTitleFound,
    /// A source directory to copy or walk does not exist.
    MissingSource(PathBuf),
    /// The markdown core rejected a document.
    Markdown(MarkdownError),
    Io(std::io::Error),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::NoTitleFound => write!(f, "No h1 title found in markdown"),
            SiteError::MissingSource(path) => {
                write!(f, "Source directory does not exist: {}", path.display())
            }
            SiteError::Markdown(e) => write!(f, "Markdown error: {}", e),
            SiteError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SiteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SiteError::Markdown(e) => Some(e),
            SiteError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MarkdownError> for SiteError {
    fn from(err: MarkdownError) -> Self {
        SiteError::Markdown(err)
    }
}

impl From<std::io::Error> for SiteError {
    fn from(err: std::io::Error) -> Self {
        SiteError::Io(err)
    }
}
