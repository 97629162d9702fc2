//! Page and site generation
//!
//! Pure string rendering ([`render_page`]) separated from the filesystem
//! operations that feed it ([`generate_page`], [`generate_pages_recursive`],
//! [`copy_dir_recursive`]).

use crate::markdown::markdown_to_html;
use crate::site::title::extract_title;
use crate::site::SiteError;
use std::fs;
use std::path::Path;

/// Placeholder in the template replaced by the extracted page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Placeholder in the template replaced by the rendered HTML fragment.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Render one markdown document into a full HTML page string.
pub fn render_page(markdown: &str, template: &str) -> Result<String, SiteError> {
    let root = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;
    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &root.to_html());
    Ok(page)
}

/// Generate a single HTML page from a markdown file and a template file.
///
/// Parent directories of `dest_path` are created as needed.
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
) -> Result<(), SiteError> {
    println!(
        "Generating page from {} to {} using {}",
        from_path.display(),
        dest_path.display(),
        template_path.display()
    );

    let markdown = fs::read_to_string(from_path)?;
    let template = fs::read_to_string(template_path)?;
    let page = render_page(&markdown, &template)?;

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest_path, page)?;
    Ok(())
}

/// Walk `content_dir` and generate one HTML page per `.md` file.
///
/// The directory structure is mirrored under `dest_dir`; each `page.md`
/// becomes `page.html` at the same relative path.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<(), SiteError> {
    if !content_dir.is_dir() {
        return Err(SiteError::MissingSource(content_dir.to_path_buf()));
    }
    for entry in fs::read_dir(content_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            generate_pages_recursive(&path, template_path, &dest_dir.join(entry.file_name()))?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let dest_path = dest_dir.join(entry.file_name()).with_extension("html");
            generate_page(&path, template_path, &dest_path)?;
        }
    }
    Ok(())
}

/// Recursively copy the contents of `source_dir` into `dest_dir`.
///
/// An existing `dest_dir` is deleted wholesale first, so the destination
/// always ends up an exact copy of the source.
pub fn copy_dir_recursive(source_dir: &Path, dest_dir: &Path) -> Result<(), SiteError> {
    if !source_dir.is_dir() {
        return Err(SiteError::MissingSource(source_dir.to_path_buf()));
    }
    if dest_dir.exists() {
        fs::remove_dir_all(dest_dir)?;
    }
    fs::create_dir_all(dest_dir)?;
    copy_contents(source_dir, dest_dir)
}

fn copy_contents(source_dir: &Path, dest_dir: &Path) -> Result<(), SiteError> {
    for entry in fs::read_dir(source_dir)? {
        let entry = entry?;
        let path = entry.path();
        let dest_path = dest_dir.join(entry.file_name());
        if path.is_dir() {
            fs::create_dir(&dest_path)?;
            copy_contents(&path, &dest_path)?;
        } else {
            fs::copy(&path, &dest_path)?;
        }
    }
    Ok(())
}
