//! Inline markdown tokenizer
//!
//! Converts a raw text string into an ordered sequence of typed spans
//! (plain, bold, italic, code, link, image) through successive splitting
//! passes. Pass order is load-bearing:
//!
//! 1. Image extraction (`![alt](url)`)
//! 2. Link extraction (`[text](url)`, never re-capturing an image)
//! 3. Bold split on `**`
//! 4. Italic split on `_`
//! 5. Code split on `` ` ``
//!
//! Images run before links because a link pattern is a subset-match of an
//! image pattern. Spans typed by an earlier pass are never re-split by a
//! later one. Each delimiter pass requires its delimiter to appear an even
//! number of times within a span; an odd count fails the whole tokenize
//! call with [`MarkdownError::UnbalancedDelimiter`].

use crate::markdown::error::MarkdownError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// `![alt](url)`, non-greedy: no brackets in alt, no parens in url.
static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").expect("image pattern is valid"));

/// `[text](url)`, same shape as the image pattern minus the bang. Matches
/// preceded by `!` are rejected in [`split_links`] since the regex crate
/// has no look-behind.
static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").expect("link pattern is valid"));

/// The inline style of a [`Span`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed, contiguous run of inline-parsed text
///
/// Immutable value object compared by structural equality. `url` is present
/// if and only if `kind` is `Link` or `Image`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Plain,
            url: None,
        }
    }

    pub fn styled(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Link,
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: SpanKind::Image,
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "Span({:?}, '{}', {})", self.kind, self.text, url),
            None => write!(f, "Span({:?}, '{}')", self.kind, self.text),
        }
    }
}

/// Tokenize a raw text string into an ordered sequence of spans.
///
/// Runs the fixed pass sequence described in the module docs. Fails with
/// [`MarkdownError::UnbalancedDelimiter`] when a bold/italic/code delimiter
/// is left unclosed; no partial result is produced.
pub fn tokenize(text: &str) -> Result<Vec<Span>, MarkdownError> {
    let mut spans = vec![Span::plain(text)];
    spans = split_images(spans);
    spans = split_links(spans);
    spans = split_delimiter(spans, "**", SpanKind::Bold)?;
    spans = split_delimiter(spans, "_", SpanKind::Italic)?;
    spans = split_delimiter(spans, "`", SpanKind::Code)?;
    Ok(spans)
}

/// Extract `![alt](url)` images out of still-plain spans.
fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_pattern(spans, &IMAGE_PATTERN, false, |alt, url| Span::image(alt, url))
}

/// Extract `[text](url)` links out of still-plain spans.
///
/// Runs after [`split_images`], and additionally skips any match directly
/// preceded by `!` so a ragged image pattern is never half-captured as a
/// link.
fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_pattern(spans, &LINK_PATTERN, true, |text, url| Span::link(text, url))
}

fn split_pattern(
    spans: Vec<Span>,
    pattern: &Regex,
    skip_bang_prefixed: bool,
    make: fn(String, String) -> Span,
) -> Vec<Span> {
    let mut result = Vec::new();
    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }
        let text = &span.text;
        let mut cursor = 0;
        for caps in pattern.captures_iter(text) {
            let whole = caps.get(0).expect("group 0 always present");
            if skip_bang_prefixed && text[..whole.start()].ends_with('!') {
                continue;
            }
            let before = &text[cursor..whole.start()];
            if !before.is_empty() {
                result.push(Span::plain(before));
            }
            result.push(make(caps[1].to_string(), caps[2].to_string()));
            cursor = whole.end();
        }
        let rest = &text[cursor..];
        if !rest.is_empty() {
            result.push(Span::plain(rest));
        }
    }
    result
}

/// Split still-plain spans on a literal style delimiter.
///
/// Splitting must produce an odd number of parts (an even delimiter count);
/// even-indexed parts stay plain, odd-indexed parts take `kind`. Empty
/// parts are dropped.
fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<Span>, MarkdownError> {
    let mut result = Vec::new();
    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }
        let parts: Vec<&str> = span.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(MarkdownError::UnbalancedDelimiter(delimiter.to_string()));
        }
        for (index, part) in parts.iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if index % 2 == 0 {
                result.push(Span::plain(*part));
            } else {
                result.push(Span::styled(*part, kind));
            }
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let spans = tokenize("hello world").unwrap();
        assert_eq!(spans, vec![Span::plain("hello world")]);
    }

    #[test]
    fn test_empty_text_yields_no_spans() {
        assert_eq!(tokenize("").unwrap(), vec![]);
    }

    #[test]
    fn test_code_delimiter_split() {
        let spans = tokenize("This is text with a `code block` word").unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with a "),
                Span::styled("code block", SpanKind::Code),
                Span::plain(" word"),
            ]
        );
    }

    #[test]
    fn test_bold_then_italic() {
        let spans = tokenize("**bold** and _italic_").unwrap();
        assert_eq!(
            spans,
            vec![
                Span::styled("bold", SpanKind::Bold),
                Span::plain(" and "),
                Span::styled("italic", SpanKind::Italic),
            ]
        );
    }

    #[test]
    fn test_unbalanced_delimiter_fails() {
        let err = tokenize("This is invalid `code").unwrap_err();
        assert_eq!(err, MarkdownError::UnbalancedDelimiter("`".to_string()));
    }

    #[test]
    fn test_unbalanced_bold_names_the_delimiter() {
        let err = tokenize("some **bold text").unwrap_err();
        assert_eq!(err, MarkdownError::UnbalancedDelimiter("**".to_string()));
    }

    #[test]
    fn test_image_extraction() {
        let spans = tokenize("This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)")
            .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with an "),
                Span::image("image", "https://i.imgur.com/zjjcJKZ.png"),
            ]
        );
    }

    #[test]
    fn test_multiple_images() {
        let spans = tokenize(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another \
             ![second image](https://i.imgur.com/3elNhQu.png)",
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with an "),
                Span::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                Span::plain(" and another "),
                Span::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn test_multiple_links() {
        let spans = tokenize(
            "This is text with a link [to boot dev](https://www.boot.dev) and \
             [to youtube](https://www.youtube.com/@bootdotdev)",
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with a link "),
                Span::link("to boot dev", "https://www.boot.dev"),
                Span::plain(" and "),
                Span::link("to youtube", "https://www.youtube.com/@bootdotdev"),
            ]
        );
    }

    #[test]
    fn test_image_not_recaptured_as_link() {
        let spans = tokenize(
            "a ![rick roll](https://i.imgur.com/aKaOqIh.gif) and [to boot dev](https://www.boot.dev)",
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("a "),
                Span::image("rick roll", "https://i.imgur.com/aKaOqIh.gif"),
                Span::plain(" and "),
                Span::link("to boot dev", "https://www.boot.dev"),
            ]
        );
    }

    #[test]
    fn test_all_inline_styles_together() {
        let spans = tokenize(
            "This is **text** with an _italic_ word and a `code block` and an \
             ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)",
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("This is "),
                Span::styled("text", SpanKind::Bold),
                Span::plain(" with an "),
                Span::styled("italic", SpanKind::Italic),
                Span::plain(" word and a "),
                Span::styled("code block", SpanKind::Code),
                Span::plain(" and an "),
                Span::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                Span::plain(" and a "),
                Span::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn test_leading_delimiter_drops_empty_part() {
        let spans = tokenize("**bold** trailing").unwrap();
        assert_eq!(
            spans,
            vec![
                Span::styled("bold", SpanKind::Bold),
                Span::plain(" trailing"),
            ]
        );
    }

    #[test]
    fn test_link_text_not_resplit_by_later_passes() {
        // The underscore inside the link text is already typed as Link and
        // must not trip the italic pass.
        let spans = tokenize("[some_page](https://example.com/some_page)").unwrap();
        assert_eq!(
            spans,
            vec![Span::link("some_page", "https://example.com/some_page")]
        );
    }
}
