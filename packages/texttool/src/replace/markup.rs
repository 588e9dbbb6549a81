//! Highlight and paragraph markup for replacement output.
//!
//! The markup contract with the renderer is small:
//!
//! - `<p>…</p>` wraps each paragraph
//! - `<br>` marks a line break inside a paragraph
//! - `<span class="highlight">…</span>` wraps replaced text
//!
//! Input text is passed through verbatim; sanitising it for display is the
//! renderer's job.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{HIGHLIGHT_CLASS, PARAGRAPH_BREAK};

/// Single line break, with or without a carriage return.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").expect("valid regex"));

/// Opening tag of a highlight span, whatever its class.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HIGHLIGHT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<span class="[^"]*">"#).expect("valid regex"));

/// Highlight marker placed around replaced text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightMarkup {
    class: String,
}

impl HighlightMarkup {
    /// Create a marker with a custom class.
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }

    /// Wrap `text` in the highlight marker.
    #[must_use]
    pub fn wrap(&self, text: &str) -> String {
        format!(r#"<span class="{}">{text}</span>"#, self.class)
    }
}

impl Default for HighlightMarkup {
    fn default() -> Self {
        Self::new(HIGHLIGHT_CLASS)
    }
}

/// Format text into paragraph markup.
///
/// Splits on blank lines, drops whitespace-only segments, wraps each
/// paragraph in `<p>` and turns the remaining newlines into `<br>`.
#[must_use]
pub fn format_paragraphs(text: &str) -> String {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| segment.trim_end_matches('\r'))
        .map(|segment| format!("<p>{}</p>", LINE_BREAK.replace_all(segment, "<br>")))
        .collect()
}

/// Strip replacement markup, returning plain text.
///
/// Paragraphs are separated by a blank line, `<br>` becomes a newline and
/// highlight spans are unwrapped.
#[must_use]
pub fn plain_text(annotated: &str) -> String {
    let unwrapped = HIGHLIGHT_OPEN.replace_all(annotated, "").replace("</span>", "");

    unwrapped
        .split("</p>")
        .filter_map(|paragraph| paragraph.strip_prefix("<p>"))
        .map(|paragraph| paragraph.replace("<br>", "\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_default_class() {
        let markup = HighlightMarkup::default();
        assert_eq!(markup.wrap("dog"), r#"<span class="highlight">dog</span>"#);
    }

    #[test]
    fn test_wrap_custom_class() {
        let markup = HighlightMarkup::new("hl");
        assert_eq!(markup.wrap(""), r#"<span class="hl"></span>"#);
    }

    #[test]
    fn test_format_paragraphs() {
        assert_eq!(
            format_paragraphs("first line\nsecond line\n\nnext paragraph"),
            "<p>first line<br>second line</p><p>next paragraph</p>"
        );
    }

    #[test]
    fn test_format_paragraphs_empty() {
        assert_eq!(format_paragraphs(""), "");
        assert_eq!(format_paragraphs("\n\n  \n"), "");
    }

    #[test]
    fn test_format_paragraphs_crlf() {
        assert_eq!(
            format_paragraphs("a\r\nb\r\n\r\nc"),
            "<p>a<br>b</p><p>c</p>"
        );
    }

    #[test]
    fn test_plain_text_round_trip() {
        let annotated = r#"<p>a <span class="highlight">dog</span><br>b</p><p>c</p>"#;
        assert_eq!(plain_text(annotated), "a dog\nb\n\nc");
    }

    #[test]
    fn test_plain_text_nested_highlights() {
        let annotated =
            r#"<p><span class="highlight"><span class="highlight">c</span></span></p>"#;
        assert_eq!(plain_text(annotated), "c");
    }

    #[test]
    fn test_plain_text_empty() {
        assert_eq!(plain_text(""), "");
    }
}
