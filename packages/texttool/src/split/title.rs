//! Chapter title recognition.

use regex::{Regex, RegexBuilder};

use super::types::ChapterTitle;

/// Matches a title line of the form `<keyword> <digits><rest>`.
///
/// Keywords are escaped and tried in list order; matching ignores case.
#[derive(Debug, Clone)]
pub struct TitleMatcher {
    pattern: Regex,
}

impl TitleMatcher {
    /// Build a matcher for `keywords`.
    ///
    /// Blank keywords are ignored. Returns `None` when no usable keyword
    /// remains or the pattern cannot be built; every line is then treated
    /// as body text.
    #[must_use]
    pub fn new<K: AsRef<str>>(keywords: &[K]) -> Option<Self> {
        let alternatives: Vec<String> = keywords
            .iter()
            .map(AsRef::as_ref)
            .filter(|keyword| !keyword.trim().is_empty())
            .map(regex::escape)
            .collect();

        if alternatives.is_empty() {
            return None;
        }

        let source = format!(r"^({})\s*([0-9]+)(.*)$", alternatives.join("|"));
        match RegexBuilder::new(&source).case_insensitive(true).build() {
            Ok(pattern) => Some(Self { pattern }),
            Err(e) => {
                tracing::warn!(error = %e, "Could not build chapter title pattern");
                None
            }
        }
    }

    /// Parse `line` as a chapter title.
    #[must_use]
    pub fn parse(&self, line: &str) -> Option<ChapterTitle> {
        let captures = self.pattern.captures(line)?;
        let base = captures.get(1)?.as_str();
        let number = captures.get(2)?.as_str();
        let suffix = captures.get(3).map_or("", |m| m.as_str()).trim();

        Some(ChapterTitle::new(base, number, suffix))
    }
}

/// Parse `line` as a chapter title using `keywords`.
///
/// # Examples
/// ```
/// use texttool::split::parse_title;
///
/// let title = parse_title("Chapter 5: The Escape", &["Chapter"]).unwrap();
/// assert_eq!(title.base, "Chapter");
/// assert_eq!(title.number, "5");
/// assert_eq!(title.suffix, ": The Escape");
///
/// assert!(parse_title("Once upon a time", &["Chapter"]).is_none());
/// ```
#[must_use]
pub fn parse_title<K: AsRef<str>>(line: &str, keywords: &[K]) -> Option<ChapterTitle> {
    TitleMatcher::new(keywords)?.parse(line)
}
