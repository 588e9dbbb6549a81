//! Configuration constants and validation functions for the text tool.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, TextToolError};

/// Chapter keywords recognised when no settings are supplied.
pub const DEFAULT_CHAPTER_KEYWORDS: [&str; 4] = ["Chương", "Chapter", "Phần", "Hồi"];

/// Title word used when the first line is not a recognised chapter title.
pub const DEFAULT_CHAPTER_BASE: &str = "Chương";

/// Chapter number used when the first line is not a recognised chapter title.
///
/// This is a fallback label, not a meaningful chapter number.
pub const DEFAULT_CHAPTER_NUMBER: &str = "1";

/// Name of the mode created in fresh settings.
pub const DEFAULT_MODE_NAME: &str = "Mặc định";

/// Class carried by the highlight marker around replaced text.
pub const HIGHLIGHT_CLASS: &str = "highlight";

/// Upper bound in bytes on a compiled find pattern.
pub const DEFAULT_PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Largest number of parts a chapter may be split into.
pub const MAX_SPLITS: usize = 100;

/// Blank-line boundary between paragraphs: a newline, optional whitespace, a newline.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Validate a requested split count.
///
/// # Examples
/// ```
/// use texttool::config::validate_split_count;
///
/// assert!(validate_split_count(3).is_ok());
/// assert!(validate_split_count(0).is_err());
/// ```
pub fn validate_split_count(num_splits: usize) -> Result<()> {
    if (1..=MAX_SPLITS).contains(&num_splits) {
        Ok(())
    } else {
        Err(TextToolError::InvalidSplitCount(num_splits))
    }
}

/// Validate a chapter keyword.
///
/// Keywords are matched against a single title line, so they must be
/// non-empty after trimming and must not contain line breaks.
///
/// # Examples
/// ```
/// use texttool::config::validate_keyword;
///
/// assert!(validate_keyword("Chapter").is_ok());
/// assert!(validate_keyword("  ").is_err());
/// ```
pub fn validate_keyword(keyword: &str) -> Result<()> {
    if keyword.trim().is_empty() || keyword.contains(['\n', '\r']) {
        Err(TextToolError::InvalidKeyword(keyword.to_string()))
    } else {
        Ok(())
    }
}
