//! Word counting.
//!
//! A word is any maximal run of non-whitespace characters, the convention
//! word processors use for their status-bar counters. Punctuation-only
//! tokens such as "--" count as words.

/// Count the words in `text`.
///
/// # Examples
/// ```
/// use texttool::count_words;
///
/// assert_eq!(count_words("a   b"), 2);
/// assert_eq!(count_words("  x "), 1);
/// assert_eq!(count_words(""), 0);
/// ```
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
