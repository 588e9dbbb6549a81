//! Chapter splitter that plans and renders word-balanced parts.

use super::strategy::{target_per_split, GreedySplitStrategy, SplitStrategy};
use super::title::TitleMatcher;
use super::types::{ChapterTitle, Paragraph, SplitGroup, SplitPlan};
use crate::config::{DEFAULT_CHAPTER_BASE, PARAGRAPH_BREAK};

/// Split a body into non-empty paragraphs on blank lines.
#[must_use]
pub fn extract_paragraphs(body: &str) -> Vec<Paragraph> {
    PARAGRAPH_BREAK
        .split(body)
        .filter(|segment| !segment.trim().is_empty())
        .map(Paragraph::new)
        .collect()
}

/// Splits a chapter into numbered parts of similar word count.
///
/// The first line is parsed as a chapter title; the remaining paragraphs
/// are distributed over the parts by the configured [`SplitStrategy`],
/// always in original order and never cut in the middle.
pub struct ChapterSplitter<S: SplitStrategy> {
    strategy: S,
    fallback_base: String,
}

impl<S: SplitStrategy> ChapterSplitter<S> {
    /// Create a splitter with the given strategy.
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            fallback_base: DEFAULT_CHAPTER_BASE.to_string(),
        }
    }

    /// Set the title word used when the first line is not a chapter title.
    #[must_use]
    pub fn with_fallback_base(mut self, base: impl Into<String>) -> Self {
        self.fallback_base = base.into();
        self
    }

    /// Plan a split without rendering it.
    ///
    /// Returns `None` for blank input, zero parts, or a body without any
    /// paragraphs.
    #[must_use]
    pub fn plan<K: AsRef<str>>(
        &self,
        text: &str,
        num_splits: usize,
        keywords: &[K],
    ) -> Option<SplitPlan> {
        let text = text.replace("\r\n", "\n");
        let text = text.trim();
        if text.is_empty() || num_splits == 0 {
            return None;
        }

        let (first_line, rest) = text.split_once('\n').unwrap_or((text, ""));
        let rest = rest.trim();

        let parsed = TitleMatcher::new(keywords).and_then(|matcher| matcher.parse(first_line));
        let (title, body) = match parsed {
            Some(title) => (title, rest.to_string()),
            None => {
                tracing::debug!(line = %first_line, "First line is not a chapter title");
                let body = format!("{first_line}\n{rest}");
                (
                    ChapterTitle::fallback(self.fallback_base.as_str()),
                    body.trim().to_string(),
                )
            }
        };

        let paragraphs = extract_paragraphs(&body);
        if paragraphs.is_empty() {
            return None;
        }

        let word_counts: Vec<usize> = paragraphs.iter().map(|p| p.word_count).collect();
        let target = target_per_split(&word_counts, num_splits);
        let assignment = self.strategy.assign(&word_counts, num_splits);

        tracing::debug!(
            paragraphs = paragraphs.len(),
            num_splits,
            target,
            "Planned chapter split"
        );

        let mut groups = vec![SplitGroup::default(); num_splits];
        let last_group = num_splits - 1;
        for (paragraph, group) in paragraphs.into_iter().zip(assignment) {
            groups[group.min(last_group)].paragraphs.push(paragraph);
        }

        Some(SplitPlan {
            title,
            groups,
            target_per_split: target,
        })
    }

    /// Split `text` into `num_splits` titled parts.
    ///
    /// Returns an empty list when there is nothing to split.
    #[must_use]
    pub fn split<K: AsRef<str>>(
        &self,
        text: &str,
        num_splits: usize,
        keywords: &[K],
    ) -> Vec<String> {
        self.plan(text, num_splits, keywords)
            .map(|plan| plan.render())
            .unwrap_or_default()
    }
}

impl Default for ChapterSplitter<GreedySplitStrategy> {
    fn default() -> Self {
        Self::new(GreedySplitStrategy)
    }
}

/// Split a chapter with the greedy strategy.
///
/// # Examples
/// ```
/// use texttool::split_chapter;
///
/// let parts = split_chapter(
///     "Chapter 5: The Escape\n\npara one\n\npara two",
///     2,
///     &["Chapter"],
/// );
/// assert_eq!(
///     parts,
///     vec![
///         "Chapter 5.1: The Escape\n\npara one",
///         "Chapter 5.2: The Escape\n\npara two",
///     ]
/// );
/// ```
#[must_use]
pub fn split_chapter<K: AsRef<str>>(text: &str, num_splits: usize, keywords: &[K]) -> Vec<String> {
    ChapterSplitter::default().split(text, num_splits, keywords)
}
