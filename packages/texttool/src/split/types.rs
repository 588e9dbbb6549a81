//! Types for the chapter splitting system.

use crate::words::count_words;

/// A paragraph of the chapter body with its word count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Paragraph text, exactly as it appeared between blank lines.
    pub text: String,

    /// Number of words in `text`.
    pub word_count: usize,
}

impl Paragraph {
    /// Create a paragraph and count its words.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let word_count = count_words(&text);
        Self { text, word_count }
    }
}

/// Parsed chapter title: keyword, number and trailing title text.
///
/// `"Chapter 5: The Escape"` parses to base `Chapter`, number `5` and
/// suffix `: The Escape`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterTitle {
    /// Keyword as written in the title line.
    pub base: String,

    /// Chapter number digits.
    pub number: String,

    /// Trimmed remainder of the title line, possibly empty.
    pub suffix: String,
}

impl ChapterTitle {
    /// Create a chapter title.
    #[must_use]
    pub fn new(
        base: impl Into<String>,
        number: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            number: number.into(),
            suffix: suffix.into(),
        }
    }

    /// Title used when the first line is not a recognised chapter title.
    ///
    /// The number is a placeholder label, not a real chapter number.
    #[must_use]
    pub fn fallback(base: impl Into<String>) -> Self {
        Self::new(base, crate::config::DEFAULT_CHAPTER_NUMBER, "")
    }

    /// Title for the `index`-th part (1-based), e.g. `Chapter 5.2: The Escape`.
    #[must_use]
    pub fn numbered(&self, index: usize) -> String {
        format!("{} {}.{index}{}", self.base, self.number, self.suffix)
    }
}

/// Contiguous run of paragraphs assigned to one output part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitGroup {
    /// Paragraphs in original order.
    pub paragraphs: Vec<Paragraph>,
}

impl SplitGroup {
    /// Total words in the group.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.word_count).sum()
    }

    /// Paragraphs rejoined with blank lines.
    #[must_use]
    pub fn body(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Whether no paragraph was assigned to this group.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

/// Result of planning a split: the parsed title and one group per part.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitPlan {
    /// Title shared by all parts, renumbered per part.
    pub title: ChapterTitle,

    /// Groups in output order.
    pub groups: Vec<SplitGroup>,

    /// Word count each group aims for.
    pub target_per_split: f64,
}

impl SplitPlan {
    /// Render each group as `"{title}\n\n{body}"`.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.groups
            .iter()
            .enumerate()
            .map(|(i, group)| format!("{}\n\n{}", self.title.numbered(i + 1), group.body()))
            .collect()
    }

    /// Largest distance of any group's word count from the target.
    #[must_use]
    pub fn max_deviation(&self) -> f64 {
        self.groups
            .iter()
            .map(|g| (g.word_count() as f64 - self.target_per_split).abs())
            .fold(0.0, f64::max)
    }
}
