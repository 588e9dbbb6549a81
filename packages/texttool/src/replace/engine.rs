//! Replacement engine that applies an ordered rule list to a text.

use regex::Captures;

use super::markup::{format_paragraphs, HighlightMarkup};
use super::placeholder::PlaceholderGenerator;
use super::rule::Rule;
use crate::config::DEFAULT_PATTERN_SIZE_LIMIT;

/// Result of applying a rule list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaceOutcome {
    /// Paragraph-formatted text with highlighted replacements.
    pub text: String,

    /// Number of matches replaced across all rules.
    pub replacements: usize,

    /// Non-fatal problems, one per skipped rule.
    pub warnings: Vec<String>,
}

/// Engine for ordered find/replace with highlighting.
///
/// Rules run in list order and each rule sees the output of the rules
/// before it, markup included, so substitutions can chain. Within a single
/// rule every match is first swapped for a fresh placeholder and only then
/// for the highlighted replacement, so a rule never rescans its own output.
#[derive(Debug, Clone)]
pub struct ReplaceEngine {
    markup: HighlightMarkup,
    size_limit: usize,
}

impl ReplaceEngine {
    /// Create an engine with the default highlight marker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            markup: HighlightMarkup::default(),
            size_limit: DEFAULT_PATTERN_SIZE_LIMIT,
        }
    }

    /// Limit the compiled size of each rule's pattern.
    #[must_use]
    pub fn with_size_limit(mut self, size_limit: usize) -> Self {
        self.size_limit = size_limit;
        self
    }

    /// Use a custom highlight marker.
    #[must_use]
    pub fn with_markup(mut self, markup: HighlightMarkup) -> Self {
        self.markup = markup;
        self
    }

    /// Apply `rules` to `text` and format the result into paragraphs.
    ///
    /// Rules whose pattern cannot be built are skipped and reported in
    /// [`ReplaceOutcome::warnings`]; the remaining rules still apply.
    #[must_use]
    pub fn apply(&self, text: &str, rules: &[Rule]) -> ReplaceOutcome {
        let mut placeholders = PlaceholderGenerator::new();
        let mut current = text.to_string();
        let mut replacements = 0;
        let mut warnings = Vec::new();

        for (index, rule) in rules.iter().enumerate() {
            let pattern = match rule.compile_with_size_limit(self.size_limit) {
                Ok(Some(pattern)) => pattern,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(
                        rule = index + 1,
                        find = %rule.find,
                        error = %e,
                        "Skipping rule"
                    );
                    warnings.push(format!("Rule {}: {e}", index + 1));
                    continue;
                }
            };

            let placeholder = placeholders.fresh_for(&current);
            let mut matches = 0;
            let substituted = pattern.replace_all(&current, |_: &Captures<'_>| {
                matches += 1;
                placeholder.as_str()
            });

            if matches == 0 {
                continue;
            }

            let highlighted = self.markup.wrap(&rule.replace);
            current = substituted.replace(&placeholder, &highlighted);
            replacements += matches;

            tracing::debug!(rule = index + 1, find = %rule.find, matches, "Applied rule");
        }

        ReplaceOutcome {
            text: format_paragraphs(&current),
            replacements,
            warnings,
        }
    }
}

impl Default for ReplaceEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply `rules` to `text` with the default engine.
///
/// # Examples
/// ```
/// use texttool::{apply_rules, Rule};
///
/// let rules = [Rule::new("a", "b"), Rule::new("b", "c")];
/// assert_eq!(
///     apply_rules("a", &rules),
///     r#"<p><span class="highlight"><span class="highlight">c</span></span></p>"#
/// );
/// ```
#[must_use]
pub fn apply_rules(text: &str, rules: &[Rule]) -> String {
    ReplaceEngine::new().apply(text, rules).text
}
