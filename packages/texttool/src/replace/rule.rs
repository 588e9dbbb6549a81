//! Find/replace rule definition.

use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use crate::config::DEFAULT_PATTERN_SIZE_LIMIT;
use crate::error::{Result, TextToolError};

/// A single find/replace directive.
///
/// `find` is always matched literally. Field names follow the camelCase
/// keys of the settings document; both flags default to `false` so older
/// documents without them still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Literal text to search for. Empty means the rule does nothing.
    #[serde(default)]
    pub find: String,

    /// Text inserted in place of each match.
    #[serde(default)]
    pub replace: String,

    /// Match with exact letter case.
    #[serde(default)]
    pub match_case: bool,

    /// Only match when not surrounded by word characters.
    #[serde(default)]
    pub whole_word: bool,
}

impl Rule {
    /// Create a case-insensitive, substring-matching rule.
    #[must_use]
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
            match_case: false,
            whole_word: false,
        }
    }

    /// Set case sensitivity.
    #[must_use]
    pub fn with_match_case(mut self, match_case: bool) -> Self {
        self.match_case = match_case;
        self
    }

    /// Set whole-word matching.
    #[must_use]
    pub fn with_whole_word(mut self, whole_word: bool) -> Self {
        self.whole_word = whole_word;
        self
    }

    /// Whether the rule has nothing to search for.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.find.is_empty()
    }

    /// Regex source for this rule, with `find` escaped to a literal.
    ///
    /// Whole-word rules use half word boundaries so only the outside of the
    /// match is checked: `-x` still matches in `a -x b`.
    #[must_use]
    pub fn pattern_source(&self) -> String {
        let escaped = regex::escape(&self.find);
        if self.whole_word {
            format!(r"\b{{start-half}}{escaped}\b{{end-half}}")
        } else {
            escaped
        }
    }

    /// Compile the rule into a regex.
    ///
    /// Returns `Ok(None)` for a no-op rule.
    pub fn compile(&self) -> Result<Option<Regex>> {
        self.compile_with_size_limit(DEFAULT_PATTERN_SIZE_LIMIT)
    }

    /// Compile the rule, failing if the compiled pattern exceeds `size_limit` bytes.
    pub fn compile_with_size_limit(&self, size_limit: usize) -> Result<Option<Regex>> {
        if self.is_noop() {
            return Ok(None);
        }

        RegexBuilder::new(&self.pattern_source())
            .case_insensitive(!self.match_case)
            .size_limit(size_limit)
            .build()
            .map(Some)
            .map_err(|source| TextToolError::InvalidPattern {
                find: self.find.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_builder() {
        let rule = Rule::new("cat", "dog")
            .with_match_case(true)
            .with_whole_word(true);

        assert_eq!(rule.find, "cat");
        assert_eq!(rule.replace, "dog");
        assert!(rule.match_case);
        assert!(rule.whole_word);
    }

    #[test]
    fn test_empty_find_is_noop() {
        let rule = Rule::new("", "anything");
        assert!(rule.is_noop());
        assert!(rule.compile().unwrap().is_none());
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let regex = Rule::new("a.b(c)*", "x").compile().unwrap().unwrap();
        assert!(regex.is_match("xx a.b(c)* yy"));
        assert!(!regex.is_match("aXbcc"));
    }

    #[test]
    fn test_case_insensitive_by_default() {
        let regex = Rule::new("cat", "dog").compile().unwrap().unwrap();
        assert!(regex.is_match("CAT"));
        assert!(regex.is_match("Cat"));
    }

    #[test]
    fn test_match_case() {
        let regex = Rule::new("cat", "dog")
            .with_match_case(true)
            .compile()
            .unwrap()
            .unwrap();
        assert!(regex.is_match("cat"));
        assert!(!regex.is_match("Cat"));
    }

    #[test]
    fn test_whole_word() {
        let regex = Rule::new("cat", "dog")
            .with_whole_word(true)
            .compile()
            .unwrap()
            .unwrap();
        assert!(regex.is_match("a cat."));
        assert!(regex.is_match("cat"));
        assert!(!regex.is_match("category"));
        assert!(!regex.is_match("bobcat"));
    }

    #[test]
    fn test_whole_word_with_punctuation_edges() {
        let regex = Rule::new("-x", "y")
            .with_whole_word(true)
            .compile()
            .unwrap()
            .unwrap();
        assert!(regex.is_match("a -x b"));
        assert!(!regex.is_match("a -xy b"));
    }

    #[test]
    fn test_whole_word_unicode_letters() {
        let regex = Rule::new("anh", "em")
            .with_whole_word(true)
            .compile()
            .unwrap()
            .unwrap();
        assert!(regex.is_match("anh ấy"));
        assert!(!regex.is_match("ánhanh"));
    }

    #[test]
    fn test_size_limit_exceeded() {
        let result = Rule::new("a rather long literal", "x").compile_with_size_limit(16);
        assert!(matches!(
            result,
            Err(TextToolError::InvalidPattern { ref find, .. }) if find == "a rather long literal"
        ));
    }

    #[test]
    fn test_deserialize_missing_flags() {
        let rule: Rule = serde_json::from_str(r#"{"find": "a", "replace": "b"}"#).unwrap();
        assert_eq!(rule, Rule::new("a", "b"));
    }

    #[test]
    fn test_deserialize_camel_case_flags() {
        let rule: Rule = serde_json::from_str(
            r#"{"find": "a", "replace": "b", "matchCase": true, "wholeWord": true}"#,
        )
        .unwrap();
        assert!(rule.match_case);
        assert!(rule.whole_word);
    }
}
