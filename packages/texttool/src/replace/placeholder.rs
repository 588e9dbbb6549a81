//! Fresh placeholder tokens for two-phase substitution.

use uuid::Uuid;

/// Generates placeholder tokens that do not occur in a given text.
///
/// Each token combines a per-generator counter with a random v4 UUID, and
/// is regenerated until it is absent from the text it will be inserted into.
#[derive(Debug, Default)]
pub struct PlaceholderGenerator {
    counter: u64,
}

impl PlaceholderGenerator {
    /// Create a new generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce a token that does not occur in `text`.
    pub fn fresh_for(&mut self, text: &str) -> String {
        loop {
            self.counter += 1;
            let token = format!(
                "__TT_HIGHLIGHT_{}_{}__",
                self.counter,
                Uuid::new_v4().simple()
            );
            if !text.contains(&token) {
                return token;
            }
            tracing::debug!(token = %token, "Placeholder collided with input, regenerating");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_distinct() {
        let mut generator = PlaceholderGenerator::new();
        let first = generator.fresh_for("");
        let second = generator.fresh_for("");
        assert_ne!(first, second);
    }

    #[test]
    fn test_token_absent_from_text() {
        let mut generator = PlaceholderGenerator::new();
        let text = "__TT_HIGHLIGHT_1_ is already here";
        let token = generator.fresh_for(text);
        assert!(!text.contains(&token));
    }

    #[test]
    fn test_token_has_no_regex_significant_whitespace() {
        let mut generator = PlaceholderGenerator::new();
        let token = generator.fresh_for("text");
        assert!(!token.chars().any(char::is_whitespace));
    }
}
