//! Error types for the text tool.
//!
//! The transformations themselves never fail on unusual input; these errors
//! cover rule compilation, argument validation and settings loading.

use thiserror::Error;

use crate::config::MAX_SPLITS;

/// Main error type for the text tool library.
#[derive(Debug, Error)]
pub enum TextToolError {
    /// A find/replace rule could not be compiled into a pattern.
    #[error("Invalid pattern for rule '{find}': {source}")]
    InvalidPattern {
        find: String,
        #[source]
        source: regex::Error,
    },

    /// Split count outside the supported range.
    #[error("Invalid split count: {0}. Expected a number between 1 and {max}", max = MAX_SPLITS)]
    InvalidSplitCount(usize),

    /// Chapter keyword that can never match a title line.
    #[error("Invalid chapter keyword: '{0}'. Keywords must be non-empty and fit on one line")]
    InvalidKeyword(String),

    /// Requested mode does not exist in the settings.
    #[error("Unknown mode: '{0}'")]
    UnknownMode(String),

    /// Settings document is structurally invalid.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML settings could not be parsed.
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON settings could not be parsed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for text tool operations.
pub type Result<T> = std::result::Result<T, TextToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TextToolError::InvalidSplitCount(0);
        assert!(err.to_string().contains('0'));
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn test_unknown_mode_display() {
        let err = TextToolError::UnknownMode("Novel".to_string());
        assert_eq!(err.to_string(), "Unknown mode: 'Novel'");
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        use std::error::Error as _;

        let source = regex::Regex::new("(").unwrap_err();
        let err = TextToolError::InvalidPattern {
            find: "(".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid pattern for rule '('"));
        assert!(err.source().is_some());
    }
}
