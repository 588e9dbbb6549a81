//! Settings document: named rule modes and chapter keywords.
//!
//! The document uses the same shape the browser version of the tool
//! exported, so an exported JSON file can be used as-is:
//!
//! ```json
//! {
//!   "modes": { "Mặc định": { "pairs": [{ "find": "a", "replace": "b" }] } },
//!   "activeMode": "Mặc định",
//!   "chapterKeywords": ["Chương", "Chapter"]
//! }
//! ```
//!
//! YAML files with the same keys are accepted too.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::{validate_keyword, DEFAULT_CHAPTER_KEYWORDS, DEFAULT_MODE_NAME};
use crate::error::{Result, TextToolError};
use crate::replace::Rule;

/// A named list of find/replace rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Mode {
    /// Rules in application order.
    #[serde(default)]
    pub pairs: Vec<Rule>,
}

impl Mode {
    /// Create a mode from its rules.
    #[must_use]
    pub fn new(pairs: Vec<Rule>) -> Self {
        Self { pairs }
    }
}

/// Complete settings document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Modes by name.
    pub modes: BTreeMap<String, Mode>,

    /// Mode used when none is requested explicitly.
    pub active_mode: String,

    /// Keywords that introduce a chapter title line.
    #[serde(default = "default_keywords")]
    pub chapter_keywords: Vec<String>,
}

fn default_keywords() -> Vec<String> {
    DEFAULT_CHAPTER_KEYWORDS.iter().map(|k| (*k).to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        let mut modes = BTreeMap::new();
        modes.insert(
            DEFAULT_MODE_NAME.to_string(),
            Mode::new(vec![Rule::default()]),
        );

        Self {
            modes,
            active_mode: DEFAULT_MODE_NAME.to_string(),
            chapter_keywords: default_keywords(),
        }
    }
}

impl Settings {
    /// Load and validate settings from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML, anything else
    /// as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let settings = if is_yaml {
            Self::from_yaml(&content)?
        } else {
            Self::from_json(&content)?
        };

        tracing::debug!(
            path = %path.display(),
            modes = settings.modes.len(),
            keywords = settings.chapter_keywords.len(),
            "Loaded settings"
        );

        Ok(settings)
    }

    /// Parse and validate a JSON settings document.
    pub fn from_json(content: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse and validate a YAML settings document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Self = serde_yaml_ng::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the document is usable.
    ///
    /// Requires at least one mode, an active mode that exists, and chapter
    /// keywords that can match a title line.
    pub fn validate(&self) -> Result<()> {
        if self.modes.is_empty() {
            return Err(TextToolError::InvalidSettings(
                "at least one mode is required".to_string(),
            ));
        }
        if !self.modes.contains_key(&self.active_mode) {
            return Err(TextToolError::UnknownMode(self.active_mode.clone()));
        }
        for keyword in &self.chapter_keywords {
            validate_keyword(keyword)?;
        }
        Ok(())
    }

    /// The mode called `name`, or the active mode when `name` is `None`.
    pub fn mode(&self, name: Option<&str>) -> Result<&Mode> {
        let name = name.unwrap_or(self.active_mode.as_str());
        self.modes
            .get(name)
            .ok_or_else(|| TextToolError::UnknownMode(name.to_string()))
    }
}
