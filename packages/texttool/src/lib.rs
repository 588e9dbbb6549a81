//! Text tool - Word counting, highlighted find/replace and chapter splitting.
//!
//! This crate provides the text operations behind the `texttool` binary:
//! counting words, applying ordered find/replace rules that mark every
//! replacement for display, and cutting a chapter into parts of similar
//! length with renumbered titles.
//!
//! # Example
//!
//! ```
//! use texttool::{apply_rules, count_words, split_chapter, Rule};
//!
//! assert_eq!(count_words("hello  world\n"), 2);
//!
//! let html = apply_rules("cat", &[Rule::new("cat", "dog")]);
//! assert_eq!(html, r#"<p><span class="highlight">dog</span></p>"#);
//!
//! let parts = split_chapter("Chapter 2\n\nfirst\n\nsecond", 2, &["Chapter"]);
//! assert_eq!(parts[1], "Chapter 2.2\n\nsecond");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Defaults, constants and validation
//! - [`error`]: Error types and Result alias
//! - [`words`]: Word counting
//! - [`replace`]: Find/replace engine with highlight markup
//! - [`split`]: Chapter splitting and title renumbering
//! - [`settings`]: Rule modes and chapter keywords loaded from a file
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod replace;
pub mod settings;
pub mod split;
pub mod words;

// Re-export main functions
pub use replace::apply_rules;
pub use split::split_chapter;
pub use words::count_words;

// Re-export commonly used items
pub use error::{Result, TextToolError};
pub use replace::{ReplaceEngine, Rule};
pub use settings::Settings;
pub use split::ChapterSplitter;
