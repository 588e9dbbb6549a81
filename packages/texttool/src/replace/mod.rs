//! Ordered find/replace with highlighted output.
//!
//! Rules are applied one after another with two-phase substitution
//! (match -> placeholder -> highlighted replacement), then the text is
//! formatted into paragraph markup.

mod engine;
mod markup;
mod placeholder;
mod rule;

pub use engine::{apply_rules, ReplaceEngine, ReplaceOutcome};
pub use markup::{format_paragraphs, plain_text, HighlightMarkup};
pub use placeholder::PlaceholderGenerator;
pub use rule::Rule;
