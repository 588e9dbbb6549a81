//! Chapter splitting into word-balanced, renumbered parts.
//!
//! A chapter's first line may carry a title such as "Chapter 5: The Escape".
//! The body is cut at paragraph boundaries into N parts whose word counts
//! approach an equal share, and each part gets a dot-numbered title
//! ("Chapter 5.1: The Escape", "Chapter 5.2: The Escape", ...).

mod engine;
mod strategy;
mod title;
mod types;

pub use engine::{extract_paragraphs, split_chapter, ChapterSplitter};
pub use strategy::{target_per_split, BalancedSplitStrategy, GreedySplitStrategy, SplitStrategy};
pub use title::{parse_title, TitleMatcher};
pub use types::{ChapterTitle, Paragraph, SplitGroup, SplitPlan};
