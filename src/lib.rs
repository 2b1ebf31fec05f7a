//! Faqtree - hierarchical tag filtering and search for question/answer lists
//!
//! This library turns a snapshot of question/answer entries carrying
//! namespaced hierarchical tags (`namespace:a/b/c`) into a counted category
//! tree, drives a cascading multi-level category filter over it, and offers
//! substring search with word suggestions. Category filtering and search are
//! mutually exclusive view modes over the same entries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod browse;
pub mod config;
pub mod discovery;
pub mod patterns;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

pub use crate::config::FaqConfig;
pub use patterns::TagParser;
pub use ui::FaqView;

/// Error enum, contains all failure states at the edges of the engine
///
/// Returned by [`FaqView::open`], which reads both a configuration file and
/// a content snapshot.
#[derive(Debug, Error)]
pub enum FaqError {
    /// Snapshot could not be decoded
    #[error("Snapshot error: {0}")]
    SnapshotError(#[from] discovery::SnapshotError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
}

/// One question/answer record
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Identifier, unique within one rendering
    pub id: String,
    /// Plain question text
    pub question: String,
    /// Answer markup
    pub answer: String,
    /// Raw tag fields as authored
    pub tags: Vec<String>,
    /// Name of the first individual tag, or empty
    pub category: String,
}

impl Entry {
    /// Create a new entry, deriving its display category with `parser`
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        tags: Vec<String>,
        parser: &TagParser,
    ) -> Self {
        let category = parser.category(&tags);
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            tags,
            category,
        }
    }
}
