//! Testing utilities for faqtree
//!
//! Shared fixtures: a parser for the `ns` namespace, entry builders, a
//! small sample set and a content source whose snapshots grow over time.
//!
//! Only available when compiled with `cfg(test)`.

use crate::Entry;
use crate::config::FaqConfig;
use crate::discovery::{ContentSource, RawEntry};
use crate::patterns::TagParser;
use crate::ui::FaqView;

/// Parser for the test namespace `ns`
#[must_use]
pub fn parser() -> TagParser {
    TagParser::new("ns")
}

/// Default configuration with the test namespace
#[must_use]
pub fn test_config() -> FaqConfig {
    let mut config = FaqConfig::default();
    config.tags.namespace = "ns".to_string();
    config
}

/// Build an entry with one tag field per element of `tags`
#[must_use]
pub fn entry(id: &str, question: &str, answer: &str, tags: &[&str]) -> Entry {
    Entry::new(
        id,
        question,
        answer,
        tags.iter().map(|tag| (*tag).to_string()).collect(),
        &parser(),
    )
}

/// Two entries: one under `account/security`, one under `billing`
#[must_use]
pub fn sample_entries() -> Vec<Entry> {
    vec![
        entry(
            "1",
            "Reset password",
            "<p>Use the reset link on the sign-in page.</p>",
            &["ns:account/security"],
        ),
        entry(
            "2",
            "Pricing plans",
            "<p>Our pricing page lists every plan.</p>",
            &["ns:billing"],
        ),
    ]
}

/// View over [`sample_entries`]
///
/// # Panics
/// Never: the sample set is not empty.
#[must_use]
pub fn sample_view() -> FaqView {
    FaqView::new(sample_entries(), &test_config()).expect("sample entries are not empty")
}

/// Content source returning snapshots of the given sizes in turn
///
/// Once the sizes run out the last one repeats, like a host page that has
/// finished materializing.
#[derive(Debug, Clone)]
pub struct GrowingSource {
    sizes: Vec<usize>,
    reads: usize,
}

impl GrowingSource {
    #[must_use]
    pub const fn new(sizes: Vec<usize>) -> Self {
        Self { sizes, reads: 0 }
    }
}

impl ContentSource for GrowingSource {
    fn snapshot(&mut self) -> Vec<RawEntry> {
        let size = self
            .sizes
            .get(self.reads)
            .or_else(|| self.sizes.last())
            .copied()
            .unwrap_or(0);
        self.reads += 1;

        (0..size)
            .map(|i| {
                RawEntry::new(format!("Question {i}"), format!("Answer {i}"), vec![format!("ns:topic{i}")])
                    .with_id(format!("q{i}"))
            })
            .collect()
    }
}
