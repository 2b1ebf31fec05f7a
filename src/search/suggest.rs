//! Substring search and word suggestions over entry text
//!
//! Entry text is tokenized once when the index is built. Queries are
//! matched case-insensitively as plain substrings, with no ranking: results
//! come back in discovery order (entry order, question words before answer
//! words).

use crate::Entry;
use crate::config::SearchConfig;
use moka::sync::Cache;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;
use tracing::trace;

/// Markup tags, replaced by spaces to obtain plain text
static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("constant markup pattern"));

/// Characters trimmed from word boundaries
const WORD_PUNCTUATION: &[char] = &['.', ',', '?', '!', ';', ':', '(', ')'];

/// Replace markup tags with spaces
///
/// # Examples
/// ```
/// # use faqtree::search::suggest::strip_markup;
/// assert_eq!(strip_markup("<p>Hello <b>world</b></p>").split_whitespace().collect::<Vec<_>>(), vec!["Hello", "world"]);
/// ```
#[must_use]
pub fn strip_markup(markup: &str) -> String {
    MARKUP.replace_all(markup, " ").into_owned()
}

/// Split text into words of at least `min_len` characters, punctuation
/// trimmed from each boundary
#[must_use]
pub fn tokenize(text: &str, min_len: usize) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| word.chars().count() >= min_len)
        .map(|word| word.trim_matches(WORD_PUNCTUATION))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pre-tokenized text of one entry
#[derive(Debug, Clone)]
struct IndexedEntry {
    question: String,
    question_lower: String,
    /// Answer text used for visibility matching (plain or raw markup)
    haystack_lower: String,
    /// Question words followed by answer words
    words: Vec<String>,
}

/// Search index over one entry snapshot
///
/// Rebuilt together with the rest of the view; suggestion results are
/// memoized per lowercased query for the lifetime of the index.
pub struct SearchIndex {
    entries: Vec<IndexedEntry>,
    config: SearchConfig,
    cache: Cache<String, Vec<String>>,
}

impl SearchIndex {
    /// Tokenize every entry
    #[must_use]
    pub fn new(entries: &[Entry], config: &SearchConfig) -> Self {
        let entries = entries
            .iter()
            .map(|entry| {
                let plain_answer = strip_markup(&entry.answer);
                let mut words = tokenize(&entry.question, config.token_min_len);
                words.extend(tokenize(&plain_answer, config.token_min_len));

                let answer_text = if config.match_answer_markup {
                    entry.answer.as_str()
                } else {
                    plain_answer.as_str()
                };

                IndexedEntry {
                    question: entry.question.clone(),
                    question_lower: entry.question.to_lowercase(),
                    haystack_lower: answer_text.to_lowercase(),
                    words,
                }
            })
            .collect();

        Self {
            entries,
            config: config.clone(),
            cache: Cache::builder()
                .max_capacity(config.cache_capacity)
                .build(),
        }
    }

    /// Suggestions for a partial query
    ///
    /// Queries shorter than `min_query_len` characters yield nothing. Words
    /// of at least `suggestion_word_min_len` characters containing the query
    /// are offered, then the whole question when it contains the query and
    /// is shorter than `max_question_len`. Duplicates are dropped and at most
    /// `max_suggestions` are returned.
    #[must_use]
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        if query.chars().count() < self.config.min_query_len {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        if let Some(cached) = self.cache.get(&needle) {
            return cached;
        }

        let found = self.collect_suggestions(&needle);
        trace!(query, found = found.len(), "computed suggestions");
        self.cache.insert(needle, found.clone());
        found
    }

    fn collect_suggestions(&self, needle: &str) -> Vec<String> {
        let limit = self.config.max_suggestions;
        let mut seen = HashSet::new();
        let mut found = Vec::new();
        let mut offer = |candidate: &str| {
            if found.len() < limit && seen.insert(candidate.to_string()) {
                found.push(candidate.to_string());
            }
        };

        for entry in &self.entries {
            for word in &entry.words {
                if word.chars().count() >= self.config.suggestion_word_min_len
                    && word.to_lowercase().contains(needle)
                {
                    offer(word);
                }
            }

            if entry.question_lower.contains(needle)
                && entry.question.chars().count() < self.config.max_question_len
            {
                offer(&entry.question);
            }
        }

        found
    }

    /// Check whether entry `index` contains `query` in its question or answer
    ///
    /// Out-of-range indices never match.
    #[must_use]
    pub fn matches(&self, index: usize, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.entries.get(index).is_some_and(|entry| {
            entry.question_lower.contains(&needle) || entry.haystack_lower.contains(&needle)
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchIndex")
            .field("entries", &self.entries.len())
            .field("cached_queries", &self.cache.entry_count())
            .finish()
    }
}
