//! Raw entry snapshots handed over by the extraction collaborator

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use super::error::SnapshotError;
use crate::Entry;
use crate::patterns::TagParser;

/// One entry as extracted from host content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RawEntry {
    /// Identifier; `faq-{index}` when absent
    #[serde(default)]
    pub id: Option<String>,
    pub question: String,
    #[serde(default)]
    pub answer: String,
    /// Raw tag fields, each possibly holding several tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RawEntry {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: None,
            question: question.into(),
            answer: answer.into(),
            tags,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Convert raw entries into engine entries
///
/// Entries without a question are skipped. Missing ids default to
/// `faq-{index}` where `index` is the position in `raw`.
///
/// # Errors
/// Returns `SnapshotError::DuplicateId` if two entries share an id.
pub fn entries_from_raw(raw: Vec<RawEntry>, parser: &TagParser) -> Result<Vec<Entry>, SnapshotError> {
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(raw.len());

    for (index, item) in raw.into_iter().enumerate() {
        let question = item.question.trim();
        if question.is_empty() {
            debug!(index, "skipping entry without question");
            continue;
        }

        let id = item
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| format!("faq-{index}"));
        if !seen.insert(id.clone()) {
            return Err(SnapshotError::DuplicateId(id));
        }

        entries.push(Entry::new(id, question, item.answer, item.tags, parser));
    }

    Ok(entries)
}

/// Decode a JSON array of raw entries
///
/// # Errors
/// Returns `SnapshotError::Json` for malformed JSON and
/// `SnapshotError::DuplicateId` for clashing ids.
///
/// # Examples
/// ```
/// # use faqtree::TagParser;
/// # use faqtree::discovery::decode_snapshot;
/// let json = r#"[{"question": "Reset password", "answer": "<p>Use the link</p>", "tags": ["ns:account/security"]}]"#;
/// let entries = decode_snapshot(json, &TagParser::new("ns")).unwrap();
/// assert_eq!(entries[0].id, "faq-0");
/// assert_eq!(entries[0].category, "security");
/// ```
pub fn decode_snapshot(json: &str, parser: &TagParser) -> Result<Vec<Entry>, SnapshotError> {
    let raw: Vec<RawEntry> = serde_json::from_str(json)?;
    entries_from_raw(raw, parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::parser;

    #[test]
    fn test_default_ids_follow_snapshot_position() {
        let raw = vec![
            RawEntry::new("First", "", vec![]),
            RawEntry::new("  ", "skipped", vec![]),
            RawEntry::new("Third", "", vec![]).with_id("custom"),
            RawEntry::new("Fourth", "", vec![]),
        ];
        let entries = entries_from_raw(raw, &parser()).unwrap();
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["faq-0", "custom", "faq-3"]);
    }

    #[test]
    fn test_question_trimmed_and_category_derived() {
        let raw = vec![RawEntry::new("  Pricing plans \n", "", vec!["ns:billing".into()])];
        let entries = entries_from_raw(raw, &parser()).unwrap();
        assert_eq!(entries[0].question, "Pricing plans");
        assert_eq!(entries[0].category, "billing");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = vec![
            RawEntry::new("A", "", vec![]).with_id("x"),
            RawEntry::new("B", "", vec![]).with_id("x"),
        ];
        let err = entries_from_raw(raw, &parser()).unwrap_err();
        assert!(matches!(err, SnapshotError::DuplicateId(id) if id == "x"));
    }

    #[test]
    fn test_decode_snapshot_defaults_missing_fields() {
        let entries = decode_snapshot(r#"[{"question": "Only a question"}]"#, &parser()).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].answer.is_empty());
        assert!(entries[0].tags.is_empty());
        assert!(entries[0].category.is_empty());
    }

    #[test]
    fn test_decode_snapshot_invalid_json() {
        let err = decode_snapshot("{", &parser()).unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));
    }

    #[test]
    fn test_decode_empty_snapshot() {
        assert!(decode_snapshot("[]", &parser()).unwrap().is_empty());
    }
}
