//! Category filter matching
//!
//! A filter path selects an entry when one of the entry's tags lies at or
//! below it in the hierarchy. Matching respects segment boundaries:
//! `ns:category/ab` is not below `ns:category/a`.
//!
//! ```
//! # use faqtree::search::filter::tag_matches_filter;
//! assert!(tag_matches_filter("ns:a/b", "ns:a"));
//! assert!(!tag_matches_filter("ns:ab", "ns:a"));
//! ```

use crate::Entry;
use crate::patterns::{NAMESPACE_DELIMITER, PATH_DELIMITER, TagParser};

/// Check whether a single tag lies at or below a filter path
///
/// Both sides are trimmed. Exact equality matches; otherwise the paths are
/// compared without their namespace and the filter must end on a segment
/// boundary of the tag.
#[must_use]
pub fn tag_matches_filter(item_path: &str, filter_path: &str) -> bool {
    let item_path = item_path.trim();
    let filter_path = filter_path.trim();

    if item_path.is_empty() || filter_path.is_empty() {
        return false;
    }
    if item_path == filter_path {
        return true;
    }

    bare_path(item_path)
        .strip_prefix(bare_path(filter_path))
        .is_some_and(|remainder| remainder.is_empty() || remainder.starts_with(PATH_DELIMITER))
}

/// Path without its namespace; the whole string when there is none
fn bare_path(tag: &str) -> &str {
    tag.split_once(NAMESPACE_DELIMITER)
        .map_or(tag, |(_, path)| path)
}

/// Check whether any normalized tag path of an entry matches a filter path
///
/// Tags are compared after the same normalization the category tree uses
/// (marker located, empty segments dropped), so an entry counted under a
/// node is always shown when that node is selected.
#[must_use]
pub fn item_matches_filter(entry: &Entry, filter_path: &str, parser: &TagParser) -> bool {
    parser
        .all_paths(entry)
        .iter()
        .any(|path| tag_matches_filter(path, filter_path))
}

/// Extension trait for filtering entry iterators by category path
pub trait CategoryFilterExt<'a>: Iterator<Item = &'a Entry> + Sized {
    /// Keep only entries that match `filter_path`
    ///
    /// # Examples
    /// ```
    /// # use faqtree::{Entry, TagParser};
    /// # use faqtree::search::filter::CategoryFilterExt;
    /// let parser = TagParser::new("ns");
    /// let entries = vec![
    ///     Entry::new("1", "Q1", "", vec!["ns:a/b".into()], &parser),
    ///     Entry::new("2", "Q2", "", vec!["ns:c".into()], &parser),
    /// ];
    /// let ids: Vec<&str> = entries
    ///     .iter()
    ///     .filter_category("ns:a", &parser)
    ///     .map(|e| e.id.as_str())
    ///     .collect();
    /// assert_eq!(ids, vec!["1"]);
    /// ```
    fn filter_category(
        self,
        filter_path: &'a str,
        parser: &'a TagParser,
    ) -> impl Iterator<Item = &'a Entry> {
        self.filter(move |entry| item_matches_filter(entry, filter_path, parser))
    }
}

impl<'a, I> CategoryFilterExt<'a> for I where I: Iterator<Item = &'a Entry> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{entry, parser};

    #[test]
    fn test_exact_match() {
        assert!(tag_matches_filter("ns:a/b", "ns:a/b"));
        assert!(tag_matches_filter("  ns:a/b ", "ns:a/b  "));
    }

    #[test]
    fn test_prefix_match_on_segment_boundary() {
        assert!(tag_matches_filter("ns:a/b", "ns:a"));
        assert!(tag_matches_filter("ns:a/b/c", "ns:a/b"));
        assert!(!tag_matches_filter("ns:ab", "ns:a"));
        assert!(!tag_matches_filter("ns:category/ab", "ns:category/a"));
    }

    #[test]
    fn test_deeper_filter_does_not_match_shallow_tag() {
        assert!(!tag_matches_filter("ns:a", "ns:a/b"));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(!tag_matches_filter("", "ns:a"));
        assert!(!tag_matches_filter("ns:a", ""));
        assert!(!tag_matches_filter("  ", "  "));
    }

    #[test]
    fn test_namespace_ignored_for_prefix_comparison() {
        assert!(tag_matches_filter("ns:a/b", "other:a"));
    }

    #[test]
    fn test_item_matches_filter_any_tag() {
        let e = entry("1", "Q", "A", &["ns:x/y", "junk ns:a/b/c"]);
        let p = parser();
        assert!(item_matches_filter(&e, "ns:a/b", &p));
        assert!(item_matches_filter(&e, "ns:x", &p));
        assert!(!item_matches_filter(&e, "ns:a/c", &p));
    }

    #[test]
    fn test_item_matches_normalized_paths() {
        let p = parser();
        let leading = entry("1", "Q", "A", &["ns:/faq/general"]);
        assert!(item_matches_filter(&leading, "ns:faq", &p));
        assert!(item_matches_filter(&leading, "ns:faq/general", &p));

        let doubled = entry("2", "Q", "A", &["ns:faq//general"]);
        assert!(item_matches_filter(&doubled, "ns:faq/general", &p));

        let prefixed = entry("3", "Q", "A", &["foo:ns:a"]);
        assert!(item_matches_filter(&prefixed, "ns:a", &p));
        assert!(!item_matches_filter(&prefixed, "ns:foo", &p));
    }

    #[test]
    fn test_item_without_tags_never_matches() {
        let e = entry("1", "Q", "A", &[]);
        assert!(!item_matches_filter(&e, "ns:a", &parser()));
    }

    #[test]
    fn test_filter_category_iterator() {
        let p = parser();
        let entries = vec![
            entry("1", "Q", "A", &["ns:a/b"]),
            entry("2", "Q", "A", &["ns:ab"]),
            entry("3", "Q", "A", &["ns:a"]),
        ];
        let ids: Vec<&str> = entries
            .iter()
            .filter_category("ns:a", &p)
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
