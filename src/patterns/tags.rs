use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::Entry;

/// Default namespace marker carried by every category tag
pub const DEFAULT_NAMESPACE: &str = "smart-x-com";

/// Separates the namespace from the path
pub const NAMESPACE_DELIMITER: char = ':';

/// Separates path segments
pub const PATH_DELIMITER: char = '/';

/// Runs of commas and/or whitespace between tags in one field
static TAG_SPLITTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s]+").expect("constant tag splitter pattern"));

/// Parser for namespaced hierarchical tags (`namespace:segment/segment`)
///
/// All operations are total: malformed or foreign tags simply contribute
/// nothing.
#[derive(Debug, Clone)]
pub struct TagParser {
    /// Namespace followed by the delimiter, e.g. `smart-x-com:`
    marker: String,
}

impl TagParser {
    /// Create a parser for the given namespace
    #[must_use]
    pub fn new(namespace: &str) -> Self {
        Self {
            marker: format!("{}{NAMESPACE_DELIMITER}", namespace.trim()),
        }
    }

    /// Namespace marker including the trailing delimiter
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Split one raw tag field into individual tags
    ///
    /// Tokens are separated by commas and/or whitespace runs. Tokens that do
    /// not carry the namespace marker are dropped; order and duplicates are
    /// kept.
    ///
    /// # Examples
    /// ```
    /// # use faqtree::patterns::TagParser;
    /// let parser = TagParser::new("ns");
    /// assert_eq!(
    ///     parser.parse_multiple_tags("ns:a/b, other ns:c"),
    ///     vec!["ns:a/b".to_string(), "ns:c".to_string()]
    /// );
    /// ```
    #[must_use]
    pub fn parse_multiple_tags(&self, field: &str) -> Vec<String> {
        TAG_SPLITTER
            .split(field)
            .map(str::trim)
            .filter(|token| !token.is_empty() && token.contains(&self.marker))
            .map(str::to_string)
            .collect()
    }

    /// Expand a tag into its ancestor chain, shallowest first
    ///
    /// The last element is the tag itself (normalized). Returns an empty
    /// vector when the marker is missing or there is no path content.
    ///
    /// # Examples
    /// ```
    /// # use faqtree::patterns::TagParser;
    /// let parser = TagParser::new("ns");
    /// assert_eq!(
    ///     parser.extract_all_paths("ns:a/b/c"),
    ///     vec!["ns:a".to_string(), "ns:a/b".to_string(), "ns:a/b/c".to_string()]
    /// );
    /// assert!(parser.extract_all_paths("a/b").is_empty());
    /// ```
    #[must_use]
    pub fn extract_all_paths(&self, tag: &str) -> Vec<String> {
        let segments = self.segments(tag);
        (1..=segments.len())
            .map(|depth| self.join_path(&segments[..depth]))
            .collect()
    }

    /// Path segments of a tag, empty segments dropped
    #[must_use]
    pub fn segments<'a>(&self, tag: &'a str) -> Vec<&'a str> {
        let Some((_, path)) = tag.split_once(self.marker.as_str()) else {
            return Vec::new();
        };
        path.split(PATH_DELIMITER)
            .filter(|segment| !segment.trim().is_empty())
            .collect()
    }

    /// Build a full identifier from path segments
    #[must_use]
    pub fn join_path(&self, segments: &[&str]) -> String {
        let mut path = self.marker.clone();
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                path.push(PATH_DELIMITER);
            }
            path.push_str(segment);
        }
        path
    }

    /// All individual tags of an entry in field order
    #[must_use]
    pub fn individual_tags(&self, entry: &Entry) -> Vec<String> {
        entry
            .tags
            .iter()
            .flat_map(|field| self.parse_multiple_tags(field))
            .collect()
    }

    /// Deduplicated ancestor paths of every tag on an entry, first seen first
    #[must_use]
    pub fn all_paths(&self, entry: &Entry) -> Vec<String> {
        let mut seen = HashSet::new();
        self.individual_tags(entry)
            .iter()
            .flat_map(|tag| self.extract_all_paths(tag))
            .filter(|path| seen.insert(path.clone()))
            .collect()
    }

    /// Deduplicated individual tags across an entry set
    #[must_use]
    pub fn all_tags(&self, entries: &[Entry]) -> Vec<String> {
        let mut seen = HashSet::new();
        entries
            .iter()
            .flat_map(|entry| self.individual_tags(entry))
            .filter(|tag| seen.insert(tag.clone()))
            .collect()
    }

    /// Display category of an entry: name of its first individual tag
    #[must_use]
    pub fn category(&self, tags: &[String]) -> String {
        tags.iter()
            .flat_map(|field| self.parse_multiple_tags(field))
            .next()
            .map(|tag| tag_name(&tag).to_string())
            .unwrap_or_default()
    }
}

impl Default for TagParser {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

/// Human-readable name of a tag: its last segment
///
/// # Examples
/// ```
/// # use faqtree::patterns::tag_name;
/// assert_eq!(tag_name("ns:account/security"), "security");
/// assert_eq!(tag_name("ns:billing"), "billing");
/// assert_eq!(tag_name(""), "");
/// ```
#[must_use]
pub fn tag_name(tag: &str) -> &str {
    let last_segment = tag.rsplit(PATH_DELIMITER).next().unwrap_or(tag);
    last_segment
        .rsplit(NAMESPACE_DELIMITER)
        .next()
        .unwrap_or(last_segment)
        .trim()
}
