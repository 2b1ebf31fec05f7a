//! Counted category tree built from hierarchical tags
//!
//! Every tag `ns:a/b/c` contributes the nodes `a`, `a/b` and `a/b/c`. Each
//! node counts the distinct entries whose tags pass through it, so a deep
//! tag counts towards every ancestor.
//!
//! The build runs in three passes:
//! 1. collect the deduplicated set of every ancestor path,
//! 2. create the node structure from that set,
//! 3. attribute entry ids along each ancestor chain.
//!
//! Creating the full structure before counting guarantees that synthesized
//! ancestors exist when counts are attributed.
//!
//! # Examples
//!
//! ```
//! # use faqtree::{Entry, TagParser};
//! # use faqtree::search::hierarchy::CategoryTree;
//! let parser = TagParser::new("ns");
//! let entries = vec![
//!     Entry::new("1", "Reset password", "", vec!["ns:account/security".into()], &parser),
//!     Entry::new("2", "Pricing plans", "", vec!["ns:billing".into()], &parser),
//! ];
//! let tree = CategoryTree::build(&entries, &parser);
//! assert_eq!(tree.find("ns:account").unwrap().count, 1);
//! assert_eq!(tree.find("ns:account/security").unwrap().level, 1);
//! ```

use crate::Entry;
use crate::patterns::TagParser;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::{debug, trace};

/// One unique path prefix in the category tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    /// Segment at this depth
    pub name: String,
    /// Full identifier from the namespace through this segment
    pub full_path: String,
    /// Zero-based depth
    pub level: usize,
    /// Number of distinct entries below this node, always `item_ids.len()`
    pub count: usize,
    /// Entries contributing to this node
    pub item_ids: BTreeSet<String>,
    /// Immediate children keyed by segment name (sorted)
    pub children: BTreeMap<String, CategoryNode>,
}

impl CategoryNode {
    fn new(name: &str, full_path: String, level: usize) -> Self {
        Self {
            name: name.to_string(),
            full_path,
            level,
            count: 0,
            item_ids: BTreeSet::new(),
            children: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Children that carry at least one entry, sorted by name
    pub fn children_with_items(&self) -> impl Iterator<Item = &Self> {
        self.children.values().filter(|child| child.count > 0)
    }

    fn attribute(&mut self, item_id: &str) {
        self.item_ids.insert(item_id.to_string());
        self.count = self.item_ids.len();
    }

    fn depth(&self) -> usize {
        1 + self.children.values().map(Self::depth).max().unwrap_or(0)
    }
}

/// Category tree: top-level segment name to node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTree {
    roots: BTreeMap<String, CategoryNode>,
}

impl CategoryTree {
    /// Build the tree from every tag on every entry
    #[must_use]
    pub fn build(entries: &[Entry], parser: &TagParser) -> Self {
        let paths = collect_paths(entries, parser);

        let mut tree = Self::default();
        for path in &paths {
            tree.insert_path(path, parser);
        }

        for entry in entries {
            for tag in parser.individual_tags(entry) {
                for path in parser.extract_all_paths(&tag) {
                    tree.attribute(&path, &entry.id, parser);
                }
            }
        }

        debug!(
            entries = entries.len(),
            paths = paths.len(),
            roots = tree.roots.len(),
            "built category tree"
        );
        tree
    }

    /// Walk/create nodes for one path; existing nodes are left untouched
    fn insert_path(&mut self, path: &str, parser: &TagParser) {
        let segments = parser.segments(path);
        let mut level = &mut self.roots;
        for (depth, segment) in segments.iter().enumerate() {
            let node = level.entry((*segment).to_string()).or_insert_with(|| {
                CategoryNode::new(segment, parser.join_path(&segments[..=depth]), depth)
            });
            level = &mut node.children;
        }
    }

    /// Add `item_id` to every node along `path`
    fn attribute(&mut self, path: &str, item_id: &str, parser: &TagParser) {
        let mut level = &mut self.roots;
        for segment in parser.segments(path) {
            let Some(node) = level.get_mut(segment) else {
                trace!(path, item_id, "counting path missing from tree, skipped");
                return;
            };
            node.attribute(item_id);
            level = &mut node.children;
        }
    }

    /// Top-level nodes keyed by segment name
    #[must_use]
    pub const fn roots(&self) -> &BTreeMap<String, CategoryNode> {
        &self.roots
    }

    /// Top-level nodes that carry at least one entry, sorted by name
    pub fn roots_with_items(&self) -> impl Iterator<Item = &CategoryNode> {
        self.roots.values().filter(|node| node.count > 0)
    }

    /// Look up a node by its full path
    #[must_use]
    pub fn find(&self, full_path: &str) -> Option<&CategoryNode> {
        let mut level = &self.roots;
        let mut found = None;
        for segment in full_path
            .split_once(crate::patterns::NAMESPACE_DELIMITER)
            .map_or("", |(_, path)| path)
            .split(crate::patterns::PATH_DELIMITER)
            .filter(|segment| !segment.trim().is_empty())
        {
            let node = level.get(segment)?;
            level = &node.children;
            found = Some(node);
        }
        found.filter(|node| node.full_path == full_path.trim())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of levels in the deepest branch
    #[must_use]
    pub fn depth(&self) -> usize {
        self.roots.values().map(CategoryNode::depth).max().unwrap_or(0)
    }
}

/// Pass 1: deduplicated union of every ancestor path
fn collect_paths(entries: &[Entry], parser: &TagParser) -> HashSet<String> {
    parser
        .all_tags(entries)
        .iter()
        .flat_map(|tag| parser.extract_all_paths(tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{entry, parser, sample_entries};

    fn assert_counts_consistent(nodes: &BTreeMap<String, CategoryNode>) {
        for node in nodes.values() {
            assert_eq!(node.count, node.item_ids.len(), "{}", node.full_path);
            for child in node.children.values() {
                assert!(node.count >= child.count);
                assert!(child.item_ids.is_subset(&node.item_ids));
            }
            assert_counts_consistent(&node.children);
        }
    }

    #[test]
    fn test_build_sample_tree() {
        let tree = CategoryTree::build(&sample_entries(), &parser());

        let account = tree.find("ns:account").unwrap();
        assert_eq!(account.name, "account");
        assert_eq!(account.level, 0);
        assert_eq!(account.count, 1);

        let security = &account.children["security"];
        assert_eq!(security.full_path, "ns:account/security");
        assert_eq!(security.level, 1);
        assert_eq!(security.count, 1);

        let billing = tree.find("ns:billing").unwrap();
        assert_eq!(billing.count, 1);
        assert!(!billing.has_children());

        assert_eq!(tree.roots().len(), 2);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn test_ancestors_synthesized() {
        let entries = vec![entry("1", "Q", "A", &["ns:a/b/c"])];
        let tree = CategoryTree::build(&entries, &parser());

        for path in ["ns:a", "ns:a/b", "ns:a/b/c"] {
            let node = tree.find(path).unwrap();
            assert!(node.item_ids.contains("1"));
            assert_eq!(node.count, 1);
        }
    }

    #[test]
    fn test_duplicate_tags_not_double_counted() {
        let entries = vec![
            entry("1", "Q", "A", &["ns:a/b, ns:a/b", "ns:a/b"]),
            entry("2", "Q", "A", &["ns:a/c ns:a"]),
        ];
        let tree = CategoryTree::build(&entries, &parser());

        assert_eq!(tree.find("ns:a").unwrap().count, 2);
        assert_eq!(tree.find("ns:a/b").unwrap().count, 1);
        assert_eq!(tree.find("ns:a/c").unwrap().count, 1);
        assert_counts_consistent(tree.roots());
    }

    #[test]
    fn test_parent_counts_distinct_entries() {
        let entries = vec![
            entry("1", "Q", "A", &["ns:a/b", "ns:a/c"]),
            entry("2", "Q", "A", &["ns:a/b/d"]),
            entry("3", "Q", "A", &["ns:e"]),
        ];
        let tree = CategoryTree::build(&entries, &parser());

        assert_eq!(tree.find("ns:a").unwrap().count, 2);
        assert_eq!(tree.find("ns:a/b").unwrap().count, 2);
        assert_eq!(tree.find("ns:a/b/d").unwrap().count, 1);
        assert_counts_consistent(tree.roots());
    }

    #[test]
    fn test_empty_when_no_tags() {
        let entries = vec![entry("1", "Q", "A", &["untagged", ""])];
        let tree = CategoryTree::build(&entries, &parser());
        assert!(tree.is_empty());
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.roots_with_items().count(), 0);
    }

    #[test]
    fn test_find_rejects_unknown_and_partial_paths() {
        let tree = CategoryTree::build(&sample_entries(), &parser());
        assert!(tree.find("ns:account/missing").is_none());
        assert!(tree.find("ns:acc").is_none());
        assert!(tree.find("other:account").is_none());
        assert!(tree.find("").is_none());
    }

    #[test]
    fn test_children_sorted_by_name() {
        let entries = vec![entry("1", "Q", "A", &["ns:r/zeta ns:r/alpha ns:r/mid"])];
        let tree = CategoryTree::build(&entries, &parser());
        let names: Vec<&str> = tree
            .find("ns:r")
            .unwrap()
            .children_with_items()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_insert_path_never_overwrites() {
        let p = parser();
        let mut tree = CategoryTree::default();
        tree.insert_path("ns:a/b", &p);
        tree.attribute("ns:a", "1", &p);
        tree.insert_path("ns:a", &p);
        tree.insert_path("ns:a/b", &p);
        assert_eq!(tree.find("ns:a").unwrap().count, 1);
    }

    #[test]
    fn test_attribute_missing_segment_stops_walk() {
        let p = parser();
        let mut tree = CategoryTree::default();
        tree.insert_path("ns:a", &p);
        tree.attribute("ns:a/zzz", "1", &p);
        assert_eq!(tree.find("ns:a").unwrap().count, 1);
        assert!(tree.find("ns:a/zzz").is_none());
    }
}
