//! Data models for the cascading category filter
//!
//! Pure data structures; transitions live in [`super::session`].

use crate::config::FilterConfig;
use crate::search::hierarchy::CategoryNode;

/// One selectable category in a dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Segment name shown to the user
    pub name: String,
    /// Full category path used for matching
    pub full_path: String,
    /// Whether selecting this option can open a deeper level
    pub has_children: bool,
    /// Depth of the category
    pub level: usize,
    /// Number of entries in the category
    pub count: usize,
}

impl From<&CategoryNode> for FilterOption {
    fn from(node: &CategoryNode) -> Self {
        Self {
            name: node.name.clone(),
            full_path: node.full_path.clone(),
            has_children: node.has_children(),
            level: node.level,
            count: node.count,
        }
    }
}

/// State of one dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterLevel {
    /// Depth of this dropdown
    pub level: usize,
    /// Path whose children make up the options; empty at level 0
    pub parent_path: String,
    /// Selected option path, if any
    pub selected_path: Option<String>,
    /// Options sorted by name, only categories with entries
    pub options: Vec<FilterOption>,
}

impl FilterLevel {
    /// Build a level from nodes, keeping those with entries
    pub fn new<'a>(
        level: usize,
        parent_path: impl Into<String>,
        nodes: impl Iterator<Item = &'a CategoryNode>,
    ) -> Self {
        Self {
            level,
            parent_path: parent_path.into(),
            selected_path: None,
            options: nodes
                .filter(|node| node.count > 0)
                .map(FilterOption::from)
                .collect(),
        }
    }

    /// Option with the given path
    #[must_use]
    pub fn option(&self, path: &str) -> Option<&FilterOption> {
        self.options.iter().find(|option| option.full_path == path)
    }

    /// Currently selected option
    #[must_use]
    pub fn selected(&self) -> Option<&FilterOption> {
        self.selected_path
            .as_deref()
            .and_then(|path| self.option(path))
    }

    /// Text shown on the dropdown: the selected name or the placeholder
    #[must_use]
    pub fn label<'a>(&'a self, config: &'a FilterConfig) -> &'a str {
        self.selected()
            .map_or_else(|| config.placeholder(self.level), |option| option.name.as_str())
    }

    #[must_use]
    pub const fn has_selection(&self) -> bool {
        self.selected_path.is_some()
    }
}

/// What the view must do after a filter transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Show every entry
    ShowAll,
    /// Show entries matching the category path
    Category(String),
    /// Nothing changed (unknown level or option)
    Unchanged,
}
