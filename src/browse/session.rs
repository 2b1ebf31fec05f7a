//! Cascading category filter state machine
//!
//! One dropdown exists per hierarchy depth that has been reached. Selecting
//! a category discards every deeper dropdown and, when the category has
//! children with entries, opens a fresh dropdown one level down.
//!
//! # Workflow
//!
//! ```text
//! [level 0: roots]
//!     │ select(0, ns:a)            → Category(ns:a)
//!     ▼
//! [level 0: a] [level 1: a/*]
//!     │ select(1, ns:a/b)          → Category(ns:a/b)
//!     ▼
//! [level 0: a] [level 1: a/b] [level 2: a/b/*]
//!     │ clear(1)                   → Category(ns:a)
//!     ▼
//! [level 0: a] [level 1: a/*]
//!     │ clear(0)                   → ShowAll
//!     ▼
//! [level 0: roots]
//! ```
//!
//! The controller never touches entries: every transition returns a
//! [`FilterOutcome`] that the view applies.

use crate::browse::models::{FilterLevel, FilterOutcome};
use crate::search::hierarchy::CategoryTree;
use tracing::debug;

/// Cascading filter controller; owns the category tree it was built from
#[derive(Debug, Clone)]
pub struct FilterController {
    tree: CategoryTree,
    levels: Vec<FilterLevel>,
    open: Option<usize>,
}

impl FilterController {
    /// Start with a single unselected top-level dropdown
    ///
    /// A tree without categories yields no dropdown at all.
    #[must_use]
    pub fn new(tree: CategoryTree) -> Self {
        let top = FilterLevel::new(0, "", tree.roots_with_items());
        let levels = if top.options.is_empty() {
            Vec::new()
        } else {
            vec![top]
        };

        Self {
            tree,
            levels,
            open: None,
        }
    }

    /// Select `path` in the dropdown at `level`
    ///
    /// Unknown levels or paths that are not options of that level leave the
    /// state untouched and return `FilterOutcome::Unchanged`.
    pub fn select(&mut self, level: usize, path: &str) -> FilterOutcome {
        let path = path.trim();
        let Some(dropdown) = self.levels.get_mut(level) else {
            return FilterOutcome::Unchanged;
        };
        if dropdown.option(path).is_none() {
            return FilterOutcome::Unchanged;
        }

        dropdown.selected_path = Some(path.to_string());
        self.levels.truncate(level + 1);
        self.open = None;

        if let Some(node) = self.tree.find(path) {
            let next = FilterLevel::new(level + 1, path, node.children_with_items());
            if !next.options.is_empty() {
                self.levels.push(next);
            }
        }

        debug!(level, path, levels = self.levels.len(), "category selected");
        FilterOutcome::Category(path.to_string())
    }

    /// Clear the selection of the dropdown at `level`
    ///
    /// Deeper dropdowns are discarded. Clearing the top level shows every
    /// entry; clearing a deeper one falls back to the parent selection.
    pub fn clear(&mut self, level: usize) -> FilterOutcome {
        let Some(dropdown) = self.levels.get_mut(level) else {
            return FilterOutcome::Unchanged;
        };

        dropdown.selected_path = None;
        self.levels.truncate(level + 1);
        self.open = None;
        debug!(level, levels = self.levels.len(), "category cleared");

        if level == 0 {
            return FilterOutcome::ShowAll;
        }
        self.levels[level - 1]
            .selected_path
            .clone()
            .map_or(FilterOutcome::ShowAll, FilterOutcome::Category)
    }

    /// Return every dropdown to its placeholder, keeping levels and options
    pub fn reset_displays(&mut self) {
        for level in &mut self.levels {
            level.selected_path = None;
        }
        self.open = None;
    }

    /// Open the option list of `level`, closing any other; close it if open
    pub fn toggle(&mut self, level: usize) {
        if level >= self.levels.len() {
            return;
        }
        self.open = if self.open == Some(level) {
            None
        } else {
            Some(level)
        };
    }

    /// Close whichever option list is open
    pub fn close_all(&mut self) {
        self.open = None;
    }

    /// Level whose option list is open
    #[must_use]
    pub const fn open_level(&self) -> Option<usize> {
        self.open
    }

    /// Visible dropdowns, shallowest first
    #[must_use]
    pub fn levels(&self) -> &[FilterLevel] {
        &self.levels
    }

    /// Deepest selected category path
    #[must_use]
    pub fn active_path(&self) -> Option<&str> {
        self.levels
            .iter()
            .rev()
            .find_map(|level| level.selected_path.as_deref())
    }

    /// Whether the filter UI has anything to show
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    #[must_use]
    pub const fn tree(&self) -> &CategoryTree {
        &self.tree
    }
}
