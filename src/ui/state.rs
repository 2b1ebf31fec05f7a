//! View state owned by the view coordinator
//!
//! Everything a renderer needs besides the entries themselves: which entries
//! are visible, which one is expanded, the search box and its suggestion
//! list, and which view mode produced the current visibility.

/// Which mechanism produced the current visibility
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Every entry is shown
    #[default]
    All,
    /// Filtered by a category path
    Category(String),
    /// Filtered by a search query
    Search(String),
}

/// Renderable state of one view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Visibility per entry, parallel to the entry list
    visible: Vec<bool>,
    /// Mode that produced `visible`
    pub mode: ViewMode,
    /// Id of the expanded entry; at most one is open
    pub active_entry: Option<String>,
    /// Search box text
    pub query: String,
    /// Current suggestion list
    pub suggestions: Vec<String>,
    /// Whether the suggestion list is shown
    pub suggestions_visible: bool,
}

impl ViewState {
    /// All `len` entries visible
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            visible: vec![true; len],
            ..Self::default()
        }
    }

    /// Replace visibility flags
    pub(crate) fn set_visible(&mut self, visible: Vec<bool>) {
        self.visible = visible;
    }

    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Whether the "no results" indicator is raised
    #[must_use]
    pub fn no_results(&self) -> bool {
        self.visible_count() == 0
    }

    pub(crate) fn hide_suggestions(&mut self) {
        self.suggestions_visible = false;
    }

    pub(crate) fn show_suggestions(&mut self, suggestions: Vec<String>) {
        self.suggestions_visible = !suggestions.is_empty();
        self.suggestions = suggestions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_all_visible() {
        let state = ViewState::new(3);
        assert_eq!(state.visible_count(), 3);
        assert!(!state.no_results());
        assert_eq!(state.mode, ViewMode::All);
        assert!(state.is_visible(2));
        assert!(!state.is_visible(3));
    }

    #[test]
    fn test_no_results_indicator() {
        let mut state = ViewState::new(2);
        state.set_visible(vec![false, false]);
        assert!(state.no_results());
        state.set_visible(vec![false, true]);
        assert!(!state.no_results());
    }

    #[test]
    fn test_empty_suggestion_list_stays_hidden() {
        let mut state = ViewState::new(1);
        state.show_suggestions(Vec::new());
        assert!(!state.suggestions_visible);
        state.show_suggestions(vec!["pricing".to_string()]);
        assert!(state.suggestions_visible);
        state.hide_suggestions();
        assert!(!state.suggestions_visible);
        assert_eq!(state.suggestions, vec!["pricing"]);
    }
}
