//! View coordinator
//!
//! `FaqView` owns one rendering: the entries, the category filter, the
//! search index and the view state. It is never updated incrementally; a
//! content change produces a brand-new view through [`FaqView::rebuild`].

use std::path::Path;
use std::time::{Duration, Instant};
use tracing::debug;

use super::state::{ViewMode, ViewState};
use super::timing::{InputAction, SuggestionTrigger, TriggerEvent};
use crate::browse::{FilterController, FilterLevel, FilterOutcome};
use crate::config::FaqConfig;
use crate::discovery::{ContentSource, RawEntry, SnapshotError, entries_from_raw, settle_snapshot};
use crate::patterns::{TagParser, tag_name};
use crate::search::hierarchy::CategoryTree;
use crate::search::{SearchIndex, item_matches_filter};
use crate::{Entry, FaqError};

/// Metadata a renderer stamps on an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    pub id: String,
    /// Display category (name of the first tag)
    pub category: String,
    /// Name of the first individual tag, same source as `category`
    pub primary_tag: String,
    /// Individual tags in field order
    pub tags: Vec<String>,
    /// Every ancestor path of every tag, deduplicated
    pub all_paths: Vec<String>,
}

/// One rendered question/answer list with its filter and search widgets
#[derive(Debug)]
pub struct FaqView {
    config: FaqConfig,
    parser: TagParser,
    entries: Vec<Entry>,
    filter: FilterController,
    search: SearchIndex,
    trigger: SuggestionTrigger,
    state: ViewState,
}

impl FaqView {
    /// Build a view over `entries`
    ///
    /// Returns `None` for an empty entry set: there is nothing to render.
    #[must_use]
    pub fn new(entries: Vec<Entry>, config: &FaqConfig) -> Option<Self> {
        if entries.is_empty() {
            debug!("no entries, nothing to render");
            return None;
        }

        let parser = TagParser::new(&config.tags.namespace);
        let tree = CategoryTree::build(&entries, &parser);
        let search = SearchIndex::new(&entries, &config.search);
        let state = ViewState::new(entries.len());

        debug!(
            entries = entries.len(),
            depth = tree.depth(),
            "view built"
        );
        Some(Self {
            config: config.clone(),
            parser,
            entries,
            filter: FilterController::new(tree),
            search,
            trigger: SuggestionTrigger::new(config.search.debounce(), config.search.trigger_min_len),
            state,
        })
    }

    /// Build a fresh view from a raw snapshot, discarding nothing but input
    ///
    /// # Errors
    /// Returns `SnapshotError::DuplicateId` if two entries share an id.
    pub fn rebuild(raw: Vec<RawEntry>, config: &FaqConfig) -> Result<Option<Self>, SnapshotError> {
        let parser = TagParser::new(&config.tags.namespace);
        let entries = entries_from_raw(raw, &parser)?;
        Ok(Self::new(entries, config))
    }

    /// Read a source and build a view
    ///
    /// In authoring mode the source is polled until its content settles,
    /// after the configured initial wait.
    ///
    /// # Errors
    /// Returns `SnapshotError::DuplicateId` if two entries share an id.
    pub fn load<S, W>(
        source: &mut S,
        config: &FaqConfig,
        authoring: bool,
        mut sleep: W,
    ) -> Result<Option<Self>, SnapshotError>
    where
        S: ContentSource + ?Sized,
        W: FnMut(Duration),
    {
        let raw = if authoring {
            sleep(config.authoring.initial_wait());
            let policy = config.authoring.retry_policy();
            settle_snapshot(source, &policy, config.authoring.settle_after_attempts, sleep).0
        } else {
            source.snapshot()
        };
        Self::rebuild(raw, config)
    }

    /// Load the configuration file at `config_path`, then read `source`
    ///
    /// A missing configuration file falls back to the defaults.
    ///
    /// # Errors
    /// Returns `FaqError::ConfigError` if the file cannot be read or parsed
    /// and `FaqError::SnapshotError` if two entries share an id.
    pub fn open<S, W>(
        source: &mut S,
        config_path: &Path,
        authoring: bool,
        sleep: W,
    ) -> Result<Option<Self>, FaqError>
    where
        S: ContentSource + ?Sized,
        W: FnMut(Duration),
    {
        let config = FaqConfig::load(config_path)?;
        Ok(Self::load(source, &config, authoring, sleep)?)
    }

    /// Set each entry's visibility from `predicate`; returns the visible count
    pub fn apply_visibility<P>(&mut self, predicate: P) -> usize
    where
        P: Fn(&Entry) -> bool,
    {
        let visible: Vec<bool> = self.entries.iter().map(predicate).collect();
        self.state.set_visible(visible);
        self.state.visible_count()
    }

    /// Show every entry and return the filter dropdowns to their placeholders
    pub fn show_all(&mut self) {
        self.apply_visibility(|_| true);
        self.filter.reset_displays();
        self.state.mode = ViewMode::All;
    }

    fn apply_filter_outcome(&mut self, outcome: FilterOutcome) -> bool {
        match outcome {
            FilterOutcome::ShowAll => {
                self.show_all();
                true
            }
            FilterOutcome::Category(path) => {
                let parser = &self.parser;
                let visible: Vec<bool> = self
                    .entries
                    .iter()
                    .map(|entry| item_matches_filter(entry, &path, parser))
                    .collect();
                self.state.set_visible(visible);
                debug!(path = %path, visible = self.state.visible_count(), "category filter applied");
                self.state.mode = ViewMode::Category(path);
                true
            }
            FilterOutcome::Unchanged => false,
        }
    }

    /// Select a category in the dropdown at `level`
    ///
    /// Returns `false` when `path` is not an option of that dropdown.
    pub fn select_category(&mut self, level: usize, path: &str) -> bool {
        let outcome = self.filter.select(level, path);
        self.apply_filter_outcome(outcome)
    }

    /// Clear the dropdown at `level`
    ///
    /// Returns `false` when no such dropdown exists.
    pub fn clear_category(&mut self, level: usize) -> bool {
        let outcome = self.filter.clear(level);
        self.apply_filter_outcome(outcome)
    }

    /// Open or close the option list of a dropdown
    pub fn toggle_dropdown(&mut self, level: usize) {
        self.filter.toggle(level);
    }

    /// A click landed outside every widget
    pub fn click_outside(&mut self) {
        self.filter.close_all();
        self.state.hide_suggestions();
    }

    /// Filter entries by a search query
    ///
    /// An empty query shows everything. Either way the category dropdowns
    /// are reset to their placeholders while keeping their options.
    pub fn filter_faqs(&mut self, query: &str) {
        self.state.query = query.to_string();
        if query.trim().is_empty() {
            self.show_all();
            return;
        }

        self.filter.reset_displays();
        let visible: Vec<bool> = (0..self.entries.len())
            .map(|index| self.search.matches(index, query))
            .collect();
        self.state.set_visible(visible);
        debug!(query, visible = self.state.visible_count(), "search applied");
        self.state.mode = ViewMode::Search(query.to_string());
    }

    /// Submit the search box (enter key or search icon)
    pub fn submit_search(&mut self) {
        let query = self.state.query.trim().to_string();
        self.trigger.cancel();
        self.filter_faqs(&query);
        self.state.hide_suggestions();
    }

    /// Search box text changed at `now`
    pub fn input_query(&mut self, query: &str, now: Instant) {
        self.state.query = query.to_string();
        match self.trigger.input(query, now) {
            InputAction::Reset => {
                self.filter_faqs("");
                self.state.hide_suggestions();
            }
            InputAction::Pending => {}
        }
    }

    /// Let pending suggestion work run at `now`; returns the shown list
    pub fn poll_suggestions(&mut self, now: Instant) -> Option<&[String]> {
        match self.trigger.poll(now)? {
            TriggerEvent::Suggest(query) => {
                let suggestions = self.search.suggestions(&query);
                self.state.show_suggestions(suggestions);
            }
            TriggerEvent::Hide => self.state.hide_suggestions(),
        }
        self.state
            .suggestions_visible
            .then_some(self.state.suggestions.as_slice())
    }

    /// Suggestions for a query, bypassing the debounce
    #[must_use]
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        self.search.suggestions(query)
    }

    /// Pick a suggestion: it becomes the query and is searched right away
    pub fn choose_suggestion(&mut self, suggestion: &str) {
        self.trigger.cancel();
        self.filter_faqs(suggestion);
        self.state.hide_suggestions();
    }

    /// Expand `id`, collapsing the previously expanded entry
    ///
    /// Toggling the expanded entry collapses it. Returns whether `id` is
    /// expanded afterwards; unknown ids change nothing.
    pub fn toggle_entry(&mut self, id: &str) -> bool {
        if !self.entries.iter().any(|entry| entry.id == id) {
            return false;
        }
        if self.state.active_entry.as_deref() == Some(id) {
            self.state.active_entry = None;
            false
        } else {
            self.state.active_entry = Some(id.to_string());
            true
        }
    }

    /// Render metadata of an entry
    #[must_use]
    pub fn entry_metadata(&self, id: &str) -> Option<EntryMetadata> {
        let entry = self.entries.iter().find(|entry| entry.id == id)?;
        let tags = self.parser.individual_tags(entry);
        Some(EntryMetadata {
            id: entry.id.clone(),
            category: entry.category.clone(),
            primary_tag: tags.first().map(|tag| tag_name(tag).to_string()).unwrap_or_default(),
            all_paths: self.parser.all_paths(entry),
            tags,
        })
    }

    /// Entries currently visible
    pub fn visible_entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(index, _)| self.state.is_visible(*index))
            .map(|(_, entry)| entry)
    }

    /// Text of the "no results" indicator when it is raised
    #[must_use]
    pub fn no_results_message(&self) -> Option<&str> {
        self.state
            .no_results()
            .then_some(self.config.view.no_results_text.as_str())
    }

    /// Placeholder text of the search box
    #[must_use]
    pub fn search_placeholder(&self) -> &str {
        &self.config.view.search_placeholder
    }

    /// Labels of the visible dropdowns, shallowest first
    #[must_use]
    pub fn dropdown_labels(&self) -> Vec<&str> {
        self.filter
            .levels()
            .iter()
            .map(|level| level.label(&self.config.filter))
            .collect()
    }

    #[must_use]
    pub fn filter_levels(&self) -> &[FilterLevel] {
        self.filter.levels()
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterController {
        &self.filter
    }

    #[must_use]
    pub const fn tree(&self) -> &CategoryTree {
        self.filter.tree()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub const fn parser(&self) -> &TagParser {
        &self.parser
    }

    #[must_use]
    pub const fn config(&self) -> &FaqConfig {
        &self.config
    }
}
