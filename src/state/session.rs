use crate::core::config::Config;
use crate::search::filter::{compute_filtered_results, RelevanceThreshold};
use crate::search::model::{ContentType, DateFilter, SearchResult, SourceFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Maximum number of remembered queries
pub const HISTORY_LIMIT: usize = 5;

/// Top-level panels. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Home,
    Results,
    History,
    Settings,
    About,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Home,
        View::Results,
        View::History,
        View::Settings,
        View::About,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Results => "results",
            View::History => "history",
            View::Settings => "settings",
            View::About => "about",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Results => "Results",
            View::History => "History",
            View::Settings => "Settings",
            View::About => "About",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Most-recent-first, deduplicated, bounded list of past queries
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a most-recent-first list, dropping blanks and later duplicates
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut history = Self::new();
        for entry in entries {
            let entry = entry.into();
            if entry.trim().is_empty() || history.entries.contains(&entry) {
                continue;
            }
            if history.entries.len() == HISTORY_LIMIT {
                break;
            }
            history.entries.push(entry);
        }
        history
    }

    /// Put `query` at the front, removing an earlier exact match
    pub fn record(&mut self, query: &str) {
        self.entries.retain(|q| q != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Bright,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Bright => Theme::Dark,
            Theme::Dark => Theme::Bright,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Bright => "Bright",
            Theme::Dark => "Dark",
        }
    }
}

/// User-facing toggles from the settings view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub quick_search: bool,
    pub autocomplete: bool,
    pub save_history: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Bright,
            quick_search: true,
            autocomplete: true,
            save_history: true,
        }
    }
}

/// Settings rows, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Theme,
    QuickSearch,
    Autocomplete,
    SaveHistory,
}

impl Preference {
    pub const ALL: [Preference; 4] = [
        Preference::Theme,
        Preference::QuickSearch,
        Preference::Autocomplete,
        Preference::SaveHistory,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Preference::Theme => "Theme",
            Preference::QuickSearch => "Quick search",
            Preference::Autocomplete => "Autocomplete",
            Preference::SaveHistory => "Save history",
        }
    }
}

/// In-memory state for one browsing session.
///
/// Owns the result set, the filter selections and the history. Front ends
/// read it and call its mutators; nothing here performs I/O.
#[derive(Debug, Clone)]
pub struct SessionState {
    query: String,
    active_view: View,
    content_type: ContentType,
    date_filter: DateFilter,
    source_filter: SourceFilter,
    relevance_threshold: RelevanceThreshold,
    history: SearchHistory,
    preferences: Preferences,
    results: Vec<SearchResult>,
}

impl SessionState {
    /// New session over `results` with built-in defaults
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self::from_config(&Config::default(), results)
    }

    pub fn from_config(config: &Config, results: Vec<SearchResult>) -> Self {
        Self {
            query: String::new(),
            active_view: View::Home,
            content_type: config.content_type,
            date_filter: config.date_filter,
            source_filter: config.source_filter,
            relevance_threshold: config.relevance_threshold,
            history: SearchHistory::from_entries(config.history.iter().cloned()),
            preferences: config.preferences.clone(),
            results,
        }
    }

    /// Submit `text` as a search.
    ///
    /// Blank input is ignored and returns `false`. Otherwise the text becomes
    /// the current query, is recorded in history (when history saving is on)
    /// and the results view is shown.
    pub fn submit_query(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.query = text.to_string();
        if self.preferences.save_history {
            self.history.record(text);
        }
        self.active_view = View::Results;
        debug!(query = text, results = self.result_count(), "Submitted search");
        true
    }

    /// Submit whatever is in the search box
    pub fn submit_current(&mut self) -> bool {
        let text = self.query.clone();
        self.submit_query(&text)
    }

    /// Home-view badge: search again, moving the entry to the front
    pub fn resubmit_history_entry(&mut self, text: &str) -> bool {
        self.query = text.to_string();
        self.submit_query(text)
    }

    /// History-view row: show results for `text` without reordering history
    pub fn open_history_entry(&mut self, text: &str) {
        self.query = text.to_string();
        self.set_active_view(View::Results);
    }

    pub fn set_active_view(&mut self, view: View) {
        if self.active_view != view {
            debug!(from = %self.active_view, to = %view, "View changed");
        }
        self.active_view = view;
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    pub fn set_content_type(&mut self, content_type: ContentType) {
        debug!(content_type = %content_type, "Content type filter changed");
        self.content_type = content_type;
    }

    pub fn set_date_filter(&mut self, date_filter: DateFilter) {
        debug!(date_filter = %date_filter, "Date filter changed");
        self.date_filter = date_filter;
    }

    pub fn set_source_filter(&mut self, source_filter: SourceFilter) {
        debug!(source_filter = %source_filter, "Source filter changed");
        self.source_filter = source_filter;
    }

    pub fn set_relevance_threshold(&mut self, threshold: RelevanceThreshold) {
        debug!(threshold = threshold.value(), "Relevance threshold changed");
        self.relevance_threshold = threshold;
    }

    pub fn adjust_relevance(&mut self, steps: i32) {
        let next = self.relevance_threshold.step_by(steps);
        self.set_relevance_threshold(next);
    }

    pub fn clear_history(&mut self) {
        debug!(cleared = self.history.len(), "History cleared");
        self.history.clear();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.preferences.theme = theme;
    }

    pub fn toggle_preference(&mut self, preference: Preference) {
        let prefs = &mut self.preferences;
        match preference {
            Preference::Theme => prefs.theme = prefs.theme.toggled(),
            Preference::QuickSearch => prefs.quick_search = !prefs.quick_search,
            Preference::Autocomplete => prefs.autocomplete = !prefs.autocomplete,
            Preference::SaveHistory => prefs.save_history = !prefs.save_history,
        }
    }

    /// Results passing the current type and relevance filters, in seed order.
    ///
    /// Recomputed on every call.
    pub fn filtered_results(&self) -> Vec<&SearchResult> {
        compute_filtered_results(&self.results, self.content_type, self.relevance_threshold)
    }

    pub fn result_count(&self) -> usize {
        self.filtered_results().len()
    }

    /// True when a filter that actually narrows results is set
    pub fn filters_active(&self) -> bool {
        self.content_type != ContentType::All
    }

    /// True when a captured-but-unapplied filter has a non-default value
    pub fn inert_filters_selected(&self) -> bool {
        self.date_filter != DateFilter::Anytime || self.source_filter != SourceFilter::All
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn date_filter(&self) -> DateFilter {
        self.date_filter
    }

    pub fn source_filter(&self) -> SourceFilter {
        self.source_filter
    }

    pub fn relevance_threshold(&self) -> RelevanceThreshold {
        self.relevance_threshold
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn all_results(&self) -> &[SearchResult] {
        &self.results
    }
}
