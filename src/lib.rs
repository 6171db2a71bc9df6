// Core functionality
pub mod core {
    pub mod config;
    pub mod error;
}

// Results & filtering
pub mod search {
    pub mod filter;
    pub mod model;
}

// Session state
pub mod state {
    pub mod session;
}

// User interfaces
pub mod ui {
    pub mod cli;
    pub mod tui;
}

// Re-export commonly used types
pub use core::config::Config;
pub use core::error::{Error, Result};
pub use search::filter::{compute_filtered_results, RelevanceThreshold};
pub use search::model::{
    seed_results, ContentType, DateFilter, ResultType, SearchResult, SourceFilter,
};
pub use state::session::{
    Preference, Preferences, SearchHistory, SessionState, Theme, View, HISTORY_LIMIT,
};
pub use ui::cli::Cli;
pub use ui::tui::{Action, App, SearchTui};
