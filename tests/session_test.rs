use werty::{
    seed_results, Config, ContentType, DateFilter, Preference, RelevanceThreshold, SessionState,
    SourceFilter, Theme, View, HISTORY_LIMIT,
};

fn session() -> SessionState {
    SessionState::new(seed_results())
}

#[test]
fn test_defaults() {
    let s = session();
    assert_eq!(s.active_view(), View::Home);
    assert_eq!(s.query(), "");
    assert_eq!(s.content_type(), ContentType::All);
    assert_eq!(s.date_filter(), DateFilter::Anytime);
    assert_eq!(s.source_filter(), SourceFilter::All);
    assert_eq!(s.relevance_threshold().value(), 70);
    assert_eq!(
        s.history().entries(),
        &[
            "TypeScript best practices",
            "React performance optimization",
            "Modern web design trends"
        ]
    );
    assert!(!s.filters_active());
    assert!(!s.inert_filters_selected());
    assert_eq!(s.result_count(), 3);
}

#[test]
fn test_submit_records_and_switches_view() {
    let mut s = session();
    assert!(s.submit_query("rust async"));
    assert_eq!(s.history().get(0), Some("rust async"));
    assert_eq!(s.active_view(), View::Results);
    assert_eq!(s.query(), "rust async");
    assert_eq!(s.history().len(), 4);
}

/// Blank queries change nothing
#[test]
fn test_blank_submit_is_noop() {
    for blank in ["", " ", "\t\n", "   "] {
        let mut s = session();
        s.set_active_view(View::About);
        let before = s.history().clone();
        assert!(!s.submit_query(blank));
        assert_eq!(s.history(), &before);
        assert_eq!(s.active_view(), View::About);
    }
}

#[test]
fn test_submit_keeps_text_untrimmed() {
    let mut s = session();
    s.submit_query("  padded ");
    assert_eq!(s.history().get(0), Some("  padded "));
}

#[test]
fn test_duplicate_submit_moves_to_front() {
    let mut s = session();
    let len = s.history().len();
    s.submit_query("Modern web design trends");
    assert_eq!(s.history().get(0), Some("Modern web design trends"));
    assert_eq!(s.history().len(), len);
}

#[test]
fn test_history_bounded_without_duplicates() {
    let mut s = session();
    let queries = ["a", "b", "a", "c", "d", "e", "f", "b", "g", "a"];
    for q in queries {
        s.submit_query(q);
        assert!(s.history().len() <= HISTORY_LIMIT);
        let entries = s.history().entries();
        for (i, e) in entries.iter().enumerate() {
            assert!(!entries[i + 1..].contains(e), "duplicate {}", e);
        }
    }
    assert_eq!(s.history().entries(), &["a", "g", "b", "f", "e"]);
}

#[test]
fn test_submit_current_uses_query_box() {
    let mut s = session();
    s.set_query("from the box");
    assert!(s.submit_current());
    assert_eq!(s.history().get(0), Some("from the box"));

    s.set_active_view(View::Home);
    s.set_query("   ");
    assert!(!s.submit_current());
    assert_eq!(s.active_view(), View::Home);
}

#[test]
fn test_resubmit_history_entry_reorders() {
    let mut s = session();
    s.resubmit_history_entry("Modern web design trends");
    assert_eq!(s.query(), "Modern web design trends");
    assert_eq!(s.history().get(0), Some("Modern web design trends"));
    assert_eq!(s.active_view(), View::Results);
}

#[test]
fn test_open_history_entry_keeps_order() {
    let mut s = session();
    let before = s.history().clone();
    s.open_history_entry("Modern web design trends");
    assert_eq!(s.query(), "Modern web design trends");
    assert_eq!(s.active_view(), View::Results);
    assert_eq!(s.history(), &before);
}

#[test]
fn test_filtered_results_follow_state() {
    let mut s = session();
    s.set_content_type(ContentType::Web);
    s.set_relevance_threshold(RelevanceThreshold::new(90));
    let ids: Vec<&str> = s.filtered_results().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert!(s.filters_active());

    s.set_content_type(ContentType::Image);
    assert!(s.filtered_results().is_empty());

    s.set_content_type(ContentType::All);
    s.set_relevance_threshold(RelevanceThreshold::new(0));
    assert_eq!(s.result_count(), 3);
}

/// Date and source filters are recorded but never narrow results
#[test]
fn test_date_and_source_filters_are_inert() {
    let mut s = session();
    let before: Vec<String> = s.filtered_results().iter().map(|r| r.id.clone()).collect();
    s.set_date_filter(DateFilter::Day);
    s.set_source_filter(SourceFilter::Verified);
    let after: Vec<String> = s.filtered_results().iter().map(|r| r.id.clone()).collect();
    assert_eq!(before, after);
    assert!(s.inert_filters_selected());
    assert!(!s.filters_active());
}

#[test]
fn test_adjust_relevance_stays_on_step() {
    let mut s = session();
    for _ in 0..10 {
        s.adjust_relevance(1);
        assert_eq!(s.relevance_threshold().value() % 5, 0);
    }
    assert_eq!(s.relevance_threshold().value(), 100);
    s.adjust_relevance(-3);
    assert_eq!(s.relevance_threshold().value(), 85);
    for _ in 0..30 {
        s.adjust_relevance(-1);
    }
    assert_eq!(s.relevance_threshold().value(), 0);
}

#[test]
fn test_clear_history() {
    let mut s = session();
    s.clear_history();
    assert!(s.history().is_empty());
    s.submit_query("fresh");
    assert_eq!(s.history().entries(), &["fresh"]);
}

#[test]
fn test_save_history_off_skips_recording() {
    let mut s = session();
    s.toggle_preference(Preference::SaveHistory);
    assert!(!s.preferences().save_history);
    let before = s.history().clone();
    assert!(s.submit_query("not remembered"));
    assert_eq!(s.active_view(), View::Results);
    assert_eq!(s.history(), &before);
}

#[test]
fn test_preferences_toggle() {
    let mut s = session();
    s.toggle_preference(Preference::Theme);
    assert_eq!(s.preferences().theme, Theme::Dark);
    s.toggle_preference(Preference::Theme);
    assert_eq!(s.preferences().theme, Theme::Bright);
    s.toggle_preference(Preference::QuickSearch);
    s.toggle_preference(Preference::Autocomplete);
    assert!(!s.preferences().quick_search);
    assert!(!s.preferences().autocomplete);
    s.set_theme(Theme::Dark);
    assert_eq!(s.preferences().theme, Theme::Dark);
}

#[test]
fn test_from_config() {
    let config = Config {
        relevance_threshold: RelevanceThreshold::new(40),
        content_type: ContentType::News,
        history: vec!["one".to_string(), "one".to_string(), "two".to_string()],
        ..Config::default()
    };
    let s = SessionState::from_config(&config, seed_results());
    assert_eq!(s.relevance_threshold().value(), 40);
    assert_eq!(s.content_type(), ContentType::News);
    assert_eq!(s.history().entries(), &["one", "two"]);
    assert!(s.filtered_results().is_empty());
    assert_eq!(s.all_results().len(), 3);
}
