use std::fs;
use tempfile::TempDir;
use werty::{Config, ContentType, DateFilter, Error, Result, SourceFilter, Theme};

#[test]
fn test_empty_yaml_gives_defaults() -> Result<()> {
    let config = Config::from_yaml("")?;
    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
fn test_partial_yaml_keeps_other_defaults() -> Result<()> {
    let config = Config::from_yaml(
        r#"
relevance_threshold: 83
content_type: web
preferences:
  theme: dark
"#,
    )?;
    assert_eq!(config.relevance_threshold.value(), 85);
    assert_eq!(config.content_type, ContentType::Web);
    assert_eq!(config.date_filter, DateFilter::Anytime);
    assert_eq!(config.source_filter, SourceFilter::All);
    assert_eq!(config.preferences.theme, Theme::Dark);
    assert!(config.preferences.save_history);
    assert_eq!(config.history.len(), 3);
    Ok(())
}

#[test]
fn test_out_of_range_threshold_is_clamped() -> Result<()> {
    let config = Config::from_yaml("relevance_threshold: 400")?;
    assert_eq!(config.relevance_threshold.value(), 100);
    let config = Config::from_yaml("relevance_threshold: -10")?;
    assert_eq!(config.relevance_threshold.value(), 0);
    Ok(())
}

#[test]
fn test_unknown_values_rejected() {
    assert!(matches!(
        Config::from_yaml("content_type: podcast"),
        Err(Error::Yaml(_))
    ));
    assert!(matches!(
        Config::from_yaml("source_filter: rumours"),
        Err(Error::Yaml(_))
    ));
    assert!(matches!(
        Config::from_yaml("unknown_key: 1"),
        Err(Error::Yaml(_))
    ));
}

#[test]
fn test_load_explicit_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(
        &path,
        "history:\n  - first\n  - second\ndate_filter: month\n",
    )?;

    let config = Config::load(Some(&path))?;
    assert_eq!(config.history, vec!["first", "second"]);
    assert_eq!(config.date_filter, DateFilter::Month);
    Ok(())
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.yaml");
    assert!(matches!(Config::load(Some(&path)), Err(Error::Config(_))));
}
