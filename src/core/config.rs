use super::error::{Error, Result};
use crate::search::filter::RelevanceThreshold;
use crate::search::model::{ContentType, DateFilter, SourceFilter};
use crate::state::session::Preferences;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Startup defaults for a werty session
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Initial minimum relevance (snapped to a multiple of 5)
    pub relevance_threshold: RelevanceThreshold,
    /// Initial content-type filter
    pub content_type: ContentType,
    /// Initial date filter
    pub date_filter: DateFilter,
    /// Initial source filter
    pub source_filter: SourceFilter,
    /// Queries shown in history at startup, most recent first
    pub history: Vec<String>,
    /// Settings-view toggles
    pub preferences: Preferences,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relevance_threshold: RelevanceThreshold::default(),
            content_type: ContentType::All,
            date_filter: DateFilter::Anytime,
            source_filter: SourceFilter::All,
            history: vec![
                "TypeScript best practices".to_string(),
                "React performance optimization".to_string(),
                "Modern web design trends".to_string(),
            ],
            preferences: Preferences::default(),
        }
    }
}

impl Config {
    /// Location checked when no explicit config path is given
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("werty").join("config.yaml"))
    }

    /// Parse a configuration from YAML text
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Read a configuration file. The file must exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Could not read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&text)
    }

    /// Resolve configuration: explicit path, then the default location, then built-ins
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            info!(path = %path.display(), "Loading configuration");
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                info!(path = %path.display(), "Loading configuration");
                match Self::from_file(&path) {
                    Ok(config) => Ok(config),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "Ignoring invalid configuration");
                        Ok(Self::default())
                    }
                }
            }
            _ => {
                info!("Using built-in configuration");
                Ok(Self::default())
            }
        }
    }
}
