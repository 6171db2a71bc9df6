use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content a single result represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    Web,
    Image,
    Video,
    News,
}

impl ResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Web => "web",
            ResultType::Image => "image",
            ResultType::Video => "video",
            ResultType::News => "news",
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content-type filter. `All` disables the type test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    All,
    Web,
    Image,
    Video,
    News,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::All,
        ContentType::Web,
        ContentType::Image,
        ContentType::Video,
        ContentType::News,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::All => "all",
            ContentType::Web => "web",
            ContentType::Image => "image",
            ContentType::Video => "video",
            ContentType::News => "news",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentType::All => "All types",
            ContentType::Web => "Web pages",
            ContentType::Image => "Images",
            ContentType::Video => "Video",
            ContentType::News => "News",
        }
    }

    /// Whether a result of type `kind` passes this filter
    pub fn accepts(&self, kind: ResultType) -> bool {
        match self {
            ContentType::All => true,
            ContentType::Web => kind == ResultType::Web,
            ContentType::Image => kind == ResultType::Image,
            ContentType::Video => kind == ResultType::Video,
            ContentType::News => kind == ResultType::News,
        }
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, *self)
    }
}

/// Recency filter (captured, not applied)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilter {
    #[default]
    Anytime,
    Day,
    Week,
    Month,
    Year,
}

impl DateFilter {
    pub const ALL: [DateFilter; 5] = [
        DateFilter::Anytime,
        DateFilter::Day,
        DateFilter::Week,
        DateFilter::Month,
        DateFilter::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateFilter::Anytime => "anytime",
            DateFilter::Day => "day",
            DateFilter::Week => "week",
            DateFilter::Month => "month",
            DateFilter::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateFilter::Anytime => "Any time",
            DateFilter::Day => "Past day",
            DateFilter::Week => "Past week",
            DateFilter::Month => "Past month",
            DateFilter::Year => "Past year",
        }
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, *self)
    }
}

/// Source filter (captured, not applied)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFilter {
    #[default]
    All,
    Verified,
    News,
    Blog,
}

impl SourceFilter {
    pub const ALL: [SourceFilter; 4] = [
        SourceFilter::All,
        SourceFilter::Verified,
        SourceFilter::News,
        SourceFilter::Blog,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFilter::All => "all",
            SourceFilter::Verified => "verified",
            SourceFilter::News => "news",
            SourceFilter::Blog => "blog",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceFilter::All => "All sources",
            SourceFilter::Verified => "Verified",
            SourceFilter::News => "News outlets",
            SourceFilter::Blog => "Blogs",
        }
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, *self)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let pos = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(pos + 1) % all.len()]
}

fn parse_enum<T: Copy>(
    field: &'static str,
    raw: &str,
    all: &[T],
    name: fn(&T) -> &'static str,
) -> Result<T> {
    let wanted = raw.trim().to_ascii_lowercase();
    all.iter()
        .copied()
        .find(|v| name(v) == wanted)
        .ok_or_else(|| Error::invalid(field, raw))
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_enum("content type", s, &Self::ALL, ContentType::as_str)
    }
}

impl FromStr for DateFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_enum("date filter", s, &Self::ALL, DateFilter::as_str)
    }
}

impl FromStr for SourceFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_enum("source filter", s, &Self::ALL, SourceFilter::as_str)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SourceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single search result record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResultType,
    /// Publication date (YYYY-MM-DD)
    pub date: String,
    pub source: String,
    /// Relevance percentage, 0-100
    pub relevance: u8,
}

impl SearchResult {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        kind: ResultType,
        date: impl Into<String>,
        source: impl Into<String>,
        relevance: u8,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            description: description.into(),
            kind,
            date: date.into(),
            source: source.into(),
            relevance: relevance.min(100),
        }
    }

    /// Serialize a result list to pretty JSON
    pub fn list_to_json(results: &[&SearchResult]) -> Result<String> {
        Ok(serde_json::to_string_pretty(results)?)
    }
}

/// The fixed demo result set standing in for a search backend
pub fn seed_results() -> Vec<SearchResult> {
    vec![
        SearchResult::new(
            "1",
            "Руководство по современной веб-разработке 2024",
            "https://example.com/web-dev-guide",
            "Полное руководство по современным трендам веб-разработки, включая новейшие \
             фреймворки и инструменты для создания быстрых и отзывчивых приложений.",
            ResultType::Web,
            "2024-12-01",
            "TechBlog",
            95,
        ),
        SearchResult::new(
            "2",
            "Топ-10 дизайн-трендов в 2024 году",
            "https://example.com/design-trends",
            "Исследование актуальных трендов в UI/UX дизайне: от микроанимаций до \
             продвинутых градиентов и glassmorphism эффектов.",
            ResultType::Web,
            "2024-11-28",
            "DesignWeekly",
            88,
        ),
        SearchResult::new(
            "3",
            "Как оптимизировать производительность веб-приложений",
            "https://example.com/performance",
            "Практическое руководство по улучшению скорости загрузки и отзывчивости \
             современных веб-приложений с использованием передовых техник.",
            ResultType::Web,
            "2024-11-15",
            "DevMasters",
            92,
        ),
    ]
}
