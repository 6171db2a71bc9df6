use super::model::{ContentType, SearchResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const RELEVANCE_STEP: u8 = 5;
pub const RELEVANCE_MAX: u8 = 100;

/// Minimum relevance a result must reach to be shown.
///
/// Always a multiple of [`RELEVANCE_STEP`] within `0..=100`. Out-of-range
/// inputs are clamped, off-step inputs snap to the nearest step (ties round up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RelevanceThreshold(u8);

impl RelevanceThreshold {
    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(0, RELEVANCE_MAX as i64);
        let step = RELEVANCE_STEP as i64;
        let snapped = ((clamped + step / 2) / step) * step;
        Self(snapped.min(RELEVANCE_MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Move by `steps` increments of 5, saturating at both ends
    pub fn step_by(&self, steps: i32) -> Self {
        Self::new(self.0 as i64 + steps as i64 * RELEVANCE_STEP as i64)
    }
}

impl Default for RelevanceThreshold {
    fn default() -> Self {
        Self(70)
    }
}

impl fmt::Display for RelevanceThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl<'de> Deserialize<'de> for RelevanceThreshold {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

/// Filter results by content type and minimum relevance.
///
/// Input order is preserved; nothing is re-ranked.
pub fn compute_filtered_results<'a>(
    all_results: &'a [SearchResult],
    content_type: ContentType,
    relevance_threshold: RelevanceThreshold,
) -> Vec<&'a SearchResult> {
    all_results
        .iter()
        .filter(|r| content_type.accepts(r.kind))
        .filter(|r| r.relevance >= relevance_threshold.value())
        .collect()
}
