//! Discovery Engine
//!
//! Top-level entry point composing the four pipeline stages:
//! filter, score, rank, balance. Stateless and synchronous; every call
//! operates solely on its arguments and returns fresh output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::{ContentItem, Location};
use crate::discovery::balance::balance_diversity;
use crate::discovery::filters::{apply_filters, DiscoveryFilters};
use crate::discovery::scoring::{score_content, DiscoveryScore};
use crate::discovery::weights::ScoringWeights;

/// Conventional result page size when the caller has no opinion
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// A content item with its attached score breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredContent {
    #[serde(flatten)]
    pub item: ContentItem,
    pub score: DiscoveryScore,
}

impl ScoredContent {
    /// Shorthand for the combined score this item was ranked by.
    pub fn discovery_score(&self) -> f64 {
        self.score.final_score
    }
}

/// Produce a bounded, diversity-balanced, score-ordered result list from a
/// candidate pool.
///
/// `now` is threaded explicitly so freshness is deterministic under test;
/// calling twice with identical inputs and the same `now` yields identical
/// output. Pass [`DEFAULT_RESULT_LIMIT`] for the conventional page size.
pub fn discover_content(
    user_interests: &[String],
    user_location: Option<&Location>,
    available_content: &[ContentItem],
    filters: &DiscoveryFilters,
    limit: usize,
    now: DateTime<Utc>,
) -> Vec<ScoredContent> {
    let _timer = super::metrics::PerformanceTimer::new("discover_content");

    let weights = ScoringWeights::default();
    let filtered = apply_filters(available_content, filters);

    let mut scored: Vec<ScoredContent> = filtered
        .into_iter()
        .map(|item| {
            let score = score_content(user_interests, user_location, &item, now, &weights);
            ScoredContent { item, score }
        })
        .collect();

    // Stable sort: ties keep their candidate order, so equal scores rank
    // deterministically.
    scored.sort_by(|a, b| {
        b.score
            .final_score
            .partial_cmp(&a.score.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let result = balance_diversity(scored, limit);

    debug!(
        candidates = available_content.len(),
        returned = result.len(),
        limit,
        "Generated discovery results"
    );

    result
}
