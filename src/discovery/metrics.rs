//! Discovery Metrics and Quality Monitoring
//!
//! Observational utilities for monitoring discovery quality and latency.
//! Nothing here feeds back into ranking.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::time::Instant;

use super::engine::ScoredContent;
use crate::discovery::matching::interest_overlap;

/// Metrics for a single discovery run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryRunMetrics {
    pub candidates_considered: usize,
    pub results_returned: usize,
    pub avg_final_score: f64,

    // Diversity metrics
    pub distinct_categories: usize,
    pub distinct_tags: usize,
    pub content_type_distribution: HashMap<String, usize>,
}

impl DiscoveryRunMetrics {
    /// Summarize a finished run.
    pub fn from_run(candidates_considered: usize, results: &[ScoredContent]) -> Self {
        let mut categories: HashSet<&str> = HashSet::new();
        let mut tags: HashSet<&str> = HashSet::new();
        let mut content_type_distribution: HashMap<String, usize> = HashMap::new();
        let mut score_sum = 0.0;

        for scored in results {
            categories.insert(scored.item.category.as_str());
            for tag in &scored.item.tags {
                tags.insert(tag.as_str());
            }
            *content_type_distribution
                .entry(scored.item.content_type.as_key().to_string())
                .or_insert(0) += 1;
            score_sum += scored.score.final_score;
        }

        let avg_final_score = if results.is_empty() {
            0.0
        } else {
            score_sum / results.len() as f64
        };

        Self {
            candidates_considered,
            results_returned: results.len(),
            avg_final_score,
            distinct_categories: categories.len(),
            distinct_tags: tags.len(),
            content_type_distribution,
        }
    }
}

/// Performance timer for tracking operation duration
pub struct PerformanceTimer {
    start: Instant,
    label: String,
}

impl PerformanceTimer {
    pub fn new(label: &str) -> Self {
        Self {
            start: Instant::now(),
            label: label.to_string(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn log_if_slow(&self, threshold_ms: u64) {
        let elapsed = self.elapsed_ms();
        if elapsed > threshold_ms {
            tracing::warn!(
                "Slow operation: {} took {}ms (threshold: {}ms)",
                self.label,
                elapsed,
                threshold_ms
            );
        }
    }
}

impl Drop for PerformanceTimer {
    fn drop(&mut self) {
        tracing::debug!("{} completed in {}ms", self.label, self.elapsed_ms());
    }
}

/// Discovery quality analyzer
pub struct QualityAnalyzer;

impl QualityAnalyzer {
    /// Result-page diversity (0-1, higher is better): distinct categories
    /// relative to page size, with tag spread as a secondary signal.
    pub fn diversity_score(
        distinct_categories: usize,
        distinct_tags: usize,
        results_returned: usize,
    ) -> f64 {
        if results_returned == 0 {
            return 0.0;
        }

        let category_diversity = distinct_categories as f64 / results_returned as f64;
        let tag_diversity =
            (distinct_tags as f64 / (results_returned as f64 * 3.0)).min(1.0);

        category_diversity * 0.7 + tag_diversity * 0.3
    }

    /// Fraction of results with any interest overlap (0-1, higher is more
    /// personalized).
    pub fn personalization_score(user_interests: &[String], results: &[ScoredContent]) -> f64 {
        if results.is_empty() || user_interests.is_empty() {
            return 0.0;
        }

        let matched = results
            .iter()
            .filter(|s| interest_overlap(user_interests, &s.item) > 0.0)
            .count();
        matched as f64 / results.len() as f64
    }

    /// Flag potential quality problems with a run.
    pub fn detect_issues(metrics: &DiscoveryRunMetrics) -> Vec<String> {
        let mut issues = Vec::new();

        let diversity = Self::diversity_score(
            metrics.distinct_categories,
            metrics.distinct_tags,
            metrics.results_returned,
        );
        if metrics.results_returned > 0 && diversity < 0.3 {
            issues.push(format!("Low diversity: {diversity:.2}"));
        }

        if metrics.results_returned > 0 && metrics.avg_final_score < 0.3 {
            issues.push(format!("Low avg score: {:.2}", metrics.avg_final_score));
        }

        if metrics.candidates_considered < metrics.results_returned * 2 {
            issues.push("Too few candidates for quality filtering".to_string());
        }

        issues
    }
}
