//! Scoring weights and variety lookup tables
//!
//! The factor weights are fixed constants so final scores stay comparable
//! across requests. The variety tables are explicit enumerated mappings
//! with a documented default for unknown keys, kept here so the constants
//! are auditable and unit-testable apart from the combining logic.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Variety weight for content types and categories the tables do not list.
pub const DEFAULT_VARIETY_WEIGHT: f64 = 0.5;

/// Per-factor weights for the final score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub interest: f64,
    pub diversity: f64,
    pub freshness: f64,
    pub location: f64,
    pub engagement: f64,
    pub serendipity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interest: 0.30,    // 30% weight on interest matching
            diversity: 0.15,   // 15% weight on intrinsic variety
            freshness: 0.20,   // 20% weight on recency decay
            location: 0.20,    // 20% weight on geographic relevance
            engagement: 0.10,  // 10% weight on predicted engagement
            serendipity: 0.05, // 5% weight on partial-overlap reward
        }
    }
}

impl ScoringWeights {
    /// Build a custom weight set, failing fast unless the weights sum to 1.0.
    ///
    /// Sub-scores are clamped to [0, 1], so a unit sum is what keeps the
    /// final score bounded in [0, 1].
    pub fn custom(
        interest: f64,
        diversity: f64,
        freshness: f64,
        location: f64,
        engagement: f64,
        serendipity: f64,
    ) -> Result<Self> {
        let weights = Self {
            interest,
            diversity,
            freshness,
            location,
            engagement,
            serendipity,
        };
        let sum = weights.sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(Error::invalid_weights(sum));
        }
        Ok(weights)
    }

    pub fn sum(&self) -> f64 {
        self.interest
            + self.diversity
            + self.freshness
            + self.location
            + self.engagement
            + self.serendipity
    }
}

/// Intrinsic variety weight per content type.
///
/// Rarer kinds on the platform get a higher weight so the variety sub-score
/// nudges them up; the feed otherwise drowns in posts.
static TYPE_VARIETY: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("event", 0.8),
        ("artist", 0.9),
        ("group", 0.7),
        ("business", 0.6),
        ("post", 0.4),
    ])
});

/// Intrinsic variety weight per category.
static CATEGORY_VARIETY: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("music", 0.6),
        ("food", 0.6),
        ("art", 0.8),
        ("sports", 0.5),
        ("tech", 0.8),
        ("wellness", 0.7),
        ("community", 0.5),
        ("education", 0.7),
    ])
});

/// Variety weight for a content type key; unlisted types get
/// [`DEFAULT_VARIETY_WEIGHT`].
pub fn type_variety(type_key: &str) -> f64 {
    TYPE_VARIETY
        .get(type_key)
        .copied()
        .unwrap_or(DEFAULT_VARIETY_WEIGHT)
}

/// Variety weight for a category; unlisted categories get
/// [`DEFAULT_VARIETY_WEIGHT`]. Lookup is case-insensitive.
pub fn category_variety(category: &str) -> f64 {
    CATEGORY_VARIETY
        .get(category.to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_VARIETY_WEIGHT)
}
