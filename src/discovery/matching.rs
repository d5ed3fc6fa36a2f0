//! Interest overlap and match bucketing
//!
//! The overlap ratio here is the shared definition behind the interest-match
//! and serendipity sub-scores and the standalone
//! [`match_content_with_interests`] operation.

use serde::{Deserialize, Serialize};

use crate::content::ContentItem;

/// Fraction of user interests appearing as a case-insensitive substring of
/// the item's category or any tag, clamped to 1.0.
///
/// Returns 0.0 for an empty interest list; callers treat that case as "no
/// signal" and substitute their own neutral value.
pub fn interest_overlap(user_interests: &[String], item: &ContentItem) -> f64 {
    if user_interests.is_empty() {
        return 0.0;
    }

    let category = item.category.to_lowercase();
    let tags: Vec<String> = item.tags.iter().map(|t| t.to_lowercase()).collect();

    let matched = user_interests
        .iter()
        .filter(|interest| {
            let needle = interest.to_lowercase();
            category.contains(&needle) || tags.iter().any(|tag| tag.contains(&needle))
        })
        .count();

    (matched as f64 / user_interests.len() as f64).min(1.0)
}

/// Content partitioned by interest-overlap strength
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterestMatches {
    /// Overlap ratio >= 0.8
    pub perfect_matches: Vec<ContentItem>,
    /// Overlap ratio >= 0.4
    pub good_matches: Vec<ContentItem>,
    /// Overlap ratio > 0 but < 0.4
    pub serendipitous_matches: Vec<ContentItem>,
}

/// Partition content into overlap buckets for exploratory UI surfaces.
///
/// Independent of the main ranking pipeline. Items with zero overlap (and
/// everything, when the interest list is empty) fall into no bucket.
pub fn match_content_with_interests(
    user_interests: &[String],
    content: &[ContentItem],
) -> InterestMatches {
    let mut matches = InterestMatches::default();

    for item in content {
        let ratio = interest_overlap(user_interests, item);
        if ratio >= 0.8 {
            matches.perfect_matches.push(item.clone());
        } else if ratio >= 0.4 {
            matches.good_matches.push(item.clone());
        } else if ratio > 0.0 {
            matches.serendipitous_matches.push(item.clone());
        }
    }

    matches
}
