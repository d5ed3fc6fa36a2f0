//! Insight Generator
//!
//! Advisory summary statistics over a final result list: what surfaced and
//! what the user might try next. Purely presentational - never feeds back
//! into ranking, and an empty result list degrades to empty lists rather
//! than an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::engine::ScoredContent;

/// Derived insight payload for display alongside discovery results
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryInsights {
    /// Up to 5 categories, most frequent first
    pub top_categories: Vec<String>,
    /// Up to 10 tags, most frequent first
    pub trending_topics: Vec<String>,
    /// Actionable suggestions for widening discovery
    pub recommendations: Vec<String>,
    /// Observations about what was surfaced
    pub insights: Vec<String>,
}

/// Summarize what a discovery run surfaced.
pub fn generate_discovery_insights(
    user_interests: &[String],
    discovered: &[ScoredContent],
) -> DiscoveryInsights {
    let top_categories = top_by_frequency(
        discovered.iter().map(|s| s.item.category.clone()),
        5,
    );
    let trending_topics = top_by_frequency(
        discovered.iter().flat_map(|s| s.item.tags.iter().cloned()),
        10,
    );

    let mut recommendations = Vec::new();
    if top_categories.len() < 3 {
        recommendations
            .push("Explore more diverse categories to broaden your discovery".to_string());
    }
    if trending_topics.len() < 5 {
        recommendations.push("Try searching trending topics to find popular content".to_string());
    }
    if user_interests.is_empty() {
        recommendations
            .push("Add interests to your profile for personalized recommendations".to_string());
    }

    let mut insights = Vec::new();
    if top_categories.iter().any(|c| c.eq_ignore_ascii_case("music")) {
        insights.push("Music content is prominent in your discoveries".to_string());
    }
    if top_categories.iter().any(|c| c.eq_ignore_ascii_case("food")) {
        insights.push("Food experiences are trending in your results".to_string());
    }
    if !discovered.is_empty() {
        let with_city = discovered
            .iter()
            .filter(|s| {
                s.item
                    .location
                    .as_ref()
                    .is_some_and(|loc| loc.city.is_some())
            })
            .count();
        if with_city as f64 / discovered.len() as f64 > 0.7 {
            insights.push("Most of your discoveries are local to a city near you".to_string());
        }
    }

    DiscoveryInsights {
        top_categories,
        trending_topics,
        recommendations,
        insights,
    }
}

/// Most frequent values, ties broken alphabetically so output is
/// deterministic across runs.
fn top_by_frequency(values: impl Iterator<Item = String>, limit: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().take(limit).map(|(v, _)| v).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentItem, ContentType, Location};
    use crate::discovery::scoring::DiscoveryScore;
    use chrono::Utc;

    fn scored(category: &str, tags: &[&str], city: Option<&str>) -> ScoredContent {
        let mut item = ContentItem::new(
            format!("{category}-{}", tags.len()),
            category,
            ContentType::Post,
            Utc::now(),
        );
        item.tags = tags.iter().map(|t| t.to_string()).collect();
        if let Some(city) = city {
            item.location = Some(Location {
                city: Some(city.to_string()),
                ..Default::default()
            });
        }
        ScoredContent {
            item,
            score: DiscoveryScore {
                interest_match: 0.5,
                diversity: 0.5,
                freshness: 0.5,
                location_relevance: 0.5,
                engagement: 0.5,
                serendipity: 0.5,
                final_score: 0.5,
            },
        }
    }

    #[test]
    fn test_empty_results_degrade_to_recommendations() {
        let insights = generate_discovery_insights(&[], &[]);
        assert!(insights.top_categories.is_empty());
        assert!(insights.trending_topics.is_empty());
        assert!(insights.insights.is_empty());
        // Both frequency thresholds unmet
        assert!(insights.recommendations.len() >= 2);
    }

    #[test]
    fn test_top_categories_ordered_by_frequency() {
        let results = vec![
            scored("music", &[], None),
            scored("music", &["jazz"], None),
            scored("food", &[], None),
            scored("art", &["mural"], None),
            scored("music", &["live"], None),
            scored("food", &["tacos"], None),
        ];
        let insights = generate_discovery_insights(&["music".to_string()], &results);
        assert_eq!(insights.top_categories[0], "music");
        assert_eq!(insights.top_categories[1], "food");
        assert_eq!(insights.top_categories.len(), 3);
    }

    #[test]
    fn test_frequency_ties_break_alphabetically() {
        let results = vec![
            scored("zeta", &[], None),
            scored("alpha", &[], None),
        ];
        let insights = generate_discovery_insights(&["x".to_string()], &results);
        assert_eq!(insights.top_categories, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_canned_observations() {
        let results = vec![
            scored("music", &[], None),
            scored("food", &[], None),
        ];
        let insights = generate_discovery_insights(&["music".to_string()], &results);
        assert!(insights
            .insights
            .iter()
            .any(|i| i.contains("Music content")));
        assert!(insights
            .insights
            .iter()
            .any(|i| i.contains("Food experiences")));
    }

    #[test]
    fn test_mostly_local_observation() {
        let results = vec![
            scored("music", &[], Some("Minneapolis")),
            scored("food", &[], Some("Minneapolis")),
            scored("art", &[], Some("Saint Paul")),
            scored("tech", &[], None),
        ];
        // 3/4 = 75% carry a city
        let insights = generate_discovery_insights(&["x".to_string()], &results);
        assert!(insights.insights.iter().any(|i| i.contains("local")));

        // 50% does not trip the threshold
        let results = vec![
            scored("sports", &[], Some("Minneapolis")),
            scored("tech", &[], None),
        ];
        let insights = generate_discovery_insights(&["x".to_string()], &results);
        assert!(!insights.insights.iter().any(|i| i.contains("local")));
    }

    #[test]
    fn test_trending_topics_capped_at_ten() {
        let tags: Vec<String> = (0..15).map(|i| format!("tag{i:02}")).collect();
        let tag_refs: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
        let results = vec![scored("music", &tag_refs, None)];
        let insights = generate_discovery_insights(&["x".to_string()], &results);
        assert_eq!(insights.trending_topics.len(), 10);
    }
}
