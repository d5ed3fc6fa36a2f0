//! Diversity Balancing Stage
//!
//! Greedy post-ranking pass that keeps any one category, content type, or
//! tag cluster from dominating the result page. Diversity is a soft
//! preference: a backfill pass tops the page up with skipped items in score
//! order, so the page is never emptier than the candidate pool allows.

use std::collections::HashSet;

use super::engine::ScoredContent;

/// Repeats of a category are allowed once this many distinct categories
/// have been admitted
const CATEGORY_CAP: usize = 4;
/// Repeats of a content type are allowed once this many distinct types
/// have been admitted
const TYPE_CAP: usize = 3;
/// Tag novelty is no longer required once this many distinct tags have
/// been seen
const TAG_CAP: usize = 10;

/// Select at most `limit` items from the score-sorted list, preferring
/// items that introduce a new category, type, or tag.
///
/// Never re-scores and never admits fewer than `min(limit, candidates)`.
pub fn balance_diversity(sorted: Vec<ScoredContent>, limit: usize) -> Vec<ScoredContent> {
    let mut seen_categories: HashSet<String> = HashSet::new();
    let mut seen_types: HashSet<String> = HashSet::new();
    let mut seen_tags: HashSet<String> = HashSet::new();

    let mut selected = vec![false; sorted.len()];
    let mut result: Vec<ScoredContent> = Vec::with_capacity(limit.min(sorted.len()));

    for (idx, scored) in sorted.iter().enumerate() {
        if result.len() >= limit {
            break;
        }
        let item = &scored.item;

        let category_ok =
            !seen_categories.contains(&item.category) || seen_categories.len() >= CATEGORY_CAP;
        let type_ok = !seen_types.contains(item.content_type.as_key())
            || seen_types.len() >= TYPE_CAP;
        // Tagless items always pass the tag clause
        let tag_ok = item.tags.is_empty()
            || item.tags.iter().any(|tag| !seen_tags.contains(tag))
            || seen_tags.len() >= TAG_CAP;

        if category_ok && type_ok && tag_ok {
            seen_categories.insert(item.category.clone());
            seen_types.insert(item.content_type.as_key().to_string());
            for tag in &item.tags {
                seen_tags.insert(tag.clone());
            }
            selected[idx] = true;
            result.push(scored.clone());
        }
    }

    // Backfill: diversity constraints left slots open, fill them in score
    // order with whatever was skipped.
    if result.len() < limit {
        for (idx, scored) in sorted.iter().enumerate() {
            if result.len() >= limit {
                break;
            }
            if !selected[idx] {
                result.push(scored.clone());
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentItem, ContentType};
    use crate::discovery::scoring::DiscoveryScore;
    use chrono::Utc;

    fn scored(id: &str, category: &str, content_type: ContentType, tags: &[&str]) -> ScoredContent {
        let mut item = ContentItem::new(id, category, content_type, Utc::now());
        item.tags = tags.iter().map(|t| t.to_string()).collect();
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
    fn test_respects_limit() {
        let items: Vec<ScoredContent> = (0..30)
            .map(|i| scored(&format!("i{i}"), &format!("cat{i}"), ContentType::Post, &[]))
            .collect();
        assert_eq!(balance_diversity(items, 10).len(), 10);
    }

    #[test]
    fn test_returns_all_when_fewer_than_limit() {
        let items = vec![
            scored("a", "music", ContentType::Event, &[]),
            scored("b", "music", ContentType::Event, &[]),
            scored("c", "music", ContentType::Event, &[]),
        ];
        assert_eq!(balance_diversity(items, 10).len(), 3);
    }

    #[test]
    fn test_prefers_new_categories_over_score_order() {
        // Five "music" items ahead of one "food" item; the greedy pass should
        // pull food forward instead of stacking music.
        let mut items: Vec<ScoredContent> = (0..5)
            .map(|i| scored(&format!("m{i}"), "music", ContentType::Post, &[]))
            .collect();
        items.push(scored("f0", "food", ContentType::Event, &[]));

        let result = balance_diversity(items, 2);
        let categories: Vec<&str> = result.iter().map(|r| r.item.category.as_str()).collect();
        assert_eq!(categories, vec!["music", "food"]);
    }

    #[test]
    fn test_category_cap_lifts_after_four_distinct() {
        let mut items = vec![
            scored("a", "music", ContentType::Post, &[]),
            scored("b", "food", ContentType::Event, &[]),
            scored("c", "art", ContentType::Artist, &[]),
            scored("d", "tech", ContentType::Group, &[]),
        ];
        // Repeats, admissible only once four distinct categories are in
        for i in 0..4 {
            items.push(scored(&format!("r{i}"), "music", ContentType::Business, &[]));
        }

        let result = balance_diversity(items, 8);
        assert_eq!(result.len(), 8);
        let music_count = result
            .iter()
            .filter(|r| r.item.category == "music")
            .count();
        assert_eq!(music_count, 5);
    }

    #[test]
    fn test_backfill_fills_page_under_strict_constraints() {
        // All same category/type/tag: greedy pass admits one, backfill the rest
        let items: Vec<ScoredContent> = (0..6)
            .map(|i| scored(&format!("i{i}"), "music", ContentType::Post, &["jazz"]))
            .collect();
        let result = balance_diversity(items, 4);
        assert_eq!(result.len(), 4);
        // Backfill preserves score order among the skipped items
        assert_eq!(result[0].item.id, "i0");
        assert_eq!(result[1].item.id, "i1");
    }

    #[test]
    fn test_tagless_items_always_pass_tag_clause() {
        let items = vec![
            scored("a", "music", ContentType::Post, &["jazz"]),
            scored("b", "food", ContentType::Event, &[]),
            scored("c", "art", ContentType::Artist, &[]),
        ];
        let result = balance_diversity(items, 3);
        assert_eq!(result.len(), 3);
        assert_eq!(result[1].item.id, "b");
    }

    #[test]
    fn test_at_least_two_categories_when_available() {
        let mut items: Vec<ScoredContent> = (0..10)
            .map(|i| scored(&format!("m{i}"), "music", ContentType::Post, &[]))
            .collect();
        items.push(scored("f", "food", ContentType::Post, &[]));

        let result = balance_diversity(items, 5);
        let distinct: HashSet<&str> = result.iter().map(|r| r.item.category.as_str()).collect();
        assert!(distinct.len() >= 2);
    }
}
