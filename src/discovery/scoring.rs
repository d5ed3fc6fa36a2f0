//! Scoring Stage
//!
//! Six independent sub-scores per item, each in [0, 1], combined into one
//! weighted final score. Every scorer is a pure function: missing optional
//! data degrades to a neutral default, and "now" arrives as an explicit
//! parameter so tests can freeze time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::{ContentItem, Location};
use crate::discovery::geo;
use crate::discovery::matching::interest_overlap;
use crate::discovery::weights::{self, ScoringWeights};

/// Decay constant for freshness: exp(-0.03 * hours) halves roughly daily
const FRESHNESS_DECAY_PER_HOUR: f64 = 0.03;
/// Freshness never drops below this, so old content stays discoverable
const FRESHNESS_FLOOR: f64 = 0.1;
/// Distance at which coordinate-based location relevance reaches zero
const LOCATION_SPAN_KM: f64 = 100.0;

/// Immutable breakdown of one item's score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryScore {
    pub interest_match: f64,
    /// Intrinsic variety of the item's kind, not diversity relative to
    /// other results - the balancing stage handles that.
    pub diversity: f64,
    pub freshness: f64,
    pub location_relevance: f64,
    pub engagement: f64,
    pub serendipity: f64,
    pub final_score: f64,
}

/// Score one item against a user profile.
pub fn score_content(
    user_interests: &[String],
    user_location: Option<&Location>,
    item: &ContentItem,
    now: DateTime<Utc>,
    weights: &ScoringWeights,
) -> DiscoveryScore {
    let interest_match = interest_score(user_interests, item);
    let diversity = variety_score(item);
    let freshness = freshness_score(item.created_at, now);
    let location_relevance = location_score(user_location, item);
    let engagement = engagement_score(item);
    let serendipity = serendipity_score(user_interests, item);

    let final_score = interest_match * weights.interest
        + diversity * weights.diversity
        + freshness * weights.freshness
        + location_relevance * weights.location
        + engagement * weights.engagement
        + serendipity * weights.serendipity;

    DiscoveryScore {
        interest_match,
        diversity,
        freshness,
        location_relevance,
        engagement,
        serendipity,
        final_score: final_score.clamp(0.0, 1.0),
    }
}

/// Interest match: overlap ratio, neutral 0.5 when the user has no
/// interests on record.
pub fn interest_score(user_interests: &[String], item: &ContentItem) -> f64 {
    if user_interests.is_empty() {
        return 0.5;
    }
    interest_overlap(user_interests, item)
}

/// Intrinsic variety of the item's kind: type and category rarity from the
/// lookup tables, plus tag breadth (full bonus at 5+ tags).
pub fn variety_score(item: &ContentItem) -> f64 {
    let mut score = 0.5;
    score += weights::type_variety(item.content_type.as_key()) * 0.3;
    score += weights::category_variety(&item.category) * 0.2;
    score += (item.tags.len() as f64 / 5.0).min(1.0) * 0.2;
    score.min(1.0)
}

/// Exponential decay on item age, floored so old content keeps a pulse.
/// Items stamped in the future count as brand new.
pub fn freshness_score(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let age_hours = ((now - created_at).num_seconds() as f64 / 3600.0).max(0.0);
    (-FRESHNESS_DECAY_PER_HOUR * age_hours).exp().max(FRESHNESS_FLOOR)
}

/// Geographic relevance: same city beats same state beats raw distance.
pub fn location_score(user_location: Option<&Location>, item: &ContentItem) -> f64 {
    let (user, item_loc) = match (user_location, item.location.as_ref()) {
        (Some(u), Some(i)) => (u, i),
        // Either side without location data is no signal, not a penalty
        _ => return 0.5,
    };

    if let (Some(user_city), Some(item_city)) = (&user.city, &item_loc.city) {
        if user_city.eq_ignore_ascii_case(item_city) {
            return 1.0;
        }
    }

    if let (Some(user_state), Some(item_state)) = (&user.state, &item_loc.state) {
        if user_state.eq_ignore_ascii_case(item_state) {
            return 0.8;
        }
    }

    if let (Some((user_lat, user_lon)), Some((item_lat, item_lon))) =
        (user.coordinates(), item_loc.coordinates())
    {
        let distance = geo::haversine_km(user_lat, user_lon, item_lat, item_lon);
        return (1.0 - distance / LOCATION_SPAN_KM).max(0.0);
    }

    0.3
}

/// Predicted engagement from historical counts plus content quality cues
/// (title, description, image) and event/business popularity signals.
pub fn engagement_score(item: &ContentItem) -> f64 {
    let mut score = 0.5;

    if let Some(engagement) = &item.engagement {
        score += (engagement.total() as f64 / 1000.0).min(1.0) * 0.3;
    }
    if item.title.as_deref().is_some_and(|t| t.len() > 10) {
        score += 0.1;
    }
    if item.description.as_deref().is_some_and(|d| d.len() > 50) {
        score += 0.1;
    }
    if item.image.is_some() {
        score += 0.1;
    }
    if let Some(attendees) = item.attendees_count {
        score += (attendees as f64 / 100.0).min(1.0) * 0.2;
    }
    if let Some(rating) = item.rating {
        score += rating / 5.0 * 0.2;
    }

    score.min(1.0)
}

/// Reward partial-but-nonzero interest overlap: unexpected-but-relevant
/// content scores higher here than exact matches do.
pub fn serendipity_score(user_interests: &[String], item: &ContentItem) -> f64 {
    if user_interests.is_empty() {
        return 0.5;
    }

    let ratio = interest_overlap(user_interests, item);
    if ratio > 0.0 && ratio < 0.7 {
        0.8
    } else if ratio == 0.0 {
        0.3
    } else {
        0.5
    }
}
