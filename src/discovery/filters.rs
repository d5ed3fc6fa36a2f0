//! Filter Stage
//!
//! Hard-constraint filtering of the candidate pool. Pure predicate subset:
//! empty filter sets never restrict, and range filters only apply to items
//! that actually carry the attribute in question - absence of data is not a
//! violation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::{ContentItem, ContentType};
use crate::discovery::geo;

/// Inclusive date window applied to items carrying a scheduled `date`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Geographic radius filter applied to items carrying coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoRadius {
    pub latitude: f64,
    pub longitude: f64,
    /// Radius in kilometers
    pub radius_km: f64,
}

/// Inclusive price window applied to items carrying a price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Hard constraints for a discovery request.
///
/// `Default` is the empty filter set, which restricts nothing. Ranges are
/// not validated: a `PriceRange` with `min > max` rejects every priced item,
/// which is accepted behavior rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryFilters {
    /// Allowed categories; empty means no constraint
    #[serde(default)]
    pub categories: Vec<String>,
    /// Allowed content types; empty means no constraint
    #[serde(default)]
    pub content_types: Vec<ContentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoRadius>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    /// Required tags; an item passes on any shared tag, or if empty
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Keep the candidates that satisfy every applicable filter.
pub fn apply_filters(items: &[ContentItem], filters: &DiscoveryFilters) -> Vec<ContentItem> {
    items
        .iter()
        .filter(|item| passes_filters(item, filters))
        .cloned()
        .collect()
}

fn passes_filters(item: &ContentItem, filters: &DiscoveryFilters) -> bool {
    if !filters.categories.is_empty() && !filters.categories.contains(&item.category) {
        return false;
    }

    if !filters.content_types.is_empty() && !filters.content_types.contains(&item.content_type) {
        return false;
    }

    if let (Some(range), Some(date)) = (&filters.date_range, item.date) {
        if date < range.start || date > range.end {
            return false;
        }
    }

    // The radius filter needs a distance, so it only applies to items whose
    // location is geocoded.
    if let (Some(geo_filter), Some(location)) = (&filters.location, &item.location) {
        if let Some((lat, lon)) = location.coordinates() {
            let distance =
                geo::haversine_km(geo_filter.latitude, geo_filter.longitude, lat, lon);
            if distance > geo_filter.radius_km {
                return false;
            }
        }
    }

    if let (Some(range), Some(price)) = (&filters.price_range, item.price) {
        if price < range.min || price > range.max {
            return false;
        }
    }

    if !filters.tags.is_empty() {
        let shares_tag = item.tags.iter().any(|tag| filters.tags.contains(tag));
        if !shares_tag {
            return false;
        }
    }

    true
}
