//! Content Data Model
//!
//! The unit being ranked is a [`ContentItem`]: a post, event, business,
//! artist profile, or group surfaced on the platform. Items carry a sparse
//! set of optional signals (location, price, engagement counts); scoring
//! pattern-matches on presence rather than assuming every field is set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of content being ranked
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Event,
    Artist,
    Post,
    Group,
    Business,
    /// Content kinds the engine does not know about rank with default
    /// variety weight.
    Other(String),
}

impl ContentType {
    /// Stable lowercase key used for variety lookups and distributions.
    pub fn as_key(&self) -> &str {
        match self {
            ContentType::Event => "event",
            ContentType::Artist => "artist",
            ContentType::Post => "post",
            ContentType::Group => "group",
            ContentType::Business => "business",
            ContentType::Other(name) => name.as_str(),
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

/// A place on the platform: coordinates and/or a named city/state.
///
/// Any subset of the fields may be present; scoring treats a missing side
/// as "no signal" rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl Location {
    /// Both coordinates present, if the location is geocoded.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Historical engagement counts for an item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

impl Engagement {
    pub fn total(&self) -> u64 {
        self.likes + self.comments + self.shares
    }
}

/// A candidate content item supplied by the content-fetching layer.
///
/// The engine never mutates these; scored results wrap a clone together
/// with the score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub category: String,
    pub content_type: ContentType,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,

    /// Scheduled/occurrence date, distinct from creation time (events).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement: Option<Engagement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ContentItem {
    /// Minimal item with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        content_type: ContentType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            content_type,
            tags: Vec::new(),
            created_at,
            date: None,
            location: None,
            price: None,
            engagement: None,
            attendees_count: None,
            rating: None,
            title: None,
            description: None,
            image: None,
        }
    }
}
