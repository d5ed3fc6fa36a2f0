//! Discovery engine library crate
//!
//! Re-exports the core modules for integration tests and external use.

pub mod content;
pub mod discovery;
pub mod error;

// Re-export commonly used types
pub use content::{ContentItem, ContentType, Engagement, Location};
pub use discovery::engine::{discover_content, ScoredContent, DEFAULT_RESULT_LIMIT};
pub use discovery::filters::{DateRange, DiscoveryFilters, GeoRadius, PriceRange};
pub use discovery::insights::{generate_discovery_insights, DiscoveryInsights};
pub use discovery::matching::{match_content_with_interests, InterestMatches};
pub use discovery::scoring::DiscoveryScore;
pub use discovery::weights::ScoringWeights;
pub use error::{Error, Result};
