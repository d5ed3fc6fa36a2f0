//! Discovery Module
//!
//! Personalized discovery and ranking for community content (posts, events,
//! businesses, artists, groups).
//!
//! ## Architecture
//!
//! Four composed stages, run per request:
//!
//! 1. **Filters** - Discard candidates violating hard constraints (category,
//!    type, date range, geographic radius, price, tags)
//! 2. **Scoring** - Six independent sub-scores per surviving item, combined
//!    into one weighted final score
//! 3. **Ranking** - Stable sort by final score, descending
//! 4. **Balancing** - Greedy pass capping category/type/tag repetition in
//!    the result page, with score-order backfill
//!
//! A separate insight generator consumes the final list to produce summary
//! statistics for display; it never feeds back into ranking.
//!
//! ## Algorithm Overview
//!
//! The final score is a fixed weighted sum:
//! - Interest match (30%): user interests appearing in category/tags
//! - Freshness (20%): exponential decay on item age
//! - Location relevance (20%): same city/state or haversine distance
//! - Variety ("diversity", 15%): the item's intrinsic variety - type and
//!   category rarity plus tag breadth, not diversity relative to other
//!   results (the balancing stage handles that)
//! - Engagement prediction (10%): historical counts and content quality cues
//! - Serendipity (5%): reward for partial-but-nonzero interest overlap
//!
//! The engine is a pure, synchronous, stateless computation: "now" is an
//! explicit parameter, nothing is cached, and inputs are never mutated.

pub mod balance;
pub mod engine;
pub mod filters;
pub mod geo;
pub mod insights;
pub mod matching;
pub mod metrics;
pub mod scoring;
pub mod weights;

// Re-export the types that are actually used externally
pub use engine::{discover_content, ScoredContent};
pub use filters::DiscoveryFilters;
pub use insights::DiscoveryInsights;
pub use matching::InterestMatches;
pub use scoring::DiscoveryScore;
pub use weights::ScoringWeights;
