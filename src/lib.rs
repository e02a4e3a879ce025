//! Facade crate for the `BingoRoute` trip-planning engine.
//!
//! This crate re-exports the core domain types and stages, and exposes the
//! weighted recommendation scorer behind the `scorer` feature.

#![forbid(unsafe_code)]

pub use bingoroute_core::{
    Assessment, Catalog, CatalogError, Coordinates, Destination, DestinationFilter, Details,
    Favorites, Listener, MemoryStateStore, Nearby, Preferences, Reason, ReasonKind, RoutePlan,
    RoutePlanError, ScoredDestination, Scorer, Season, StateStore, SubscriptionId, Tags, distance,
    filter_destinations, format_distance, nearest_first,
};

#[cfg(feature = "scorer")]
pub use bingoroute_scorer::{
    CATEGORY_SIZE, Categories, DEFAULT_MAX_RESULTS, Recommender, ScoreWeights, ScoreWeightsError,
    WeightedScorer, categorize, recommend,
};
