//! Core domain types for the BingoRoute trip planner.
//!
//! The crate holds the validated destination [`Catalog`], the visitor's
//! [`Preferences`], the filter stage, great-circle distance helpers and the
//! [`Scorer`] trait implemented by the recommendation engine. Session state
//! such as [`Favorites`] and the [`RoutePlan`] also lives here.
//!
//! Everything is synchronous and side-effect free apart from the
//! [`StateStore`] notifications.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod destination;
pub mod distance;
pub mod favorites;
pub mod filter;
pub mod preferences;
pub mod reason;
pub mod route;
pub mod scorer;
pub mod season;
pub mod state;
pub mod vocabulary;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{Catalog, CatalogError};
pub use destination::{Coordinates, Destination, Details, Tags};
pub use distance::{Nearby, distance, format_distance, nearest_first};
pub use favorites::Favorites;
pub use filter::{DestinationFilter, filter_destinations};
pub use preferences::Preferences;
pub use reason::{Reason, ReasonKind};
pub use route::{RoutePlan, RoutePlanError};
pub use scorer::{Assessment, ScoredDestination, Scorer};
pub use season::Season;
pub use state::{Listener, MemoryStateStore, StateStore, SubscriptionId};
