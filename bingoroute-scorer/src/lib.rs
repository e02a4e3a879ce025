//! Recommendation scoring for `BingoRoute` destinations.
//!
//! The crate provides the request-time half of the trip planner:
//! - **Weighted scoring** rates each destination against the visitor's
//!   [`Preferences`](bingoroute_core::Preferences) using district, theme and
//!   rating signals, a seasonal multiplier and two keyword bonuses.
//!   [`WeightedScorer`] implements the [`Scorer`](bingoroute_core::Scorer)
//!   trait, so callers can swap in their own scorer through [`Recommender`].
//! - **Ranking** sorts the scored catalog with a stable descending sort and
//!   keeps the best entries.
//! - **Categorization** splits a ranking into top picks, theme matches and
//!   nearby options.
//!
//! # Examples
//!
//! ```
//! use bingoroute_core::{Coordinates, Destination, Preferences};
//! use bingoroute_scorer::{DEFAULT_MAX_RESULTS, categorize, recommend};
//!
//! let catalog = vec![
//!     Destination::new("palace", "경복궁", "종로구", Coordinates::new(37.5796, 126.977))
//!         .with_tags(["역사/문화"])
//!         .with_rating(4.6),
//! ];
//! let prefs = Preferences::new().with_theme("역사/문화");
//! let ranked = recommend(&catalog, &prefs, DEFAULT_MAX_RESULTS);
//! let categories = categorize(&ranked);
//! assert_eq!(categories.theme_matches.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod categorize;
mod error;
mod recommend;
pub mod seasonal;
mod weighted;
mod weights;

pub use categorize::{CATEGORY_SIZE, Categories, categorize};
pub use error::ScoreWeightsError;
pub use recommend::{DEFAULT_MAX_RESULTS, Recommender, recommend};
pub use seasonal::seasonal_weight;
pub use weighted::{EXPERIENCE_KEYWORDS, TRANSIT_KEYWORDS, WeightedScorer};
pub use weights::{MAX_RATING, ScoreWeights};
