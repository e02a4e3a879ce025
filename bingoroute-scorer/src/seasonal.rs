//! Seasonal adjustment of recommendation scores.
//!
//! Indoor destinations are favoured in winter and, slightly, in summer;
//! outdoor destinations are favoured in spring and autumn.
#![forbid(unsafe_code)]

use bingoroute_core::{Destination, Season};

/// Tags marking a destination as mostly indoors.
pub const INDOOR_TAGS: [&str; 3] = ["박물관/미술관", "쇼핑", "맛집"];

/// Tags marking a destination as mostly outdoors.
///
/// Both spellings of the park theme occur in catalog data.
pub const OUTDOOR_TAGS: [&str; 3] = ["역사/문화", "자연/공원", "공원/자연"];

/// Multiplier above which a season earns its own recommendation reason.
pub const SEASON_REASON_THRESHOLD: f64 = 1.1;

/// Report whether `destination` carries any indoor tag.
#[must_use]
pub fn is_indoor(destination: &Destination) -> bool {
    destination.has_any_tag(INDOOR_TAGS)
}

/// Report whether `destination` carries any outdoor tag.
#[must_use]
pub fn is_outdoor(destination: &Destination) -> bool {
    destination.has_any_tag(OUTDOOR_TAGS)
}

/// Multiplier applied to a destination's running score in `season`.
///
/// Rules are checked in order and the first match wins, so a destination
/// that is both indoor and outdoor gets the winter indoor boost in winter.
///
/// # Examples
/// ```
/// use bingoroute_core::{Coordinates, Destination, Season};
/// use bingoroute_scorer::seasonal_weight;
///
/// let museum = Destination::new("m", "박물관", "용산구", Coordinates::default())
///     .with_tags(["박물관/미술관"]);
/// assert_eq!(seasonal_weight(&museum, Season::Winter), 1.3);
/// assert_eq!(seasonal_weight(&museum, Season::Spring), 1.0);
/// ```
#[must_use]
pub fn seasonal_weight(destination: &Destination, season: Season) -> f64 {
    match season {
        Season::Winter if is_indoor(destination) => 1.3,
        Season::Spring | Season::Autumn if is_outdoor(destination) => 1.2,
        Season::Summer if is_indoor(destination) => 1.1,
        _ => 1.0,
    }
}
