//! The default recommendation scorer.
//!
//! Each destination collects points from six signals evaluated in a fixed
//! order:
//!
//! 1. district preference
//! 2. theme overlap
//! 3. rating
//! 4. a seasonal multiplier applied to the running total
//! 5. a transit bonus when the description mentions a subway or station
//! 6. an experience bonus when the description mentions hands-on activities
//!    or a view
//!
//! The final score is rounded to one decimal place. Reasons are emitted in
//! the same order as the signals.
#![forbid(unsafe_code)]

use bingoroute_core::{Assessment, Destination, Preferences, Reason, ReasonKind, Scorer};

use crate::seasonal::{SEASON_REASON_THRESHOLD, seasonal_weight};
use crate::weights::MAX_RATING;
use crate::{ScoreWeights, ScoreWeightsError};

/// Description keywords signalling public-transit access.
pub const TRANSIT_KEYWORDS: [&str; 2] = ["지하철", "역"];

/// Description keywords signalling a special experience.
pub const EXPERIENCE_KEYWORDS: [&str; 2] = ["체험", "전망"];

/// Scores destinations by weighted preference signals.
///
/// # Examples
/// ```
/// use bingoroute_core::{Coordinates, Destination, Preferences, ReasonKind, Scorer};
/// use bingoroute_scorer::WeightedScorer;
///
/// let palace = Destination::new("palace", "경복궁", "종로구", Coordinates::default())
///     .with_tags(["역사/문화"])
///     .with_rating(5.0);
/// let prefs = Preferences::new().with_district("종로구").with_theme("역사/문화");
///
/// let assessment = WeightedScorer::default().assess(&palace, &prefs);
/// // (40 + 30 + 20) * 1.2 in spring.
/// assert_eq!(assessment.score, 108.0);
/// assert_eq!(assessment.reasons[0].kind, ReasonKind::District);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightedScorer {
    weights: ScoreWeights,
}

impl WeightedScorer {
    /// Construct a scorer with custom weights.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when the weights fail validation.
    pub fn new(weights: ScoreWeights) -> Result<Self, ScoreWeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// The weights in use.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    fn district_points(
        &self,
        destination: &Destination,
        preferences: &Preferences,
        reasons: &mut Vec<Reason>,
    ) -> f64 {
        if preferences.districts().is_empty() {
            return self.weights.district_default;
        }
        if preferences.wants_district(&destination.district) {
            reasons.push(Reason::new(
                ReasonKind::District,
                format!("matches selected district {}", destination.district),
            ));
            self.weights.district_match
        } else {
            0.0
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "theme points are a proportional share of the theme weight"
    )]
    fn theme_points(
        &self,
        destination: &Destination,
        preferences: &Preferences,
        reasons: &mut Vec<Reason>,
    ) -> f64 {
        let selected = preferences.themes();
        if selected.is_empty() {
            return self.weights.theme_default;
        }
        let matching = matching_themes(destination, preferences);
        if matching.is_empty() {
            return 0.0;
        }
        reasons.push(Reason::new(
            ReasonKind::Theme,
            format!("matches themes: {}", matching.join(", ")),
        ));
        self.weights.theme_match * count_as_f64(matching.len()) / count_as_f64(selected.len())
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "rating points scale linearly with the rating"
    )]
    fn rating_points(&self, destination: &Destination, reasons: &mut Vec<Reason>) -> f64 {
        if destination.rating >= self.weights.highly_rated_threshold {
            reasons.push(Reason::new(ReasonKind::Rating, "highly rated"));
        }
        destination.rating / MAX_RATING * self.weights.rating
    }

    #[expect(clippy::float_arithmetic, reason = "bonuses accumulate")]
    fn bonus_points(&self, destination: &Destination, reasons: &mut Vec<Reason>) -> f64 {
        let mut bonus = 0.0;
        if mentions_any(destination, TRANSIT_KEYWORDS) {
            reasons.push(Reason::new(ReasonKind::Transit, "transit-accessible"));
            bonus = self.weights.transit_bonus;
        }
        if mentions_any(destination, EXPERIENCE_KEYWORDS) {
            reasons.push(Reason::new(ReasonKind::Experience, "special-experience"));
            bonus += self.weights.experience_bonus;
        }
        bonus
    }
}

impl Scorer for WeightedScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "the score sums signal points and applies the seasonal multiplier"
    )]
    fn assess(&self, destination: &Destination, preferences: &Preferences) -> Assessment {
        let mut reasons = Vec::new();
        let base = self.district_points(destination, preferences, &mut reasons)
            + self.theme_points(destination, preferences, &mut reasons)
            + self.rating_points(destination, &mut reasons);

        let season = preferences.season();
        let multiplier = seasonal_weight(destination, season);
        if multiplier > SEASON_REASON_THRESHOLD {
            reasons.push(Reason::new(
                ReasonKind::Season,
                format!("recommended in {season}"),
            ));
        }

        let total = base * multiplier + self.bonus_points(destination, &mut reasons);
        Assessment {
            score: round_to_tenth(Self::sanitise(total)),
            reasons,
        }
    }
}

/// Selected themes carried by `destination`, in tag order without repeats.
fn matching_themes<'a>(destination: &'a Destination, preferences: &Preferences) -> Vec<&'a str> {
    let mut matching: Vec<&str> = Vec::new();
    for tag in &destination.tags {
        if preferences.wants_theme(tag) && !matching.contains(&tag.as_str()) {
            matching.push(tag);
        }
    }
    matching
}

fn mentions_any(destination: &Destination, keywords: [&str; 2]) -> bool {
    keywords
        .iter()
        .any(|keyword| destination.description.contains(keyword))
}

#[expect(
    clippy::float_arithmetic,
    reason = "rounding to one decimal scales, rounds and scales back"
)]
fn round_to_tenth(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}

fn count_as_f64(count: usize) -> f64 {
    u32::try_from(count).map_or_else(|_| f64::from(u32::MAX), f64::from)
}
