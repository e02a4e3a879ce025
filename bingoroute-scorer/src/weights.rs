//! Point allocation for each recommendation signal.
#![forbid(unsafe_code)]

use crate::ScoreWeightsError;

/// Highest rating a destination can carry.
pub const MAX_RATING: f64 = 5.0;

/// Points awarded by each scoring signal.
///
/// The defaults give a destination in a selected district 40 points, a full
/// theme match 30 points and a perfect rating 20 points, with two 5-point
/// bonuses for transit access and special experiences.
///
/// # Examples
/// ```
/// use bingoroute_scorer::ScoreWeights;
///
/// let weights = ScoreWeights {
///     district_match: 50.0,
///     ..ScoreWeights::default()
/// }
/// .validate()
/// .expect("weights are valid");
/// assert_eq!(weights.theme_match, 30.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Awarded when the destination lies in a selected district.
    pub district_match: f64,
    /// Awarded to every destination when no district is selected.
    pub district_default: f64,
    /// Awarded for a full theme match; partial matches earn a share.
    pub theme_match: f64,
    /// Awarded to every destination when no theme is selected.
    pub theme_default: f64,
    /// Awarded for a perfect rating; lower ratings earn a share.
    pub rating: f64,
    /// Added after the seasonal multiplier for transit access.
    pub transit_bonus: f64,
    /// Added after the seasonal multiplier for special experiences.
    pub experience_bonus: f64,
    /// Ratings at or above this value earn a "highly rated" reason.
    pub highly_rated_threshold: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            district_match: 40.0,
            district_default: 20.0,
            theme_match: 30.0,
            theme_default: 15.0,
            rating: 20.0,
            transit_bonus: 5.0,
            experience_bonus: 5.0,
            highly_rated_threshold: 4.5,
        }
    }
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when any weight is non-finite or
    /// negative, or when the highly-rated threshold is outside the rating
    /// scale.
    pub fn validate(self) -> Result<Self, ScoreWeightsError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(ScoreWeightsError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(ScoreWeightsError::Negative { field, value });
            }
        }
        if !(0.0..=MAX_RATING).contains(&self.highly_rated_threshold) {
            return Err(ScoreWeightsError::ThresholdOutOfRange {
                threshold: self.highly_rated_threshold,
            });
        }
        Ok(self)
    }

    const fn fields(&self) -> [(&'static str, f64); 7] {
        [
            ("district_match", self.district_match),
            ("district_default", self.district_default),
            ("theme_match", self.theme_match),
            ("theme_default", self.theme_default),
            ("rating", self.rating),
            ("transit_bonus", self.transit_bonus),
            ("experience_bonus", self.experience_bonus),
        ]
    }
}
