//! Score destinations against visitor preferences.
//!
//! The `Scorer` trait assigns a relevance score and a list of reasons to a
//! [`Destination`](crate::Destination) given the visitor's
//! [`Preferences`](crate::Preferences).

use crate::{Destination, Preferences, Reason, ReasonKind};

/// Outcome of scoring one destination.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Assessment {
    /// Non-negative relevance score.
    pub score: f64,
    /// Explanations in evaluation order.
    pub reasons: Vec<Reason>,
}

/// A destination paired with its recommendation score and reasons.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoredDestination {
    /// The catalog entry that was scored.
    pub destination: Destination,
    /// Relevance score, higher is better.
    pub score: f64,
    /// Explanations in evaluation order; possibly empty.
    pub reasons: Vec<Reason>,
}

impl ScoredDestination {
    /// Pair `destination` with an assessment.
    pub fn new(destination: Destination, assessment: Assessment) -> Self {
        Self {
            destination,
            score: assessment.score,
            reasons: assessment.reasons,
        }
    }

    /// Report whether any reason was produced by `kind`.
    pub fn has_reason(&self, kind: ReasonKind) -> bool {
        self.reasons.iter().any(|reason| reason.is(kind))
    }
}

/// Calculate a relevance score for a destination.
///
/// Higher scores indicate a better match between the destination and the
/// visitor's preferences. Implementations must be thread-safe (`Send` +
/// `Sync`) and infallible; they must produce finite, non-negative scores.
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use bingoroute_core::{Assessment, Coordinates, Destination, Preferences, Scorer};
///
/// struct RatingScorer;
///
/// impl Scorer for RatingScorer {
///     fn assess(&self, destination: &Destination, _preferences: &Preferences) -> Assessment {
///         Assessment {
///             score: Self::sanitise(destination.rating),
///             reasons: Vec::new(),
///         }
///     }
/// }
///
/// let destination = Destination::new("a", "A", "중구", Coordinates::default()).with_rating(4.0);
/// let assessment = RatingScorer.assess(&destination, &Preferences::new());
/// assert_eq!(assessment.score, 4.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Score `destination` according to `preferences`.
    fn assess(&self, destination: &Destination, preferences: &Preferences) -> Assessment;

    /// Validate a raw score.
    ///
    /// Returns `0.0` for non-finite or negative values.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.max(0.0)
    }
}
