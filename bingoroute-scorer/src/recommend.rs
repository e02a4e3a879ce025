//! Rank a catalog against visitor preferences.
#![forbid(unsafe_code)]

use log::{debug, warn};

use bingoroute_core::vocabulary::{is_seoul_district, is_travel_theme};
use bingoroute_core::{Destination, Preferences, ScoredDestination, Scorer};

use crate::WeightedScorer;

/// Number of recommendations returned when the caller does not choose.
pub const DEFAULT_MAX_RESULTS: usize = 12;

/// Score every destination with the default [`WeightedScorer`] and return
/// the best `max_results`, highest score first.
///
/// Destinations with equal scores keep their catalog order. A `max_results`
/// of zero yields an empty list.
///
/// # Examples
/// ```
/// use bingoroute_core::{Coordinates, Destination, Preferences};
/// use bingoroute_scorer::{DEFAULT_MAX_RESULTS, recommend};
///
/// let catalog = vec![
///     Destination::new("a", "A", "마포구", Coordinates::default()).with_rating(3.0),
///     Destination::new("b", "B", "강남구", Coordinates::default()).with_rating(3.0),
/// ];
/// let prefs = Preferences::new().with_district("강남구");
/// let ranked = recommend(&catalog, &prefs, DEFAULT_MAX_RESULTS);
/// assert_eq!(ranked[0].destination.id, "b");
/// ```
#[must_use]
pub fn recommend(
    catalog: &[Destination],
    preferences: &Preferences,
    max_results: usize,
) -> Vec<ScoredDestination> {
    Recommender::new(WeightedScorer::default()).recommend(catalog, preferences, max_results)
}

/// Ranks destinations with an injected [`Scorer`].
#[derive(Debug, Clone, Default)]
pub struct Recommender<S> {
    scorer: S,
}

impl<S: Scorer> Recommender<S> {
    /// Wrap `scorer`.
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Borrow the scorer.
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Score every destination and return the best `max_results`.
    ///
    /// The ordering is a stable descending sort on score, so ties keep their
    /// catalog order. Scores and reasons are recomputed on every call.
    #[must_use]
    pub fn recommend(
        &self,
        catalog: &[Destination],
        preferences: &Preferences,
        max_results: usize,
    ) -> Vec<ScoredDestination> {
        if max_results == 0 {
            return Vec::new();
        }
        warn_on_unknown_vocabulary(preferences);

        let mut ranked: Vec<ScoredDestination> = catalog
            .iter()
            .map(|destination| {
                let assessment = self.scorer.assess(destination, preferences);
                ScoredDestination::new(destination.clone(), assessment)
            })
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(max_results);

        debug!(
            "ranked {} of {} destinations for {} season",
            ranked.len(),
            catalog.len(),
            preferences.season()
        );
        ranked
    }
}

fn warn_on_unknown_vocabulary(preferences: &Preferences) {
    for district in preferences.districts() {
        if !is_seoul_district(district) {
            warn!("district {district} is not a Seoul district; no destination will match it");
        }
    }
    for theme in preferences.themes() {
        if !is_travel_theme(theme) {
            debug!("theme {theme} is not a standard travel theme");
        }
    }
}
