//! Group a ranked list into display buckets.
#![forbid(unsafe_code)]

use bingoroute_core::{ReasonKind, ScoredDestination};

/// Maximum number of entries in each bucket.
pub const CATEGORY_SIZE: usize = 4;

/// Three views over one ranked list.
///
/// Buckets may share destinations.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Categories {
    /// The first entries of the ranking.
    pub top_picks: Vec<ScoredDestination>,
    /// The best entries with a theme reason.
    pub theme_matches: Vec<ScoredDestination>,
    /// The best entries with a district reason.
    pub nearby_options: Vec<ScoredDestination>,
}

/// Split `ranked` into [`Categories`], preserving ranking order in each.
///
/// Membership is decided by [`ReasonKind`] and never by reason text.
///
/// # Examples
/// ```
/// use bingoroute_core::{Coordinates, Destination, Preferences};
/// use bingoroute_scorer::{categorize, recommend};
///
/// let catalog = vec![
///     Destination::new("a", "A", "중구", Coordinates::default()).with_tags(["쇼핑"]),
///     Destination::new("b", "B", "중구", Coordinates::default()),
/// ];
/// let ranked = recommend(&catalog, &Preferences::new().with_theme("쇼핑"), 12);
/// let categories = categorize(&ranked);
/// assert_eq!(categories.top_picks.len(), 2);
/// assert_eq!(categories.theme_matches.len(), 1);
/// assert!(categories.nearby_options.is_empty());
/// ```
#[must_use]
pub fn categorize(ranked: &[ScoredDestination]) -> Categories {
    Categories {
        top_picks: ranked.iter().take(CATEGORY_SIZE).cloned().collect(),
        theme_matches: first_with(ranked, ReasonKind::Theme),
        nearby_options: first_with(ranked, ReasonKind::District),
    }
}

fn first_with(ranked: &[ScoredDestination], kind: ReasonKind) -> Vec<ScoredDestination> {
    ranked
        .iter()
        .filter(|scored| scored.has_reason(kind))
        .take(CATEGORY_SIZE)
        .cloned()
        .collect()
}
